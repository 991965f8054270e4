use std::time::{
	Duration,
	Instant,
};

/// Bound for one wait on the timing unit
///
/// Every wait starts its own countdown from the budget it was given, so an
/// operation doing several waits can spend a multiple of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Budget {
	/// give up after this many status polls (for contexts without a clock)
	Iterations(u32),
	/// give up once this much time passed since the wait started
	Deadline(Duration),
}

/// default for byte transfers and STOP
pub const DEFAULT: Budget = Budget::Iterations(0xffff);
/// interactive START
pub const START: Budget = Budget::Iterations(0xf_ffff);
/// per-address probing during a scan
pub const SCAN: Budget = Budget::Iterations(0xfff);
/// the STOPs issued while recovering
pub const RECOVERY: Budget = Budget::Iterations(0xff);
/// binary protocol transactions
pub const BINARY: Budget = Budget::Iterations(0xf_ffff);

impl Budget {
	pub fn from_millis(ms: u64) -> Self {
		Budget::Deadline(Duration::from_millis(ms))
	}

	pub(crate) fn countdown(self) -> Countdown {
		match self {
			Budget::Iterations(n) => Countdown::Iterations(n),
			Budget::Deadline(d) => Countdown::Deadline(Instant::now() + d),
		}
	}
}

pub(crate) enum Countdown {
	Iterations(u32),
	Deadline(Instant),
}

impl Countdown {
	/// account for one failed poll; true once the budget is used up
	pub(crate) fn exhausted(&mut self) -> bool {
		match self {
			Countdown::Iterations(n) => {
				*n = n.saturating_sub(1);
				0 == *n
			},
			Countdown::Deadline(until) => Instant::now() >= *until,
		}
	}
}

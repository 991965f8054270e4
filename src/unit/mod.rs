//! Binding to the timing unit generating the I2C waveforms
//!
//! The unit is a small programmable I/O state machine running one of two
//! waveform programs. It is fed 16-bit command words through a TX FIFO
//! (see [`Command`]) and reports one [`Received`] word per byte transfer
//! through an RX FIFO.
//!
//! Everything here is a raw primitive; bounded waiting and recovery live in
//! the bus engine on top of it.

mod command;

pub use self::command::{
	Command,
	LineState,
	Received,
	SC0_SD0,
	SC0_SD1,
	SC1_SD0,
	SC1_SD1,
};

/// Cycles of the state machine per bit on the bus
pub const CYCLES_PER_BIT: u32 = 32;

/// GPIO assignment: the bus lines and the level shifter direction pins
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pins {
	pub sda: u8,
	pub scl: u8,
	pub dir_sda: u8,
	pub dir_scl: u8,
}

impl Default for Pins {
	fn default() -> Self {
		Pins {
			sda: 0,
			scl: 1,
			dir_sda: 8,
			dir_scl: 9,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Program {
	Plain,
	/// waits for SCL to actually go high before continuing
	ClockStretch,
}

/// state machine clock divider in 16.8 fixed point
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClockDivider {
	pub int: u16,
	pub frac: u8,
}

impl ClockDivider {
	pub fn for_baud(sys_clock_hz: u32, baud_hz: u32) -> crate::AResult<Self> {
		ensure!(baud_hz > 0, "baud rate must not be zero");
		let per_bit = baud_hz as u64 * CYCLES_PER_BIT as u64;
		let int = sys_clock_hz as u64 / per_bit;
		ensure!(int >= 1, "baud rate {} Hz too fast for system clock {} Hz", baud_hz, sys_clock_hz);
		ensure!(int <= 0xffff, "baud rate {} Hz too slow for system clock {} Hz", baud_hz, sys_clock_hz);
		let frac = (sys_clock_hz as u64 % per_bit) * 256 / per_bit;
		Ok(ClockDivider {
			int: int as u16,
			frac: frac as u8,
		})
	}
}

pub trait TimingUnit {
	/// claim the pins and start `program`
	fn load(&mut self, program: Program, pins: Pins, divider: ClockDivider);
	/// stop the program and hand the pins back
	fn unload(&mut self);

	fn tx_full(&mut self) -> bool;
	fn push(&mut self, word: Command);

	fn rx_empty(&mut self) -> bool;
	fn pull(&mut self) -> Received;

	/// clear the sticky "stalled on empty TX FIFO" flag
	fn clear_stall(&mut self);
	/// the program ran out of words since the last `clear_stall`, i.e. the
	/// unit is idle
	fn is_stalled(&mut self) -> bool;

	/// the fault latch (raised by the program, e.g. on a clock it can't drive)
	fn fault(&mut self) -> bool;
	fn clear_fault(&mut self);

	/// discard words not yet consumed by the program
	fn drain_tx(&mut self);
	/// force the program back to its idle entry point
	fn restart_program(&mut self);
	/// whether received bytes are pushed to the RX FIFO automatically
	fn set_autopush(&mut self, enabled: bool);
}

impl<'a, U: ?Sized + TimingUnit> TimingUnit for &'a mut U {
	fn load(&mut self, program: Program, pins: Pins, divider: ClockDivider) {
		U::load(*self, program, pins, divider)
	}
	fn unload(&mut self) {
		U::unload(*self)
	}
	fn tx_full(&mut self) -> bool {
		U::tx_full(*self)
	}
	fn push(&mut self, word: Command) {
		U::push(*self, word)
	}
	fn rx_empty(&mut self) -> bool {
		U::rx_empty(*self)
	}
	fn pull(&mut self) -> Received {
		U::pull(*self)
	}
	fn clear_stall(&mut self) {
		U::clear_stall(*self)
	}
	fn is_stalled(&mut self) -> bool {
		U::is_stalled(*self)
	}
	fn fault(&mut self) -> bool {
		U::fault(*self)
	}
	fn clear_fault(&mut self) {
		U::clear_fault(*self)
	}
	fn drain_tx(&mut self) {
		U::drain_tx(*self)
	}
	fn restart_program(&mut self) {
		U::restart_program(*self)
	}
	fn set_autopush(&mut self, enabled: bool) {
		U::set_autopush(*self, enabled)
	}
}

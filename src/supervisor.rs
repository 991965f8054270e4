use crate::budget::{
	self,
	Budget,
};
use crate::error::{
	BusError,
	BusResult,
};
use crate::unit::{
	Command,
	Received,
	TimingUnit,
	LineState,
	SC0_SD0,
	SC1_SD0,
	SC1_SD1,
};

pub(crate) const STOP_SEQUENCE: [LineState; 3] = [
	SC0_SD0, // SDA is unknown; pull it down
	SC1_SD0, // release clock
	SC1_SD1, // release SDA to return to idle
];

/// STOPs issued per recovery pass
pub(crate) const RECOVERY_STOPS: usize = 3;

/// bounded waiting on the timing unit
pub(crate) trait TimingUnitExt: TimingUnit {
	/// wait until the program stalls on an empty TX FIFO
	fn wait_idle(&mut self, budget: Budget) -> BusResult<()> {
		self.clear_stall();
		let mut countdown = budget.countdown();
		loop {
			if self.fault() {
				return Err(BusError::BusFault);
			}
			if self.is_stalled() {
				return Ok(());
			}
			if countdown.exhausted() {
				return Err(BusError::Timeout);
			}
		}
	}

	fn wait_tx_slot(&mut self, budget: Budget) -> BusResult<()> {
		let mut countdown = budget.countdown();
		while self.tx_full() {
			if countdown.exhausted() {
				return Err(BusError::Timeout);
			}
		}
		Ok(())
	}

	fn wait_rx(&mut self, budget: Budget) -> BusResult<Received> {
		let mut countdown = budget.countdown();
		while self.rx_empty() {
			if self.fault() {
				return Err(BusError::BusFault);
			}
			if countdown.exhausted() {
				return Err(BusError::Timeout);
			}
		}
		Ok(self.pull())
	}

	fn drain_rx(&mut self) {
		while !self.rx_empty() {
			let _ = self.pull();
		}
	}

	/// wait for idle, push, wait for idle again
	fn push_and_wait(&mut self, word: Command, budget: Budget) -> BusResult<()> {
		trace!("push {:?}", word);
		self.wait_idle(budget)?;
		self.wait_tx_slot(budget)?;
		self.push(word);
		self.wait_idle(budget)
	}

	/// escape word followed by raw line instructions
	fn push_sequence(&mut self, sequence: &[LineState], budget: Budget) -> BusResult<()> {
		self.push_and_wait(Command::escape(sequence.len() as u8), budget)?;
		for lines in sequence {
			self.push_and_wait(Command::instruction(*lines), budget)?;
		}
		Ok(())
	}

	/// one byte transfer; returns the word the program shifted in
	fn transfer(&mut self, word: Command, budget: Budget) -> BusResult<Received> {
		self.wait_idle(budget)?;
		self.drain_rx();
		self.set_autopush(true);
		self.push_and_wait(word, budget)?;
		let received = self.wait_rx(budget)?;
		self.wait_idle(budget)?;
		Ok(received)
	}

	fn reset_program(&mut self) {
		self.drain_tx();
		self.drain_rx();
		self.restart_program();
		self.clear_fault();
		self.set_autopush(false);
	}

	/// force the bus back to idle after a timeout or fault
	///
	/// Failures of the STOPs are ignored.
	fn resume_after_error(&mut self) {
		warn!("I2C: recovering bus after error");
		self.reset_program();
		for _ in 0..RECOVERY_STOPS {
			if let Err(e) = self.push_sequence(&STOP_SEQUENCE, budget::RECOVERY) {
				debug!("I2C: STOP during recovery failed: {}", e);
			}
		}
		self.reset_program();
	}
}

impl<U: TimingUnit + ?Sized> TimingUnitExt for U {}

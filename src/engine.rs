use crate::budget::Budget;
use crate::error::{
	BusError,
	BusResult,
};
use crate::session::BusSession;
use crate::supervisor::{
	STOP_SEQUENCE,
	TimingUnitExt,
};
use crate::unit::{
	Command,
	LineState,
	TimingUnit,
	SC0_SD0,
	SC0_SD1,
	SC1_SD0,
	SC1_SD1,
};

const START_SEQUENCE: [LineState; 2] = [
	SC1_SD0, // already idle, just pull SDA low
	SC0_SD0, // pull clock low so data can be presented
];

const RESTART_SEQUENCE: [LineState; 4] = [
	SC0_SD1,
	SC1_SD1,
	SC1_SD0,
	SC0_SD0,
];

/// Bit-level primitives
///
/// None of these run recovery on `Timeout` / `BusFault`; callers going
/// through the raw primitives do that with [`BusSession::recover`].
impl<U: TimingUnit> BusSession<U> {
	pub fn start(&mut self, budget: Budget) -> BusResult<()> {
		self.unit.push_sequence(&START_SEQUENCE, budget)
	}

	/// REPEATED-START without releasing the bus first
	pub fn restart(&mut self, budget: Budget) -> BusResult<()> {
		self.unit.push_sequence(&RESTART_SEQUENCE, budget)
	}

	/// return both lines to idle; safe to call on an idle bus
	pub fn stop(&mut self, budget: Budget) -> BusResult<()> {
		self.unit.push_sequence(&STOP_SEQUENCE, budget)
	}

	/// shift out one byte; `Err(Nack)` if the peer left the ACK bit high
	pub fn write_byte(&mut self, byte: u8, budget: Budget) -> BusResult<()> {
		let received = self.unit.transfer(Command::write(byte), budget)?;
		if received.is_nak() {
			trace!("I2C: 0x{:02x} NACK", byte);
			return Err(BusError::Nack);
		}
		Ok(())
	}

	/// clock in one byte, then ACK (`send_ack`: more wanted) or NACK it
	pub fn read_byte(&mut self, send_ack: bool, budget: Budget) -> BusResult<u8> {
		let received = self.unit.transfer(Command::read(send_ack), budget)?;
		Ok(received.data())
	}

	pub fn check_fault(&mut self) -> bool {
		self.unit.fault()
	}

	/// force the bus back to idle; never fails
	pub fn recover(&mut self) {
		self.unit.resume_after_error();
		self.start_sent = false;
	}
}

use crate::budget::Budget;
use crate::error::{
	BusError,
	BusResult,
};
use crate::session::BusSession;
use crate::unit::TimingUnit;

/// address byte with the R/W bit forced low
pub fn write_address(address: u8) -> u8 {
	(address & 0x7f) << 1
}

/// address byte with the R/W bit forced high
pub fn read_address(address: u8) -> u8 {
	((address & 0x7f) << 1) | 1
}

/// One (possibly partial) I2C transaction
///
/// The start / restart / stop intents are independent so a transaction can
/// be spread over several requests, holding the bus in between.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TransactionRequest<'a> {
	/// 7-bit device address
	pub address: u8,
	pub write: &'a [u8],
	pub read_len: usize,
	/// START before anything else (REPEATED-START if the bus is still held)
	pub start: bool,
	/// REPEATED-START before the read phase
	pub restart: bool,
	/// STOP at the end
	pub stop: bool,
	/// send the address with R/W low before the write phase
	pub force_write_bit: bool,
	/// send the address with R/W high before the read phase
	pub force_read_bit: bool,
	/// NACK the last byte of the read phase
	pub nack_last: bool,
}

impl<'a> TransactionRequest<'a> {
	/// START, address+W, payload, STOP
	pub fn write(address: u8, payload: &'a [u8]) -> Self {
		TransactionRequest {
			address,
			write: payload,
			read_len: 0,
			start: true,
			restart: false,
			stop: true,
			force_write_bit: true,
			force_read_bit: false,
			nack_last: true,
		}
	}

	/// START, address+R, `len` bytes, STOP
	pub fn read(address: u8, len: usize) -> Self {
		TransactionRequest {
			address,
			write: &[],
			read_len: len,
			start: true,
			restart: false,
			stop: true,
			force_write_bit: false,
			force_read_bit: true,
			nack_last: true,
		}
	}

	/// START, address+W, payload, REPEATED-START, address+R, `len` bytes, STOP
	pub fn write_read(address: u8, payload: &'a [u8], len: usize) -> Self {
		TransactionRequest {
			read_len: len,
			restart: len > 0,
			force_read_bit: len > 0,
			..Self::write(address, payload)
		}
	}
}

/// Transaction compositor
///
/// `Timeout` and `BusFault` always run recovery before they are returned;
/// a `Nack` still gets the STOP the request asked for.
impl<U: TimingUnit> BusSession<U> {
	/// START, or REPEATED-START if a START is still outstanding
	///
	/// returns whether it was a REPEATED-START
	pub(crate) fn begin(&mut self, budget: Budget) -> BusResult<bool> {
		let repeated = self.start_sent;
		if repeated {
			self.restart(budget)?;
		} else {
			self.start(budget)?;
		}
		self.start_sent = true;
		Ok(repeated)
	}

	/// STOP; the bus counts as released afterwards even if it failed
	pub(crate) fn end(&mut self, budget: Budget) -> BusResult<()> {
		let result = self.stop(budget);
		self.start_sent = false;
		result
	}

	pub fn execute(&mut self, request: &TransactionRequest, budget: Budget) -> BusResult<Vec<u8>> {
		let mut data = vec![0u8; request.read_len];
		self.execute_into(request, &mut data, budget)?;
		Ok(data)
	}

	/// like `execute`, reading into `read_buf` (must hold `read_len` bytes)
	pub fn execute_into(&mut self, request: &TransactionRequest, read_buf: &mut [u8], budget: Budget) -> BusResult<()> {
		let len = request.read_len.min(read_buf.len());
		if len < request.read_len {
			warn!("I2C: read buffer holds {} of {} requested bytes", len, request.read_len);
		}
		debug!("I2C: transaction 0x{:02x}: write {} byte(s), read {} byte(s)",
			request.address, request.write.len(), len);

		match self.run_phases(request, &mut read_buf[..len], budget) {
			Ok(()) => Ok(()),
			Err(BusError::Nack) => {
				if request.stop {
					if let Err(e) = self.end(budget) {
						if e.is_hard() {
							self.recover();
						}
					}
				}
				Err(BusError::Nack)
			},
			Err(e) => {
				self.recover();
				Err(e)
			},
		}
	}

	fn run_phases(&mut self, request: &TransactionRequest, read_buf: &mut [u8], budget: Budget) -> BusResult<()> {
		if request.start {
			self.begin(budget)?;
		}
		if request.force_write_bit {
			self.write_byte(write_address(request.address), budget)?;
		}
		for b in request.write {
			self.write_byte(*b, budget)?;
		}

		// zero-length read: no REPEATED-START and no address
		if !read_buf.is_empty() {
			if request.restart {
				self.restart(budget)?;
				self.start_sent = true;
			}
			if request.force_read_bit {
				self.write_byte(read_address(request.address), budget)?;
			}
			let last = read_buf.len() - 1;
			for (i, slot) in read_buf.iter_mut().enumerate() {
				let ack = i < last || !request.nack_last;
				*slot = self.read_byte(ack, budget)?;
			}
		}

		if request.stop {
			self.end(budget)?;
		}
		Ok(())
	}

	/// optional START, address+W, payload (up to the first failure), optional STOP
	///
	/// with an empty payload and `stop = false` this is the busy-poll
	/// primitive
	pub fn write_transaction(&mut self, address: u8, payload: &[u8], start: bool, stop: bool, budget: Budget) -> BusResult<()> {
		let request = TransactionRequest {
			start,
			stop,
			..TransactionRequest::write(address, payload)
		};
		self.execute_into(&request, &mut [], budget)
	}

	/// optional REPEATED-START, address+R, fill `buf` ACKing all but the
	/// last byte, optional STOP
	///
	/// An empty `buf` skips the read phase entirely, so only the STOP (if
	/// asked for) goes out.
	pub fn read_transaction(&mut self, address: u8, buf: &mut [u8], restart: bool, stop: bool, budget: Budget) -> BusResult<()> {
		let request = TransactionRequest {
			start: false,
			restart,
			stop,
			..TransactionRequest::read(address, buf.len())
		};
		self.execute_into(&request, buf, budget)
	}

	/// whether a device acknowledges its address
	pub fn probe(&mut self, address: u8, budget: Budget) -> bool {
		self.write_transaction(address, &[], true, true, budget).is_ok()
	}

	/// write `payload`, then read `buf` after a REPEATED-START
	pub fn write_read(&mut self, address: u8, payload: &[u8], buf: &mut [u8], budget: Budget) -> BusResult<()> {
		let request = TransactionRequest::write_read(address, payload, buf.len());
		self.execute_into(&request, buf, budget)
	}

	pub fn write_register(&mut self, address: u8, register: &[u8], data: &[u8], budget: Budget) -> BusResult<()> {
		let mut payload = Vec::with_capacity(register.len() + data.len());
		payload.extend_from_slice(register);
		payload.extend_from_slice(data);
		self.write_transaction(address, &payload, true, true, budget)
	}

	pub fn read_register(&mut self, address: u8, register: &[u8], buf: &mut [u8], budget: Budget) -> BusResult<()> {
		self.write_read(address, register, buf, budget)
	}

	/// probe until the device acknowledges (e.g. after an EEPROM page
	/// write); returns the number of attempts it took
	pub fn wait_ready(&mut self, address: u8, max_attempts: u32, budget: Budget) -> BusResult<u32> {
		for attempt in 1..=max_attempts {
			match self.write_transaction(address, &[], true, true, budget) {
				Ok(()) => return Ok(attempt),
				Err(BusError::Nack) => (),
				Err(e) => return Err(e),
			}
		}
		Err(BusError::Nack)
	}
}

//! Binary protocol front end
//!
//! Requests arrive complete (counts and flags known up front) and
//! map onto a single [`TransactionRequest`].

use crate::budget;
use crate::error::Status;
use crate::session::BusSession;
use crate::transaction::TransactionRequest;
use crate::unit::TimingUnit;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BinaryRequest {
	pub start_main: bool,
	pub start_alt: bool,
	pub stop_main: bool,
	pub stop_alt: bool,
	pub bytes_write: usize,
	pub bytes_read: usize,
	/// with a START the first byte is the 8-bit address byte
	pub data_buf: Vec<u8>,
	/// log the translated transaction at info level
	pub debug: bool,
}

impl BinaryRequest {
	pub fn start(&self) -> bool {
		self.start_main || self.start_alt
	}

	pub fn stop(&self) -> bool {
		self.stop_main || self.stop_alt
	}

	/// a write phase only runs if there is payload beyond the address
	/// byte, or nothing to read
	pub fn has_write_phase(&self) -> bool {
		self.bytes_write > 1 || (self.bytes_read == 0 && self.bytes_write > 0)
	}

	pub fn to_transaction(&self) -> crate::AResult<TransactionRequest<'_>> {
		ensure!(self.bytes_write <= self.data_buf.len(),
			"{} bytes to write, but only {} in the data buffer", self.bytes_write, self.data_buf.len());
		let start = self.start();
		let stop = self.stop();
		let write_phase = self.has_write_phase();
		let data = &self.data_buf[..self.bytes_write];

		let (address, payload) = if start {
			match data.split_first() {
				Some((first, rest)) => (*first >> 1, rest),
				None => bail!("START without an address byte"),
			}
		} else {
			(0, data)
		};

		Ok(TransactionRequest {
			address,
			write: if write_phase { payload } else { &[] },
			read_len: self.bytes_read,
			start,
			restart: write_phase && self.bytes_read > 0,
			stop,
			force_write_bit: start && write_phase,
			force_read_bit: start && self.bytes_read > 0,
			// keep ACKing if the transaction goes on in the next request
			nack_last: stop,
		})
	}
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BinaryResponse {
	pub status: Status,
	/// bytes read; empty unless the whole transaction succeeded
	pub data: Vec<u8>,
}

/// translate and run one request
///
/// Only malformed requests are errors; bus outcomes are in the status.
pub fn handle<U: TimingUnit>(session: &mut BusSession<U>, request: &BinaryRequest) -> crate::AResult<BinaryResponse> {
	let transaction = request.to_transaction()?;
	if request.debug {
		info!("[I2C] {:?}", transaction);
	} else {
		debug!("I2C: binary request {:?}", transaction);
	}

	Ok(match session.execute(&transaction, budget::BINARY) {
		Ok(data) => BinaryResponse {
			status: Status::Ok,
			data,
		},
		Err(e) => {
			if request.debug {
				info!("[I2C] failed: {}", e);
			}
			BinaryResponse {
				status: e.into(),
				data: Vec::new(),
			}
		},
	})
}

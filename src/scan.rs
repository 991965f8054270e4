use std::fmt;

use crate::budget;
use crate::error::BusError;
use crate::parts::known_parts;
use crate::session::BusSession;
use crate::transaction::{
	read_address,
	write_address,
};
use crate::unit::TimingUnit;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ScanRow {
	/// 7-bit address
	pub address: u8,
	pub write_ack: bool,
	pub read_ack: bool,
}

impl ScanRow {
	pub fn is_present(&self) -> bool {
		self.write_ack || self.read_ack
	}
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ScanReport {
	/// one row per scanned address
	pub rows: Vec<ScanRow>,
	/// acknowledged address bytes (write and read form counted separately)
	pub device_count: usize,
	/// addresses acknowledging both forms
	pub pair_count: usize,
	/// stopped before reaching the last address
	pub cancelled: bool,
}

impl ScanReport {
	pub fn found<'a>(&'a self) -> impl Iterator<Item = &'a ScanRow> + 'a {
		self.rows.iter().filter(|r| r.is_present())
	}

	/// rendering with the parts known to use each responding address
	pub fn verbose(&self) -> Verbose<'_> {
		Verbose(self)
	}

	fn render(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
		for row in self.found() {
			write!(f, "0x{:02X}", row.address)?;
			if row.write_ack {
				write!(f, " (0x{:02X} W)", write_address(row.address))?;
			}
			if row.read_ack {
				write!(f, " (0x{:02X} R)", read_address(row.address))?;
			}
			writeln!(f)?;
			if verbose {
				for part in known_parts(row.address) {
					writeln!(f, "  {}", part)?;
				}
			}
		}
		write!(f, "Found {} addresses, {} W/R pairs.", self.device_count, self.pair_count)
	}
}

impl fmt::Display for ScanReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.render(f, false)
	}
}

pub struct Verbose<'a>(&'a ScanReport);

impl<'a> fmt::Display for Verbose<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.render(f, true)
	}
}

/// START, address byte, (read form only, if acknowledged) one NACKed read,
/// STOP; any timeout is recovered from here
fn check_address<U: TimingUnit>(session: &mut BusSession<U>, byte: u8) -> bool {
	let acked = match session.start(budget::SCAN).and_then(|()| session.write_byte(byte, budget::SCAN)) {
		Ok(()) => true,
		Err(BusError::Nack) => false,
		Err(e) => {
			debug!("I2C scan: 0x{:02x}: {}", byte, e);
			session.recover();
			return false;
		},
	};

	let result = if acked && 0 != byte & 1 {
		session.read_byte(false, budget::SCAN).map(|_| ())
	} else {
		Ok(())
	};
	if let Err(e) = result.and_then(|()| session.stop(budget::SCAN)) {
		debug!("I2C scan: 0x{:02x}: {}", byte, e);
		session.recover();
	}
	acked
}

pub fn scan<U: TimingUnit>(session: &mut BusSession<U>) -> ScanReport {
	scan_until(session, || false)
}

/// like `scan`, asking `cancel` before each address
///
/// A transaction still holding the bus is closed with a STOP first.
pub fn scan_until<U, F>(session: &mut BusSession<U>, mut cancel: F) -> ScanReport
where
	U: TimingUnit,
	F: FnMut() -> bool,
{
	if session.start_sent() {
		debug!("I2C scan: releasing held bus");
		if let Err(e) = session.end(budget::SCAN) {
			debug!("I2C scan: STOP failed: {}", e);
			session.recover();
		}
	}

	let mut report = ScanReport::default();
	for address in 0..0x80u8 {
		if cancel() {
			info!("I2C scan cancelled at 0x{:02x}", address);
			report.cancelled = true;
			break;
		}
		let row = ScanRow {
			address,
			write_ack: check_address(session, write_address(address)),
			read_ack: check_address(session, read_address(address)),
		};
		if row.is_present() {
			debug!("I2C scan: found {:?}", row);
		}
		report.device_count += row.write_ack as usize + row.read_ack as usize;
		if row.write_ack && row.read_ack {
			report.pair_count += 1;
		}
		report.rows.push(row);
	}
	report
}

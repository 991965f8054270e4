//! Register dump in aligned rows of 16 bytes
//!
//! Each row is its own write-then-read: the row offset goes out as a
//! big-endian register address of `register_width` bytes, followed by a
//! REPEATED-START and a 16 byte read.

use std::fmt;

use crate::budget::Budget;
use crate::session::BusSession;
use crate::unit::TimingUnit;

pub const ROW_LEN: usize = 16;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DumpConfig {
	/// 7-bit device address
	pub address: u8,
	/// register address bytes sent before each row (1..=4)
	pub register_width: usize,
	/// first register to show
	pub register: u32,
	/// number of bytes requested; whole rows are read
	pub bytes: usize,
}

impl Default for DumpConfig {
	fn default() -> Self {
		DumpConfig {
			address: 0x50,
			register_width: 1,
			register: 0,
			bytes: 16,
		}
	}
}

impl DumpConfig {
	pub fn validate(&self) -> crate::AResult<()> {
		ensure!(self.address < 0x80, "0x{:02x} is not a 7-bit address", self.address);
		ensure!(self.register_width >= 1 && self.register_width <= 4,
			"register width {} not in 1..4 bytes", self.register_width);
		ensure!(self.bytes > 0, "nothing to dump");
		if self.register_width < 4 {
			let limit = 1u64 << (8 * self.register_width);
			ensure!((self.register as u64) < limit,
				"register 0x{:x} doesn't fit in {} bytes", self.register, self.register_width);
		}
		Ok(())
	}

	/// row offsets: `register` rounded down to the row size, up to the row
	/// holding the last requested byte
	pub fn row_offsets(&self) -> impl Iterator<Item = u64> {
		let first = (self.register as u64) & !(ROW_LEN as u64 - 1);
		let last = (self.register as u64 + self.bytes as u64 - 1) & !(ROW_LEN as u64 - 1);
		(first..=last).step_by(ROW_LEN)
	}
}

/// the low `width` bytes of `register`, most significant first
pub fn register_bytes(register: u64, width: usize) -> Vec<u8> {
	(0..width).rev().map(|i| (register >> (8 * i)) as u8).collect()
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DumpRow {
	pub offset: u64,
	pub data: [u8; ROW_LEN],
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct HexDump {
	pub register_width: usize,
	pub rows: Vec<DumpRow>,
}

impl fmt::Display for HexDump {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let digits = 2 * self.register_width;
		for row in &self.rows {
			write!(f, "{:0width$X}:", row.offset, width = digits)?;
			for b in &row.data {
				write!(f, " {:02X}", b)?;
			}
			write!(f, "  |")?;
			for &b in &row.data {
				let c = if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' };
				write!(f, "{}", c)?;
			}
			writeln!(f, "|")?;
		}
		Ok(())
	}
}

/// read every row of `config`; stops at the first failing row
pub fn dump<U: TimingUnit>(session: &mut BusSession<U>, config: &DumpConfig, budget: Budget) -> crate::AResult<HexDump> {
	config.validate()?;
	let mut rows = Vec::new();
	for offset in config.row_offsets() {
		let register = register_bytes(offset, config.register_width);
		let mut data = [0u8; ROW_LEN];
		with_context!(("reading row 0x{:x} of device 0x{:02x}", offset, config.address),
			session.read_register(config.address, &register, &mut data, budget).map_err(failure::Error::from)
		)?;
		debug!("I2C dump: 0x{:x}: {:02x?}", offset, data);
		rows.push(DumpRow { offset, data });
	}
	Ok(HexDump {
		register_width: config.register_width,
		rows,
	})
}

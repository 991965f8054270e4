#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

macro_rules! with_context {
	(( $fmt:tt $($t:tt)* ), $e:expr) => {{
		use failure::Error;

		match (|| { $e })() {
			Ok(v) => Ok(v),
			Err(e) => {
				let e: Error = e;
				let msg = format!(concat!($fmt, ": {}") $($t)*, e);
				Err(Error::from(e.context(msg)))
			}
		}
	}};

	($msg:expr, $e:expr) => {
		with_context!(("{}", $msg), $e)
	};
}

pub type AResult<T> = Result<T, failure::Error>;

pub mod binary;
pub mod budget;
pub mod dump;
mod engine;
mod error;
pub mod parts;
pub mod scan;
pub mod sequencer;
mod session;
pub mod sim;
mod supervisor;
pub mod syntax;
mod transaction;
pub mod unit;

pub use self::budget::Budget;

pub use self::error::{
	BusError,
	BusResult,
	Status,
};

pub use self::session::{
	BusSession,
	SessionConfig,
	cleanup,
};

pub use self::transaction::{
	TransactionRequest,
	read_address,
	write_address,
};

/// parse a byte value: `0x..` hex, `0b..` binary or decimal
pub fn parse_byte(s: &str) -> AResult<u8> {
	with_context!(("invalid byte value {:?}", s), {
		let v = parse_number(s)?;
		ensure!(v <= 0xff, "value out of range");
		Ok(v as u8)
	})
}

/// parse a number in the same formats as `parse_byte`
pub fn parse_number(s: &str) -> AResult<u32> {
	let v = if s.starts_with("0x") || s.starts_with("0X") {
		u32::from_str_radix(&s[2..], 16)?
	} else if s.starts_with("0b") || s.starts_with("0B") {
		u32::from_str_radix(&s[2..], 2)?
	} else {
		s.parse::<u32>()?
	};
	Ok(v)
}

use failure::Fail;

/// Failed outcome of a bus engine or compositor call
///
/// `Nack` leaves the bus in a well-defined state; `Timeout` and `BusFault`
/// mean the timing unit needs recovery (the compositor and front ends run it
/// before handing the error up).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Fail)]
pub enum BusError {
	#[fail(display = "NACK")]
	Nack,
	#[fail(display = "I2C timeout")]
	Timeout,
	#[fail(display = "I2C bus error")]
	BusFault,
}

impl BusError {
	/// whether the timing unit has to be recovered after this error
	pub fn is_hard(self) -> bool {
		match self {
			BusError::Nack => false,
			BusError::Timeout | BusError::BusFault => true,
		}
	}
}

pub type BusResult<T> = Result<T, BusError>;

/// status codes as reported on the binary protocol
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Status {
	Ok,
	Nack,
	Timeout,
	BusFault,
}

impl Status {
	pub fn code(self) -> u8 {
		match self {
			Status::Ok => 0,
			Status::Nack => 1,
			Status::Timeout => 2,
			Status::BusFault => 3,
		}
	}

	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			0 => Some(Status::Ok),
			1 => Some(Status::Nack),
			2 => Some(Status::Timeout),
			3 => Some(Status::BusFault),
			_ => None,
		}
	}
}

impl From<BusError> for Status {
	fn from(e: BusError) -> Self {
		match e {
			BusError::Nack => Status::Nack,
			BusError::Timeout => Status::Timeout,
			BusError::BusFault => Status::BusFault,
		}
	}
}

impl<T> From<&BusResult<T>> for Status {
	fn from(r: &BusResult<T>) -> Self {
		match r {
			Ok(_) => Status::Ok,
			Err(e) => Status::from(*e),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes() {
		for status in [Status::Ok, Status::Nack, Status::Timeout, Status::BusFault].iter() {
			assert_eq!(Status::from_code(status.code()), Some(*status));
		}
		assert_eq!(Status::from_code(4), None);
		assert_eq!(Status::from(&Err::<(), _>(BusError::Timeout)), Status::Timeout);
		assert_eq!(Status::from(&Ok::<_, BusError>(5u8)), Status::Ok);
	}

	#[test]
	fn only_timeout_and_fault_are_hard() {
		assert!(!BusError::Nack.is_hard());
		assert!(BusError::Timeout.is_hard());
		assert!(BusError::BusFault.is_hard());
	}
}

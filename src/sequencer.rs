use std::fmt;

use crate::budget;
use crate::error::{
	BusError,
	BusResult,
};
use crate::session::BusSession;
use crate::unit::TimingUnit;

/// One operation a user entered
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Token {
	Start,
	StartAlt,
	Stop,
	StopAlt,
	Write(u8),
	Read,
}

impl Token {
	/// START / STOP in either form
	pub fn is_condition(&self) -> bool {
		match self {
			Token::Start | Token::StartAlt | Token::Stop | Token::StopAlt => true,
			Token::Write(_) | Token::Read => false,
		}
	}
}

/// ACK a read byte unless a START or STOP comes next (end of input ACKs)
pub fn read_ack(next: Option<&Token>) -> bool {
	match next {
		Some(token) => !token.is_condition(),
		None => true,
	}
}

/// current token plus the one after it
struct Lookahead<I: Iterator<Item = Token>> {
	tokens: I,
	next: Option<Token>,
}

impl<I: Iterator<Item = Token>> Lookahead<I> {
	fn new(mut tokens: I) -> Self {
		let next = tokens.next();
		Lookahead { tokens, next }
	}

	fn advance(&mut self) -> Option<Token> {
		let current = self.next.take()?;
		self.next = self.tokens.next();
		Some(current)
	}

	fn peek(&self) -> Option<&Token> {
		self.next.as_ref()
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Step {
	Start { repeated: bool },
	Stop,
	Write { data: u8, ack: bool },
	/// `ack`: what we answered
	Read { data: u8, ack: bool },
}

fn ack_str(ack: bool) -> &'static str {
	if ack { "ACK" } else { "NACK" }
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Step::Start { repeated: false } => write!(f, "I2C START"),
			Step::Start { repeated: true } => write!(f, "I2C REPEATED START"),
			Step::Stop => write!(f, "I2C STOP"),
			Step::Write { data, ack } => write!(f, "TX: 0x{:02X} {}", data, ack_str(ack)),
			Step::Read { data, ack } => write!(f, "RX: 0x{:02X} {}", data, ack_str(ack)),
		}
	}
}

/// what happened to a token sequence; `error` is set if it was aborted
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Transcript {
	pub steps: Vec<Step>,
	pub error: Option<BusError>,
}

impl Transcript {
	pub fn is_ok(&self) -> bool {
		self.error.is_none()
	}

	/// bytes read, in order
	pub fn read_data(&self) -> Vec<u8> {
		self.steps.iter().filter_map(|s| match *s {
			Step::Read { data, .. } => Some(data),
			_ => None,
		}).collect()
	}
}

impl fmt::Display for Transcript {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for step in &self.steps {
			writeln!(f, "{}", step)?;
		}
		if let Some(e) = self.error {
			writeln!(f, "Error: {}", e)?;
		}
		Ok(())
	}
}

/// Interactive front end: runs user tokens one at a time
///
/// A NACK on a write is only reported; `Timeout` / `BusFault` recover the
/// bus and abort the remaining tokens.
pub struct Sequencer<'s, U: TimingUnit> {
	session: &'s mut BusSession<U>,
}

impl<'s, U: TimingUnit> Sequencer<'s, U> {
	pub fn new(session: &'s mut BusSession<U>) -> Self {
		Sequencer { session }
	}

	pub fn do_start(&mut self) -> BusResult<Step> {
		let repeated = self.session.begin(budget::START)?;
		Ok(Step::Start { repeated })
	}

	pub fn do_stop(&mut self) -> BusResult<Step> {
		self.session.end(budget::DEFAULT)?;
		Ok(Step::Stop)
	}

	pub fn do_write(&mut self, data: u8) -> BusResult<Step> {
		let ack = match self.session.write_byte(data, budget::DEFAULT) {
			Ok(()) => true,
			Err(BusError::Nack) => false,
			Err(e) => return Err(e),
		};
		Ok(Step::Write { data, ack })
	}

	pub fn do_read(&mut self, ack: bool) -> BusResult<Step> {
		let data = self.session.read_byte(ack, budget::DEFAULT)?;
		Ok(Step::Read { data, ack })
	}

	pub fn run<T: IntoIterator<Item = Token>>(&mut self, tokens: T) -> Transcript {
		let mut queue = Lookahead::new(tokens.into_iter());
		let mut transcript = Transcript::default();
		while let Some(token) = queue.advance() {
			let result = match token {
				Token::Start | Token::StartAlt => self.do_start(),
				Token::Stop | Token::StopAlt => self.do_stop(),
				Token::Write(data) => self.do_write(data),
				Token::Read => {
					let ack = read_ack(queue.peek());
					self.do_read(ack)
				},
			};
			match result {
				Ok(step) => {
					debug!("{}", step);
					transcript.steps.push(step);
				},
				Err(e) => {
					warn!("I2C: {} during {:?}, aborting", e, token);
					self.session.recover();
					transcript.error = Some(e);
					break;
				},
			}
		}
		transcript
	}
}

/// run `tokens` on `session`
pub fn run<U: TimingUnit, T: IntoIterator<Item = Token>>(session: &mut BusSession<U>, tokens: T) -> Transcript {
	Sequencer::new(session).run(tokens)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ack_decision() {
		assert!(read_ack(None));
		assert!(read_ack(Some(&Token::Read)));
		assert!(read_ack(Some(&Token::Write(0))));
		assert!(!read_ack(Some(&Token::Start)));
		assert!(!read_ack(Some(&Token::StartAlt)));
		assert!(!read_ack(Some(&Token::Stop)));
		assert!(!read_ack(Some(&Token::StopAlt)));
	}

	#[test]
	fn lookahead_queue() {
		let mut q = Lookahead::new(vec![Token::Read, Token::Stop].into_iter());
		assert_eq!(q.peek(), Some(&Token::Read));
		assert_eq!(q.advance(), Some(Token::Read));
		assert_eq!(q.peek(), Some(&Token::Stop));
		assert_eq!(q.advance(), Some(Token::Stop));
		assert_eq!(q.peek(), None);
		assert_eq!(q.advance(), None);
	}

	#[test]
	fn step_rendering() {
		assert_eq!(Step::Start { repeated: false }.to_string(), "I2C START");
		assert_eq!(Step::Start { repeated: true }.to_string(), "I2C REPEATED START");
		assert_eq!(Step::Stop.to_string(), "I2C STOP");
		assert_eq!(Step::Write { data: 0xa0, ack: true }.to_string(), "TX: 0xA0 ACK");
		assert_eq!(Step::Read { data: 0x12, ack: false }.to_string(), "RX: 0x12 NACK");
	}
}

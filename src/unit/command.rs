use std::fmt;

// command word layout
const ICOUNT_SHIFT: u8 = 10;
const ICOUNT_MASK:  u16 = 0xfc00;
const FINAL:        u16 = 0x0200;
const DATA_SHIFT:   u8 = 1;
const DATA_MASK:    u16 = 0x01fe;
const NAK:          u16 = 0x0001;

// `set pindirs, <sda> side <scl> [7]`; pindirs are inverted on the bus
// buffers, so `1` means released (pulled up)
const SET_PINDIRS_SIDE_SET_DELAY7: u16 = 0xf780;
const SIDE_SET_SCL: u16 = 0x0800;
const SET_SDA:      u16 = 0x0001;

/// Levels of the two bus lines (`true`: released/high)
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LineState {
	pub scl: bool,
	pub sda: bool,
}

impl LineState {
	pub const IDLE: LineState = LineState { scl: true, sda: true };

	pub const fn new(scl: bool, sda: bool) -> Self {
		LineState { scl, sda }
	}

	pub fn instruction(self) -> u16 {
		let scl = if self.scl { SIDE_SET_SCL } else { 0 };
		let sda = if self.sda { SET_SDA } else { 0 };
		SET_PINDIRS_SIDE_SET_DELAY7 | scl | sda
	}

	pub fn from_instruction(instruction: u16) -> Option<Self> {
		if instruction & !(SIDE_SET_SCL | SET_SDA) != SET_PINDIRS_SIDE_SET_DELAY7 {
			return None;
		}
		Some(LineState {
			scl: 0 != instruction & SIDE_SET_SCL,
			sda: 0 != instruction & SET_SDA,
		})
	}

	pub fn is_idle(self) -> bool {
		self == LineState::IDLE
	}
}

impl fmt::Display for LineState {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "SCL={} SDA={}", self.scl as u8, self.sda as u8)
	}
}

pub const SC0_SD0: LineState = LineState::new(false, false);
pub const SC0_SD1: LineState = LineState::new(false, true);
pub const SC1_SD0: LineState = LineState::new(true, false);
pub const SC1_SD1: LineState = LineState::new(true, true);

/// One word for the TX FIFO of the waveform program
///
/// Either a byte transfer (data bits, `final` marker, and the acknowledge
/// bit the master drives: `nak` set means SDA stays released) or an escape
/// announcing that the next `n` words are raw instructions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Command(pub u16);

impl Command {
	/// escape for `count` (1..=64) following instruction words
	pub fn escape(count: u8) -> Self {
		assert!(count >= 1 && count <= 64);
		Command(((count as u16 - 1) << ICOUNT_SHIFT) & ICOUNT_MASK)
	}

	pub fn instruction(lines: LineState) -> Self {
		Command(lines.instruction())
	}

	/// transmit `data`; the acknowledge bit is left released for the peer
	pub fn write(data: u8) -> Self {
		*Command(0).set_data(data).set_nak()
	}

	/// receive a byte (all data bits released), then drive ACK or NACK
	pub fn read(ack: bool) -> Self {
		let mut cmd = Command(0);
		cmd.set_data(0xff);
		if !ack {
			cmd.set_nak();
		}
		cmd
	}

	/// number of instruction words following this escape word
	pub fn instruction_count(&self) -> Option<u8> {
		match (self.0 & ICOUNT_MASK) >> ICOUNT_SHIFT {
			0 => None,
			n => Some(n as u8 + 1),
		}
	}

	pub fn data(&self) -> u8 {
		((self.0 & DATA_MASK) >> DATA_SHIFT) as u8
	}

	pub fn set_data(&mut self, data: u8) -> &mut Self {
		self.0 = (self.0 & !DATA_MASK) | ((data as u16) << DATA_SHIFT);
		self
	}

	pub fn is_nak(&self) -> bool {
		0 != self.0 & NAK
	}
	pub fn set_nak(&mut self) -> &mut Self {
		self.0 |= NAK;
		self
	}

	pub fn is_final(&self) -> bool {
		0 != self.0 & FINAL
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "0x{:04x}", self.0)
	}
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if let Some(lines) = LineState::from_instruction(self.0) {
			return write!(f, "0x{:04x} (set {})", self.0, lines);
		}
		if let Some(n) = self.instruction_count() {
			return write!(f, "0x{:04x} (escape: {} instructions)", self.0, n);
		}
		write!(f, "0x{:04x} (data: 0x{:02x}", self.0, self.data())?;
		if self.is_final() { write!(f, " [FINAL]")?; }
		if self.is_nak() { write!(f, " [NAK]")?; }
		write!(f, ")")
	}
}

/// Word pushed to the RX FIFO after each byte transfer
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Received(pub u16);

impl Received {
	pub fn new(data: u8, nak: bool) -> Self {
		Received(((data as u16) << DATA_SHIFT) | if nak { NAK } else { 0 })
	}

	pub fn data(&self) -> u8 {
		((self.0 & DATA_MASK) >> DATA_SHIFT) as u8
	}

	/// acknowledge line was left high
	pub fn is_nak(&self) -> bool {
		0 != self.0 & NAK
	}
}

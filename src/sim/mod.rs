//! Simulated timing unit with devices on the bus
//!
//! Executes one TX word per `is_stalled` poll, the way the real unit makes
//! progress while the engine is busy-waiting, and decodes START / STOP
//! conditions from the line transitions the instructions produce.

mod peripheral;

pub use self::peripheral::{
	Eeprom24,
	EchoDevice,
	Peripheral,
};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::unit::{
	ClockDivider,
	Command,
	LineState,
	Pins,
	Program,
	Received,
	TimingUnit,
};

pub const TX_FIFO_DEPTH: usize = 4;
pub const RX_FIFO_DEPTH: usize = 4;

/// one-shot faults, triggered by the next word the program consumes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Fault {
	/// the program never finishes the word (until restarted)
	Hang,
	/// clock held low by something else; raises the fault latch and hangs
	StuckClock,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
	Idle,
	Address,
	Write(usize),
	Read(usize),
	/// not addressed (or NACKed); nobody drives SDA
	Ignored,
}

struct Bus {
	loaded: Option<(Program, Pins, ClockDivider)>,
	tx: VecDeque<Command>,
	rx: VecDeque<Received>,
	autopush: bool,
	stalled: bool,
	fault: bool,
	hung: bool,
	pending_fault: Option<Fault>,

	/// instruction words still expected after an escape
	instructions: u8,
	/// data word held by a stretching device
	stretched: Option<Command>,
	stretch: u32,
	stretch_left: u32,

	lines: LineState,
	phase: Phase,
	devices: Vec<Box<dyn Peripheral>>,

	history: Vec<Command>,
	starts: usize,
	stops: usize,
}

impl Bus {
	fn new() -> Self {
		Bus {
			loaded: None,
			tx: VecDeque::new(),
			rx: VecDeque::new(),
			autopush: false,
			stalled: false,
			fault: false,
			hung: false,
			pending_fault: None,
			instructions: 0,
			stretched: None,
			stretch: 0,
			stretch_left: 0,
			lines: LineState::IDLE,
			phase: Phase::Idle,
			devices: Vec::new(),
			history: Vec::new(),
			starts: 0,
			stops: 0,
		}
	}

	fn stretching(&self) -> bool {
		match self.loaded {
			Some((Program::ClockStretch, _, _)) => self.stretch > 0,
			_ => false,
		}
	}

	/// one step of the program
	fn tick(&mut self) {
		if self.loaded.is_none() || self.hung {
			return;
		}
		if let Some(word) = self.stretched {
			if self.stretch_left > 0 {
				self.stretch_left -= 1;
				return;
			}
			self.stretched = None;
			self.execute(word);
			return;
		}
		let word = match self.tx.pop_front() {
			Some(word) => word,
			None => {
				self.stalled = true;
				return;
			},
		};
		if let Some(fault) = self.pending_fault.take() {
			trace!("sim: {:?} on {:?}", fault, word);
			self.hung = true;
			if Fault::StuckClock == fault {
				self.fault = true;
				self.lines.scl = false;
			}
			return;
		}
		if 0 == self.instructions && word.instruction_count().is_none() && self.stretching() {
			self.stretched = Some(word);
			self.stretch_left = self.stretch;
			return;
		}
		self.execute(word);
	}

	fn execute(&mut self, word: Command) {
		if self.instructions > 0 {
			self.instructions -= 1;
			match LineState::from_instruction(word.0) {
				Some(lines) => self.drive(lines),
				None => warn!("sim: not a line instruction: {:?}", word),
			}
			return;
		}
		if let Some(n) = word.instruction_count() {
			self.instructions = n;
			return;
		}
		self.shift_byte(word);
	}

	fn drive(&mut self, lines: LineState) {
		let old = self.lines;
		self.lines = lines;
		if !(old.scl && lines.scl) {
			return;
		}
		if old.sda && !lines.sda {
			trace!("sim: START");
			self.starts += 1;
			self.phase = Phase::Address;
		} else if !old.sda && lines.sda {
			trace!("sim: STOP");
			self.stops += 1;
			match self.phase {
				Phase::Write(i) | Phase::Read(i) => self.devices[i].stop(),
				_ => (),
			}
			self.phase = Phase::Idle;
		}
	}

	/// 8 data bits plus the acknowledge bit; both sides drive open drain
	fn shift_byte(&mut self, word: Command) {
		let master = word.data();
		let master_nak = word.is_nak();
		let (data, nak) = match self.phase {
			Phase::Address => {
				let address = master >> 1;
				let read = 0 != master & 1;
				let selected = self.devices.iter()
					.position(|d| d.address() == address)
					.filter(|&i| self.devices[i].select(read));
				match selected {
					Some(i) => {
						self.phase = if read { Phase::Read(i) } else { Phase::Write(i) };
						(master, false)
					},
					None => {
						self.phase = Phase::Ignored;
						(master, master_nak)
					},
				}
			},
			Phase::Write(i) => {
				let ack = self.devices[i].write(master);
				(master, master_nak && !ack)
			},
			Phase::Read(i) => {
				let data = master & self.devices[i].read();
				if master_nak {
					// master ended the read; device releases SDA
					self.phase = Phase::Ignored;
				}
				(data, master_nak)
			},
			Phase::Idle | Phase::Ignored => (master, master_nak),
		};
		trace!("sim: byte 0x{:02x} {}", data, if nak { "NACK" } else { "ACK" });
		self.lines = LineState::new(false, nak);
		if self.autopush {
			if self.rx.len() >= RX_FIFO_DEPTH {
				warn!("sim: RX FIFO overflow");
				self.rx.pop_front();
			}
			self.rx.push_back(Received::new(data, nak));
		}
	}
}

/// Simulated timing unit; clones share the same unit and bus
#[derive(Clone)]
pub struct SimulatedUnit(Rc<RefCell<Bus>>);

impl Default for SimulatedUnit {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for SimulatedUnit {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let bus = self.0.borrow();
		f.debug_struct("SimulatedUnit")
			.field("loaded", &bus.loaded)
			.field("lines", &bus.lines)
			.field("devices", &bus.devices.len())
			.finish()
	}
}

impl SimulatedUnit {
	pub fn new() -> Self {
		SimulatedUnit(Rc::new(RefCell::new(Bus::new())))
	}

	pub fn attach<P: Peripheral + 'static>(&self, device: P) {
		self.0.borrow_mut().devices.push(Box::new(device));
	}

	pub fn inject(&self, fault: Fault) {
		self.0.borrow_mut().pending_fault = Some(fault);
	}

	/// extra polls devices hold each byte for (clock stretch program only)
	pub fn set_clock_stretch(&self, polls: u32) {
		self.0.borrow_mut().stretch = polls;
	}

	pub fn lines(&self) -> LineState {
		self.0.borrow().lines
	}

	pub fn is_loaded(&self) -> bool {
		self.0.borrow().loaded.is_some()
	}

	pub fn program(&self) -> Option<Program> {
		self.0.borrow().loaded.map(|(program, _, _)| program)
	}

	pub fn pins(&self) -> Option<Pins> {
		self.0.borrow().loaded.map(|(_, pins, _)| pins)
	}

	pub fn divider(&self) -> Option<ClockDivider> {
		self.0.borrow().loaded.map(|(_, _, divider)| divider)
	}

	pub fn start_conditions(&self) -> usize {
		self.0.borrow().starts
	}

	pub fn stop_conditions(&self) -> usize {
		self.0.borrow().stops
	}

	/// every word pushed since load (or `clear_history`)
	pub fn history(&self) -> Vec<Command> {
		self.0.borrow().history.clone()
	}

	pub fn clear_history(&self) {
		self.0.borrow_mut().history.clear();
	}

	pub fn is_hung(&self) -> bool {
		self.0.borrow().hung
	}
}

impl TimingUnit for SimulatedUnit {
	fn load(&mut self, program: Program, pins: Pins, divider: ClockDivider) {
		let mut bus = self.0.borrow_mut();
		trace!("sim: load {:?} on {:?}", program, pins);
		bus.loaded = Some((program, pins, divider));
		bus.history.clear();
		bus.lines = LineState::IDLE;
		bus.phase = Phase::Idle;
	}

	fn unload(&mut self) {
		let mut bus = self.0.borrow_mut();
		trace!("sim: unload");
		bus.loaded = None;
		bus.tx.clear();
		bus.rx.clear();
		bus.autopush = false;
		bus.hung = false;
		bus.instructions = 0;
		bus.stretched = None;
		// pull-ups take over
		bus.lines = LineState::IDLE;
	}

	fn tx_full(&mut self) -> bool {
		self.0.borrow().tx.len() >= TX_FIFO_DEPTH
	}

	fn push(&mut self, word: Command) {
		let mut bus = self.0.borrow_mut();
		if bus.tx.len() >= TX_FIFO_DEPTH {
			warn!("sim: TX FIFO overflow, dropping {:?}", word);
			return;
		}
		bus.history.push(word);
		bus.tx.push_back(word);
	}

	fn rx_empty(&mut self) -> bool {
		self.0.borrow().rx.is_empty()
	}

	fn pull(&mut self) -> Received {
		self.0.borrow_mut().rx.pop_front().unwrap_or(Received(0))
	}

	fn clear_stall(&mut self) {
		self.0.borrow_mut().stalled = false;
	}

	fn is_stalled(&mut self) -> bool {
		let mut bus = self.0.borrow_mut();
		bus.tick();
		bus.stalled
	}

	fn fault(&mut self) -> bool {
		self.0.borrow().fault
	}

	fn clear_fault(&mut self) {
		self.0.borrow_mut().fault = false;
	}

	fn drain_tx(&mut self) {
		self.0.borrow_mut().tx.clear();
	}

	fn restart_program(&mut self) {
		let mut bus = self.0.borrow_mut();
		bus.hung = false;
		bus.instructions = 0;
		bus.stretched = None;
		bus.stretch_left = 0;
		if !bus.fault {
			bus.lines.scl = true;
		}
	}

	fn set_autopush(&mut self, enabled: bool) {
		self.0.borrow_mut().autopush = enabled;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::unit::{
		SC0_SD0,
		SC1_SD0,
		SC1_SD1,
	};

	fn loaded() -> SimulatedUnit {
		let mut unit = SimulatedUnit::new();
		unit.load(Program::Plain, Pins::default(), ClockDivider { int: 9, frac: 196 });
		unit
	}

	fn run(unit: &mut SimulatedUnit) {
		unit.clear_stall();
		while !unit.is_stalled() {}
	}

	fn sequence(unit: &mut SimulatedUnit, lines: &[LineState]) {
		unit.push(Command::escape(lines.len() as u8));
		run(unit);
		for l in lines {
			unit.push(Command::instruction(*l));
			run(unit);
		}
	}

	#[test]
	fn detects_start_and_stop() {
		let mut unit = loaded();
		sequence(&mut unit, &[SC1_SD0, SC0_SD0]);
		assert_eq!(unit.start_conditions(), 1);
		assert_eq!(unit.lines(), SC0_SD0);
		sequence(&mut unit, &[SC0_SD0, SC1_SD0, SC1_SD1]);
		assert_eq!(unit.stop_conditions(), 1);
		assert!(unit.lines().is_idle());
	}

	#[test]
	fn addressed_device_acks() {
		let mut unit = loaded();
		unit.attach(EchoDevice::new(0x20));
		unit.set_autopush(true);
		sequence(&mut unit, &[SC1_SD0, SC0_SD0]);
		unit.push(Command::write(0x40));
		run(&mut unit);
		assert!(!unit.pull().is_nak());
		unit.push(Command::write(0x99));
		run(&mut unit);
		assert!(!unit.pull().is_nak());

		// unknown address: nobody pulls the ACK low
		sequence(&mut unit, &[SC0_SD0, SC1_SD0, SC1_SD1, SC1_SD0, SC0_SD0]);
		unit.push(Command::write(0x42));
		run(&mut unit);
		assert!(unit.pull().is_nak());
	}

	#[test]
	fn hang_until_restart() {
		let mut unit = loaded();
		unit.inject(Fault::Hang);
		unit.push(Command::write(0x00));
		unit.clear_stall();
		for _ in 0..100 {
			assert!(!unit.is_stalled());
		}
		assert!(unit.is_hung());
		unit.drain_tx();
		unit.restart_program();
		assert!(!unit.is_hung());
		assert!(unit.is_stalled());
	}

	#[test]
	fn stuck_clock_latches_fault() {
		let mut unit = loaded();
		unit.inject(Fault::StuckClock);
		unit.push(Command::write(0x00));
		unit.is_stalled();
		assert!(unit.fault());
		assert!(!unit.lines().scl);
		unit.clear_fault();
		unit.restart_program();
		assert!(unit.lines().scl);
	}

	#[test]
	fn stretch_needs_stretch_program() {
		let mut unit = loaded();
		unit.set_clock_stretch(5);
		unit.push(Command::write(0x00));
		unit.clear_stall();
		let mut polls = 1;
		while !unit.is_stalled() {
			polls += 1;
		}
		assert_eq!(polls, 2);

		unit.load(Program::ClockStretch, Pins::default(), ClockDivider { int: 9, frac: 196 });
		unit.push(Command::write(0x00));
		unit.clear_stall();
		let mut polls = 1;
		while !unit.is_stalled() {
			polls += 1;
		}
		assert_eq!(polls, 2 + 5 + 1);
	}

	#[test]
	fn unload_releases_lines() {
		let mut unit = loaded();
		sequence(&mut unit, &[SC1_SD0, SC0_SD0]);
		unit.unload();
		assert!(!unit.is_loaded());
		assert!(unit.lines().is_idle());
	}
}

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A device on the simulated bus
///
/// Calls happen at byte granularity: `select` when its address byte went
/// by (return whether to ACK it), then `write` / `read` for each data byte.
pub trait Peripheral {
	/// 7-bit address
	fn address(&self) -> u8;

	fn select(&mut self, read: bool) -> bool;

	/// return whether the byte is acknowledged
	fn write(&mut self, data: u8) -> bool;

	fn read(&mut self) -> u8;

	/// STOP while selected
	fn stop(&mut self) {}
}

const ECHO_CAPACITY: usize = 256;

/// Replays written bytes on reads (0xff once empty)
#[derive(Clone, Debug)]
pub struct EchoDevice {
	address: u8,
	readable: bool,
	buffer: VecDeque<u8>,
}

impl EchoDevice {
	pub fn new(address: u8) -> Self {
		EchoDevice {
			address,
			readable: true,
			buffer: VecDeque::new(),
		}
	}

	/// NACKs its read address
	pub fn write_only(address: u8) -> Self {
		EchoDevice {
			readable: false,
			..Self::new(address)
		}
	}
}

impl Peripheral for EchoDevice {
	fn address(&self) -> u8 {
		self.address
	}

	fn select(&mut self, read: bool) -> bool {
		!read || self.readable
	}

	fn write(&mut self, data: u8) -> bool {
		if self.buffer.len() >= ECHO_CAPACITY {
			return false;
		}
		self.buffer.push_back(data);
		true
	}

	fn read(&mut self) -> u8 {
		self.buffer.pop_front().unwrap_or(0xff)
	}
}

#[derive(Debug)]
struct EepromState {
	address: u8,
	memory: Vec<u8>,
	page_size: usize,
	address_bytes: u8,
	write_cycle: u32,

	pointer: usize,
	address_received: u8,
	pending: Vec<(usize, u8)>,
	busy: u32,
}

/// 24xx style serial EEPROM
///
/// The first `address_bytes` written bytes set the memory pointer; further
/// bytes are buffered within the page (wrapping at the page boundary) and
/// committed on STOP. After a commit the device ignores its address for
/// `write_cycle` selections. Clones share the same memory.
#[derive(Clone, Debug)]
pub struct Eeprom24(Rc<RefCell<EepromState>>);

impl Eeprom24 {
	pub fn new(address: u8, size: usize, page_size: usize, address_bytes: u8) -> Self {
		assert!(size.is_power_of_two() && page_size.is_power_of_two() && page_size <= size);
		assert!(address_bytes == 1 || address_bytes == 2);
		Eeprom24(Rc::new(RefCell::new(EepromState {
			address,
			memory: vec![0xff; size],
			page_size,
			address_bytes,
			write_cycle: 0,
			pointer: 0,
			address_received: 0,
			pending: Vec::new(),
			busy: 0,
		})))
	}

	/// 24C02: 256 bytes, 8 byte pages, one address byte
	pub fn c02(address: u8) -> Self {
		Self::new(address, 256, 8, 1)
	}

	/// number of selections NACKed after each committed write
	pub fn with_write_cycle(self, selections: u32) -> Self {
		self.0.borrow_mut().write_cycle = selections;
		self
	}

	pub fn contents(&self) -> Vec<u8> {
		self.0.borrow().memory.clone()
	}

	pub fn is_busy(&self) -> bool {
		self.0.borrow().busy > 0
	}
}

impl Peripheral for Eeprom24 {
	fn address(&self) -> u8 {
		self.0.borrow().address
	}

	fn select(&mut self, read: bool) -> bool {
		let mut s = self.0.borrow_mut();
		if s.busy > 0 {
			s.busy -= 1;
			return false;
		}
		if !read {
			s.address_received = 0;
			s.pending.clear();
		}
		true
	}

	fn write(&mut self, data: u8) -> bool {
		let mut s = self.0.borrow_mut();
		let mask = s.memory.len() - 1;
		if s.address_received < s.address_bytes {
			s.pointer = if 0 == s.address_received { data as usize } else { (s.pointer << 8) | data as usize } & mask;
			s.address_received += 1;
			return true;
		}
		let target = s.pointer;
		s.pending.push((target, data));
		let page_mask = s.page_size - 1;
		s.pointer = (target & !page_mask) | ((target + 1) & page_mask);
		true
	}

	fn read(&mut self) -> u8 {
		let mut s = self.0.borrow_mut();
		let data = s.memory[s.pointer];
		s.pointer = (s.pointer + 1) & (s.memory.len() - 1);
		data
	}

	fn stop(&mut self) {
		let mut s = self.0.borrow_mut();
		if s.pending.is_empty() {
			return;
		}
		let pending = std::mem::replace(&mut s.pending, Vec::new());
		for (target, data) in pending {
			s.memory[target] = data;
		}
		s.busy = s.write_cycle;
	}
}

extern crate bp_i2c;

use bp_i2c::*;
use bp_i2c::binary::{
	self,
	BinaryRequest,
};
use bp_i2c::sequencer::{
	self,
	Step,
	Token,
};
use bp_i2c::sim::{
	EchoDevice,
	Eeprom24,
	Fault,
	SimulatedUnit,
};
use bp_i2c::dump::{
	self,
	DumpConfig,
};
use bp_i2c::unit::{
	ClockDivider,
	Command,
	Program,
};

fn session() -> (SimulatedUnit, BusSession<SimulatedUnit>) {
	let unit = SimulatedUnit::new();
	let session = BusSession::setup(unit.clone(), &SessionConfig::default()).unwrap();
	(unit, session)
}

fn escapes(unit: &SimulatedUnit, count: u8) -> usize {
	unit.history().iter().filter(|&&w| w == Command::escape(count)).count()
}

#[test]
fn empty_bus_acknowledges_nothing() {
	let (unit, mut session) = session();
	for address in 0..0x80 {
		for &byte in &[write_address(address), read_address(address)] {
			session.start(budget::SCAN).unwrap();
			assert_eq!(session.write_byte(byte, budget::SCAN), Err(BusError::Nack));
			session.stop(budget::SCAN).unwrap();
		}
		assert!(!session.probe(address, budget::SCAN));
	}
	assert!(unit.lines().is_idle());

	let report = scan::scan(&mut session);
	assert_eq!(report.rows.len(), 128);
	assert_eq!(report.device_count, 0);
	assert_eq!(report.pair_count, 0);
}

#[test]
fn stop_is_idempotent() {
	let (unit, mut session) = session();
	assert_eq!(session.stop(budget::DEFAULT), Ok(()));
	assert_eq!(session.stop(budget::DEFAULT), Ok(()));
	assert!(unit.lines().is_idle());

	session.start(budget::START).unwrap();
	assert!(!unit.lines().is_idle());
	assert_eq!(session.stop(budget::DEFAULT), Ok(()));
	assert_eq!(session.stop(budget::DEFAULT), Ok(()));
	assert!(unit.lines().is_idle());
}

#[test]
fn reads_nack_before_stop() {
	let (unit, mut session) = session();
	let tokens = vec![Token::Start, Token::Write(0xa0), Token::Read, Token::Read, Token::Read, Token::Stop];
	let transcript = sequencer::run(&mut session, tokens);
	assert!(transcript.is_ok());

	let acks: Vec<bool> = transcript.steps.iter().filter_map(|s| match *s {
		Step::Read { ack, .. } => Some(ack),
		_ => None,
	}).collect();
	assert_eq!(acks, vec![true, true, false]);

	let reads: Vec<Command> = unit.history().into_iter()
		.filter(|w| w.instruction_count().is_none() && w.data() == 0xff)
		.collect();
	assert_eq!(reads, vec![Command::read(true), Command::read(true), Command::read(false)]);
}

#[test]
fn sequencer_transcript() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	let tokens = syntax::parse("[0xa0 0x12 0x34 [0xa1 r r]").unwrap();
	let transcript = sequencer::run(&mut session, tokens);
	assert_eq!(transcript.to_string(), "\
		I2C START\n\
		TX: 0xA0 ACK\n\
		TX: 0x12 ACK\n\
		TX: 0x34 ACK\n\
		I2C REPEATED START\n\
		TX: 0xA1 ACK\n\
		RX: 0x12 ACK\n\
		RX: 0x34 NACK\n\
		I2C STOP\n");
	assert_eq!(transcript.read_data(), vec![0x12, 0x34]);
	assert!(!session.start_sent());
	assert!(unit.lines().is_idle());
}

#[test]
fn sequencer_reports_nack_and_continues() {
	let (_unit, mut session) = session();
	let transcript = sequencer::run(&mut session, syntax::parse("[0x42 0x00]").unwrap());
	assert!(transcript.is_ok());
	assert_eq!(transcript.steps, vec![
		Step::Start { repeated: false },
		Step::Write { data: 0x42, ack: false },
		Step::Write { data: 0x00, ack: false },
		Step::Stop,
	]);
}

#[test]
fn sequencer_aborts_on_timeout() {
	let (unit, mut session) = session();
	unit.inject(Fault::Hang);
	let transcript = sequencer::run(&mut session, syntax::parse("[0xa0 0x00]").unwrap());
	assert_eq!(transcript.error, Some(BusError::Timeout));
	assert!(transcript.steps.is_empty());
	assert_eq!(transcript.to_string(), "Error: I2C timeout\n");
	assert!(!session.start_sent());
	assert!(unit.lines().is_idle());
	assert!(!unit.is_hung());
}

#[test]
fn recovery_after_timeout() {
	let (unit, mut session) = session();
	session.start(budget::START).unwrap();
	unit.inject(Fault::Hang);
	assert_eq!(session.write_byte(0xa0, budget::DEFAULT), Err(BusError::Timeout));
	assert!(unit.is_hung());

	session.recover();
	assert!(unit.lines().is_idle());
	assert!(!unit.is_hung());
	assert_eq!(session.start(budget::START), Ok(()));
}

#[test]
fn recovery_issues_three_stops() {
	let (unit, mut session) = session();
	session.start(budget::START).unwrap();
	unit.clear_history();
	let stops = unit.stop_conditions();

	session.recover();
	assert_eq!(unit.stop_conditions() - stops, 3);
	assert_eq!(escapes(&unit, 3), 3);
	assert_eq!(unit.history().len(), 3 * 4);
}

#[test]
fn compositor_recovers_on_its_own() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	unit.inject(Fault::Hang);
	assert_eq!(session.write_transaction(0x50, &[1], true, true, budget::DEFAULT), Err(BusError::Timeout));
	assert!(unit.lines().is_idle());
	assert!(!session.start_sent());

	session.start(budget::START).unwrap();
	unit.inject(Fault::StuckClock);
	assert_eq!(session.write_byte(0xa0, budget::DEFAULT), Err(BusError::BusFault));
	assert!(session.check_fault());
	session.recover();
	assert!(!session.check_fault());
	assert!(unit.lines().is_idle());

	assert_eq!(session.write_transaction(0x50, &[1], true, true, budget::DEFAULT), Ok(()));
}

#[test]
fn echo_round_trip() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	session.write_transaction(0x50, &[0x12, 0x34], true, true, budget::DEFAULT).unwrap();
	let mut buf = [0u8; 2];
	session.read_transaction(0x50, &mut buf, true, true, budget::DEFAULT).unwrap();
	assert_eq!(buf, [0x12, 0x34]);
	assert!(unit.lines().is_idle());
}

#[test]
fn write_without_stop_holds_the_bus() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	session.write_transaction(0x50, &[0x99], true, false, budget::DEFAULT).unwrap();
	assert!(session.start_sent());
	assert!(!unit.lines().is_idle());

	let data = session.execute(&TransactionRequest::read(0x50, 1), budget::DEFAULT).unwrap();
	assert_eq!(data, vec![0x99]);
	// the second START went out as a REPEATED-START, one STOP overall
	assert_eq!(unit.start_conditions(), 2);
	assert_eq!(unit.stop_conditions(), 1);
	assert_eq!(escapes(&unit, 4), 1);
}

#[test]
fn nack_still_stops() {
	let (unit, mut session) = session();
	assert_eq!(session.write_transaction(0x50, &[1, 2], true, true, budget::DEFAULT), Err(BusError::Nack));
	assert!(unit.lines().is_idle());
	assert_eq!(unit.stop_conditions(), 1);
	// the payload never went out
	assert_eq!(unit.history().iter().filter(|w| w.instruction_count().is_none() && w.is_nak()).count(), 1);
}

#[test]
fn scan_finds_read_write_device() {
	let (unit, mut session) = session();
	unit.attach(Eeprom24::c02(0x50));
	let report = scan::scan(&mut session);
	assert_eq!(report.device_count, 2);
	assert_eq!(report.pair_count, 1);
	let found: Vec<&scan::ScanRow> = report.found().collect();
	assert_eq!(found, vec![&scan::ScanRow { address: 0x50, write_ack: true, read_ack: true }]);
	assert!(unit.lines().is_idle());
}

#[test]
fn scan_counts_write_only_device() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x20));
	unit.attach(EchoDevice::write_only(0x21));
	let report = scan::scan(&mut session);
	assert_eq!(report.device_count, 3);
	assert_eq!(report.pair_count, 1);
}

#[test]
fn scan_survives_a_hang() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	unit.inject(Fault::Hang);
	let report = scan::scan(&mut session);
	// only address 0x00 was lost
	assert_eq!(report.rows.len(), 128);
	assert_eq!(report.device_count, 2);
}

#[test]
fn scan_can_be_cancelled() {
	let (_unit, mut session) = session();
	let mut left = 16;
	let report = scan::scan_until(&mut session, || {
		left -= 1;
		left < 0
	});
	assert!(report.cancelled);
	assert_eq!(report.rows.len(), 16);
}

#[test]
fn busy_poll_converges_after_write_cycle() {
	for &cycle in &[0u32, 1, 5] {
		let (unit, mut session) = session();
		unit.attach(Eeprom24::c02(0x50).with_write_cycle(cycle));
		session.write_register(0x50, &[0x00], &[0xaa], budget::DEFAULT).unwrap();
		assert_eq!(session.wait_ready(0x50, 100, budget::DEFAULT), Ok(cycle + 1));
	}
}

#[test]
fn busy_poll_gives_up() {
	let (unit, mut session) = session();
	unit.attach(Eeprom24::c02(0x50).with_write_cycle(5));
	session.write_register(0x50, &[0x00], &[0xaa], budget::DEFAULT).unwrap();
	assert_eq!(session.wait_ready(0x50, 5, budget::DEFAULT), Err(BusError::Nack));
	assert_eq!(session.wait_ready(0x50, 5, budget::DEFAULT), Ok(1));
}

#[test]
fn eeprom_register_access() {
	let (unit, mut session) = session();
	let eeprom = Eeprom24::c02(0x50).with_write_cycle(2);
	unit.attach(eeprom.clone());
	session.write_register(0x50, &[0x10], &[1, 2, 3], budget::DEFAULT).unwrap();
	session.wait_ready(0x50, 10, budget::DEFAULT).unwrap();
	assert_eq!(&eeprom.contents()[0x10..0x13], &[1, 2, 3]);

	let mut buf = [0u8; 3];
	session.read_register(0x50, &[0x10], &mut buf, budget::DEFAULT).unwrap();
	assert_eq!(buf, [1, 2, 3]);
}

fn binary_request(start: bool, stop: bool, data: &[u8], bytes_read: usize) -> BinaryRequest {
	BinaryRequest {
		start_main: start,
		stop_main: stop,
		bytes_write: data.len(),
		bytes_read,
		data_buf: data.to_vec(),
		..BinaryRequest::default()
	}
}

#[test]
fn binary_write_then_read() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	let r = binary::handle(&mut session, &binary_request(true, true, &[0xa0, 0x12, 0x34], 0)).unwrap();
	assert_eq!(r.status, Status::Ok);
	assert!(r.data.is_empty());

	let r = binary::handle(&mut session, &binary_request(true, true, &[0xa1], 2)).unwrap();
	assert_eq!(r.status, Status::Ok);
	assert_eq!(r.data, vec![0x12, 0x34]);
	assert!(unit.lines().is_idle());
}

#[test]
fn binary_register_read_across_requests() {
	let (unit, mut session) = session();
	let eeprom = Eeprom24::c02(0x50);
	unit.attach(eeprom.clone());
	session.write_register(0x50, &[0x05], &[0x77, 0x88], budget::DEFAULT).unwrap();

	// point at 0x05 and keep the bus
	let r = binary::handle(&mut session, &binary_request(true, false, &[0xa0, 0x05], 0)).unwrap();
	assert_eq!(r.status, Status::Ok);
	assert!(session.start_sent());

	let r = binary::handle(&mut session, &binary_request(true, true, &[0xa0], 2)).unwrap();
	assert_eq!(r.status, Status::Ok);
	assert_eq!(r.data, vec![0x77, 0x88]);
	assert!(!session.start_sent());
}

#[test]
fn binary_failures_discard_data() {
	let (unit, mut session) = session();
	let r = binary::handle(&mut session, &binary_request(true, true, &[0xa1], 4)).unwrap();
	assert_eq!(r.status, Status::Nack);
	assert_eq!(r.status.code(), 1);
	assert!(r.data.is_empty());

	unit.attach(EchoDevice::new(0x50));
	unit.inject(Fault::Hang);
	let r = binary::handle(&mut session, &binary_request(true, true, &[0xa1], 4)).unwrap();
	assert_eq!(r.status, Status::Timeout);
	assert!(r.data.is_empty());
	assert!(unit.lines().is_idle());

	assert!(binary::handle(&mut session, &binary_request(true, true, &[], 1)).is_err());
}

#[test]
fn session_lifecycle() {
	let unit = SimulatedUnit::new();
	let mut config = SessionConfig::default();
	config.clock_stretch = true;
	config.baud_khz = 100;
	let session = BusSession::setup(unit.clone(), &config).unwrap();
	assert!(unit.is_loaded());
	assert_eq!(unit.program(), Some(Program::ClockStretch));
	assert_eq!(unit.pins(), Some(config.pins));
	assert_eq!(session.config().baud_khz, 100);
	// 125 MHz / (32 * 100 kHz) = 39 + 16/256
	assert_eq!(unit.divider(), Some(ClockDivider { int: 39, frac: 16 }));
	cleanup(session);
	assert!(!unit.is_loaded());
	assert!(unit.lines().is_idle());

	config.baud_khz = 5000;
	assert!(BusSession::setup(unit.clone(), &config).is_err());
	assert!(!unit.is_loaded());
}

#[test]
fn clock_stretch_within_budget() {
	let unit = SimulatedUnit::new();
	unit.attach(EchoDevice::new(0x50));
	unit.set_clock_stretch(200);
	let mut config = SessionConfig::default();
	config.clock_stretch = true;
	let mut session = BusSession::setup(unit.clone(), &config).unwrap();

	assert_eq!(session.write_transaction(0x50, &[1], true, true, budget::DEFAULT), Ok(()));
	assert_eq!(session.write_transaction(0x50, &[1], true, true, Budget::Iterations(50)), Err(BusError::Timeout));
	assert!(unit.lines().is_idle());
}

#[test]
fn scan_releases_held_bus() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	let response = binary::handle(&mut session, &binary_request(true, false, &[0xa0, 0x01], 0)).unwrap();
	assert_eq!(response.status, Status::Ok);
	assert!(session.start_sent());

	let report = scan::scan(&mut session);
	assert_eq!(report.device_count, 2);
	assert_eq!(report.found().map(|r| r.address).collect::<Vec<_>>(), vec![0x50]);
	assert!(!session.start_sent());
	assert!(unit.lines().is_idle());

	let transcript = sequencer::run(&mut session, syntax::parse("[").unwrap());
	assert_eq!(transcript.steps, vec![Step::Start { repeated: false }]);
}

#[test]
fn empty_read_only_stops() {
	let (unit, mut session) = session();
	unit.attach(EchoDevice::new(0x50));
	session.write_transaction(0x50, &[0x01], true, false, budget::DEFAULT).unwrap();
	let starts = unit.start_conditions();
	let stops = unit.stop_conditions();
	unit.clear_history();

	session.read_transaction(0x50, &mut [], true, true, budget::DEFAULT).unwrap();
	assert_eq!(unit.start_conditions(), starts);
	assert_eq!(unit.stop_conditions(), stops + 1);
	assert!(!session.start_sent());
	assert!(unit.lines().is_idle());
}

#[test]
fn register_dump_two_byte_width() {
	let (unit, mut session) = session();
	let eeprom = Eeprom24::new(0x50, 4096, 32, 2);
	unit.attach(eeprom.clone());
	session.write_register(0x50, &[0x01, 0x05], b"hello", budget::DEFAULT).unwrap();

	let config = DumpConfig {
		register_width: 2,
		register: 0x0100,
		bytes: 32,
		..DumpConfig::default()
	};
	let hex = dump::dump(&mut session, &config, budget::DEFAULT).unwrap();
	assert_eq!(hex.rows.iter().map(|r| r.offset).collect::<Vec<_>>(), vec![0x100, 0x110]);
	assert_eq!(&hex.rows[0].data[..], &eeprom.contents()[0x100..0x110]);
	assert_eq!(&hex.rows[0].data[5..10], b"hello");
	assert!(hex.rows[1].data.iter().all(|&b| b == 0xff));
	assert!(hex.to_string().starts_with("0100: FF FF FF FF FF 68 65 6C 6C 6F FF"));
	assert!(unit.lines().is_idle());
}

#[test]
fn register_dump_missing_device() {
	let (unit, mut session) = session();
	let config = DumpConfig::default();
	assert!(dump::dump(&mut session, &config, budget::DEFAULT).is_err());
	assert!(!session.start_sent());
	assert!(unit.lines().is_idle());
}

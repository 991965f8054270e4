#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

extern crate bp_i2c;
use bp_i2c::*;

use std::process::exit;

use bp_i2c::binary::BinaryRequest;
use bp_i2c::dump::DumpConfig;
use bp_i2c::sim::{
	EchoDevice,
	Eeprom24,
	SimulatedUnit,
};

fn get_param<T>(matches: &clap::ArgMatches, name: &str) -> AResult<T>
where
	T: std::str::FromStr,
	failure::Error: From<<T as std::str::FromStr>::Err>,
{
	let param = match matches.value_of(name) {
		Some(p) => p,
		None => bail!("missing parameter {}", name),
	};
	param.parse::<T>().map_err(|e| {
		let e = failure::Error::from(e);
		let msg = format!("invalid parameter {}: {}", name, e);
		e.context(msg).into()
	})
}

/// `ADDR:KIND` with KIND one of `echo`, `eeprom` (24C02), `eeprom32` (24C32)
fn attach_device(unit: &SimulatedUnit, arg: &str) -> AResult<()> {
	let (address, kind) = match arg.find(':') {
		Some(pos) => (&arg[..pos], &arg[pos + 1..]),
		None => bail!("device {:?} not in ADDR:KIND form", arg),
	};
	let address = parse_byte(address)?;
	ensure!(address < 0x80, "device address 0x{:02x} is not a 7-bit address", address);
	match kind {
		"echo" => unit.attach(EchoDevice::new(address)),
		"eeprom" => unit.attach(Eeprom24::c02(address).with_write_cycle(3)),
		"eeprom32" => unit.attach(Eeprom24::new(address, 4096, 32, 2).with_write_cycle(3)),
		_ => bail!("unknown device kind {:?}", kind),
	}
	info!("SIM: {} at 0x{:02x}", kind, address);
	Ok(())
}

fn setup(matches: &clap::ArgMatches) -> AResult<BusSession<SimulatedUnit>> {
	let unit = SimulatedUnit::new();
	if let Some(devices) = matches.values_of("device") {
		for d in devices {
			attach_device(&unit, d)?;
		}
	}
	let mut config = SessionConfig::default();
	if matches.is_present("baud") {
		config.baud_khz = get_param(matches, "baud")?;
	}
	config.clock_stretch = matches.is_present("clock_stretch");
	BusSession::setup(unit, &config)
}

fn scan_bus(session: &mut BusSession<SimulatedUnit>, sub_m: &clap::ArgMatches) -> AResult<()> {
	println!("I2C address search:");
	let report = scan::scan(session);
	if sub_m.is_present("verbose") {
		println!("{}", report.verbose());
	} else {
		println!("{}", report);
	}
	Ok(())
}

fn dump_registers(session: &mut BusSession<SimulatedUnit>, sub_m: &clap::ArgMatches) -> AResult<()> {
	let mut config = DumpConfig::default();
	if let Some(address) = sub_m.value_of("address") {
		config.address = parse_byte(address)?;
	}
	if sub_m.is_present("width") {
		config.register_width = get_param(sub_m, "width")?;
	}
	if let Some(register) = sub_m.value_of("register") {
		config.register = parse_number(register)
			.map_err(|e| format_err!("invalid register address {:?}: {}", register, e))?;
	}
	if sub_m.is_present("bytes") {
		config.bytes = get_param(sub_m, "bytes")?;
	}
	info!("dump 0x{:02x}: register 0x{:x} ({} byte wide), {} bytes",
		config.address, config.register, config.register_width, config.bytes);
	print!("{}", dump::dump(session, &config, budget::DEFAULT)?);
	Ok(())
}

fn run_syntax(session: &mut BusSession<SimulatedUnit>, sub_m: &clap::ArgMatches) -> AResult<()> {
	let syntax = match sub_m.value_of("SYNTAX") {
		Some(s) => s,
		None => bail!("missing parameter SYNTAX"),
	};
	let tokens = syntax::parse(syntax)?;
	let transcript = sequencer::run(session, tokens);
	print!("{}", transcript);
	if let Some(e) = transcript.error {
		bail!("sequence aborted: {}", e);
	}
	Ok(())
}

fn run_transaction(session: &mut BusSession<SimulatedUnit>, sub_m: &clap::ArgMatches) -> AResult<()> {
	let address: u8 = parse_byte(sub_m.value_of("ADDRESS").unwrap_or(""))?;
	ensure!(address < 0x80, "0x{:02x} is not a 7-bit address", address);
	let start = !sub_m.is_present("no_start");
	let mut data_buf = Vec::new();
	if start {
		data_buf.push(write_address(address));
	}
	if let Some(bytes) = sub_m.values_of("write") {
		for b in bytes {
			data_buf.push(parse_byte(b)?);
		}
	}
	let bytes_read = if sub_m.is_present("read") { get_param(sub_m, "read")? } else { 0 };

	let request = BinaryRequest {
		start_main: start,
		stop_main: !sub_m.is_present("no_stop"),
		bytes_write: data_buf.len(),
		bytes_read,
		data_buf,
		debug: sub_m.is_present("verbose"),
		..BinaryRequest::default()
	};
	let response = binary::handle(session, &request)?;
	info!("status {:?} ({})", response.status, response.status.code());
	if response.status != Status::Ok {
		bail!("transaction failed: {:?}", response.status);
	}
	for b in &response.data {
		print!("0x{:02X} ", b);
	}
	if !response.data.is_empty() {
		println!();
	}
	Ok(())
}

fn main_app() -> AResult<()> {
	let matches = clap_app!(@app (app_from_crate!())
		(@setting SubcommandRequiredElseHelp)
		(global_setting: clap::AppSettings::VersionlessSubcommands)
		(@arg baud: -b --baud +takes_value "bus speed in kHz (1 to 1000, default 400)")
		(@arg clock_stretch: -s --("clock-stretch") "run the clock stretching program")
		(@arg device: -d --device +takes_value +multiple number_of_values(1) "simulated device ADDR:KIND (echo, eeprom, eeprom32)")
		(@subcommand scan =>
			(about: "search all 7-bit addresses")
			(@arg verbose: -v --verbose "list parts commonly found at each address")
		)
		(@subcommand dump =>
			(about: "hex dump registers, e.g. \"dump -a 0x50 -w 2 -r 0x0000 -b 64\"")
			(@arg address: -a --address +takes_value "7-bit device address (default 0x50)")
			(@arg width: -w --width +takes_value "register address width in bytes (default 1)")
			(@arg register: -r --register +takes_value "first register (default 0)")
			(@arg bytes: -b --bytes +takes_value "number of bytes (default 16)")
		)
		(@subcommand run =>
			(about: "run bus syntax, e.g. \"[0xa0 0x00 [0xa1 r:4]\"")
			(@arg SYNTAX: +required "bus syntax")
		)
		(@subcommand transaction =>
			(about: "run a single write / read transaction")
			(@arg verbose: -v --verbose "log the transaction steps")
			(@arg no_start: --("no-start") "don't send START and address")
			(@arg no_stop: --("no-stop") "don't send STOP (keep the bus)")
			(@arg write: -w --write +takes_value +multiple number_of_values(1) "bytes to write after the address")
			(@arg read: -r --read +takes_value "number of bytes to read")
			(@arg ADDRESS: +required "7-bit device address")
		)
	).get_matches();

	let mut session = setup(&matches)?;

	let result = match matches.subcommand() {
		("scan", Some(sub_m)) => {
			scan_bus(&mut session, sub_m)
		},
		("dump", Some(sub_m)) => {
			dump_registers(&mut session, sub_m)
		},
		("run", Some(sub_m)) => {
			run_syntax(&mut session, sub_m)
		},
		("transaction", Some(sub_m)) => {
			run_transaction(&mut session, sub_m)
		},
		("", _) => bail!("no subcommand"),
		(cmd, _) => bail!("not implemented subcommand {:?}", cmd),
	};
	cleanup(session);
	result
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		exit(1);
	}
}

use crate::unit::{
	ClockDivider,
	Pins,
	Program,
	TimingUnit,
};

pub const DEFAULT_BAUD_KHZ: u32 = 400;
pub const DEFAULT_SYS_CLOCK_HZ: u32 = 125_000_000;

/// settings for one I2C mode activation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SessionConfig {
	pub pins: Pins,
	/// bus clock in kHz (1..=1000)
	pub baud_khz: u32,
	pub clock_stretch: bool,
	pub sys_clock_hz: u32,
}

impl Default for SessionConfig {
	fn default() -> Self {
		SessionConfig {
			pins: Pins::default(),
			baud_khz: DEFAULT_BAUD_KHZ,
			clock_stretch: false,
			sys_clock_hz: DEFAULT_SYS_CLOCK_HZ,
		}
	}
}

impl SessionConfig {
	pub fn validate(&self) -> crate::AResult<()> {
		ensure!(self.baud_khz >= 1 && self.baud_khz <= 1000,
			"I2C speed {} kHz out of range (1 to 1000 kHz)", self.baud_khz);
		let p = self.pins;
		let all = [p.sda, p.scl, p.dir_sda, p.dir_scl];
		for (i, a) in all.iter().enumerate() {
			ensure!(!all[i + 1..].contains(a), "pin {} assigned twice", a);
		}
		Ok(())
	}

	pub fn baud_hz(&self) -> u32 {
		self.baud_khz * 1000
	}

	pub fn program(&self) -> Program {
		if self.clock_stretch {
			Program::ClockStretch
		} else {
			Program::Plain
		}
	}
}

/// An active I2C mode: exclusive owner of the timing unit
///
/// All bus operations are methods on the session; dropping it (or
/// [`cleanup`]) unloads the program and releases the pins.
pub struct BusSession<U: TimingUnit> {
	pub(crate) unit: U,
	config: SessionConfig,
	/// a START went out and no STOP followed yet; the next start request
	/// becomes a REPEATED-START
	pub(crate) start_sent: bool,
}

impl<U: TimingUnit> BusSession<U> {
	pub fn setup(mut unit: U, config: &SessionConfig) -> crate::AResult<Self> {
		config.validate()?;
		let divider = ClockDivider::for_baud(config.sys_clock_hz, config.baud_hz())?;
		debug!("I2C: setup {} kHz, clock stretch {}, divider {:?}, pins {:?}",
			config.baud_khz, config.clock_stretch, divider, config.pins);
		unit.load(config.program(), config.pins, divider);
		Ok(BusSession {
			unit,
			config: *config,
			start_sent: false,
		})
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn start_sent(&self) -> bool {
		self.start_sent
	}
}

impl<U: TimingUnit> Drop for BusSession<U> {
	fn drop(&mut self) {
		debug!("I2C: cleanup");
		self.unit.unload();
	}
}

/// end the mode: unload the waveform program and release the pins
pub fn cleanup<U: TimingUnit>(session: BusSession<U>) {
	drop(session);
}

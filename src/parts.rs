//! Parts commonly found at each 7-bit address
//!
//! `G<n>` are the part groups shared between neighbouring addresses.

const G0: &[&str] = &[
	"Reserved",
];
const G1: &[&str] = &[
	"Reserved for CBUS compatibility",
];
const G2: &[&str] = &[
	"Reserved for I2C-compatible bus variants",
];
const G3: &[&str] = &[
	"Reserved for future use",
];
const G4: &[&str] = &[
	"Reserved for HS-mode controller",
];
const NONE: &[&str] = &[];
const G5: &[&str] = &[
	"LC709203F Fuel Gauge and Battery Monitor",
];
const G6: &[&str] = &[
	"MLX90393 3-Axis Magnetometer",
];
const G7: &[&str] = &[
	"MAG3110 3-Axis Magnetometer",
	"MLX90393 3-Axis Magnetometer",
];
const G8: &[&str] = &[
	"VEML6075 UV Sensor",
	"VEML7700 Ambient Light Sensor",
];
const G9: &[&str] = &[
	"Si4713 FM Transmitter with RDS",
];
const G10: &[&str] = &[
	"PMSA0031 Gas Sensor",
];
const G11: &[&str] = &[
	"VCNL40x0 Proximity Sensor",
];
const G12: &[&str] = &[
	"MCP9808 Temperature Sensor",
	"MPRLS Pressure Sensor",
	"LIS331 3-Axis Accelerometer",
	"LIS3DH 3-Axis Accelerometer",
];
const G13: &[&str] = &[
	"MCP9808 Temperature Sensor",
	"LIS331 3-Axis Accelerometer",
	"LIS3DH 3-Axis Accelerometer",
	"LSM303 Accelerometer/Magnetometer",
];
const G14: &[&str] = &[
	"AGS02MA TVOC Gas Sensor",
	"MCP9808 Temperature Sensor",
];
const G15: &[&str] = &[
	"MCP9808 Temperature Sensor",
];
const G16: &[&str] = &[
	"LIS3MDL Magetometer",
	"MCP9808 Temperature Sensor",
	"MMA845x 3-Axis Accelerometer",
	"FXOS8700 Accelerometer/Magnetometer",
	"MMA7455L",
];
const G17: &[&str] = &[
	"ADXL343 3-Axis Accelerometer",
	"ADXL345 3-Axis Accelerometer",
	"FXOS8700 Accelerometer/Magnetometer",
	"LSM9DS0 9-Axis IMU",
	"MCP9808 Temperature Sensor",
	"MMA7455L",
	"MMA845x 3-Axis Accelerometer",
];
const G18: &[&str] = &[
	"FXOS8700 Accelerometer/Magnetometer",
	"HMC5883 Magnetometer",
	"LIS2MDL Magnetometer",
	"LIS3MDL Magnetometer",
	"LSM303 Accelerometer/Magnetometer",
	"LSM9DS0 9-Axis IMU",
	"MCP9808 Temperature Sensor",
];
const G19: &[&str] = &[
	"MCP9808 Temperature Sensor",
	"FXOS8700 Accelerometer & Magnetometer",
];
const G20: &[&str] = &[
	"FXAS21002 Gyroscope",
	"Chirp! Water Sensor",
	"MCP23008 GPIO Expander",
	"MCP23017 GPIO Expander",
];
const G21: &[&str] = &[
	"FXAS21002 Gyroscope",
	"MCP23008 GPIO Expander",
	"MCP23017 GPIO Expander",
];
const G22: &[&str] = &[
	"MCP23008 GPIO Expander",
	"MCP23017 GPIO Expander",
];
const G23: &[&str] = &[
	"BH1750 Light Sensor",
	"MCP23008 GPIO Expander",
	"MCP23017 GPIO Expander",
];
const G24: &[&str] = &[
	"MCP23008 GPIO Expander",
	"MCP23017 GPIO Expander",
	"MSA301 3-Axis Accelerometer",
];
const G25: &[&str] = &[
	"BNO055 IMU",
	"CAP1188 8-Channel Capacitive Touch",
	"DS1841 Digital Logarithmic Potentiometer",
	"DS3502 Digital 10K Potentiometer",
	"PCT2075 Temperature Sensor",
	"TSL2591 Light Sensor",
];
const G26: &[&str] = &[
	"BNO055 IMU",
	"DS1841 Digital Logarithmic Potentiometer",
	"DS3502 Digital 10K Potentiometer",
	"PCT2075 Temperature Sensor",
	"TCS34725 Color Sensor",
	"TSL2561 Light Sensor",
	"TSL2591 Light Sensor",
	"VL53L0x ToF Sensor",
	"VL6180X ToF Sensor",
	"CAP1188 8-Channel Capacitive Touch",
];
const G27: &[&str] = &[
	"CAP1188 8-Channel Capacitive Touch",
	"DS1841 Digital Logarithmic Potentiometer",
	"DS3502 Digital 10K Potentiometer",
	"PCT2075 Temperature Sensor",
];
const G28: &[&str] = &[
	"CAP1188 8-Channel Capacitive Touch",
	"PCT2075 Temperature Sensor",
];
const G29: &[&str] = &[
	"PCT2075 Temperature Sensor",
];
const G30: &[&str] = &[
	"MLX90640 IR Thermal Camera",
];
const G31: &[&str] = &[
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
	"MAX17048 LiPoly/LiIon Fuel Gauge and Battery Monitor",
];
const G32: &[&str] = &[
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
];
const G33: &[&str] = &[
	"AHT20 Humidity/Temperature Sensor",
	"DHT20 Humidity/Temperature Sensor",
	"VEML6070 UV Index",
	"FT6x06 Capacitive Touch Driver",
	"NCP5623 RGB LED Driver",
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
];
const G34: &[&str] = &[
	"AS7341 Color Sensor",
	"TSL2561 Light Sensor",
	"VEML6070 UV Light Sensor",
	"APDS-9960 IR/Color/Proximity Sensor",
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
];
const G35: &[&str] = &[
	"PCF8577C LCD direct/duplex driver",
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
];
const G36: &[&str] = &[
	"SSD1305 Monochrome OLED",
	"SSD1306 Monochrome OLED",
	"SSD1309 Monochrome OLED",
	"SSD1315 Monochrome OLED",
	"SH1106 Monochrome OLED",
	"CH1115 Monochrome OLED",
	"CH1116 Monochrome OLED",
	"SSD1327 16-Level Grayscale OLED",
	"ST75256 4-Level Grayscale LCD",
	"Adafruit Stemma QT Rotary Encoder with NeoPixel",
];
const G37: &[&str] = &[
	"ST75256 4-Level Grayscale LCD",
];
const G38: &[&str] = &[
	"Si7021 Humidity/Temperature Sensor",
	"HTU21D-F Humidity/Temperature Sensor",
	"HTU31D Humidity/Temperature Sensor",
	"HDC1008 Humidity/Temperature Sensor",
	"MS8607 Humidity/Temperature/Pressure Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"PCA9685 16-Channel PWM Driver (default address)",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
];
const G39: &[&str] = &[
	"HDC1008 Humidity/Temperature Sensor",
	"HTU31D Humidity/Temperature Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"STMPE610/STMPE811 Resistive Touch Controller",
];
const G40: &[&str] = &[
	"HDC1008 Humidity/Temperature Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
];
const G41: &[&str] = &[
	"HDC1008 Humidity/Temperature Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
];
const G42: &[&str] = &[
	"SHT45 Humidity/Temperature Sensor",
	"SHT40 Humidity/Temperature Sensor",
	"SHT31 Humidity/Temperature Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"ISL29125 Color Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"STMPE610/STMPE811 Resistive Touch controller",
];
const G43: &[&str] = &[
	"SHT31 Humidity/Temperature Sensor",
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
];
const G44: &[&str] = &[
	"TMP007 IR Temperature Sensor",
	"TMP006 IR Temperature Sensor",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
];
const G45: &[&str] = &[
	"ADS1115 4-channel 16-Bit ADC",
	"ADT7410 Temperature Sensor",
	"ATSAMD09 Breakout with seesaw",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"PCF8591 Quad 8-Bit ADC + 8-Bit DAC",
	"PCT2075 Temperature Sensor",
	"PN532 NFC/RFID reader",
	"TMP102 Temperature Sensor",
	"TMP117 Temperature Sensor",
];
const G46: &[&str] = &[
	"ADS1115 4-Channel 16-Bit ADC",
	"ADT7410 Temperature Sensor",
	"AS7262 Light/Color Sensor",
	"ATSAMD09 Breakout with seesaw",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"PCF8591 Quad 8-Bit ADC + 8-Bit DAC",
	"PCT2075 Temperature Sensor",
	"TSL2561 Light Sensor",
	"TMP102 Temperature Sensor",
	"TMP117 Temperature Sensor",
];
const G47: &[&str] = &[
	"ADS1115 4-channel 16-Bit ADC",
	"ADT7410 Temperature Sensor",
	"ATSAMD09 Breakout with seesaw",
	"BNO085 9-DoF IMU",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"PCF8591 Quad 8-Bit ADC + 8-Bit DAC",
	"PCT2075 Temperature Sensor",
	"TMP102 Temperature Sensor",
	"TMP117 Temperature Sensor",
];
const G48: &[&str] = &[
	"EMC2101 Fan Controller",
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"PCF8591 Quad 8-Bit ADC + 8-Bit DAC",
	"PCT2075 Temperature Sensor",
];
const G49: &[&str] = &[
	"INA219 High-Side DC Current/Voltage Sensor",
	"INA260 Precision DC Current/Power Sensor",
	"PCF8591 Quad 8-Bit ADC + 8-Bit DAC",
	"PCT2075 Temperature Sensor",
];
const G50: &[&str] = &[
	"MB85RC FRAM",
];
const G51: &[&str] = &[
	"MB85RC FRAM",
	"Nintendo Nunchuck Controller",
];
const G52: &[&str] = &[
	"ADXL343 3-Axis Accelerometer",
	"ADXL345 3-Axis Accelerometer",
	"LTR390 UV Sensor",
	"MB85RC FRAM",
];
const G53: &[&str] = &[
	"MB85RC FRAM",
	"MAX3010x Pulse & Oximetry Sensor",
];
const G54: &[&str] = &[
	"AW9523 GPIO Expander and LED Driver",
	"TPA2016 Class-D Audio Amplifier",
	"SGP30 Gas Sensor",
];
const G55: &[&str] = &[
	"AW9523 GPIO Expander and LED Driver",
	"SGP40 Gas Sensor",
];
const G56: &[&str] = &[
	"AW9523 GPIO Expander and LED Driver",
	"MPR121 12-Point Capacitive Touch Sensor",
	"CCS811 VOC Sensor",
	"MLX9061x IR Temperature Sensor",
	"DRV2605 Haptic Motor Driver",
];
const G57: &[&str] = &[
	"AW9523 GPIO Expander and LED Driver",
	"MPR121 12-Point Capacitive Touch Sensor",
	"CCS811 VOC Sensor",
];
const G58: &[&str] = &[
	"AM2315 Humidity/Temp Sensor",
	"AM2320 Humidity/Temp Sensor",
	"BH1750 Light Sensor",
	"LPS22 Pressure Sensor",
	"LPS25 Pressure Sensor",
	"LPS33HW Ported Pressure Sensor",
	"LPS35HW Pressure Sensor",
	"MPR121 12-Point Capacitive Touch Sensor",
];
const G59: &[&str] = &[
	"LPS22 Pressure Sensor",
	"LPS25 Pressure Sensor",
	"LPS33HW Ported Pressure Sensor",
	"LPS35HW Pressure Sensor",
	"MPR121 12-Point Capacitive Touch Sensor",
];
const G60: &[&str] = &[
	"TLV493D 3-Axis Magnetometer",
];
const G61: &[&str] = &[
	"HTS221 Humidity/Temperature Sensor",
];
const G62: &[&str] = &[
	"ATECC608 Cryptographic Co-Processor",
	"MCP4728 Quad DAC",
	"MCP9600 Temperature Sensor",
	"MPL115A2 Barometric Pressure",
	"MPL3115A2 Barometric Pressure",
	"Si5351A Clock Generator",
	"Si1145 Light/IR Sensor",
	"MCP4725A0 12-Bit DAC",
	"TEA5767 Radio Receiver",
	"VCNL4040 Proximity and Ambient Light Sensor",
];
const G63: &[&str] = &[
	"MCP4725A0 12-Bit DAC",
	"MCP9600 Temperature Sensor",
	"Si5351A Clock Generator",
	"SCD30 Humidity/Temperature/CO2 Sensor",
];
const G64: &[&str] = &[
	"MCP4725A1 12-Bit DAC",
	"MCP9600 Temperature Sensor",
];
const G65: &[&str] = &[
	"MCP4725A1 12-Bit DAC",
	"MCP9600 Temperature Sensor",
	"Si4713 FM Transmitter with RDS",
];
const G66: &[&str] = &[
	"MCP4725A2 12-Bit DAC",
	"MCP9600 Temperature Sensor",
];
const G67: &[&str] = &[
	"MCP4725A3 12-Bit DAC",
	"MCP9600 Temperature Sensor",
];
const G68: &[&str] = &[
	"AMG8833 IR Thermal Camera Breakout",
	"DS1307 RTC",
	"DS3231 RTC",
	"ICM-20649 Accelerometer + Gyroscope",
	"ITG3200 Gyroscope",
	"MPU-9250 9-DoF IMU",
	"MPU-60X0 Accelerometer + Gyroscope",
	"PCF8523 RTC",
];
const G69: &[&str] = &[
	"AMG8833 IR Thermal Camera Breakout",
	"ICM-20649 Accelerometer + Gyroscope",
	"MPU-9250 9-DoF IMU",
	"MPU-60X0 Accelerometer + Gyroscope",
	"ITG3200 Gyroscope",
];
const G70: &[&str] = &[
	"ICM330DHC 6-Axis IMU",
	"L3GD20H Gyroscope",
	"LSM6DS33 6-Axis IMU",
	"LSM6DSOX 6-Axis IMU",
	"LSM9DS0 9-Axis IMU",
];
const G71: &[&str] = &[
	"HT16K33 LED Matrix Driver",
	"PCT2075 Temperature Sensor",
	"TCA9548 1-to-8 I2C Multiplexer",
	"SHTC3 Temp and Humidity Sensor",
];
const G72: &[&str] = &[
	"HT16K33 LED Matrix Driver",
	"PCT2075 Temperature Sensor",
	"TCA9548 1-to-8 I2C Multiplexer",
];
const G73: &[&str] = &[
	"HT16K33 LED Matrix Driver",
	"IS31FL3731 144-LED CharliePlex driver",
	"PCT2075 Temperature Sensor",
	"TCA9548 1-to-8 I2C Multiplexer",
];
const G74: &[&str] = &[
	"BME280 Temp/Barometric/Humidity",
	"BME680 Temp/Barometric/Humidity/Gas",
	"BMP280 Temp/Barometric",
	"BMP388 Temp/Barometric",
	"BMP390 Temp/Barometric",
	"DPS310 Barometric Sensor",
	"HT16K33 LED Matrix Driver",
	"IS31FL3731 144-LED CharliePlex driver",
	"MS5607/MS5611 Barometric Pressure",
	"MS8607 Temp/Barometric/Humidity",
	"PCT2075 Temperature Sensor",
	"TCA9548 1-to-8 I2C Multiplexer",
];
const G75: &[&str] = &[
	"BMA180 Accelerometer",
	"BME280 Temp/Barometric/Humidity",
	"BME680 Temp/Barometric/Humidity/Gas",
	"BMP180 Temp/Barometric",
	"BMP085 Temp/Barometric",
	"BMP280 Temp/Barometric",
	"BMP388 Temp/Barometric",
	"BMP390 Temp/Barometric",
	"DPS310 Barometric Sensor",
	"HT16K33 LED Matrix Driver",
	"IS31FL3731 144-LED CharliePlex driver",
	"MS5607/MS5611 Barometric Pressure",
	"PCT2075 Temperature Sensor",
	"TCA9548 1-to-8 I2C Multiplexer",
];
const G76: &[&str] = &[
	"Reserved for 10-bit I2C addressing",
];
const G77: &[&str] = &[
	"Reserved for future purposes",
];
const G78: &[&str] = &[
	"Reserved for Future Purposes",
];

static BY_ADDRESS: [&[&str]; 128] = [
	G0, G1, G2, G3, G4, G4, G4, G4, // 0x00
	NONE, NONE, NONE, G5, G6, G6, G7, G6, // 0x08
	G8, G9, G10, G11, NONE, NONE, NONE, NONE, // 0x10
	G12, G13, G14, G15, G16, G17, G18, G19, // 0x18
	G20, G21, G22, G23, G22, G22, G24, G22, // 0x20
	G25, G26, G27, G27, G28, G28, G29, NONE, // 0x28
	NONE, NONE, NONE, G30, NONE, NONE, G31, G32, // 0x30
	G33, G34, G35, G32, G36, G36, G37, G37, // 0x38
	G38, G39, G40, G41, G42, G43, G44, G44, // 0x40
	G45, G46, G47, G47, G48, G49, G49, G49, // 0x48
	G50, G50, G51, G52, G50, G50, G50, G53, // 0x50
	G54, G55, G56, G57, G58, G59, G60, G61, // 0x58
	G62, G63, G64, G65, G66, G66, G67, G67, // 0x60
	G68, G69, G70, G70, NONE, NONE, NONE, NONE, // 0x68
	G71, G72, G72, G72, G73, G73, G74, G75, // 0x70
	G76, G76, G76, G76, G77, G77, G77, G78, // 0x78
];

/// known parts using `address` (empty if nothing is known)
pub fn known_parts(address: u8) -> &'static [&'static str] {
	match BY_ADDRESS.get(address as usize) {
		Some(parts) => *parts,
		None => &[],
	}
}

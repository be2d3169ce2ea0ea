#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Attributes of a sensor paired with the bridge
pub struct Sensor {
	/// Index the bridge assigned to this sensor, taken from the key of
	/// the enumeration response.
	#[serde(skip)]
	pub index: usize,
	pub name: String,
	#[serde(rename = "type")]
	pub sensor_type: String,
	pub modelid: String,
	pub manufacturername: String,
	#[serde(default)]
	pub swversion: String,
	#[serde(default)]
	pub uniqueid: String,
	#[serde(default)]
	pub state: SensorState,
	#[serde(default)]
	pub config: SensorConfig,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Last reported readings. Which fields are present depends on the
/// sensor type, so all of them are optional.
pub struct SensorState {
	pub daylight: Option<bool>,
	pub presence: Option<bool>,
	/// Button code of a switch, e.g. 34 for button 1 of a Hue tap
	pub buttonevent: Option<u32>,
	/// Temperature in hundredths of a degree Celsius
	pub temperature: Option<i32>,
	pub lightlevel: Option<u32>,
	pub lastupdated: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Sensor configuration as stored on the bridge
pub struct SensorConfig {
	pub on: Option<bool>,
	pub reachable: Option<bool>,
	/// Charge level in percent, for battery powered sensors
	pub battery: Option<u8>,
}

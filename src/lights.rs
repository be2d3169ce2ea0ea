use crate::bridge::Bridge;
use crate::error::Result;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Attributes of a light
pub struct Light {
	/// Index the bridge assigned to this light. Taken from the key of
	/// the enumeration response, the light's own body does not carry it.
	#[serde(skip)]
	pub index: usize,
	pub name: String,
	#[serde(rename = "type")]
	pub light_type: String,
	pub uniqueid: String,
	pub modelid: String,
	pub manufacturername: String,
	#[serde(default)]
	pub productid: String,
	#[serde(default)]
	pub swversion: String,
	#[serde(default)]
	pub swconfigid: String,
	pub state: LightState,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Current state of a light
pub struct LightState {
	pub on: bool,
	/// Brightness
	pub bri: u8,
	/// Hue angle. White-only lights omit the color fields.
	pub hue: Option<u16>,
	/// Saturation
	pub sat: Option<u8>,
	/// CIE color space coordinates
	pub xy: Option<[f32; 2]>,
	/// Color temperature in mireds
	pub ct: Option<u16>,
	/// Alert mode
	#[serde(default)]
	pub alert: String,
	#[serde(default)]
	pub effect: String,
	#[serde(default)]
	pub colormode: String,
	#[serde(default)]
	pub mode: String,
	pub reachable: bool,
}

#[derive(Serialize, Debug, Default, Clone)]
/// Partial state update for a light. Fields left `None` are omitted from
/// the request body and keep their current value on the bridge.
pub struct LightStateChange {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub on: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bri: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hue: Option<u16>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sat: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub xy: Option<[f32; 2]>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ct: Option<u16>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alert: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub effect: Option<String>,
	/// Fade duration in multiples of 100ms
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transitiontime: Option<u16>,
}

impl Light {
	/// Turns the light on.
	pub fn turn_on(&self, bridge: &Bridge) -> Result<()> {
		let change = LightStateChange {
			on: Some(true),
			..LightStateChange::default()
		};
		bridge.set_light_state(self.index, &change)
	}

	/// Turns the light off.
	pub fn turn_off(&self, bridge: &Bridge) -> Result<()> {
		let change = LightStateChange {
			on: Some(false),
			..LightStateChange::default()
		};
		bridge.set_light_state(self.index, &change)
	}

	/// Switches the light to the opposite of its last fetched state.
	pub fn toggle(&self, bridge: &Bridge) -> Result<()> {
		if self.state.on {
			self.turn_off(bridge)
		} else {
			self.turn_on(bridge)
		}
	}

	/// Applies a partial state change to this light.
	pub fn set_state(&self, bridge: &Bridge, change: &LightStateChange) -> Result<()> {
		bridge.set_light_state(self.index, change)
	}
}

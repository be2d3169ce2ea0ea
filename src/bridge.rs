use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::lights::{Light, LightStateChange};
use crate::scenes::Scene;
use crate::sensors::Sensor;

/// Client side timeout for every request sent to a bridge.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize, Debug, Default, Clone)]
/// A Hue bridge on the local network.
///
/// All communication with the lights runs through a bridge. Obtain one
/// from [`crate::find_bridges`] or [`Bridge::new`], then authenticate with
/// [`Bridge::login`] or [`Bridge::create_user`] before using any of the
/// light, sensor or scene accessors.
pub struct Bridge {
	/// Network address of the bridge, host or IP without a scheme.
	#[serde(rename = "internalipaddress")]
	pub ip_address: String,
	/// Access token issued by [`Bridge::create_user`].
	/// Empty until a login succeeds.
	#[serde(skip)]
	pub username: String,
	/// Device description fetched by [`Bridge::get_info`].
	#[serde(skip)]
	pub info: BridgeInfo,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Self description a bridge serves at `/description.xml`.
pub struct BridgeInfo {
	pub device: Device,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
	pub device_type: String,
	pub friendly_name: String,
	pub manufacturer: String,
	#[serde(rename = "manufacturerURL")]
	pub manufacturer_url: String,
	pub model_description: String,
	pub model_name: String,
	pub model_number: String,
	#[serde(rename = "modelURL")]
	pub model_url: String,
	pub serial_number: String,
	#[serde(rename = "UDN")]
	pub udn: String,
}

#[derive(Deserialize, Debug)]
struct ApiError {
	#[serde(rename = "type")]
	error_type: u16,
	description: String,
}

#[derive(Deserialize, Debug)]
struct ApiResult {
	error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct CreatedUser {
	username: String,
}

#[derive(Deserialize, Debug)]
struct CreateUserResult {
	success: CreatedUser,
}

/// Checks a response for the error envelope the bridge embeds in
/// otherwise successful replies: `[{"error": {"type": .., "address": ..,
/// "description": ..}}]`. A body of any other shape passes through
/// unchanged.
fn handle_response(response: Response) -> Result<Vec<u8>> {
	debug!("code: {}", response.status());
	debug!("headers: {:?}", response.headers());
	let body = response.bytes()?.to_vec();
	if let Ok(results) = serde_json::from_slice::<Vec<ApiResult>>(&body) {
		for result in results {
			if let Some(error) = result.error {
				return Err(Error::Bridge {
					error_type: error.error_type,
					description: error.description,
				});
			}
		}
	}
	Ok(body)
}

impl Bridge {
	/// Constructs a bridge from its network address and probes it by
	/// fetching the device description. Fails if the bridge is not
	/// reachable, so no half valid value is ever returned.
	pub fn new(ip_address: &str) -> Result<Bridge> {
		let mut bridge = Bridge {
			ip_address: ip_address.to_string(),
			..Bridge::default()
		};
		bridge.get_info()?;
		Ok(bridge)
	}

	fn client(&self) -> Result<Client> {
		let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
		Ok(client)
	}

	fn uri(&self, path: &str) -> String {
		format!("http://{}{}", self.ip_address, path)
	}

	/// Sends a http GET to the bridge.
	pub fn get(&self, path: &str) -> Result<Vec<u8>> {
		let uri = self.uri(path);
		debug!("GET: {}", uri);
		let response = self.client()?.get(&uri).send()?;
		handle_response(response)
	}

	/// Sends a http PUT to the bridge, with `params` serialized as the
	/// JSON body.
	pub fn put<P: Serialize>(&self, path: &str, params: &P) -> Result<Vec<u8>> {
		let uri = self.uri(path);
		debug!("PUT: {}", uri);
		let response = self.client()?.put(&uri).json(params).send()?;
		handle_response(response)
	}

	/// Sends a http POST to the bridge. `Some(params)` is serialized as
	/// the JSON body; `None` sends an empty body, which some creation
	/// calls (like triggering a light search) require.
	pub fn post(&self, path: &str, params: Option<&Value>) -> Result<Vec<u8>> {
		let uri = self.uri(path);
		debug!("POST: {}", uri);
		let mut request = self.client()?.post(&uri);
		if let Some(params) = params {
			request = request.json(params);
		}
		let response = request.send()?;
		handle_response(response)
	}

	/// Sends a http DELETE to the bridge.
	pub fn delete(&self, path: &str) -> Result<()> {
		let uri = self.uri(path);
		debug!("DELETE: {}", uri);
		let response = self.client()?.delete(&uri).send()?;
		handle_response(response)?;
		Ok(())
	}

	/// Fetches `/description.xml` from the bridge and stores the decoded
	/// device description. Works without authentication, which makes it
	/// the reachability check everything else builds on.
	pub fn get_info(&mut self) -> Result<()> {
		let body = self.get("/description.xml")?;
		let info: BridgeInfo = serde_xml_rs::from_reader(body.as_slice())?;
		self.info = info;
		debug!("connected to bridge: {:?}", self.info);
		Ok(())
	}

	/// Registers a new user on the bridge's whitelist and returns the
	/// generated access token. The link button on the bridge must have
	/// been pressed shortly before, otherwise the bridge answers with a
	/// "link button not pressed" error.
	///
	/// The token is also stored as this bridge's active credential. A
	/// plaintext name cannot be chosen; the bridge always generates the
	/// token itself.
	pub fn create_user(&mut self, device_type: &str) -> Result<String> {
		let params = json!({ "devicetype": device_type });
		let body = self.post("/api", Some(&params))?;
		let (result,): (CreateUserResult,) = serde_json::from_slice(&body)
			.map_err(|e| Error::json("user creation response", e))?;
		self.username = result.success.username;
		Ok(self.username.clone())
	}

	/// Verifies that `username` grants access to this bridge and, only on
	/// success, assigns it as the active credential. A rejected token
	/// leaves the current credential untouched.
	pub fn login(&mut self, username: &str) -> Result<()> {
		let uri = format!("/api/{}", username);
		self.get(&uri)?;
		self.username = username.to_string();
		Ok(())
	}

	/// Removes the whitelist entry for `username`. Requires this bridge
	/// to be authenticated already, since deletion runs under the active
	/// credential.
	pub fn delete_user(&self, username: &str) -> Result<()> {
		let uri = format!("/api/{}/config/whitelist/{}", self.username, username);
		self.delete(&uri)
	}

	/// Retrieves all lights the bridge knows about, in no particular
	/// order.
	pub fn get_all_lights(&self) -> Result<Vec<Light>> {
		let uri = format!("/api/{}/lights", self.username);
		let body = self.get(&uri)?;
		// The response keys each light by its index, which the light's
		// own body does not repeat.
		let map: HashMap<usize, Light> = serde_json::from_slice(&body)
			.map_err(|e| Error::json("light list", e))?;
		let mut lights = Vec::with_capacity(map.len());
		for (index, mut light) in map {
			light.index = index;
			lights.push(light);
		}
		Ok(lights)
	}

	/// Retrieves a single light by the index the bridge assigned to it.
	pub fn get_light_by_index(&self, index: usize) -> Result<Light> {
		let uri = format!("/api/{}/lights/{}", self.username, index);
		let body = match self.get(&uri) {
			Err(Error::Bridge { ref description, .. })
				if description.contains("not available") =>
			{
				return Err(Error::LightIndexOutOfBounds(index))
			}
			other => other?,
		};
		let mut light: Light = serde_json::from_slice(&body)
			.map_err(|e| Error::json("light attributes", e))?;
		light.index = index;
		Ok(light)
	}

	/// Retrieves the light with exactly the given name.
	pub fn get_light_by_name(&self, name: &str) -> Result<Light> {
		let lights = self.get_all_lights()?;
		lights
			.into_iter()
			.find(|light| light.name == name)
			.ok_or_else(|| Error::LightNotFound(name.to_string()))
	}

	/// Makes the bridge search the zigbee spectrum for unpaired lights.
	/// The search runs on the bridge for up to a minute and adds at most
	/// 15 new lights; this call only triggers it and returns as soon as
	/// the bridge acknowledges. Newly found lights show up in
	/// [`Bridge::get_all_lights`].
	pub fn find_new_lights(&self) -> Result<()> {
		let uri = format!("/api/{}/lights", self.username);
		self.post(&uri, None)?;
		Ok(())
	}

	/// Applies a partial state change to the light at `index`. Fields
	/// left `None` keep their current value.
	pub fn set_light_state(&self, index: usize, change: &LightStateChange) -> Result<()> {
		let uri = format!("/api/{}/lights/{}/state", self.username, index);
		self.put(&uri, change)?;
		Ok(())
	}

	/// Retrieves all sensors the bridge knows about, in no particular
	/// order.
	pub fn get_all_sensors(&self) -> Result<Vec<Sensor>> {
		let uri = format!("/api/{}/sensors", self.username);
		let body = self.get(&uri)?;
		let map: HashMap<usize, Sensor> = serde_json::from_slice(&body)
			.map_err(|e| Error::json("sensor list", e))?;
		let mut sensors = Vec::with_capacity(map.len());
		for (index, mut sensor) in map {
			sensor.index = index;
			sensors.push(sensor);
		}
		Ok(sensors)
	}

	/// Retrieves a single sensor by the index the bridge assigned to it.
	pub fn get_sensor_by_index(&self, index: usize) -> Result<Sensor> {
		let uri = format!("/api/{}/sensors/{}", self.username, index);
		let body = match self.get(&uri) {
			Err(Error::Bridge { ref description, .. })
				if description.contains("not available") =>
			{
				return Err(Error::SensorIndexOutOfBounds(index))
			}
			other => other?,
		};
		let mut sensor: Sensor = serde_json::from_slice(&body)
			.map_err(|e| Error::json("sensor attributes", e))?;
		sensor.index = index;
		Ok(sensor)
	}

	/// Retrieves all scenes stored on the bridge.
	pub fn get_all_scenes(&self) -> Result<Vec<Scene>> {
		let uri = format!("/api/{}/scenes", self.username);
		let body = self.get(&uri)?;
		let map: HashMap<String, Scene> = serde_json::from_slice(&body)
			.map_err(|e| Error::json("scene list", e))?;
		let mut scenes = Vec::with_capacity(map.len());
		for (id, mut scene) in map {
			scene.id = id;
			scenes.push(scene);
		}
		Ok(scenes)
	}
}

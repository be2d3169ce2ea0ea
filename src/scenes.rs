#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// A stored group of lights with a recallable state
pub struct Scene {
	/// Identifier the bridge keyed this scene with in the enumeration
	/// response.
	#[serde(skip)]
	pub id: String,
	pub name: String,
	/// Indexes of the lights taking part in this scene
	#[serde(default)]
	pub lights: Vec<String>,
	#[serde(default)]
	pub owner: String,
	#[serde(default)]
	pub recycle: bool,
	#[serde(default)]
	pub locked: bool,
	#[serde(default)]
	pub appdata: SceneAppData,
	#[serde(default)]
	pub picture: String,
	#[serde(default)]
	pub lastupdated: String,
	#[serde(default)]
	pub version: i32,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// App specific data an application may attach to a scene
pub struct SceneAppData {
	#[serde(default)]
	pub version: i32,
	#[serde(default)]
	pub data: String,
}

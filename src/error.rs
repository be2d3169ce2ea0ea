use thiserror::Error;

/// Everything that can go wrong while talking to a bridge.
#[derive(Error, Debug)]
pub enum Error {
	/// The bridge (or the discovery service) could not be reached,
	/// the connection broke, or the 5 second timeout elapsed.
	#[error("unable to access bridge: {0}")]
	Http(#[from] reqwest::Error),

	/// A JSON payload did not have the expected shape.
	#[error("unable to decode {context}: {source}")]
	Json {
		context: &'static str,
		source: serde_json::Error,
	},

	/// The bridge description document could not be parsed.
	#[error("failed to decode xml response from bridge description: {0}")]
	Xml(#[from] serde_xml_rs::Error),

	/// The bridge answered with an application-level error envelope.
	#[error("failed to handle response: error type {error_type}: {description}")]
	Bridge {
		error_type: u16,
		description: String,
	},

	/// The discovery service reported no bridges on this network.
	#[error("no bridges found")]
	NoBridgesFound,

	/// No light exists at the requested index.
	#[error("light selection index {0} out of bounds")]
	LightIndexOutOfBounds(usize),

	/// No sensor exists at the requested index.
	#[error("sensor selection index {0} out of bounds")]
	SensorIndexOutOfBounds(usize),

	/// No light carries the requested name.
	#[error("light named '{0}' not found")]
	LightNotFound(String),
}

impl Error {
	pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Error {
		Error::Json { context, source }
	}
}

pub type Result<T> = std::result::Result<T, Error>;

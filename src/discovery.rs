use crate::bridge::Bridge;
use crate::error::{Error, Result};

/// Public service listing the bridges visible from the caller's network.
const DISCOVERY_HOST: &str = "www.meethue.com";
const DISCOVERY_PATH: &str = "/api/nupnp";

/// Asks the Hue discovery service for bridges on the local network.
///
/// The returned bridges carry their address only; they are neither
/// identified nor authenticated yet. Fails with
/// [`Error::NoBridgesFound`] if the service answers with an empty list.
pub fn find_bridges() -> Result<Vec<Bridge>> {
	find_bridges_at(DISCOVERY_HOST)
}

fn find_bridges_at(host: &str) -> Result<Vec<Bridge>> {
	// The discovery service speaks the same plain http dialect as a
	// bridge, so a throwaway Bridge value serves as the client.
	let locator = Bridge {
		ip_address: host.to_string(),
		..Bridge::default()
	};
	let body = locator.get(DISCOVERY_PATH)?;
	let bridges: Vec<Bridge> = serde_json::from_slice(&body)
		.map_err(|e| Error::json("bridge list", e))?;
	if bridges.is_empty() {
		return Err(Error::NoBridgesFound);
	}
	Ok(bridges)
}

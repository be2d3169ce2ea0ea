//! Client library for Philips Hue bridges.
//!
//! A [`Bridge`] is obtained either from [`find_bridges`] or directly via
//! [`Bridge::new`] with a known address. After [`Bridge::create_user`] or
//! [`Bridge::login`] the lights, sensors and scenes paired with the bridge
//! can be queried and controlled.
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate serde_xml_rs;
extern crate thiserror;
pub mod error;
pub use error::{Error, Result};
pub mod lights;
pub mod sensors;
pub mod scenes;
pub mod bridge;
pub use bridge::Bridge;
mod discovery;
pub use discovery::find_bridges;

//! Common types used throughout the Vendora platform.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// VendorId //
//**********//
/// Opaque vendor identifier, scoped to the tenant that owns a storefront.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VendorId(pub Box<str>);

impl VendorId {
	pub fn new(id: &str) -> VendorId {
		VendorId(Box::from(id))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for VendorId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for VendorId {
	fn from(id: &str) -> Self {
		VendorId(Box::from(id))
	}
}

impl Serialize for VendorId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for VendorId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(VendorId(Box::<str>::deserialize(deserializer)?))
	}
}

// Timestamp //
//***********//
/// Unix epoch seconds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::cmp::Ord for Timestamp {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.0.cmp(&other.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// ApiResponse //
//*************//
/// Uniform JSON envelope used by every endpoint of the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		ApiResponse { success: true, message: None, data: Some(data), error: None }
	}

	pub fn failure(message: impl Into<String>) -> Self {
		ApiResponse { success: false, message: Some(message.into()), data: None, error: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn with_error(mut self, error: impl Into<String>) -> Self {
		self.error = Some(error.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_envelope_skips_empty_fields() {
		let response = ApiResponse::new(42).with_message("ok");
		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(json["success"], true);
		assert_eq!(json["message"], "ok");
		assert_eq!(json["data"], 42);
		assert!(json.get("error").is_none());
	}

	#[test]
	fn test_envelope_failure() {
		let response = ApiResponse::<()>::failure("nope").with_error("storage failure");
		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(json["success"], false);
		assert_eq!(json["message"], "nope");
		assert!(json.get("data").is_none());
		assert_eq!(json["error"], "storage failure");
	}

	#[test]
	fn test_timestamp_ordering() {
		assert!(Timestamp(1) < Timestamp(2));
		assert!(now() > Timestamp(0));
	}
}

// vim: ts=4

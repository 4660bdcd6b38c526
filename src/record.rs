/* src/record.rs */

/// The fixed key under which every record emitted by this crate is filed.
pub const CONFIG_KEY: &str = "config";

/// Format tags the usual host decoders recognize.
///
/// The tag is opaque to this crate: any non-empty string passes through to
/// the host unchanged, these constants just cover the common cases.
pub mod format {
	pub const JSON: &str = "json";
	pub const YAML: &str = "yaml";
	pub const FORM: &str = "form";
	pub const XML: &str = "xml";
	pub const PROTO: &str = "proto";
}

/// A key/value/format triple, the unit handed to the host loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
	pub key: String,
	pub value: Vec<u8>,
	pub format: String,
}

impl KeyValue {
	/// Builds a record filed under the [`CONFIG_KEY`] sentinel.
	pub fn config(value: Vec<u8>, format: impl Into<String>) -> Self {
		Self {
			key: CONFIG_KEY.to_string(),
			value,
			format: format.into(),
		}
	}
}

/* src/source/static_source.rs */

//!
//! Static source: an immutable blob with no update path. The watcher exists
//! only so the host gets a valid handle and an orderly shutdown signal.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Source, Watcher, check_format};
use crate::error::{Result, SourceError};
use crate::record::{KeyValue, format};

/// A source for configuration that never changes at runtime.
pub struct StaticSource {
	data: Vec<u8>,
	format: String,
}

impl StaticSource {
	/// Creates a source from raw bytes and a format tag.
	///
	/// # Panics
	///
	/// Panics if `format` is empty.
	pub fn new(data: Vec<u8>, format: impl Into<String>) -> Self {
		let format = format.into();
		check_format(&format);
		Self { data, format }
	}

	/// Creates a source holding JSON bytes.
	pub fn json(data: Vec<u8>) -> Self {
		Self::new(data, format::JSON)
	}

	/// Creates a source holding YAML bytes.
	pub fn yaml(data: Vec<u8>) -> Self {
		Self::new(data, format::YAML)
	}
}

impl Source for StaticSource {
	fn load(&self) -> Result<Vec<KeyValue>> {
		Ok(vec![KeyValue::config(self.data.clone(), &self.format)])
	}

	/// Always succeeds. There is no shared state and no single-watcher
	/// restriction: each call returns an independent watcher.
	fn watch(&self) -> Result<Arc<dyn Watcher>> {
		let handle: Arc<dyn Watcher> = Arc::new(StaticWatcher::new());
		Ok(handle)
	}
}

/// A watcher that never produces data, it only observes cancellation.
pub struct StaticWatcher {
	cancel: CancellationToken,
}

impl StaticWatcher {
	fn new() -> Self {
		Self {
			cancel: CancellationToken::new(),
		}
	}
}

#[async_trait]
impl Watcher for StaticWatcher {
	async fn next(&self) -> Result<Vec<KeyValue>> {
		self.cancel.cancelled().await;
		Err(SourceError::Cancelled)
	}

	/// Token cancellation is idempotent, so repeat calls are no-op
	/// successes. There is no shared flag to protect here.
	async fn stop(&self) -> Result<()> {
		self.cancel.cancel();
		Ok(())
	}
}

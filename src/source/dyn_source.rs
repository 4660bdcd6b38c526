/* src/source/dyn_source.rs */

//!
//! Dynamic source: a byte blob the application can replace at runtime,
//! bridged into the host's poll-based watch contract.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

use super::{Source, Watcher, check_format};
use crate::error::{Result, SourceError};
use crate::record::{KeyValue, format};

/// A source whose blob can be replaced while the host is watching.
///
/// `load` always returns the construction blob; replacement values travel
/// only through the watcher (`update` -> `next`). Load never reflecting an
/// update is the intended contract, not an oversight: the initial snapshot
/// and the live delta stream are separate paths.
///
/// At most one watcher may exist per source instance. A second `watch`
/// call fails with [`SourceError::AlreadyWatching`].
pub struct DataSource {
	data: Vec<u8>,
	format: String,
	// Set exactly once by watch(); the unwatched -> watching transition
	// has no way back.
	watcher: OnceLock<Arc<DataWatcher>>,
}

impl DataSource {
	/// Creates a source from raw bytes and a format tag.
	///
	/// # Panics
	///
	/// Panics if `format` is empty.
	pub fn new(data: Vec<u8>, format: impl Into<String>) -> Self {
		let format = format.into();
		check_format(&format);
		Self {
			data,
			format,
			watcher: OnceLock::new(),
		}
	}

	/// Creates a source holding JSON bytes.
	pub fn json(data: Vec<u8>) -> Self {
		Self::new(data, format::JSON)
	}

	/// Creates a source holding YAML bytes.
	pub fn yaml(data: Vec<u8>) -> Self {
		Self::new(data, format::YAML)
	}

	/// Pushes a replacement blob to the active watcher.
	///
	/// Fails with [`SourceError::NotWatching`] before the first `watch` and
	/// with [`SourceError::WatcherStopped`] once the watcher was stopped.
	/// The handoff slot buffers a single pending update, so a producer that
	/// runs ahead of the consumer awaits here until the slot drains.
	pub async fn update(&self, data: Vec<u8>) -> Result<()> {
		let watcher = self.watcher.get().ok_or(SourceError::NotWatching)?;
		watcher.push(data).await
	}
}

impl Source for DataSource {
	fn load(&self) -> Result<Vec<KeyValue>> {
		Ok(vec![KeyValue::config(self.data.clone(), &self.format)])
	}

	fn watch(&self) -> Result<Arc<dyn Watcher>> {
		let watcher = Arc::new(DataWatcher::new(self.format.clone()));
		self.watcher
			.set(Arc::clone(&watcher))
			.map_err(|_| SourceError::AlreadyWatching)?;
		tracing::debug!(format = %self.format, "watch started on data source");
		let handle: Arc<dyn Watcher> = watcher;
		Ok(handle)
	}
}

/// The single-subscriber watcher behind [`DataSource`].
///
/// A capacity-one handoff channel plus a cancellation token. The channel
/// capacity is one on purpose: at most one update is ever in flight between
/// producer and consumer, which keeps ordering strict and memory bounded.
pub struct DataWatcher {
	format: String,
	state: Mutex<WatchState>,
	slot: Mutex<mpsc::Receiver<Vec<u8>>>,
	cancel: CancellationToken,
}

/// Guarded by the state lock for the duration of `push` and `stop`. The
/// lock is never held across `next`'s wait, so a concurrent `stop` can
/// always get in to cancel it.
struct WatchState {
	active: bool,
	tx: Option<mpsc::Sender<Vec<u8>>>,
}

impl DataWatcher {
	fn new(format: String) -> Self {
		let (tx, rx) = mpsc::channel(1);
		Self {
			format,
			state: Mutex::new(WatchState {
				active: true,
				tx: Some(tx),
			}),
			slot: Mutex::new(rx),
			cancel: CancellationToken::new(),
		}
	}

	/// Delivers a replacement blob into the handoff slot.
	///
	/// The state lock stays held while the slot is full, so a concurrent
	/// `stop` queues up behind an in-flight push rather than racing it.
	pub(super) async fn push(&self, data: Vec<u8>) -> Result<()> {
		let state = self.state.lock().await;
		if !state.active {
			return Err(SourceError::WatcherStopped);
		}
		let tx = state.tx.as_ref().ok_or(SourceError::WatcherStopped)?;
		tx.send(data).await.map_err(|_| SourceError::WatcherStopped)
	}
}

#[async_trait]
impl Watcher for DataWatcher {
	async fn next(&self) -> Result<Vec<KeyValue>> {
		let mut slot = self.slot.lock().await;
		tokio::select! {
			_ = self.cancel.cancelled() => Err(SourceError::Cancelled),
			received = slot.recv() => match received {
				Some(value) => Ok(vec![KeyValue::config(value, &self.format)]),
				// Sender dropped by stop(): terminal, same as cancellation.
				None => Err(SourceError::Cancelled),
			},
		}
	}

	async fn stop(&self) -> Result<()> {
		let mut state = self.state.lock().await;
		if !state.active {
			return Err(SourceError::AlreadyStopped);
		}
		state.active = false;
		// Wake a blocked next() and close the slot so any later read
		// observes a terminal close instead of parking forever.
		self.cancel.cancel();
		state.tx.take();
		tracing::debug!("data watcher stopped");
		Ok(())
	}
}

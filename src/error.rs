/* src/error.rs */

/// Errors surfaced by sources and watchers.
///
/// None of these are retryable inside this crate; retry policy, if any,
/// belongs to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
	/// A watcher already exists on this source.
	#[error("source is already being watched")]
	AlreadyWatching,

	/// `update` was called before any watcher was created.
	#[error("source has no watcher, call watch() before update()")]
	NotWatching,

	/// The watcher was stopped, updates can no longer be delivered.
	#[error("watcher is stopped, cannot deliver update")]
	WatcherStopped,

	/// `stop` was called on a watcher that was already stopped.
	#[error("watcher is stopped, cannot stop again")]
	AlreadyStopped,

	/// The watch was cancelled by `stop`.
	#[error("watch cancelled")]
	Cancelled,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, SourceError>;

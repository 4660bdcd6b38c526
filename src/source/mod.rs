mod dyn_source;
mod static_source;

pub use dyn_source::{DataSource, DataWatcher};
pub use static_source::{StaticSource, StaticWatcher};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::record::KeyValue;

/// A provider of configuration records for a host loader.
pub trait Source: Send + Sync {
    /// Produces the initial snapshot: exactly one record, side-effect-free.
    fn load(&self) -> Result<Vec<KeyValue>>;

    /// Obtains a long-lived watcher the host polls for incremental updates.
    fn watch(&self) -> Result<Arc<dyn Watcher>>;
}

/// A handle the host polls repeatedly until stopped.
#[async_trait]
pub trait Watcher: Send + Sync {
    /// Waits for the next update.
    ///
    /// This is the only suspension point in the crate: the call parks until
    /// either a new blob arrives or `stop` cancels the watch, in which case
    /// it returns [`SourceError::Cancelled`](crate::SourceError::Cancelled).
    /// There are no timeout semantics; callers that need one wrap `next`
    /// externally.
    async fn next(&self) -> Result<Vec<KeyValue>>;

    /// Stops the watcher, waking any task blocked in `next`.
    async fn stop(&self) -> Result<()>;
}

/// The format tag is consumer-defined and never validated beyond this.
pub(crate) fn check_format(format: &str) {
    assert!(!format.is_empty(), "format tag must be a non-empty string");
}

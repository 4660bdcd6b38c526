/* src/lib.rs */

//!
//! In-memory byte-buffer configuration sources for a host config loader.
//!
//! Two variants share the same consumer contract:
//!
//! - [`StaticSource`]: holds an immutable blob; its watcher never emits and
//!   only observes cancellation.
//! - [`DataSource`]: additionally supports live replacement of the blob
//!   through a single-subscriber watch channel (`update` -> `next`).
//!
//! The crate never inspects blob contents; decoding belongs to the host.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for the full load/watch/update/stop cycle.

pub mod error;
pub mod record;
pub mod source;

pub use error::{Result, SourceError};
pub use record::{CONFIG_KEY, KeyValue};
pub use source::{DataSource, DataWatcher, Source, StaticSource, StaticWatcher, Watcher};

/* tests/source_tests.rs */

use std::time::Duration;

use memsource::{CONFIG_KEY, DataSource, Source, SourceError, StaticSource, Watcher};
use tokio::time::timeout;

#[test]
fn test_load_returns_single_config_record() {
	let source = DataSource::new(b"{\"port\": 8080}".to_vec(), "json");
	let records = source.load().unwrap();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].key, CONFIG_KEY);
	assert_eq!(records[0].value, b"{\"port\": 8080}".to_vec());
	assert_eq!(records[0].format, "json");
}

#[test]
fn test_static_load_returns_single_config_record() {
	let source = StaticSource::new(b"port: 8080".to_vec(), "yaml");
	let records = source.load().unwrap();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].key, CONFIG_KEY);
	assert_eq!(records[0].value, b"port: 8080".to_vec());
	assert_eq!(records[0].format, "yaml");
}

#[test]
fn test_convenience_constructors_fix_format() {
	let json = DataSource::json(b"{}".to_vec());
	assert_eq!(json.load().unwrap()[0].format, "json");

	let yaml = StaticSource::yaml(b"port: 8080".to_vec());
	assert_eq!(yaml.load().unwrap()[0].format, "yaml");
}

#[test]
#[should_panic(expected = "format tag must be a non-empty string")]
fn test_empty_format_panics() {
	let _ = DataSource::new(b"{}".to_vec(), "");
}

#[test]
#[should_panic(expected = "format tag must be a non-empty string")]
fn test_empty_format_panics_static() {
	let _ = StaticSource::new(b"{}".to_vec(), "");
}

#[tokio::test]
async fn test_static_watcher_never_emits() {
	let source = StaticSource::json(b"{}".to_vec());
	let watcher = source.watch().unwrap();

	let blocked = timeout(Duration::from_millis(50), watcher.next()).await;
	assert!(blocked.is_err(), "next() must block while unstopped");

	watcher.stop().await.unwrap();
	assert_eq!(watcher.next().await.unwrap_err(), SourceError::Cancelled);
}

#[tokio::test]
async fn test_static_stop_is_repeatable() {
	let source = StaticSource::yaml(b"a: 1".to_vec());
	let watcher = source.watch().unwrap();
	watcher.stop().await.unwrap();
	watcher.stop().await.unwrap();
}

#[tokio::test]
async fn test_static_watch_allows_multiple_watchers() {
	let source = StaticSource::json(b"{}".to_vec());
	let first = source.watch().unwrap();
	let second = source.watch().unwrap();
	first.stop().await.unwrap();

	// The second watcher is independent and still blocked.
	let blocked = timeout(Duration::from_millis(50), second.next()).await;
	assert!(blocked.is_err());
	second.stop().await.unwrap();
}

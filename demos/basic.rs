/* demos/basic.rs */

use std::sync::Arc;
use std::time::Duration;

use memsource::{DataSource, Source, SourceError, Watcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 1. Build a source from in-memory JSON bytes
	let source = DataSource::json(b"{\"name\": \"demo\", \"port\": 8080}".to_vec());

	// 2. Initial snapshot, as the host loader would take it
	for record in source.load()? {
		println!(
			"loaded '{}' ({}): {}",
			record.key,
			record.format,
			String::from_utf8_lossy(&record.value)
		);
	}

	// 3. Obtain the watcher; the host polls next() from a background task
	let watcher = source.watch()?;
	let poller = {
		let watcher = Arc::clone(&watcher);
		tokio::spawn(async move {
			loop {
				match watcher.next().await {
					Ok(records) => {
						for record in records {
							println!(
								"update '{}' ({}): {}",
								record.key,
								record.format,
								String::from_utf8_lossy(&record.value)
							);
						}
					}
					Err(SourceError::Cancelled) => break,
					Err(e) => {
						eprintln!("watch failed: {e}");
						break;
					}
				}
			}
		})
	};

	// 4. Push replacement blobs from the application side
	source.update(b"{\"name\": \"demo\", \"port\": 8081}".to_vec()).await?;
	source.update(b"{\"name\": \"demo\", \"port\": 8082}".to_vec()).await?;

	tokio::time::sleep(Duration::from_millis(100)).await;

	// 5. Orderly shutdown: the poller observes the cancellation and exits
	watcher.stop().await?;
	poller.await?;
	Ok(())
}

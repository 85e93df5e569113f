//! Long-lived mover service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use antigravity_watcher::{BrainWatcher, ImageEvent};

use crate::config::MoverConfig;
use crate::error::Result;
use crate::importer::ImageImporter;
use crate::notifier::Notifier;

/// Owns the brain watcher and the import pump.
///
/// The service is an explicitly constructed object rather than ambient
/// process state: it holds the watch subscription and releases it exactly
/// once in [`MoverService::shutdown`].
pub struct MoverService {
    /// Brain directory watcher.
    watcher: BrainWatcher,

    /// Event receiver, consumed when the pump starts.
    events: Option<mpsc::Receiver<ImageEvent>>,

    /// The import handler.
    importer: Arc<ImageImporter>,

    /// Pump task handle, present while running.
    pump: Option<JoinHandle<()>>,
}

impl MoverService {
    /// Create a service from a configuration and a notification sink.
    pub fn new(config: MoverConfig, notifier: Arc<dyn Notifier>) -> Self {
        let (watcher, events) = BrainWatcher::new(config.watch.clone());
        let importer = Arc::new(ImageImporter::new(config, notifier));

        Self {
            watcher,
            events: Some(events),
            importer,
            pump: None,
        }
    }

    /// Start the watcher and the import pump.
    ///
    /// Each received event is handled in its own task, so concurrent
    /// events interleave at the settle-delay suspension point. Starting
    /// a running service is a no-op.
    pub fn start(&mut self) -> Result<()> {
        let Some(mut events) = self.events.take() else {
            return Ok(());
        };

        self.watcher.start()?;

        let importer = self.importer.clone();
        self.pump = Some(tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let importer = importer.clone();
                tokio::spawn(async move {
                    importer.import(&event).await;
                });
            }
            debug!("Import pump stopped");
        }));

        Ok(())
    }

    /// Check whether the service is watching.
    pub fn is_running(&self) -> bool {
        self.watcher.is_running()
    }

    /// Get the import handler.
    pub fn importer(&self) -> &ImageImporter {
        &self.importer
    }

    /// Stop watching and wait for the pump to drain.
    ///
    /// Consumes the service: dropping the watcher closes the event
    /// channel, which ends the pump. Imports already past their settle
    /// delay finish in their own tasks.
    pub async fn shutdown(mut self) {
        self.watcher.stop();
        drop(self.watcher);

        if let Some(pump) = self.pump.take() {
            let _ = pump.await;
        }
    }
}

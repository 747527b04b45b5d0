//! One-shot background content fetches.
//!
//! Each [`ContentFetcher::request`] bumps the load generation and spawns a
//! thread that runs the loader once and sends the bundle back. The event
//! loop calls [`ContentFetcher::poll`] without blocking; results from a
//! superseded generation are discarded.

use super::{load_bundle, ContentBundle, ContentLoader};
use crate::model::InstitutionCode;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

struct Fetched {
    generation: u64,
    bundle: ContentBundle,
}

/// Runs content loads off the event loop.
pub struct ContentFetcher {
    loader: Arc<dyn ContentLoader>,
    tx: Sender<Fetched>,
    rx: Receiver<Fetched>,
    generation: u64,
}

impl std::fmt::Debug for ContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFetcher")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl ContentFetcher {
    /// Fetcher using the given loader.
    pub fn new(loader: Arc<dyn ContentLoader>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            loader,
            tx,
            rx,
            generation: 0,
        }
    }

    /// Current load generation. Zero before the first request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start loading an institution's content, superseding any load in
    /// flight. Returns the new generation.
    pub fn request(&mut self, institution: InstitutionCode) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        let fallback_code = institution.clone();

        let spawned = thread::Builder::new()
            .name(format!("content-load-{generation}"))
            .spawn(move || {
                let bundle = load_bundle(loader.as_ref(), &institution);
                // Receiver gone means the board shut down; nothing to do.
                let _ = tx.send(Fetched { generation, bundle });
            });

        if let Err(e) = spawned {
            // Fall back to loading inline so the board still fills.
            error!(error = %e, "failed to spawn content loader thread");
            let bundle = load_bundle(self.loader.as_ref(), &fallback_code);
            let _ = self.tx.send(Fetched { generation, bundle });
        }

        debug!(generation, "content load requested");
        generation
    }

    /// Latest result for the current generation, if one has arrived.
    ///
    /// Never blocks. Stale results are dropped.
    pub fn poll(&mut self) -> Option<ContentBundle> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(fetched) if fetched.generation == self.generation => {
                    latest = Some(fetched.bundle);
                }
                Ok(fetched) => {
                    debug!(
                        stale = fetched.generation,
                        current = self.generation,
                        "discarding superseded content load"
                    );
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

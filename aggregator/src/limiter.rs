//! Per-origin concurrency limiting.
//!
//! Every article fetch holds a slot against the article's origin server so
//! no single origin can monopolize the global fetch budget. Limiters are
//! created lazily on first sight of an origin and live until ingestion ends.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use url::Url;

/// The origin identity of a URL: `scheme://host`, host lowercased, with the
/// port appended only when it is not the scheme's default. Every limiter
/// lookup in the system goes through this one normalization. A URL that does
/// not parse keys on its raw text, which still yields a consistent (and
/// bounded) key set.
pub fn origin_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();
            match parsed.port() {
                Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
                None => format!("{}://{host}", parsed.scheme()),
            }
        }
        Err(_) => url.to_string(),
    }
}

/// A lazily populated registry of one counting gate per origin server.
pub struct OriginGates {
    capacity: usize,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl OriginGates {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Reserve one slot against `origin`, blocking while the origin is at
    /// capacity. The registry lock covers only the map lookup/insert, never
    /// the wait. The slot travels with the returned permit and frees itself
    /// when the permit drops.
    pub async fn acquire(&self, origin: String) -> OriginPermit {
        let gate = {
            let mut gates = self.gates.lock();
            gates
                .entry(origin)
                .or_insert_with(|| Arc::new(Semaphore::new(self.capacity)))
                .clone()
        };
        let permit = gate
            .acquire_owned()
            .await
            .expect("origin gate never closes");
        OriginPermit { _permit: permit }
    }

    /// Number of distinct origins seen so far.
    pub fn origin_count(&self) -> usize {
        self.gates.lock().len()
    }
}

/// One reserved slot against an origin server, released on drop.
pub struct OriginPermit {
    _permit: OwnedSemaphorePermit,
}

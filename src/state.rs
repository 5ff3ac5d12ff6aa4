use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::store::StoreClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the external store holding all durable records
    pub store: StoreClient,
    pub config: Config,
    /// Serializes like read-modify-writes within this process. The store
    /// offers no atomic increment or conditional update, so this is the
    /// tightest bound available; cross-instance races remain.
    pub like_mutex: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = StoreClient::new(&config);

        Self {
            store,
            config,
            like_mutex: Arc::new(Mutex::new(())),
        }
    }
}

use std::sync::Arc;

use crate::report::Reporter;
use crate::storage::StorageConfig;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub reporter: Arc<Reporter>,
}

impl AppState {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            reporter: Arc::new(Reporter::new(storage.clone())),
            storage: Arc::new(storage),
        }
    }
}

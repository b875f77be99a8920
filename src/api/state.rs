//! API server state

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiSection;

/// API server state, shared read-only across requests
#[derive(Clone)]
pub struct AppState {
    settings: Arc<ApiSection>,

    /// When this state was built; reported by the health endpoint
    started_at: Instant,
}

impl AppState {
    pub fn new(settings: ApiSection) -> Self {
        Self {
            settings: Arc::new(settings),
            started_at: Instant::now(),
        }
    }

    /// Whether a sum of `iterations` terms should leave the async workers
    pub fn should_offload(&self, iterations: i64) -> bool {
        iterations > self.settings.offload_threshold
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiSection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offload_threshold_is_exclusive() {
        let state = AppState::new(ApiSection {
            offload_threshold: 100,
        });

        assert!(!state.should_offload(-5));
        assert!(!state.should_offload(100));
        assert!(state.should_offload(101));
    }
}

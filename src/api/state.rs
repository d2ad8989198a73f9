//! Application state for the Daily Wage Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the record store every handler reads and writes. Cloning is cheap;
/// all clones share the same store.
#[derive(Debug, Clone)]
pub struct AppState {
    store: RecordStore,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Returns the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let state = AppState::new(RecordStore::new(Decimal::from(12)));
        let other = state.clone();

        other
            .store()
            .set_pf_percentage(Decimal::from(10))
            .await
            .unwrap();

        assert_eq!(state.store().pf_percentage().await, Decimal::from(10));
    }
}

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

/// Owns the UI state. Lives on the UI thread; every change goes through [`reduce`].
#[derive(Debug, Default)]
pub struct AppStore {
    state: AppState,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn apply(&mut self, ev: DomainEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, ev);
    }
}

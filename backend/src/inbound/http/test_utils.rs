//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::ProjectRepository;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;

/// Handler state over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::new(MemoryStore::new().into_ports())
}

/// In-memory state with the project port replaced, typically by a mock.
pub fn state_with_projects(projects: Arc<dyn ProjectRepository>) -> HttpState {
    HttpState {
        projects,
        ..memory_state()
    }
}

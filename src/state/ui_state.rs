use std::sync::mpsc::{Receiver, TryRecvError};

use catalogo_core::{LoadError, LoadedCatalog};

/// Message sent by the background loader when it finishes
pub type LoadOutcome = Result<LoadedCatalog, LoadError>;

/// UI flow state management
/// This struct contains only UI-specific state (pending background work)
#[derive(Debug, Default)]
pub struct UiState {
    /// Receiving end of the load currently in flight
    pub pending_load: Option<Receiver<LoadOutcome>>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new load; an older one still in flight is abandoned
    pub fn set_pending_load(&mut self, receiver: Receiver<LoadOutcome>) {
        self.pending_load = Some(receiver);
    }

    /// Take the outcome of the pending load if it has arrived
    pub fn take_load_outcome(&mut self) -> Option<LoadOutcome> {
        let receiver = self.pending_load.as_ref()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending_load = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending_load = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_take_load_outcome() {
        let mut ui_state = UiState::new();
        assert!(ui_state.take_load_outcome().is_none());

        let (sender, receiver) = mpsc::channel();
        ui_state.set_pending_load(receiver);
        assert!(ui_state.take_load_outcome().is_none());
        assert!(ui_state.pending_load.is_some());

        sender
            .send(catalogo_core::load_catalog_from_dir("/nao/existe"))
            .unwrap();
        assert!(ui_state.take_load_outcome().is_some());
        assert!(ui_state.pending_load.is_none());
    }

    #[test]
    fn test_abandoned_loader_is_forgotten() {
        let mut ui_state = UiState::new();
        let (sender, receiver) = mpsc::channel::<LoadOutcome>();
        ui_state.set_pending_load(receiver);
        drop(sender);

        assert!(ui_state.take_load_outcome().is_none());
        assert!(ui_state.pending_load.is_none());
    }
}

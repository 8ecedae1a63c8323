use crate::{Error, Result};
use tracing::{debug, warn};
use uuid::Uuid;

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validated,
    Inferred,
    Responded,
    Errored,
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    PayloadAccepted,
    PredictionReturned,
    ResponseShaped,
    Failed,
}

/// Tracks a single answer request from arrival to response. Every state
/// moves forward only; `Errored` absorbs failures from any live state.
#[derive(Debug)]
pub struct RequestLifecycle {
    id: Uuid,
    state: RequestState,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        debug!("Request {} received", id);
        Self {
            id,
            state: RequestState::Received,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (RequestState::Received, RequestEvent::PayloadAccepted) => RequestState::Validated,
            (RequestState::Validated, RequestEvent::PredictionReturned) => RequestState::Inferred,
            (RequestState::Inferred, RequestEvent::ResponseShaped) => RequestState::Responded,
            (state, RequestEvent::Failed) if !Self::is_terminal_state(state) => {
                RequestState::Errored
            }
            (state, event) => {
                warn!(
                    "Invalid transition for request {} from {:?} with event {:?}",
                    self.id, state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", state),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "Request {} state transition: {:?} -> {:?} (event: {:?})",
            self.id, self.state, new_state, event
        );
        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        Self::is_terminal_state(self.state)
    }

    fn is_terminal_state(state: RequestState) -> bool {
        matches!(state, RequestState::Responded | RequestState::Errored)
    }
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

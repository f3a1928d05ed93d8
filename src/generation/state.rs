//! Per-call generation state machine
//!
//! Valid transitions:
//! 1. Building    → Sending      (on: InputValidated)
//! 2. Building    → Done         (on: ValidationFailed)
//! 3. Sending     → Parsing      (on: ResponseReceived)
//! 4. Sending     → FallingBack  (on: TransportFailed)
//! 5. Parsing     → Succeeded    (on: ContentParsed)
//! 6. Parsing     → FallingBack  (on: ParseFailed)
//! 7. Succeeded   → Done         (on: ResultReturned)
//! 8. FallingBack → Done         (on: ResultReturned)
//! 9. Done        → Done         (terminal)

use crate::errors::{CompanionError, Result};
use tracing::{debug, warn};

/// Phase of one generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    /// Validating input and building the payload
    Building,
    /// Waiting on the upstream model
    Sending,
    /// Extracting and validating content
    Parsing,
    /// Upstream content accepted
    Succeeded,
    /// Selecting curated content
    FallingBack,
    /// Result handed to the caller (terminal)
    Done,
}

/// Events that move a call between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    InputValidated,
    ValidationFailed,
    ResponseReceived,
    TransportFailed,
    ContentParsed,
    ParseFailed,
    ResultReturned,
}

impl GenerationPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Done)
    }

    /// Attempt state transition with validation
    pub fn transition(&self, event: PhaseEvent) -> Result<GenerationPhase> {
        use GenerationPhase::*;
        use PhaseEvent::*;

        let next_state = match (self, event) {
            (Building, InputValidated) => Sending,
            (Building, ValidationFailed) => Done,

            (Sending, ResponseReceived) => Parsing,
            (Sending, TransportFailed) => FallingBack,

            (Parsing, ContentParsed) => Succeeded,
            (Parsing, ParseFailed) => FallingBack,

            (Succeeded, ResultReturned) => Done,
            (FallingBack, ResultReturned) => Done,

            (Done, _) => Done,

            (from, event) => {
                return Err(CompanionError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: format!("{:?}", event),
                });
            }
        };

        Ok(next_state)
    }
}

/// Phase tracker for a single call, logging each step
#[derive(Debug)]
pub struct GenerationTrace {
    mode: &'static str,
    phase: GenerationPhase,
}

impl GenerationTrace {
    pub fn start(mode: &'static str) -> Self {
        Self {
            mode,
            phase: GenerationPhase::Building,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn mode(&self) -> &'static str {
        self.mode
    }

    /// Apply `event`; an invalid transition is logged and leaves the phase unchanged
    pub fn advance(&mut self, event: PhaseEvent) {
        match self.phase.transition(event) {
            Ok(next) => {
                debug!(mode = self.mode, from = ?self.phase, to = ?next, "Generation phase change");
                self.phase = next;
            }
            Err(e) => warn!(mode = self.mode, error = %e, "Ignoring invalid generation transition"),
        }
    }
}

use thiserror::Error;

/// Failures the engine can surface. Contest-level failures abort the whole
/// match; roster failures are raised before a match starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("weighted choice attempted with no positive-weight candidate")]
    InvalidWeights,

    #[error("no tactic satisfied its position prerequisite after {attempts} draws")]
    NoEligibleTactic { attempts: u32 },

    #[error("malformed roster: {0}")]
    MalformedRoster(String),
}

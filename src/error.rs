use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleMathError {
    // lower tick must be below the upper tick
    #[error("TLU")]
    Tlu,
    // lower tick below MIN_TICK
    #[error("TLM")]
    Tlm,
    // upper tick above MAX_TICK
    #[error("TUM")]
    Tum,
    #[error("tick {0} is not initialized")]
    TickNotInitialized(i32),
}

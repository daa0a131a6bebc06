use thiserror::Error;

#[derive(Error, Debug)]
pub enum RfError {
    #[error("Unknown emitter type: {0:?}")]
    UnknownEmitterType(String),

    #[error("Invalid calibration: {0}")]
    Calibration(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RfError>;

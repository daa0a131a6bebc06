pub mod assess;
pub mod characteristics;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod output;

pub use characteristics::{
    RfCharacteristics, SHORT_RANGE_EMITTER_TYPES, characteristics_for, is_short_range,
};
pub use config::ReportConfig;
pub use emitter::EmitterType;
pub use error::{Result, RfError};

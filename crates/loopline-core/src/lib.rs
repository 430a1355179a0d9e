pub mod config;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use config::{EditorConfig, OffsetPolicy, SamplingConfig};
pub use error::{LoopError, Result};
pub use tolerance::Tolerance;

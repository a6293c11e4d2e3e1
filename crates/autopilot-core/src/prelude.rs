//! Prelude for common imports used throughout the lead capture crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, trace, warn};

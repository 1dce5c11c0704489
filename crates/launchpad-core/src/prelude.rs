//! Prelude for common imports used throughout all launchpad crates

pub use crate::error::{Error, Result};
pub use tracing::{debug, error, info, instrument, trace, warn};

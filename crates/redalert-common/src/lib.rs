//! Common utilities and types for Red Alert Data

pub mod error;
pub mod logging;
pub mod normalize;
pub mod oref;
pub mod types;

// Re-export commonly used types
pub use error::{RedAlertError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use normalize::{normalize, LabelCorrection, NormalizeOptions};
pub use oref::{fetch_alerts_from_file, format_query_date, parse_alerts, OrefClient, OrefConfig};
pub use types::*;

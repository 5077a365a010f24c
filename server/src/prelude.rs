pub use crate::app::App;
pub use vendora_types::error::{Error, VndResult};
pub use vendora_types::types::{Timestamp, VendorId, now};

pub use tracing::{debug, error, info, warn};

// vim: ts=4

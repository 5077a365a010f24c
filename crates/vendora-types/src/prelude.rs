pub use crate::error::{Error, VndResult};
pub use crate::types::{Timestamp, VendorId, now};

pub use tracing::{debug, error, info, warn};

// vim: ts=4

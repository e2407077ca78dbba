pub mod message;
pub mod snapshot;
pub mod tier;
pub use message::format_garage_message;
pub use snapshot::{ChangeReason, GarageStatus, Snapshot, StatusIndex, detect_change, has_changed};
pub use tier::{Tier, classify};

/// Garages with this many free spaces or fewer (but at least one) are almost full.
pub const ALMOST_FULL_THRESHOLD: u32 = 20;

//! Domain models

pub mod user;
pub mod zone;

pub use user::{CreateUserInput, Role, User, UserSummary};
pub use zone::{CreateZoneInput, UpdateZoneInput, Zone, ZoneOwner, ZoneStatus, ZoneWithOwner};

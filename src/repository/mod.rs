//! Data access layer (Repository pattern)

pub mod user;
pub mod zone;

pub use user::UserRepository;
pub use zone::ZoneRepository;

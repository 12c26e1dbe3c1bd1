//! Business logic layer

pub mod auth;
pub mod user;
pub mod zone;

pub use auth::AuthService;
pub use user::UserService;
pub use zone::ZoneService;

pub mod auth;

pub use auth::AuthenticatedCaller;

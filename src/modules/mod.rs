pub mod alumni;
pub mod auth;
pub mod file;
pub mod job;

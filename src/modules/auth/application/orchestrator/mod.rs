pub mod user_registration;

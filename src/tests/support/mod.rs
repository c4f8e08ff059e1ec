pub mod app_state_builder;
pub mod auth_helper;
pub mod fakes;
pub mod fixtures;
pub mod http;

mod scenarios;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}

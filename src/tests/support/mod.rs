pub mod app_state_builder;
pub mod auth_helper;
pub mod stubs;

pub use app_state_builder::TestAppStateBuilder;
pub use auth_helper::{auth_headers, auth_headers_for_role};

pub mod app_state_builder;
pub mod fixtures;
pub mod sql_log;
pub mod stubs;

pub mod sleep_log;
pub mod users;

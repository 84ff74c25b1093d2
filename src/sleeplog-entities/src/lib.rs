pub mod prelude;

pub mod sleep_log;
pub mod users;

#[macro_use]
extern crate log;

mod db;
pub use db::DatabaseHandler;

mod type_impl;
pub use type_impl::sleep_log::SearchSleepLog;
pub use type_impl::users::{AccountError, User};

pub use super::sleep_log::Entity as SleepLog;
pub use super::users::Entity as Users;

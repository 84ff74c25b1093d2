#[macro_use]
extern crate log;

mod session;
pub use session::{Page, Session, SessionError};

mod dashboard;
pub use dashboard::{Dashboard, RECENT_NOTES};

pub mod input;

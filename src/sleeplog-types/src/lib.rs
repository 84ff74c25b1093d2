pub mod quality;
pub use quality::{InvalidQuality, Quality};

pub mod record;
pub use record::{SleepRecord, normalize_notes};

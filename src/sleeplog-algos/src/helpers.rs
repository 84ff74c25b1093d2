pub mod format_hm;
pub mod time_math;
pub mod weekday;

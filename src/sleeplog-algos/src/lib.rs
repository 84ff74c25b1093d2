pub(crate) mod duration;
pub use duration::{HOURS_PER_DAY, SleepDuration, sleep_duration};

pub(crate) mod entry;
pub use entry::{EntryError, MIN_ENTRY_HOURS, validate_entry};

pub(crate) mod metrics;
pub use metrics::{MetricsSummary, OPTIMAL_SLEEP_HOURS, SleepMetricsAnalyzer, WeekdayDuration};

pub(crate) mod heatmap;
pub use heatmap::SleepHeatmap;

pub mod helpers;

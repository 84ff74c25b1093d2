use chrono::{NaiveTime, Timelike as _};

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Fractional hours, e.g. `7.5` -> `07:30`. NaN renders as `--:--`.
impl FormatHM for f64 {
    fn format_hm(&self) -> String {
        if !self.is_finite() {
            return String::from("--:--");
        }

        let minutes = (self * 60.0).round() as i64;
        let sign = if minutes < 0 { "-" } else { "" };
        let minutes = minutes.abs();
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl FormatHM for NaiveTime {
    fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

use chrono::{NaiveTime, ParseError};

/// Accepts `HH:MM` or `HH:MM:SS`; the result is always whole seconds.
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}

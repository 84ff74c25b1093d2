use std::{collections::BTreeMap, fmt::Display};

use chrono::Weekday;
use serde::Serialize;
use sleeplog_types::{Quality, SleepRecord};

use crate::{
    duration::SleepDuration,
    helpers::{
        format_hm::FormatHM,
        time_math::{mean, round_float, std_dev},
        weekday::{WEEKDAYS, serialize_weekday, weekday_index, weekday_name},
    },
};

/// Duration treated as a full night when computing efficiency.
pub const OPTIMAL_SLEEP_HOURS: f64 = 8.0;

#[derive(Default)]
pub struct SleepMetricsAnalyzer {
    durations: Vec<f64>,
    qualities: Vec<f64>,
    quality_counts: BTreeMap<Quality, usize>,
    sleep_hours: Vec<f64>,
    weekday_totals: [(f64, usize); 7],
}

/// Aggregates over a set of sleep records.
///
/// Scalars are NaN when there is not enough data: averages need one value,
/// standard deviations need two.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub records: usize,
    pub avg_duration: f64,
    pub avg_quality: f64,
    pub duration_std: f64,
    pub quality_std: f64,
    pub sleep_time_std: f64,
    pub efficiency: f64,
    /// Percentage of rated records per quality value. Unlogged values are absent.
    pub quality_dist: BTreeMap<Quality, f64>,
    /// Mean duration per weekday, Monday first, only weekdays with records.
    pub weekly_pattern: Vec<WeekdayDuration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayDuration {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub avg_duration: f64,
    pub records: usize,
}

impl SleepMetricsAnalyzer {
    pub fn new(sleep_records: &[SleepRecord]) -> Self {
        let mut analyzer = SleepMetricsAnalyzer::default();
        analyzer.process_records(sleep_records);
        analyzer
    }

    fn process_records(&mut self, sleep_records: &[SleepRecord]) {
        for record in sleep_records {
            let duration = record.duration_hours();

            self.durations.push(duration);
            self.sleep_hours.push(f64::from(record.sleep_hour()));

            if let Some(quality) = record.quality {
                self.qualities.push(quality.into());
                *self.quality_counts.entry(quality).or_default() += 1;
            }

            let (total, count) = &mut self.weekday_totals[weekday_index(record.weekday())];
            *total += duration;
            *count += 1;
        }
    }

    pub fn calculate_summary(&self) -> MetricsSummary {
        let avg_duration = mean(&self.durations);

        MetricsSummary {
            records: self.durations.len(),
            avg_duration,
            avg_quality: mean(&self.qualities),
            duration_std: std_dev(&self.durations),
            quality_std: std_dev(&self.qualities),
            // whole hours only, minutes are dropped
            sleep_time_std: std_dev(&self.sleep_hours),
            efficiency: avg_duration / OPTIMAL_SLEEP_HOURS * 100.0,
            quality_dist: self.quality_distribution(),
            weekly_pattern: self.weekly_pattern(),
        }
    }

    fn quality_distribution(&self) -> BTreeMap<Quality, f64> {
        let rated = self.qualities.len() as f64;

        self.quality_counts
            .iter()
            .map(|(quality, count)| (*quality, *count as f64 / rated * 100.0))
            .collect()
    }

    fn weekly_pattern(&self) -> Vec<WeekdayDuration> {
        WEEKDAYS
            .iter()
            .zip(self.weekday_totals.iter())
            .filter(|(_, (_, count))| *count > 0)
            .map(|(weekday, (total, count))| WeekdayDuration {
                weekday: *weekday,
                avg_duration: total / *count as f64,
                records: *count,
            })
            .collect()
    }
}

impl MetricsSummary {
    pub fn from_records(sleep_records: &[SleepRecord]) -> Self {
        SleepMetricsAnalyzer::new(sleep_records).calculate_summary()
    }

    pub fn weekday_average(&self, weekday: Weekday) -> Option<f64> {
        self.weekly_pattern
            .iter()
            .find(|w| w.weekday == weekday)
            .map(|w| w.avg_duration)
    }
}

impl Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Records: {}\nAverage duration: {} (std {} h)\nAverage quality: {}/5 (std {})\n",
            self.records,
            self.avg_duration.format_hm(),
            round_float(self.duration_std),
            round_float(self.avg_quality),
            round_float(self.quality_std),
        ))?;
        f.write_fmt(format_args!(
            "Sleep time consistency: {} h std\nEfficiency: {}%\n",
            round_float(self.sleep_time_std),
            round_float(self.efficiency),
        ))?;

        f.write_str("Quality distribution:\n")?;
        for (quality, percentage) in &self.quality_dist {
            f.write_fmt(format_args!("\t{}: {}%\n", quality, round_float(*percentage)))?;
        }

        f.write_str("Weekly pattern:")?;
        for day in &self.weekly_pattern {
            f.write_fmt(format_args!(
                "\n\t{}: {}",
                weekday_name(day.weekday),
                day.avg_duration.format_hm()
            ))?;
        }
        Ok(())
    }
}

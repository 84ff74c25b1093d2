use sleeplog_algos::{MetricsSummary, SleepHeatmap, validate_entry};
use sleeplog_db::{DatabaseHandler, SearchSleepLog, User};
use sleeplog_types::SleepRecord;

/// Number of notes shown by default.
pub const RECENT_NOTES: u64 = 5;

/// Everything a logged in user can do. Obtained through `Session::dashboard`.
pub struct Dashboard<'a> {
    db: &'a DatabaseHandler,
    user: &'a User,
}

impl<'a> Dashboard<'a> {
    pub(crate) fn new(db: &'a DatabaseHandler, user: &'a User) -> Self {
        Self { db, user }
    }

    pub fn user(&self) -> &User {
        self.user
    }

    /// Stores a night after checking its duration, which is returned in hours.
    /// Rejected entries fail with an `EntryError` and are not stored.
    pub async fn log_sleep(&self, record: SleepRecord) -> anyhow::Result<f64> {
        let duration = validate_entry(record.sleep_time, record.wake_time)?;

        self.db.create_sleep_entry(self.user.id, &record).await?;
        info!(
            "`{}` logged {:.1} hours for {}",
            self.user.username, duration, record.date
        );

        Ok(duration)
    }

    pub async fn records(&self, range: SearchSleepLog) -> anyhow::Result<Vec<SleepRecord>> {
        self.db.search_sleep_log(self.user.id, range).await
    }

    /// `None` when there is nothing logged in the range yet.
    pub async fn summary(&self, range: SearchSleepLog) -> anyhow::Result<Option<MetricsSummary>> {
        let records = self.records(range).await?;
        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(MetricsSummary::from_records(&records)))
    }

    pub async fn heatmap(&self, range: SearchSleepLog) -> anyhow::Result<Option<SleepHeatmap>> {
        let records = self.records(range).await?;
        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(SleepHeatmap::from_records(&records)))
    }

    pub async fn recent_notes(
        &self,
        range: SearchSleepLog,
        limit: u64,
    ) -> anyhow::Result<Vec<SleepRecord>> {
        self.db
            .recent_notes(self.user.id, range.with_limit(limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use sleeplog_algos::EntryError;
    use sleeplog_types::Quality;

    use crate::Session;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn night(day: u32, sleep: (u32, u32), wake: (u32, u32), quality: u8) -> SleepRecord {
        SleepRecord::new(
            date(day),
            NaiveTime::from_hms_opt(sleep.0, sleep.1, 0).unwrap(),
            NaiveTime::from_hms_opt(wake.0, wake.1, 0).unwrap(),
        )
        .with_quality(Quality::new(quality).unwrap())
    }

    async fn logged_in() -> (DatabaseHandler, Session) {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        db.create_user("alice", "pw").await.unwrap();

        let mut session = Session::new();
        session.log_in(&db, "alice", "pw").await.unwrap();
        (db, session)
    }

    #[tokio::test]
    async fn no_data_yet() {
        let (db, session) = logged_in().await;
        let dashboard = session.dashboard(&db).unwrap();

        assert!(dashboard.summary(SearchSleepLog::default()).await.unwrap().is_none());
        assert!(dashboard.heatmap(SearchSleepLog::default()).await.unwrap().is_none());
        assert!(
            dashboard
                .recent_notes(SearchSleepLog::default(), RECENT_NOTES)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn log_sleep_returns_duration() {
        let (db, session) = logged_in().await;
        let dashboard = session.dashboard(&db).unwrap();

        let duration = dashboard
            .log_sleep(night(3, (22, 0), (6, 0), 4))
            .await
            .unwrap();
        assert_eq!(duration, 8.0);

        let records = dashboard.records(SearchSleepLog::default()).await.unwrap();
        assert_eq!(records, vec![night(3, (22, 0), (6, 0), 4)]);
    }

    #[tokio::test]
    async fn rejected_entries_are_not_stored() {
        let (db, session) = logged_in().await;
        let dashboard = session.dashboard(&db).unwrap();

        let same = dashboard.log_sleep(night(3, (7, 0), (7, 0), 3)).await;
        assert_eq!(
            same.unwrap_err().downcast_ref::<EntryError>(),
            Some(&EntryError::NotAfterSleep)
        );

        let short = dashboard.log_sleep(night(3, (23, 30), (0, 15), 3)).await;
        assert!(matches!(
            short.unwrap_err().downcast_ref::<EntryError>(),
            Some(EntryError::TooShort(_))
        ));

        assert!(
            dashboard
                .records(SearchSleepLog::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn summary_over_range() {
        let (db, session) = logged_in().await;
        let dashboard = session.dashboard(&db).unwrap();

        // Monday to Wednesday, then a Saturday outside the range
        dashboard.log_sleep(night(3, (0, 0), (6, 0), 2)).await.unwrap();
        dashboard.log_sleep(night(4, (23, 0), (6, 0), 3)).await.unwrap();
        dashboard.log_sleep(night(5, (22, 0), (6, 0), 4)).await.unwrap();
        dashboard.log_sleep(night(8, (21, 0), (9, 0), 5)).await.unwrap();

        let range = SearchSleepLog::between(Some(date(3)), Some(date(5)));
        let summary = dashboard.summary(range).await.unwrap().unwrap();

        assert_eq!(summary.records, 3);
        assert!((summary.avg_duration - 7.0).abs() < 1e-9);
        assert!((summary.duration_std - 1.0).abs() < 1e-9);
        assert!((summary.avg_quality - 3.0).abs() < 1e-9);
        assert_eq!(summary.weekday_average(Weekday::Sat), None);
        assert_eq!(summary.weekly_pattern.len(), 3);

        let all = dashboard
            .summary(SearchSleepLog::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(all.records, 4);
        assert_eq!(all.weekday_average(Weekday::Sat), Some(12.0));
    }

    #[tokio::test]
    async fn heatmap_and_notes() {
        let (db, session) = logged_in().await;
        let dashboard = session.dashboard(&db).unwrap();

        for day in 1..=7 {
            let record = night(day, (23, 0), (7, 0), 3).with_notes(format!("night {}", day));
            dashboard.log_sleep(record).await.unwrap();
        }

        let heatmap = dashboard
            .heatmap(SearchSleepLog::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(heatmap.get(Weekday::Mon, 23), Some(8.0));
        assert_eq!(heatmap.get(Weekday::Mon, 22), None);

        let notes = dashboard
            .recent_notes(SearchSleepLog::default(), RECENT_NOTES)
            .await
            .unwrap();
        assert_eq!(notes.len(), 5);
        assert_eq!(notes[0].notes.as_deref(), Some("night 7"));
        assert_eq!(notes[4].notes.as_deref(), Some("night 3"));
    }

    #[tokio::test]
    async fn users_do_not_see_each_other() {
        let (db, session) = logged_in().await;
        session
            .dashboard(&db)
            .unwrap()
            .log_sleep(night(3, (22, 0), (6, 0), 4))
            .await
            .unwrap();

        db.create_user("bob", "pw").await.unwrap();
        let mut bob = Session::new();
        bob.log_in(&db, "bob", "pw").await.unwrap();

        let summary = bob
            .dashboard(&db)
            .unwrap()
            .summary(SearchSleepLog::default())
            .await
            .unwrap();
        assert!(summary.is_none());
    }
}

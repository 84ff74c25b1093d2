use chrono::{Local, NaiveDate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use sleeplog_entities::sleep_log;
use sleeplog_types::{Quality, SleepRecord, normalize_notes};
use uuid::Uuid;

use crate::DatabaseHandler;

/// Inclusive date range and row limit for sleep log queries.
#[derive(Default, Debug, Clone, Copy)]
pub struct SearchSleepLog {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl SearchSleepLog {
    pub fn between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn conditions(self, user_id: i32) -> Condition {
        Condition::all()
            .add(sleep_log::Column::UserId.eq(user_id))
            .add_option(self.from.map(|from| sleep_log::Column::Date.gte(from)))
            .add_option(self.to.map(|to| sleep_log::Column::Date.lte(to)))
    }
}

impl DatabaseHandler {
    pub async fn create_sleep_entry(&self, user_id: i32, record: &SleepRecord) -> anyhow::Result<()> {
        let model = sleep_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            date: Set(record.date),
            sleep_time: Set(record.sleep_time),
            wake_time: Set(record.wake_time),
            sleep_quality: Set(record.quality.map(i16::from)),
            notes: Set(normalize_notes(record.notes.clone())),
            created_at: Set(Local::now().naive_local()),
        };

        model.insert(&self.db).await?;
        Ok(())
    }

    /// Most recent entries first.
    pub async fn search_sleep_log(
        &self,
        user_id: i32,
        options: SearchSleepLog,
    ) -> anyhow::Result<Vec<SleepRecord>> {
        let records = sleep_log::Entity::find()
            .filter(options.conditions(user_id))
            .order_by_desc(sleep_log::Column::Date)
            .order_by_desc(sleep_log::Column::CreatedAt)
            .limit(options.limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_sleep_record)
            .collect();

        Ok(records)
    }

    /// Entries that carry notes, most recent first.
    pub async fn recent_notes(
        &self,
        user_id: i32,
        options: SearchSleepLog,
    ) -> anyhow::Result<Vec<SleepRecord>> {
        let records = sleep_log::Entity::find()
            .filter(options.conditions(user_id))
            .filter(sleep_log::Column::Notes.is_not_null())
            .filter(sleep_log::Column::Notes.ne(""))
            .order_by_desc(sleep_log::Column::Date)
            .order_by_desc(sleep_log::Column::CreatedAt)
            .limit(options.limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_sleep_record)
            .collect();

        Ok(records)
    }
}

fn map_sleep_record(model: sleep_log::Model) -> SleepRecord {
    let quality = model.sleep_quality.and_then(|value| {
        Quality::try_from(value)
            .inspect_err(|e| warn!("sleep log {}: {}", model.id, e))
            .ok()
    });

    SleepRecord {
        date: model.date,
        sleep_time: model.sleep_time,
        wake_time: model.wake_time,
        quality,
        notes: normalize_notes(model.notes),
    }
}

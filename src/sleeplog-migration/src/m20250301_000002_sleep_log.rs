use sea_orm_migration::prelude::*;

use crate::m20250301_000001_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SleepLog::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SleepLog::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SleepLog::UserId).integer().not_null())
                    .col(ColumnDef::new(SleepLog::Date).date().not_null())
                    .col(ColumnDef::new(SleepLog::SleepTime).time().not_null())
                    .col(ColumnDef::new(SleepLog::WakeTime).time().not_null())
                    .col(ColumnDef::new(SleepLog::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sleep_log-user_id")
                            .from(SleepLog::Table, SleepLog::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-sleep_log-user_id-date")
                    .table(SleepLog::Table)
                    .col(SleepLog::UserId)
                    .col(SleepLog::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SleepLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SleepLog {
    Table,
    Id,
    UserId,
    Date,
    SleepTime,
    WakeTime,
    CreatedAt,
}

use sea_orm_migration::prelude::*;

use crate::m20250301_000002_sleep_log::SleepLog;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sqlite only accepts one column per ALTER TABLE
        manager
            .alter_table(
                Table::alter()
                    .table(SleepLog::Table)
                    .add_column(
                        ColumnDef::new(Quality::SleepQuality)
                            .small_integer()
                            .null()
                            .check(Expr::col(Quality::SleepQuality).between(1, 5)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(SleepLog::Table)
                    .add_column(ColumnDef::new(Quality::Notes).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(SleepLog::Table)
                    .drop_column(Quality::Notes)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(SleepLog::Table)
                    .drop_column(Quality::SleepQuality)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Quality {
    SleepQuality,
    Notes,
}

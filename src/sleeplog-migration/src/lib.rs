pub use sea_orm_migration::prelude::*;

pub mod m20250301_000001_users;
pub mod m20250301_000002_sleep_log;
mod m20250315_000000_alter_sleep_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_users::Migration),
            Box::new(m20250301_000002_sleep_log::Migration),
            Box::new(m20250315_000000_alter_sleep_log::Migration),
        ]
    }
}

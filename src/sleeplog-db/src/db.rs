use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sleeplog_migration::{Migrator, MigratorTrait};

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Connects and brings the schema up to date.
    pub async fn new<C>(path: C) -> anyhow::Result<Self>
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path).await?;
        Migrator::up(&db, None).await?;

        debug!("database ready, migrations applied");
        Ok(Self { db })
    }
}

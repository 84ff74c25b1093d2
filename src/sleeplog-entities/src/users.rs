use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sleep_log::Entity")]
    SleepLog,
}

impl Related<super::sleep_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SleepLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

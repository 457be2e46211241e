use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub full_name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub email: String,

    // manager | worker (CHECK constraint)
    pub role: String,

    // argon2id PHC string
    #[sea_orm(column_type = "Text")]
    #[serde(skip_serializing)]
    pub password: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity"
    )]
    Projects,

    #[sea_orm(has_many = "crate::modules::task::adapter::outgoing::sea_orm_entity::tasks::Entity")]
    AssignedTasks,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<crate::modules::task::adapter::outgoing::sea_orm_entity::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

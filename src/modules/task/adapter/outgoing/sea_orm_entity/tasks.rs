use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub project_id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(nullable)]
    pub assigned_to: Option<i32>,

    // pending | in_progress | completed (CHECK constraint)
    pub status: String,

    // low | medium | high (CHECK constraint)
    pub priority: String,

    #[sea_orm(nullable)]
    pub due_date: Option<Date>,

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
        belongs_to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Projects,

    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AssignedTo",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Assignee,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<crate::modules::user::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

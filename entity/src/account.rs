//! Club account: member, team manager or administrator.

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Position, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash of the account password.
    pub password: String,
    pub role: Role,
    pub position: Option<Position>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::due::Entity")]
    Due,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::due::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Due.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

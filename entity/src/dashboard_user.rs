use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dashboard_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dashboard_user_role::Entity")]
    DashboardUserRole,
}

impl Related<super::dashboard_user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DashboardUserRole.def()
    }
}

impl Related<super::dashboard_role::Entity> for Entity {
    fn to() -> RelationDef {
        super::dashboard_user_role::Relation::DashboardRole.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dashboard_user_role::Relation::DashboardUser.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dashboard_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub created_at: DateTime,
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

impl Related<super::dashboard_user::Entity> for Entity {
    fn to() -> RelationDef {
        super::dashboard_user_role::Relation::DashboardUser.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dashboard_user_role::Relation::DashboardRole.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

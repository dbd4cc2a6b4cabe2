use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dashboard_user_role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dashboard_user::Entity",
        from = "Column::UserId",
        to = "super::dashboard_user::Column::Id",
        on_delete = "Cascade"
    )]
    DashboardUser,
    #[sea_orm(
        belongs_to = "super::dashboard_role::Entity",
        from = "Column::RoleId",
        to = "super::dashboard_role::Column::Id",
        on_delete = "Cascade"
    )]
    DashboardRole,
}

impl Related<super::dashboard_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DashboardUser.def()
    }
}

impl Related<super::dashboard_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DashboardRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

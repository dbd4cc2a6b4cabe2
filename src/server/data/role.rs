use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::RoleModel;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, slug: &str, name: &str) -> Result<RoleModel, DbErr> {
        let role = entity::dashboard_role::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        role.insert(self.db).await
    }

    /// Gets every role ordered by ID
    pub async fn get_all(&self) -> Result<Vec<RoleModel>, DbErr> {
        entity::prelude::DashboardRole::find()
            .order_by_asc(entity::dashboard_role::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the roles matching any of the provided slugs, unknown slugs are skipped
    pub async fn get_by_slugs(&self, slugs: &[String]) -> Result<Vec<RoleModel>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DashboardRole::find()
            .filter(entity::dashboard_role::Column::Slug.is_in(slugs.iter().cloned()))
            .order_by_asc(entity::dashboard_role::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::DashboardRole::find()
            .filter(entity::dashboard_role::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}

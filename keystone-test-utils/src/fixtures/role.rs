use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, model::RoleModel, TestContext};

impl TestContext {
    pub fn role(&self) -> RoleFixtures<'_> {
        RoleFixtures { setup: self }
    }
}

pub struct RoleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RoleFixtures<'a> {
    pub async fn insert_role(&self, slug: &str, name: &str) -> Result<RoleModel, TestError> {
        Ok(
            entity::prelude::DashboardRole::insert(entity::dashboard_role::ActiveModel {
                slug: ActiveValue::Set(slug.to_string()),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Get a role inserted earlier, Error if it does not exist
    pub async fn find_by_slug(&self, slug: &str) -> Result<RoleModel, TestError> {
        entity::prelude::DashboardRole::find()
            .filter(entity::dashboard_role::Column::Slug.eq(slug))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| TestError::FixtureNotFound(format!("role {}", slug)))
    }
}

use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::{
    model::user::UserForm,
    server::{
        config::Config,
        data::{role::RoleRepository, user::UserRepository},
        error::Error,
        service::user::UserService,
    },
};

pub static ADMIN_ROLE_SLUG: &str = "administrator";
pub static ADMIN_ROLE_NAME: &str = "Administrator";

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(config: &Config) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Creates the first administrator so the dashboard can be signed in to
///
/// Only runs when admin credentials are configured and no users exist yet. The administrator
/// role is created if it is missing.
///
/// # Returns
/// - `Ok(true)` - The administrator was created
/// - `Ok(false)` - Skipped, no credentials configured or users already exist
/// - `Err(Error::ValidationError)` - The configured credentials are not a valid user
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<bool, Error> {
    let Some(admin) = &config.admin else {
        return Ok(false);
    };

    if UserRepository::new(db).count().await? > 0 {
        tracing::debug!("Users exist, skipping administrator bootstrap");
        return Ok(false);
    }

    let role_repository = RoleRepository::new(db);
    if role_repository.find_by_slug(ADMIN_ROLE_SLUG).await?.is_none() {
        role_repository
            .create(ADMIN_ROLE_SLUG, ADMIN_ROLE_NAME)
            .await?;
    }

    let form = UserForm {
        email: admin.email.clone(),
        password: admin.password.clone(),
        password_confirmation: admin.password.clone(),
        roles: vec![ADMIN_ROLE_SLUG.to_string()],
        ..Default::default()
    };

    let user = UserService::new(db).create(&form).await?;

    tracing::info!(user_id = %user.id, email = %user.email, "Created initial administrator");

    Ok(true)
}

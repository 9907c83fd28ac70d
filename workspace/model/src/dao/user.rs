use async_trait::async_trait;
use common::UserDto;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::Dao;
use crate::entities::{role, user, user_role};
use crate::error::{DaoError, require};
use crate::mapping::user_to_dto;
use crate::password::{hash_password, verify_password, verify_unknown_user};

/// Role granted to users created without an explicit role list.
pub const DEFAULT_ROLE: &str = "user";

/// Accounts, credentials and role grants.
#[derive(Clone, Debug)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl UserDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account holding the default role.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<UserDto, DaoError> {
        self.create_user_with_roles(username, password, &[DEFAULT_ROLE]).await
    }

    /// Registers a new account with the given roles, creating missing roles on the way.
    #[instrument(skip(self, password))]
    pub async fn create_user_with_roles(
        &self,
        username: &str,
        password: &str,
        roles: &[&str],
    ) -> Result<UserDto, DaoError> {
        require(!username.trim().is_empty(), "Username must be set")?;
        require(!password.is_empty(), "Password must be set")?;
        let hash = hash_password(password)?;

        let txn = self.db.begin().await?;
        let created = insert_user(&txn, username, hash, roles).await?;
        txn.commit().await?;

        info!("User '{}' created with roles {:?}", username, created.roles);
        Ok(created)
    }

    /// Checks a username/password pair. Unknown users and wrong passwords fail
    /// the same way.
    #[instrument(skip(self, password))]
    pub async fn verify_user(&self, username: &str, password: &str) -> Result<UserDto, DaoError> {
        let Some(model) = user::Entity::find_by_id(username).one(&self.db).await? else {
            debug!("Login attempt for unknown user");
            verify_unknown_user(password);
            return Err(DaoError::AuthenticationFailure);
        };

        if !verify_password(password, &model.password) {
            debug!("Password mismatch for user '{}'", username);
            return Err(DaoError::AuthenticationFailure);
        }

        let roles = role_names(&self.db, &model).await?;
        Ok(user_to_dto(model, roles))
    }

    /// Grants `role_name` to an existing user. Granting a role twice is a no-op.
    #[instrument(skip(self))]
    pub async fn add_role(&self, username: &str, role_name: &str) -> Result<UserDto, DaoError> {
        require(!role_name.trim().is_empty(), "Role name must be set")?;

        let txn = self.db.begin().await?;
        if user::Entity::find_by_id(username).count(&txn).await? == 0 {
            return Err(DaoError::not_found("User", username));
        }
        ensure_role(&txn, role_name).await?;
        link_role(&txn, username, role_name).await?;

        let updated = load_user(&txn, username)
            .await?
            .ok_or_else(|| DaoError::not_found("User", username))?;
        txn.commit().await?;

        info!("Role '{}' granted to user '{}'", role_name, username);
        Ok(updated)
    }
}

async fn role_names<C: ConnectionTrait>(conn: &C, model: &user::Model) -> Result<Vec<String>, DbErr> {
    let roles = model.find_related(role::Entity).all(conn).await?;
    Ok(roles.into_iter().map(|role| role.role_name).collect())
}

async fn load_user<C: ConnectionTrait>(conn: &C, username: &str) -> Result<Option<UserDto>, DbErr> {
    let Some(model) = user::Entity::find_by_id(username).one(conn).await? else {
        return Ok(None);
    };
    let roles = role_names(conn, &model).await?;
    Ok(Some(user_to_dto(model, roles)))
}

async fn ensure_role<C: ConnectionTrait>(conn: &C, role_name: &str) -> Result<(), DbErr> {
    if role::Entity::find_by_id(role_name).count(conn).await? == 0 {
        role::ActiveModel {
            role_name: Set(role_name.to_string()),
        }
        .insert(conn)
        .await?;
        debug!("Role '{}' created", role_name);
    }
    Ok(())
}

async fn link_role<C: ConnectionTrait>(conn: &C, username: &str, role_name: &str) -> Result<(), DbErr> {
    let key = (username.to_string(), role_name.to_string());
    if user_role::Entity::find_by_id(key).count(conn).await? == 0 {
        user_role::ActiveModel {
            username: Set(username.to_string()),
            role_name: Set(role_name.to_string()),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}

/// Inserts an account holding an already computed password hash and grants
/// `roles`, creating missing roles. Runs over `conn`, usually an open transaction.
pub async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    password_hash: String,
    roles: &[&str],
) -> Result<UserDto, DaoError> {
    require(!username.trim().is_empty(), "Username must be set")?;
    if user::Entity::find_by_id(username).count(conn).await? > 0 {
        warn!("User '{}' already exists", username);
        return Err(DaoError::constraint(format!("User '{}' already exists", username)));
    }

    user::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password_hash),
    }
    .insert(conn)
    .await?;

    for role_name in roles {
        ensure_role(conn, role_name).await?;
        link_role(conn, username, role_name).await?;
    }

    load_user(conn, username)
        .await?
        .ok_or_else(|| DaoError::not_found("User", username))
}

#[async_trait]
impl Dao<UserDto, String> for UserDao {
    /// Requires a plaintext password. An empty role list means the default role.
    async fn create(&self, data: UserDto) -> Result<UserDto, DaoError> {
        let Some(password) = data.password.as_deref() else {
            return Err(DaoError::constraint("Password must be set"));
        };
        let roles: Vec<&str> = if data.roles.is_empty() {
            vec![DEFAULT_ROLE]
        } else {
            data.roles.iter().map(String::as_str).collect()
        };
        self.create_user_with_roles(&data.username, password, &roles).await
    }

    #[instrument(skip(self))]
    async fn read(&self, key: String) -> Result<Option<UserDto>, DaoError> {
        Ok(load_user(&self.db, &key).await?)
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<UserDto>, DaoError> {
        let users = user::Entity::find()
            .order_by_asc(user::Column::Username)
            .find_with_related(role::Entity)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} users", users.len());
        Ok(users
            .into_iter()
            .map(|(user, roles)| user_to_dto(user, roles.into_iter().map(|r| r.role_name).collect()))
            .collect())
    }

    /// Rehashes the password when one is given and replaces the role set when
    /// the incoming list is not empty. The username is the identity and is kept.
    #[instrument(skip(self, data))]
    async fn update(&self, key: String, data: UserDto) -> Result<UserDto, DaoError> {
        let hash = match data.password.as_deref() {
            Some(password) => {
                require(!password.is_empty(), "Password must be set")?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        let txn = self.db.begin().await?;
        let Some(existing) = user::Entity::find_by_id(key.as_str()).one(&txn).await? else {
            warn!("User '{}' not found for update", key);
            return Err(DaoError::not_found("User", &key));
        };

        if let Some(hash) = hash {
            let mut active: user::ActiveModel = existing.into();
            active.password = Set(hash);
            active.update(&txn).await?;
            debug!("Password of user '{}' replaced", key);
        }

        if !data.roles.is_empty() {
            user_role::Entity::delete_many()
                .filter(user_role::Column::Username.eq(key.as_str()))
                .exec(&txn)
                .await?;
            for role_name in &data.roles {
                ensure_role(&txn, role_name).await?;
                link_role(&txn, &key, role_name).await?;
            }
        }

        let updated = load_user(&txn, &key)
            .await?
            .ok_or_else(|| DaoError::not_found("User", &key))?;
        txn.commit().await?;

        info!("User '{}' updated", key);
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: String) -> Result<(), DaoError> {
        let txn = self.db.begin().await?;
        user_role::Entity::delete_many()
            .filter(user_role::Column::Username.eq(key.as_str()))
            .exec(&txn)
            .await?;
        let result = user::Entity::delete_by_id(key.as_str()).exec(&txn).await?;
        if result.rows_affected == 0 {
            warn!("User '{}' not found for deletion", key);
            return Err(DaoError::not_found("User", &key));
        }
        txn.commit().await?;

        info!("User '{}' deleted", key);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn validate_key(&self, key: String) -> Result<bool, DaoError> {
        Ok(user::Entity::find_by_id(key).count(&self.db).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::testing::setup_db;

    #[tokio::test]
    async fn test_create_user_stores_hash_and_default_role() {
        let db = setup_db().await;
        let dao = UserDao::new(db.clone());

        let created = dao.create_user("user", "user123").await.unwrap();
        assert_eq!(created.username, "user");
        assert_eq!(created.password, None);
        assert_eq!(created.roles, vec!["user".to_string()]);

        let stored = user::Entity::find_by_id("user").one(&db).await.unwrap().unwrap();
        assert_ne!(stored.password, "user123");
        assert!(stored.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_verify_user() {
        let dao = UserDao::new(setup_db().await);
        dao.create_user_with_roles("admin", "admin123", &["admin"]).await.unwrap();

        let verified = dao.verify_user("admin", "admin123").await.unwrap();
        assert!(verified.has_role("admin"));

        assert!(matches!(dao.verify_user("admin", "nope").await, Err(DaoError::AuthenticationFailure)));
        assert!(matches!(dao.verify_user("ghost", "admin123").await, Err(DaoError::AuthenticationFailure)));
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let dao = UserDao::new(setup_db().await);
        dao.create_user("user", "user123").await.unwrap();

        let result = dao.create_user("user", "other").await;
        assert!(matches!(result, Err(DaoError::ConstraintViolation(_))));
        assert!(dao.verify_user("user", "user123").await.is_ok());
    }

    #[tokio::test]
    async fn test_add_role_is_idempotent() {
        let dao = UserDao::new(setup_db().await);
        dao.create_user("user", "user123").await.unwrap();

        dao.add_role("user", "admin").await.unwrap();
        let twice = dao.add_role("user", "admin").await.unwrap();
        assert_eq!(twice.roles, vec!["admin".to_string(), "user".to_string()]);

        assert!(matches!(dao.add_role("ghost", "admin").await, Err(DaoError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_through_trait_requires_password() {
        let dao = UserDao::new(setup_db().await);
        let without_password = UserDto {
            username: "user".to_string(),
            password: None,
            roles: Vec::new(),
        };
        assert!(matches!(dao.create(without_password).await, Err(DaoError::ConstraintViolation(_))));

        let created = dao.create(UserDto::with_password("user", "user123")).await.unwrap();
        assert!(created.has_role(DEFAULT_ROLE));
    }

    #[tokio::test]
    async fn test_update_replaces_password_and_roles() {
        let dao = UserDao::new(setup_db().await);
        dao.create_user("user", "user123").await.unwrap();

        let mut changes = UserDto::with_password("ignored", "fresh-secret");
        changes.roles = vec!["admin".to_string()];
        let updated = dao.update("user".to_string(), changes).await.unwrap();

        assert_eq!(updated.username, "user");
        assert_eq!(updated.roles, vec!["admin".to_string()]);
        assert!(dao.verify_user("user", "fresh-secret").await.is_ok());
        assert!(dao.verify_user("user", "user123").await.is_err());
    }

    #[tokio::test]
    async fn test_read_all_and_delete() {
        let dao = UserDao::new(setup_db().await);
        dao.create_user("user", "user123").await.unwrap();
        dao.create_user_with_roles("admin", "admin123", &["admin"]).await.unwrap();

        let names: Vec<String> = dao.read_all().await.unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["admin".to_string(), "user".to_string()]);

        dao.delete("user".to_string()).await.unwrap();
        assert_eq!(dao.read("user".to_string()).await.unwrap(), None);
        assert!(!dao.validate_key("user".to_string()).await.unwrap());
        assert!(matches!(dao.delete("user".to_string()).await, Err(DaoError::NotFound { .. })));
    }
}

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::auth::domain::{AuthUser, Role, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_stored(u: models::app_user::Model) -> StoredUser {
    StoredUser {
        user: AuthUser { id: u.id, username: u.username, role: Role::from_db(&u.role) },
        password_hash: u.password_hash,
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::app_user::Entity::find()
            .filter(models::app_user::Column::Username.eq(username.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(res.map(to_stored))
    }

    async fn create_user(&self, username: &str, password_hash: &str, role: Role) -> Result<AuthUser, AuthError> {
        let created = models::app_user::create(&self.db, username, password_hash, role.as_str()).await?;
        Ok(to_stored(created).user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn create_then_find_by_username() -> anyhow::Result<()> {
        let repo = SeaOrmAuthRepository { db: get_db().await? };
        let created = repo.create_user("boss", "$argon2id$fake", Role::Admin).await?;
        assert_eq!(created.role, Role::Admin);

        let found = repo.find_by_username("boss").await?.expect("user stored");
        assert_eq!(found.user, created);
        assert_eq!(found.password_hash, "$argon2id$fake");
        assert!(repo.find_by_username("nobody").await?.is_none());
        Ok(())
    }
}

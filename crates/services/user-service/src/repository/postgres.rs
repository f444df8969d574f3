//! PostgreSQL user store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::error::map_db_err;
use domain::{DomainResult, NewUser, User, UserRepository};

/// User store backed by the `users` table.
///
/// Email uniqueness is enforced by the table's unique key, so a create that
/// loses a race surfaces as a conflict rather than a second row.
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(User::from))
    }

    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        new_user.ensure_complete()?;

        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(new_user.email),
            name: Set(new_user.name),
            password_hash: Set(new_user.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(user_id = model.id, "User row inserted");
        Ok(User::from(model))
    }

    async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        let users = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn delete_user(&self, email: &str) -> DomainResult<bool> {
        let result = UserEntity::delete_many()
            .filter(user::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn close(&self) -> DomainResult<()> {
        self.db.close_by_ref().await.map_err(map_db_err)?;
        tracing::info!("Database pool closed");
        Ok(())
    }
}

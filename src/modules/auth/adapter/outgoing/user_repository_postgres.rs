use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, Role, User};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::shared::persistence::classify_db_err;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            role,
            created_at: model.created_at.into(),
        })
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            created_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::from(classify_db_err(&e)))?;

        Self::to_domain(inserted)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let query = if identifier.contains('@') {
            UserEntity::find().filter(
                Expr::expr(Func::lower(Expr::col(UserColumn::Email)))
                    .eq(identifier.to_lowercase()),
            )
        } else {
            UserEntity::find().filter(UserColumn::Username.eq(identifier))
        };

        let found = query
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::from(classify_db_err(&e)))?;

        found.map(Self::to_domain).transpose()
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let found = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::from(classify_db_err(&e)))?;

        found.map(Self::to_domain).transpose()
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, Role, User};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::shared::persistence::{classify_mongo_err, mongo};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    username: String,
    email: String,
    password_hash: String,
    role: Role,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl UserDocument {
    fn into_domain(self) -> Result<User, UserRepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| UserRepositoryError::DatabaseError(format!("bad user _id: {e}")))?;

        Ok(User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at: self.created_at,
        })
    }
}

#[derive(Clone, Debug)]
pub struct UserRepositoryMongo {
    users: Collection<UserDocument>,
}

impl UserRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(mongo::USERS),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let document = UserDocument {
            id: Uuid::new_v4().to_string(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };

        self.users
            .insert_one(&document, None)
            .await
            .map_err(|e| UserRepositoryError::from(classify_mongo_err(&e)))?;

        document.into_domain()
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        // Emails are stored lowercased on the way in
        let filter = if identifier.contains('@') {
            doc! { "email": identifier.to_lowercase() }
        } else {
            doc! { "username": identifier }
        };

        self.users
            .find_one(filter, None)
            .await
            .map_err(|e| UserRepositoryError::from(classify_mongo_err(&e)))?
            .map(UserDocument::into_domain)
            .transpose()
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        self.users
            .find_one(doc! { "_id": user_id.to_string() }, None)
            .await
            .map_err(|e| UserRepositoryError::from(classify_mongo_err(&e)))?
            .map(UserDocument::into_domain)
            .transpose()
    }
}

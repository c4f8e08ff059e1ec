use async_trait::async_trait;
use mongodb::bson::doc;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::sync::Arc;

use super::StorageBackend;

/// Readiness check against the active backend.
#[async_trait]
pub trait StorageProbe: Send + Sync {
    fn backend(&self) -> StorageBackend;
    async fn ping(&self) -> Result<(), String>;
}

#[derive(Clone)]
pub struct PostgresProbe {
    db: Arc<DatabaseConnection>,
}

impl PostgresProbe {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorageProbe for PostgresProbe {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Postgres
    }

    async fn ping(&self) -> Result<(), String> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[derive(Clone)]
pub struct MongoProbe {
    db: mongodb::Database,
}

impl MongoProbe {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorageProbe for MongoProbe {
    fn backend(&self) -> StorageBackend {
        StorageBackend::MongoDb
    }

    async fn ping(&self) -> Result<(), String> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::file::application::domain::{NewStoredFile, StoredFile};
use crate::modules::file::application::ports::outgoing::{FileRepository, FileRepositoryError};
use crate::shared::persistence::{classify_mongo_err, mongo};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileDocument {
    #[serde(rename = "_id")]
    id: String,
    user_id: String,
    file_name: String,
    original_name: String,
    file_path: String,
    file_size: i64,
    file_type: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    uploaded_at: DateTime<Utc>,
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, FileRepositoryError> {
    Uuid::parse_str(raw).map_err(|e| FileRepositoryError::DatabaseError(format!("bad {what}: {e}")))
}

impl FileDocument {
    fn into_domain(self) -> Result<StoredFile, FileRepositoryError> {
        Ok(StoredFile {
            id: parse_id(&self.id, "file _id")?,
            user_id: parse_id(&self.user_id, "file user_id")?,
            file_name: self.file_name,
            original_name: self.original_name,
            file_path: self.file_path,
            file_size: self.file_size.max(0) as u64,
            file_type: self.file_type,
            uploaded_at: self.uploaded_at,
        })
    }
}

fn map_mongo_err(err: mongodb::error::Error) -> FileRepositoryError {
    FileRepositoryError::from(classify_mongo_err(&err))
}

fn owner_filter(owner: Option<Uuid>) -> Document {
    match owner {
        Some(user_id) => doc! { "user_id": user_id.to_string() },
        None => doc! {},
    }
}

#[derive(Clone, Debug)]
pub struct FileRepositoryMongo {
    files: Collection<FileDocument>,
    users: Collection<Document>,
}

impl FileRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            files: db.collection(mongo::FILES),
            users: db.collection(mongo::USERS),
        }
    }
}

#[async_trait]
impl FileRepository for FileRepositoryMongo {
    async fn insert(&self, file: NewStoredFile) -> Result<StoredFile, FileRepositoryError> {
        // No foreign keys here, so the owner is checked by hand
        let owners = self
            .users
            .count_documents(doc! { "_id": file.user_id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?;
        if owners == 0 {
            return Err(FileRepositoryError::UnknownOwner);
        }

        let document = FileDocument {
            id: Uuid::new_v4().to_string(),
            user_id: file.user_id.to_string(),
            file_name: file.file_name,
            original_name: file.original_name,
            file_path: file.file_path,
            file_size: file.file_size as i64,
            file_type: file.file_type,
            uploaded_at: Utc::now(),
        };

        self.files
            .insert_one(&document, None)
            .await
            .map_err(map_mongo_err)?;

        document.into_domain()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredFile>, FileRepositoryError> {
        self.files
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?
            .map(FileDocument::into_domain)
            .transpose()
    }

    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<StoredFile>, FileRepositoryError> {
        let options = FindOptions::builder()
            .sort(doc! { "uploaded_at": -1, "_id": 1 })
            .build();

        let documents: Vec<FileDocument> = self
            .files
            .find(owner_filter(owner), options)
            .await
            .map_err(map_mongo_err)?
            .try_collect()
            .await
            .map_err(map_mongo_err)?;

        documents.into_iter().map(FileDocument::into_domain).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), FileRepositoryError> {
        let result = self
            .files
            .delete_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?;

        if result.deleted_count == 0 {
            return Err(FileRepositoryError::NotFound);
        }
        Ok(())
    }
}

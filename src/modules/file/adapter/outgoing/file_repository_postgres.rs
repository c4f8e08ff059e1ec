use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::file::application::domain::{NewStoredFile, StoredFile};
use crate::modules::file::application::ports::outgoing::{FileRepository, FileRepositoryError};
use crate::shared::persistence::classify_db_err;

use super::sea_orm_entity::files::{ActiveModel, Column, Entity, Model};

#[derive(Clone, Debug)]
pub struct FileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: sea_orm::DbErr) -> FileRepositoryError {
    FileRepositoryError::from(classify_db_err(&err))
}

fn to_domain(model: Model) -> StoredFile {
    StoredFile {
        id: model.id,
        user_id: model.user_id,
        file_name: model.file_name,
        original_name: model.original_name,
        file_path: model.file_path,
        file_size: model.file_size.max(0) as u64,
        file_type: model.file_type,
        uploaded_at: model.uploaded_at.into(),
    }
}

#[async_trait]
impl FileRepository for FileRepositoryPostgres {
    async fn insert(&self, file: NewStoredFile) -> Result<StoredFile, FileRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(file.user_id),
            file_name: Set(file.file_name),
            original_name: Set(file.original_name),
            file_path: Set(file.file_path),
            file_size: Set(file.file_size as i64),
            file_type: Set(file.file_type),
            uploaded_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_domain(inserted))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredFile>, FileRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<StoredFile>, FileRepositoryError> {
        let mut select = Entity::find();
        if let Some(user_id) = owner {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let rows = select
            .order_by_desc(Column::UploadedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FileRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(FileRepositoryError::NotFound);
        }
        Ok(())
    }
}

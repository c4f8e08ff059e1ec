use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::alumni::application::domain::{Alumni, AlumniChanges, NewAlumni};
use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{classify_mongo_err, mongo};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AlumniDocument {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    // Absent rather than null so the partial unique index skips it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) user_id: Option<String>,
    pub(crate) nim: String,
    pub(crate) name: String,
    pub(crate) major: String,
    pub(crate) cohort_year: i32,
    pub(crate) graduation_year: i32,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    pub(crate) address: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub(crate) created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub(crate) updated_at: DateTime<Utc>,
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, AlumniRepositoryError> {
    Uuid::parse_str(raw)
        .map_err(|e| AlumniRepositoryError::DatabaseError(format!("bad {what}: {e}")))
}

impl AlumniDocument {
    pub(crate) fn into_domain(self) -> Result<Alumni, AlumniRepositoryError> {
        let user_id = self
            .user_id
            .as_deref()
            .map(|raw| parse_id(raw, "alumni user_id"))
            .transpose()?;

        Ok(Alumni {
            id: parse_id(&self.id, "alumni _id")?,
            user_id,
            nim: self.nim,
            name: self.name,
            major: self.major,
            cohort_year: self.cohort_year,
            graduation_year: self.graduation_year,
            email: self.email,
            phone: self.phone,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn map_mongo_err(err: mongodb::error::Error) -> AlumniRepositoryError {
    AlumniRepositoryError::from(classify_mongo_err(&err))
}

/// Case-insensitive substring match on name, nim and major.
fn search_filter(query: &ListQuery) -> Document {
    match &query.search {
        Some(term) => {
            let pattern = regex::escape(term);
            doc! {
                "$or": [
                    { "name": { "$regex": &pattern, "$options": "i" } },
                    { "nim": { "$regex": &pattern, "$options": "i" } },
                    { "major": { "$regex": &pattern, "$options": "i" } },
                ]
            }
        }
        None => doc! {},
    }
}

#[derive(Clone, Debug)]
pub struct AlumniRepositoryMongo {
    alumni: Collection<AlumniDocument>,
    jobs: Collection<Document>,
}

impl AlumniRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            alumni: db.collection(mongo::ALUMNI),
            jobs: db.collection(mongo::JOBS),
        }
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Alumni>, AlumniRepositoryError> {
        self.alumni
            .find_one(filter, None)
            .await
            .map_err(map_mongo_err)?
            .map(AlumniDocument::into_domain)
            .transpose()
    }
}

#[async_trait]
impl AlumniRepository for AlumniRepositoryMongo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Alumni>, AlumniRepositoryError> {
        self.find_one(doc! { "_id": id.to_string() }).await
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Alumni>, AlumniRepositoryError> {
        self.find_one(doc! { "user_id": user_id.to_string() }).await
    }

    async fn find_by_nim(&self, nim: &str) -> Result<Option<Alumni>, AlumniRepositoryError> {
        self.find_one(doc! { "nim": nim }).await
    }

    async fn list(&self, query: &ListQuery) -> Result<PageResult<Alumni>, AlumniRepositoryError> {
        let filter = search_filter(query);

        let total = self
            .alumni
            .count_documents(filter.clone(), None)
            .await
            .map_err(map_mongo_err)?;

        let mut sort = Document::new();
        sort.insert(query.sort_by, query.order.as_mongo());
        sort.insert("_id", 1);

        let options = FindOptions::builder()
            .sort(sort)
            .skip(query.offset())
            .limit(query.limit as i64)
            .build();

        let documents: Vec<AlumniDocument> = self
            .alumni
            .find(filter, options)
            .await
            .map_err(map_mongo_err)?
            .try_collect()
            .await
            .map_err(map_mongo_err)?;

        let items = documents
            .into_iter()
            .map(AlumniDocument::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, total, query))
    }

    async fn insert(&self, alumni: NewAlumni) -> Result<Alumni, AlumniRepositoryError> {
        let now = Utc::now();
        let fields = alumni.fields;
        let document = AlumniDocument {
            id: Uuid::new_v4().to_string(),
            user_id: alumni.user_id.map(|id| id.to_string()),
            nim: fields.nim,
            name: fields.name,
            major: fields.major,
            cohort_year: fields.cohort_year,
            graduation_year: fields.graduation_year,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            created_at: now,
            updated_at: now,
        };

        self.alumni
            .insert_one(&document, None)
            .await
            .map_err(map_mongo_err)?;

        document.into_domain()
    }

    async fn update(
        &self,
        id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, AlumniRepositoryError> {
        let update = doc! {
            "$set": {
                "nim": changes.nim,
                "name": changes.name,
                "major": changes.major,
                "cohort_year": changes.cohort_year,
                "graduation_year": changes.graduation_year,
                "email": changes.email,
                "phone": changes.phone,
                "address": changes.address,
                "updated_at": mongodb::bson::DateTime::from_chrono(Utc::now()),
            }
        };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.alumni
            .find_one_and_update(doc! { "_id": id.to_string() }, update, options)
            .await
            .map_err(map_mongo_err)?
            .ok_or(AlumniRepositoryError::NotFound)?
            .into_domain()
    }

    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError> {
        // No cascade in the document store; jobs go first so none is left orphaned
        self.jobs
            .delete_many(doc! { "alumni_id": id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?;

        let result = self
            .alumni
            .delete_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?;

        if result.deleted_count == 0 {
            return Err(AlumniRepositoryError::NotFound);
        }
        Ok(())
    }
}

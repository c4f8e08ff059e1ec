use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::job::application::domain::{AlumniJobCount, Job, JobChanges, TrashEntry};
use crate::modules::job::application::ports::outgoing::{
    JobListQuery, JobRepository, JobRepositoryError,
};
use crate::shared::pagination::PageResult;
use crate::shared::persistence::{classify_mongo_err, mongo};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobDocument {
    #[serde(rename = "_id")]
    id: String,
    alumni_id: String,
    company_name: String,
    position: String,
    industry: String,
    work_location: String,
    #[serde(default)]
    salary_range: Option<String>,
    /// Stored as `YYYY-MM-DD`, which sorts chronologically
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    employment_status: String,
    #[serde(default)]
    description: Option<String>,
    is_deleted: bool,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct CountDocument {
    alumni_id: String,
    alumni_name: String,
    count: i64,
}

#[derive(Debug, Deserialize)]
struct TrashDocument {
    id: String,
    alumni_id: String,
    alumni_name: String,
    company_name: String,
    is_deleted: bool,
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, JobRepositoryError> {
    Uuid::parse_str(raw).map_err(|e| JobRepositoryError::DatabaseError(format!("bad {what}: {e}")))
}

impl JobDocument {
    fn into_domain(self) -> Result<Job, JobRepositoryError> {
        Ok(Job {
            id: parse_id(&self.id, "job _id")?,
            alumni_id: parse_id(&self.alumni_id, "job alumni_id")?,
            company_name: self.company_name,
            position: self.position,
            industry: self.industry,
            work_location: self.work_location,
            salary_range: self.salary_range,
            start_date: self.start_date,
            end_date: self.end_date,
            employment_status: self.employment_status,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_deleted: self.is_deleted,
        })
    }
}

fn map_mongo_err(err: mongodb::error::Error) -> JobRepositoryError {
    JobRepositoryError::from(classify_mongo_err(&err))
}

fn decode<T: serde::de::DeserializeOwned>(document: Document) -> Result<T, JobRepositoryError> {
    bson::from_document(document).map_err(|e| JobRepositoryError::DatabaseError(e.to_string()))
}

fn list_filter(query: &JobListQuery) -> Document {
    let mut filter = doc! { "is_deleted": query.wants_deleted() };

    if let Some(alumni_id) = query.alumni_id {
        filter.insert("alumni_id", alumni_id.to_string());
    }

    if let Some(term) = &query.page.search {
        let pattern = regex::escape(term);
        filter.insert(
            "$or",
            vec![
                doc! { "company_name": { "$regex": &pattern, "$options": "i" } },
                doc! { "position": { "$regex": &pattern, "$options": "i" } },
                doc! { "industry": { "$regex": &pattern, "$options": "i" } },
                doc! { "work_location": { "$regex": &pattern, "$options": "i" } },
            ],
        );
    }
    filter
}

fn state_match(is_deleted: bool, alumni_id: Option<Uuid>) -> Document {
    let mut stage = doc! { "is_deleted": is_deleted };
    if let Some(id) = alumni_id {
        stage.insert("alumni_id", id.to_string());
    }
    stage
}

fn counts_pipeline(alumni_id: Option<Uuid>, min_count: u64) -> Vec<Document> {
    vec![
        doc! { "$match": state_match(false, alumni_id) },
        doc! { "$group": { "_id": "$alumni_id", "count": { "$sum": 1 } } },
        doc! { "$match": { "count": { "$gte": min_count as i64 } } },
        doc! { "$lookup": {
            "from": mongo::ALUMNI,
            "localField": "_id",
            "foreignField": "_id",
            "as": "alumni",
        } },
        doc! { "$unwind": "$alumni" },
        doc! { "$project": {
            "_id": 0,
            "alumni_id": "$_id",
            "alumni_name": "$alumni.name",
            "count": 1,
        } },
        doc! { "$sort": { "count": -1, "alumni_name": 1 } },
    ]
}

fn trash_pipeline(alumni_id: Option<Uuid>) -> Vec<Document> {
    vec![
        doc! { "$match": state_match(true, alumni_id) },
        doc! { "$lookup": {
            "from": mongo::ALUMNI,
            "localField": "alumni_id",
            "foreignField": "_id",
            "as": "alumni",
        } },
        doc! { "$unwind": "$alumni" },
        doc! { "$sort": { "updated_at": -1, "_id": 1 } },
        doc! { "$project": {
            "_id": 0,
            "id": "$_id",
            "alumni_id": 1,
            "alumni_name": "$alumni.name",
            "company_name": 1,
            "is_deleted": 1,
        } },
    ]
}

#[derive(Clone, Debug)]
pub struct JobRepositoryMongo {
    jobs: Collection<JobDocument>,
    alumni: Collection<Document>,
}

impl JobRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            jobs: db.collection(mongo::JOBS),
            alumni: db.collection(mongo::ALUMNI),
        }
    }

    /// `find_one_and_update` guarded by the current deleted flag.
    async fn update_where(
        &self,
        id: Uuid,
        is_deleted: bool,
        set: Document,
    ) -> Result<Job, JobRepositoryError> {
        let mut set = set;
        set.insert("updated_at", bson::DateTime::from_chrono(Utc::now()));

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.jobs
            .find_one_and_update(
                doc! { "_id": id.to_string(), "is_deleted": is_deleted },
                doc! { "$set": set },
                options,
            )
            .await
            .map_err(map_mongo_err)?
            .ok_or(JobRepositoryError::NotFound)?
            .into_domain()
    }

    async fn aggregate<T>(&self, pipeline: Vec<Document>) -> Result<Vec<T>, JobRepositoryError>
    where
        T: serde::de::DeserializeOwned,
    {
        let documents: Vec<Document> = self
            .jobs
            .aggregate(pipeline, None)
            .await
            .map_err(map_mongo_err)?
            .try_collect()
            .await
            .map_err(map_mongo_err)?;

        documents.into_iter().map(decode).collect()
    }
}

#[async_trait]
impl JobRepository for JobRepositoryMongo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        self.jobs
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?
            .map(JobDocument::into_domain)
            .transpose()
    }

    async fn list(&self, query: &JobListQuery) -> Result<PageResult<Job>, JobRepositoryError> {
        let filter = list_filter(query);
        let page = &query.page;

        let total = self
            .jobs
            .count_documents(filter.clone(), None)
            .await
            .map_err(map_mongo_err)?;

        let mut sort = Document::new();
        sort.insert(page.sort_by, page.order.as_mongo());
        sort.insert("_id", 1);

        let options = FindOptions::builder()
            .sort(sort)
            .skip(page.offset())
            .limit(page.limit as i64)
            .build();

        let documents: Vec<JobDocument> = self
            .jobs
            .find(filter, options)
            .await
            .map_err(map_mongo_err)?
            .try_collect()
            .await
            .map_err(map_mongo_err)?;

        let items = documents
            .into_iter()
            .map(JobDocument::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, total, page))
    }

    async fn insert(&self, alumni_id: Uuid, job: JobChanges) -> Result<Job, JobRepositoryError> {
        // No foreign keys here, so the reference is checked by hand
        let exists = self
            .alumni
            .count_documents(doc! { "_id": alumni_id.to_string() }, None)
            .await
            .map_err(map_mongo_err)?;
        if exists == 0 {
            return Err(JobRepositoryError::UnknownAlumni);
        }

        let now = Utc::now();
        let document = JobDocument {
            id: Uuid::new_v4().to_string(),
            alumni_id: alumni_id.to_string(),
            company_name: job.company_name,
            position: job.position,
            industry: job.industry,
            work_location: job.work_location,
            salary_range: job.salary_range,
            start_date: job.start_date,
            end_date: job.end_date,
            employment_status: job.employment_status,
            description: job.description,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        self.jobs
            .insert_one(&document, None)
            .await
            .map_err(map_mongo_err)?;

        document.into_domain()
    }

    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Job, JobRepositoryError> {
        let set = doc! {
            "company_name": changes.company_name,
            "position": changes.position,
            "industry": changes.industry,
            "work_location": changes.work_location,
            "salary_range": changes.salary_range,
            "start_date": changes.start_date.to_string(),
            "end_date": changes.end_date.map(|d| d.to_string()),
            "employment_status": changes.employment_status,
            "description": changes.description,
        };
        self.update_where(id, false, set).await
    }

    async fn mark_deleted(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.update_where(id, false, doc! { "is_deleted": true }).await
    }

    async fn restore(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.update_where(id, true, doc! { "is_deleted": false }).await
    }

    async fn delete_permanently(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let result = self
            .jobs
            .delete_one(doc! { "_id": id.to_string(), "is_deleted": true }, None)
            .await
            .map_err(map_mongo_err)?;

        if result.deleted_count == 0 {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn active_job_counts(
        &self,
        alumni_id: Option<Uuid>,
        min_count: u64,
    ) -> Result<Vec<AlumniJobCount>, JobRepositoryError> {
        let rows: Vec<CountDocument> = self
            .aggregate(counts_pipeline(alumni_id, min_count))
            .await?;

        rows.into_iter()
            .map(|row| {
                Ok(AlumniJobCount {
                    alumni_id: parse_id(&row.alumni_id, "count alumni_id")?,
                    alumni_name: row.alumni_name,
                    count: u64::try_from(row.count).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn trash(&self, alumni_id: Option<Uuid>) -> Result<Vec<TrashEntry>, JobRepositoryError> {
        let rows: Vec<TrashDocument> = self.aggregate(trash_pipeline(alumni_id)).await?;

        rows.into_iter()
            .map(|row| {
                Ok(TrashEntry {
                    id: parse_id(&row.id, "trash id")?,
                    alumni_id: parse_id(&row.alumni_id, "trash alumni_id")?,
                    alumni_name: row.alumni_name,
                    company_name: row.company_name,
                    is_deleted: row.is_deleted,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::ListQuery;

    fn document() -> JobDocument {
        JobDocument {
            id: Uuid::new_v4().to_string(),
            alumni_id: Uuid::new_v4().to_string(),
            company_name: "PT Telkom Indonesia".into(),
            position: "Backend Engineer".into(),
            industry: "Telekomunikasi".into(),
            work_location: "Surabaya".into(),
            salary_range: None,
            start_date: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            end_date: None,
            employment_status: "Full-time".into(),
            description: None,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn document_survives_bson() {
        let original = document();
        let raw = bson::to_document(&original).unwrap();

        assert_eq!(raw.get_str("start_date").unwrap(), "2023-08-01");
        assert!(raw.get_datetime("created_at").is_ok());

        let back: JobDocument = bson::from_document(raw).unwrap();
        let job = back.into_domain().unwrap();
        assert_eq!(job.start_date, original.start_date);
        assert_eq!(job.state(), crate::modules::job::application::domain::JobState::Active);
    }

    #[test]
    fn corrupt_alumni_reference_is_database_error() {
        let mut broken = document();
        broken.alumni_id = "not-a-uuid".into();
        assert!(matches!(
            broken.into_domain(),
            Err(JobRepositoryError::DatabaseError(_))
        ));
    }

    #[test]
    fn list_filter_narrows_state_alumni_and_search() {
        let alumni_id = Uuid::new_v4();
        let mut page = ListQuery::first_page("created_at");
        page.search = Some("telkom (persero)".into());

        let query = JobListQuery::active(page).of_alumni(alumni_id);
        let filter = list_filter(&query);

        assert!(!filter.get_bool("is_deleted").unwrap());
        assert_eq!(filter.get_str("alumni_id").unwrap(), alumni_id.to_string());
        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 4);
        let regex = clauses[0]
            .as_document()
            .and_then(|c| c.get_document("company_name").ok())
            .and_then(|c| c.get_str("$regex").ok())
            .unwrap();
        assert_eq!(regex, r"telkom \(persero\)");
    }

    #[test]
    fn counts_only_active_jobs_above_threshold() {
        let pipeline = counts_pipeline(None, 2);

        let first = pipeline[0].get_document("$match").unwrap();
        assert!(!first.get_bool("is_deleted").unwrap());
        assert!(first.get("alumni_id").is_none());

        let threshold = pipeline[2]
            .get_document("$match")
            .and_then(|m| m.get_document("count"))
            .and_then(|c| c.get_i64("$gte"))
            .unwrap();
        assert_eq!(threshold, 2);
    }

    #[test]
    fn trash_pipeline_targets_own_alumni() {
        let alumni_id = Uuid::new_v4();
        let pipeline = trash_pipeline(Some(alumni_id));

        let stage = pipeline[0].get_document("$match").unwrap();
        assert!(stage.get_bool("is_deleted").unwrap());
        assert_eq!(stage.get_str("alumni_id").unwrap(), alumni_id.to_string());
    }
}

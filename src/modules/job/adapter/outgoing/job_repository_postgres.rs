use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::job::application::domain::{AlumniJobCount, Job, JobChanges, TrashEntry};
use crate::modules::job::application::ports::outgoing::{
    JobListQuery, JobRepository, JobRepositoryError,
};
use crate::shared::pagination::{PageResult, SortOrder};
use crate::shared::persistence::classify_db_err;

use super::sea_orm_entity::jobs::{ActiveModel, Column, Entity, Model};

#[derive(Clone, Debug)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: sea_orm::DbErr) -> JobRepositoryError {
    JobRepositoryError::from(classify_db_err(&err))
}

fn to_domain(model: Model) -> Job {
    Job {
        id: model.id,
        alumni_id: model.alumni_id,
        company_name: model.company_name,
        position: model.position,
        industry: model.industry,
        work_location: model.work_location,
        salary_range: model.salary_range,
        start_date: model.start_date,
        end_date: model.end_date,
        employment_status: model.employment_status,
        description: model.description,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        is_deleted: model.is_deleted,
    }
}

fn sort_column(key: &str) -> Column {
    match key {
        "company_name" => Column::CompanyName,
        "position" => Column::Position,
        "industry" => Column::Industry,
        "work_location" => Column::WorkLocation,
        "start_date" => Column::StartDate,
        "employment_status" => Column::EmploymentStatus,
        _ => Column::CreatedAt,
    }
}

fn sea_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[derive(Debug, FromQueryResult)]
struct JobCountRow {
    alumni_id: Uuid,
    alumni_name: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct TrashRow {
    id: Uuid,
    alumni_id: Uuid,
    alumni_name: String,
    company_name: String,
    is_deleted: bool,
}

impl JobRepositoryPostgres {
    /// Runs a state-conditional `UPDATE ... RETURNING *`.
    async fn flip_deleted(&self, id: Uuid, from: bool) -> Result<Job, JobRepositoryError> {
        let row = Model::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"UPDATE pekerjaan_alumni SET is_deleted = $2, updated_at = NOW() WHERE id = $1 AND is_deleted = $3 RETURNING *"#,
            [id.into(), (!from).into(), from.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?;

        row.map(to_domain).ok_or(JobRepositoryError::NotFound)
    }
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn list(&self, query: &JobListQuery) -> Result<PageResult<Job>, JobRepositoryError> {
        let page = &query.page;
        let mut select = Entity::find().filter(Column::IsDeleted.eq(query.wants_deleted()));

        if let Some(alumni_id) = query.alumni_id {
            select = select.filter(Column::AlumniId.eq(alumni_id));
        }

        if let Some(pattern) = page.like_pattern() {
            select = select.filter(
                Condition::any()
                    .add(Expr::col(Column::CompanyName).ilike(&pattern))
                    .add(Expr::col(Column::Position).ilike(&pattern))
                    .add(Expr::col(Column::Industry).ilike(&pattern))
                    .add(Expr::col(Column::WorkLocation).ilike(&pattern)),
            );
        }

        select = select
            .order_by(sort_column(page.sort_by), sea_order(page.order))
            .order_by_asc(Column::Id);

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = select
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(to_domain).collect(),
            total,
            page,
        ))
    }

    async fn insert(&self, alumni_id: Uuid, job: JobChanges) -> Result<Job, JobRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            alumni_id: Set(alumni_id),
            company_name: Set(job.company_name),
            position: Set(job.position),
            industry: Set(job.industry),
            work_location: Set(job.work_location),
            salary_range: Set(job.salary_range),
            start_date: Set(job.start_date),
            end_date: Set(job.end_date),
            employment_status: Set(job.employment_status),
            description: Set(job.description),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_domain(inserted))
    }

    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Job, JobRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::CompanyName, Expr::value(changes.company_name))
            .col_expr(Column::Position, Expr::value(changes.position))
            .col_expr(Column::Industry, Expr::value(changes.industry))
            .col_expr(Column::WorkLocation, Expr::value(changes.work_location))
            .col_expr(Column::SalaryRange, Expr::value(changes.salary_range))
            .col_expr(Column::StartDate, Expr::value(changes.start_date))
            .col_expr(Column::EndDate, Expr::value(changes.end_date))
            .col_expr(Column::EmploymentStatus, Expr::value(changes.employment_status))
            .col_expr(Column::Description, Expr::value(changes.description))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(to_domain)
            .ok_or(JobRepositoryError::NotFound)
    }

    async fn mark_deleted(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.flip_deleted(id, false).await
    }

    async fn restore(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.flip_deleted(id, true).await
    }

    async fn delete_permanently(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        let deleted = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM pekerjaan_alumni WHERE id = $1 AND is_deleted = true RETURNING id"#,
            [id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(map_db_err)?;

        deleted.map(|_| ()).ok_or(JobRepositoryError::NotFound)
    }

    async fn active_job_counts(
        &self,
        alumni_id: Option<Uuid>,
        min_count: u64,
    ) -> Result<Vec<AlumniJobCount>, JobRepositoryError> {
        let rows = JobCountRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT a.id AS alumni_id, a.nama AS alumni_name, COUNT(p.id) AS count
            FROM alumni a
            JOIN pekerjaan_alumni p ON p.alumni_id = a.id
            WHERE p.is_deleted = false AND ($1::uuid IS NULL OR a.id = $1)
            GROUP BY a.id, a.nama
            HAVING COUNT(p.id) >= $2
            ORDER BY count DESC, a.nama ASC
            "#,
            [alumni_id.into(), (min_count as i64).into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| AlumniJobCount {
                alumni_id: row.alumni_id,
                alumni_name: row.alumni_name,
                count: u64::try_from(row.count).unwrap_or_default(),
            })
            .collect())
    }

    async fn trash(&self, alumni_id: Option<Uuid>) -> Result<Vec<TrashEntry>, JobRepositoryError> {
        let rows = TrashRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT p.id, p.alumni_id, a.nama AS alumni_name,
                   p.nama_perusahaan AS company_name, p.is_deleted
            FROM pekerjaan_alumni p
            JOIN alumni a ON a.id = p.alumni_id
            WHERE p.is_deleted = true AND ($1::uuid IS NULL OR p.alumni_id = $1)
            ORDER BY p.updated_at DESC, p.id ASC
            "#,
            [alumni_id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| TrashEntry {
                id: row.id,
                alumni_id: row.alumni_id,
                alumni_name: row.alumni_name,
                company_name: row.company_name,
                is_deleted: row.is_deleted,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::job_changes;
    use chrono::NaiveDate;
    use maplit::btreemap;
    use sea_orm::{DbErr, MockDatabase, Value};

    fn model(id: Uuid, is_deleted: bool) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            alumni_id: Uuid::new_v4(),
            company_name: "PT Telkom Indonesia".into(),
            position: "Backend Engineer".into(),
            industry: "Telekomunikasi".into(),
            work_location: "Surabaya".into(),
            salary_range: Some("10-15 juta".into()),
            start_date: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            end_date: None,
            employment_status: "Full-time".into(),
            description: None,
            is_deleted,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: MockDatabase) -> JobRepositoryPostgres {
        JobRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn find_by_id_returns_trashed_rows_too() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, true)]]);

        let job = repo(db).find_by_id(id).await.unwrap().unwrap();
        assert!(job.is_deleted);
        assert_eq!(job.company_name, "PT Telkom Indonesia");
    }

    #[tokio::test]
    async fn mark_deleted_returns_trashed_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, true)]]);

        let job = repo(db).mark_deleted(id).await.unwrap();
        assert_eq!(job.id, id);
        assert!(job.is_deleted);
    }

    #[tokio::test]
    async fn mark_deleted_on_trashed_row_misses() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()]);

        let err = repo(db).mark_deleted(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, JobRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn restore_clears_flag() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, false)]]);

        let job = repo(db).restore(id).await.unwrap();
        assert!(!job.is_deleted);
    }

    #[tokio::test]
    async fn purge_of_active_row_misses() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<std::collections::BTreeMap<String, Value>>::new()]);

        let err = repo(db).delete_permanently(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, JobRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn purge_of_trashed_row_succeeds() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "id".to_string() => Value::from(id),
            }]]);

        assert!(repo(db).delete_permanently(id).await.is_ok());
    }

    #[tokio::test]
    async fn update_skips_trashed_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()]);

        let err = repo(db)
            .update(Uuid::new_v4(), job_changes())
            .await
            .unwrap_err();
        assert_eq!(err, JobRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn counts_are_mapped() {
        let alumni_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
            btreemap! {
                "alumni_id".to_string() => Value::from(alumni_id),
                "alumni_name".to_string() => Value::from("Siti Aminah"),
                "count".to_string() => Value::from(3i64),
            },
        ]]);

        let counts = repo(db).active_job_counts(Some(alumni_id), 2).await.unwrap();
        assert_eq!(
            counts,
            vec![AlumniJobCount {
                alumni_id,
                alumni_name: "Siti Aminah".into(),
                count: 3,
            }]
        );
    }

    #[tokio::test]
    async fn trash_rows_carry_alumni_name() {
        let id = Uuid::new_v4();
        let alumni_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
            btreemap! {
                "id".to_string() => Value::from(id),
                "alumni_id".to_string() => Value::from(alumni_id),
                "alumni_name".to_string() => Value::from("Siti Aminah"),
                "company_name".to_string() => Value::from("PT Telkom Indonesia"),
                "is_deleted".to_string() => Value::from(true),
            },
        ]]);

        let trash = repo(db).trash(None).await.unwrap();
        assert_eq!(trash.len(), 1);
        assert_eq!(trash[0].alumni_name, "Siti Aminah");
        assert!(trash[0].is_deleted);
    }

    #[tokio::test]
    async fn foreign_key_failure_on_insert_is_unknown_alumni() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([
            DbErr::Custom(
                "insert or update on table \"pekerjaan_alumni\" violates foreign key constraint"
                    .into(),
            ),
        ]);

        let err = repo(db)
            .insert(Uuid::new_v4(), job_changes())
            .await
            .unwrap_err();
        assert_eq!(err, JobRepositoryError::UnknownAlumni);
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::alumni::application::domain::{Alumni, AlumniChanges, NewAlumni};
use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};
use crate::shared::pagination::{ListQuery, PageResult, SortOrder};
use crate::shared::persistence::classify_db_err;

use super::sea_orm_entity::alumni::{ActiveModel, Column, Entity, Model};

#[derive(Clone, Debug)]
pub struct AlumniRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AlumniRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: sea_orm::DbErr) -> AlumniRepositoryError {
    AlumniRepositoryError::from(classify_db_err(&err))
}

fn to_domain(model: Model) -> Alumni {
    Alumni {
        id: model.id,
        user_id: model.user_id,
        nim: model.nim,
        name: model.name,
        major: model.major,
        cohort_year: model.cohort_year,
        graduation_year: model.graduation_year,
        email: model.email,
        phone: model.phone,
        address: model.address,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn sort_column(key: &str) -> Column {
    match key {
        "name" => Column::Name,
        "nim" => Column::Nim,
        "major" => Column::Major,
        "cohort_year" => Column::CohortYear,
        "graduation_year" => Column::GraduationYear,
        _ => Column::CreatedAt,
    }
}

fn sea_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait]
impl AlumniRepository for AlumniRepositoryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Alumni>, AlumniRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Alumni>, AlumniRepositoryError> {
        let found = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn find_by_nim(&self, nim: &str) -> Result<Option<Alumni>, AlumniRepositoryError> {
        let found = Entity::find()
            .filter(Column::Nim.eq(nim))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(to_domain))
    }

    async fn list(&self, query: &ListQuery) -> Result<PageResult<Alumni>, AlumniRepositoryError> {
        let mut select = Entity::find();

        if let Some(pattern) = query.like_pattern() {
            select = select.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Nim).ilike(&pattern))
                    .add(Expr::col(Column::Major).ilike(&pattern)),
            );
        }

        // Id as tie breaker keeps pages stable when the sort key repeats
        select = select
            .order_by(sort_column(query.sort_by), sea_order(query.order))
            .order_by_asc(Column::Id);

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = select
            .offset(query.offset())
            .limit(query.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(to_domain).collect(),
            total,
            query,
        ))
    }

    async fn insert(&self, alumni: NewAlumni) -> Result<Alumni, AlumniRepositoryError> {
        let fields = alumni.fields;
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(alumni.user_id),
            nim: Set(fields.nim),
            name: Set(fields.name),
            major: Set(fields.major),
            cohort_year: Set(fields.cohort_year),
            graduation_year: Set(fields.graduation_year),
            email: Set(fields.email),
            phone: Set(fields.phone),
            address: Set(fields.address),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_domain(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, AlumniRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::Nim, Expr::value(changes.nim))
            .col_expr(Column::Name, Expr::value(changes.name))
            .col_expr(Column::Major, Expr::value(changes.major))
            .col_expr(Column::CohortYear, Expr::value(changes.cohort_year))
            .col_expr(Column::GraduationYear, Expr::value(changes.graduation_year))
            .col_expr(Column::Email, Expr::value(changes.email))
            .col_expr(Column::Phone, Expr::value(changes.phone))
            .col_expr(Column::Address, Expr::value(changes.address))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(to_domain)
            .ok_or(AlumniRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError> {
        // Jobs go with the profile through ON DELETE CASCADE
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AlumniRepositoryError::NotFound);
        }
        Ok(())
    }
}

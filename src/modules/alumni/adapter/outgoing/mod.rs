pub mod alumni_repository_mongo;
pub mod alumni_repository_postgres;
pub mod sea_orm_entity;

pub use alumni_repository_mongo::AlumniRepositoryMongo;
pub use alumni_repository_postgres::AlumniRepositoryPostgres;

pub mod file_repository_mongo;
pub mod file_repository_postgres;
pub mod local_file_storage;
pub mod sea_orm_entity;

pub use file_repository_mongo::FileRepositoryMongo;
pub use file_repository_postgres::FileRepositoryPostgres;
pub use local_file_storage::LocalFileStorage;

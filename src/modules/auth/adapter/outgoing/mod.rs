pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_repository_mongo;
pub mod user_repository_postgres;

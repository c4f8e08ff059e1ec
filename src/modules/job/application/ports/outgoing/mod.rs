pub mod job_repository;

pub use job_repository::{JobListQuery, JobRepository, JobRepositoryError};

#[cfg(test)]
pub use job_repository::MockJobRepo;

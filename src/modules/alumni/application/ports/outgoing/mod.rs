pub mod alumni_repository;

pub use alumni_repository::{AlumniRepository, AlumniRepositoryError};

#[cfg(test)]
pub use alumni_repository::MockAlumniRepo;

pub mod job;
pub mod lifecycle;

pub use job::{AlumniJobCount, Job, JobChanges, JobValidationError, NewJob, TrashEntry};
pub use lifecycle::{JobState, LifecycleAction, LifecycleViolation};

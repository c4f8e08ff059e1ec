pub mod backend;
pub mod deadline;
pub mod failure;
pub mod mongo;
pub mod probe;

pub use backend::{StorageBackend, StorageSettings};
pub use deadline::{bounded, DeadlineExceeded, COLLECTION, SINGLE_RECORD};
pub use failure::{classify_db_err, classify_mongo_err, StoreFailure};

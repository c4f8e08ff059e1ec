use sea_orm::{DbErr, SqlErr};

/// Backend-neutral reading of a storage error, so every adapter maps
/// duplicates and outages the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    Duplicate(String),
    /// A foreign key pointed at a row that does not exist.
    MissingReference(String),
    Unavailable(String),
    Other(String),
}

pub fn classify_db_err(err: &DbErr) -> StoreFailure {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            StoreFailure::Unavailable(err.to_string())
        }
        _ => {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    return StoreFailure::Duplicate(detail)
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    return StoreFailure::MissingReference(detail)
                }
                _ => {}
            }
            let message = err.to_string();
            // Custom errors carry the SQLSTATE only in their text
            if message.contains("23505") || message.contains("duplicate key") {
                StoreFailure::Duplicate(message)
            } else if message.contains("23503") || message.contains("foreign key constraint") {
                StoreFailure::MissingReference(message)
            } else {
                StoreFailure::Other(message)
            }
        }
    }
}

pub fn classify_mongo_err(err: &mongodb::error::Error) -> StoreFailure {
    use mongodb::error::{ErrorKind, WriteFailure};

    const DUPLICATE_KEY: i32 = 11000;

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            StoreFailure::Duplicate(write.message.clone())
        }
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY => {
            StoreFailure::Duplicate(command.message.clone())
        }
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            StoreFailure::Unavailable(err.to_string())
        }
        _ => StoreFailure::Other(err.to_string()),
    }
}

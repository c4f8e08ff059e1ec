use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    MongoDb,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::MongoDb => "mongodb",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            other => Err(format!("Unknown STORAGE_BACKEND: {}", other)),
        }
    }
}

/// Connection settings for whichever backend is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSettings {
    Postgres { url: String, run_migrations: bool },
    MongoDb { uri: String, database: String },
}

impl StorageSettings {
    pub fn backend(&self) -> StorageBackend {
        match self {
            StorageSettings::Postgres { .. } => StorageBackend::Postgres,
            StorageSettings::MongoDb { .. } => StorageBackend::MongoDb,
        }
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let backend = lookup("STORAGE_BACKEND")
            .map(|raw| raw.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::Postgres);

        match backend {
            StorageBackend::Postgres => {
                let url = lookup("DATABASE_URL")
                    .ok_or_else(|| "DATABASE_URL is not set".to_string())?;
                let run_migrations = lookup("RUN_MIGRATIONS")
                    .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                    .unwrap_or(false);
                Ok(StorageSettings::Postgres {
                    url,
                    run_migrations,
                })
            }
            StorageBackend::MongoDb => {
                let uri =
                    lookup("MONGODB_URI").ok_or_else(|| "MONGODB_URI is not set".to_string())?;
                let database = lookup("MONGODB_DATABASE").unwrap_or_else(|| "alumni".to_string());
                Ok(StorageSettings::MongoDb { uri, database })
            }
        }
    }
}

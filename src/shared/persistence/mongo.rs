use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use super::SINGLE_RECORD;

pub const USERS: &str = "users";
pub const ALUMNI: &str = "alumni";
pub const JOBS: &str = "pekerjaan_alumni";
pub const FILES: &str = "files";

pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("alumni-backend".to_string());
    options.connect_timeout = Some(SINGLE_RECORD);
    options.server_selection_timeout = Some(SINGLE_RECORD);

    let client = Client::with_options(options)?;
    Ok(client.database(database))
}

fn unique(keys: Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

/// Mirrors the relational unique constraints. Safe to run on every start.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let users = db.collection::<Document>(USERS);
    users.create_index(unique(doc! { "username": 1 }), None).await?;
    users.create_index(unique(doc! { "email": 1 }), None).await?;

    let alumni = db.collection::<Document>(ALUMNI);
    alumni.create_index(unique(doc! { "nim": 1 }), None).await?;
    // Admin-created profiles have no user, so only linked ones are unique
    alumni
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .partial_filter_expression(doc! { "user_id": { "$type": "string" } })
                        .build(),
                )
                .build(),
            None,
        )
        .await?;

    db.collection::<Document>(JOBS)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "alumni_id": 1, "is_deleted": 1 })
                .build(),
            None,
        )
        .await?;

    let files = db.collection::<Document>(FILES);
    files.create_index(unique(doc! { "file_name": 1 }), None).await?;
    files
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1, "uploaded_at": -1 })
                .build(),
            None,
        )
        .await?;

    Ok(())
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alumni::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alumni::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Alumni::UserId).uuid().unique_key())
                    .col(
                        ColumnDef::new(Alumni::Nim)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alumni::Nama).string_len(100).not_null())
                    .col(ColumnDef::new(Alumni::Jurusan).string_len(100).not_null())
                    .col(ColumnDef::new(Alumni::Angkatan).integer().not_null())
                    .col(ColumnDef::new(Alumni::TahunLulus).integer().not_null())
                    .col(ColumnDef::new(Alumni::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Alumni::NoTelepon).string_len(20))
                    .col(ColumnDef::new(Alumni::Alamat).text())
                    .col(
                        ColumnDef::new(Alumni::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alumni::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alumni_user_id")
                            .from(Alumni::Table, Alumni::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // List search runs over name, nim and major
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_alumni_nama_lower
                ON alumni (lower(nama));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_alumni_updated_at
                BEFORE UPDATE ON alumni
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_alumni_updated_at ON alumni;
                DROP INDEX IF EXISTS idx_alumni_nama_lower;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alumni::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Alumni {
    Table,
    Id,
    UserId,
    Nim,
    Nama,
    Jurusan,
    Angkatan,
    TahunLulus,
    Email,
    NoTelepon,
    Alamat,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

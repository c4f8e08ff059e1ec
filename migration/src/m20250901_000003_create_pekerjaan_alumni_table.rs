use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PekerjaanAlumni::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PekerjaanAlumni::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PekerjaanAlumni::AlumniId).uuid().not_null())
                    .col(
                        ColumnDef::new(PekerjaanAlumni::NamaPerusahaan)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PekerjaanAlumni::PosisiJabatan)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PekerjaanAlumni::BidangIndustri)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PekerjaanAlumni::LokasiKerja)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PekerjaanAlumni::GajiRange).string_len(50))
                    .col(
                        ColumnDef::new(PekerjaanAlumni::TanggalMulaiKerja)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PekerjaanAlumni::TanggalSelesaiKerja).date())
                    .col(
                        ColumnDef::new(PekerjaanAlumni::StatusPekerjaan)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PekerjaanAlumni::DeskripsiPekerjaan).text())
                    .col(
                        ColumnDef::new(PekerjaanAlumni::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PekerjaanAlumni::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PekerjaanAlumni::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pekerjaan_alumni_alumni_id")
                            .from(PekerjaanAlumni::Table, PekerjaanAlumni::AlumniId)
                            .to(Alumni::Table, Alumni::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Normal listings and the per-alumni aggregate only ever touch active rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_pekerjaan_alumni_active
                ON pekerjaan_alumni (alumni_id)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_pekerjaan_alumni_trashed
                ON pekerjaan_alumni (alumni_id)
                WHERE is_deleted = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_pekerjaan_alumni_updated_at
                BEFORE UPDATE ON pekerjaan_alumni
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
                DROP TRIGGER IF EXISTS update_pekerjaan_alumni_updated_at ON pekerjaan_alumni;
                DROP INDEX IF EXISTS idx_pekerjaan_alumni_active;
                DROP INDEX IF EXISTS idx_pekerjaan_alumni_trashed;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PekerjaanAlumni::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PekerjaanAlumni {
    Table,
    Id,
    AlumniId,
    NamaPerusahaan,
    PosisiJabatan,
    BidangIndustri,
    LokasiKerja,
    GajiRange,
    TanggalMulaiKerja,
    TanggalSelesaiKerja,
    StatusPekerjaan,
    DeskripsiPekerjaan,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Alumni {
    Table,
    Id,
}

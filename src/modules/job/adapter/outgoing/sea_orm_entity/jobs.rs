use sea_orm::entity::prelude::*;
use sea_orm::ActiveModelBehavior;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pekerjaan_alumni")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub alumni_id: Uuid,

    #[sea_orm(column_name = "nama_perusahaan")]
    pub company_name: String,

    #[sea_orm(column_name = "posisi_jabatan")]
    pub position: String,

    #[sea_orm(column_name = "bidang_industri")]
    pub industry: String,

    #[sea_orm(column_name = "lokasi_kerja")]
    pub work_location: String,

    #[sea_orm(column_name = "gaji_range", nullable)]
    pub salary_range: Option<String>,

    #[sea_orm(column_name = "tanggal_mulai_kerja")]
    pub start_date: Date,

    #[sea_orm(column_name = "tanggal_selesai_kerja", nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(column_name = "status_pekerjaan")]
    pub employment_status: String,

    #[sea_orm(column_name = "deskripsi_pekerjaan", column_type = "Text", nullable)]
    pub description: Option<String>,

    pub is_deleted: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Entity",
        from = "Column::AlumniId",
        to = "crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Alumni,
}

impl Related<crate::modules::alumni::adapter::outgoing::sea_orm_entity::alumni::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Alumni.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

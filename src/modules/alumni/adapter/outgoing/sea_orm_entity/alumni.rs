use sea_orm::entity::prelude::*;
use sea_orm::ActiveModelBehavior;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alumni")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable, unique)]
    pub user_id: Option<Uuid>,

    #[sea_orm(unique)]
    pub nim: String,

    #[sea_orm(column_name = "nama")]
    pub name: String,

    #[sea_orm(column_name = "jurusan")]
    pub major: String,

    #[sea_orm(column_name = "angkatan")]
    pub cohort_year: i32,

    #[sea_orm(column_name = "tahun_lulus")]
    pub graduation_year: i32,

    pub email: String,

    #[sea_orm(column_name = "no_telepon", nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_name = "alamat", column_type = "Text", nullable)]
    pub address: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Users,

    #[sea_orm(has_many = "crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity")]
    Jobs,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::modules::job::adapter::outgoing::sea_orm_entity::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
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

use std::sync::Arc;

use crate::modules::alumni::application::ports::incoming::use_cases::{
    CheckAlumniUseCase, CreateAlumniUseCase, DeleteAlumniUseCase, GetAlumniListUseCase,
    GetSingleAlumniUseCase, UpdateAlumniUseCase,
};

#[derive(Clone)]
pub struct AlumniUseCases {
    pub get_list: Arc<dyn GetAlumniListUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleAlumniUseCase + Send + Sync>,
    pub create: Arc<dyn CreateAlumniUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAlumniUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAlumniUseCase + Send + Sync>,
    pub check: Arc<dyn CheckAlumniUseCase + Send + Sync>,
}

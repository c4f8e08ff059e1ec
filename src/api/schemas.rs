//! Envelope shapes for the OpenAPI document. The runtime envelope lives in
//! `shared::api::ApiResponse`; these mirror it for schema generation only.

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::pagination::MetaInfo;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "JOB_NOT_TRASHED")]
    pub code: String,

    #[schema(example = "Only trashed jobs can be restored or purged")]
    pub message: String,
}

/// One page of a listing plus the query that produced it
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PagedData<T> {
    pub items: Vec<T>,
    pub meta: MetaInfo,
}

pub mod dishes;
pub mod orders;

use serde::Serialize;
use utoipa::ToSchema;

/// Every successful response wraps its payload under a `data` key.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

//! Shared response envelope types for API handlers.
//!
//! Versioned (`/api/v1`) responses use a `{ "data": ... }` envelope. The
//! legacy root-level endpoints return bare payloads for older clients.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

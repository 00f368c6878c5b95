use axum::extract::FromRequest;

use crate::server::error::Error;

/// JSON request body extractor reporting rejections through [`Error`]
///
/// Missing fields, wrong types, unknown enum values and a missing `Content-Type` answer
/// 400 with the usual `{"error": ...}` body instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

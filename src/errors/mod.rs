use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::store::kv::StorageError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    QuotaExceeded(String),
    StorageError(String),
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::QuotaExceeded(msg) => write!(f, "Quota Exceeded: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded { .. } => AppError::QuotaExceeded(err.to_string()),
            _ => AppError::StorageError(err.to_string()),
        }
    }
}

fn error_page(title: &str, detail: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{title}</title></head>\
<body style=\"font-family:sans-serif;padding:3rem;text-align:center\">\
<h1>{title}</h1><p>{detail}</p>\
<p><a href=\"/dashboard\">Back to Dashboard</a></p></body></html>"
    )
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExceeded(_) => StatusCode::INSUFFICIENT_STORAGE,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (title, detail) = match self {
            AppError::NotFound(msg) => ("Not Found", msg),
            AppError::BadRequest(msg) => ("Bad Request", msg),
            AppError::QuotaExceeded(msg) => ("Storage Quota Exceeded", msg),
            AppError::StorageError(msg) => ("Storage Error", msg),
            AppError::InternalServerError(msg) => ("Internal Server Error", msg),
        };
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(error_page(title, detail))
    }
}

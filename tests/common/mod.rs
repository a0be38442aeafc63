#![allow(dead_code)]

use std::path::Path;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::{test, web};

use employee_manager::store::kv::{FileBackend, MemoryBackend, DEFAULT_QUOTA_BYTES};
use employee_manager::store::Store;

pub const BOUNDARY: &str = "----ems-test-boundary";

/// Store backed by process memory, dropped with the test.
pub fn memory_store() -> web::Data<Store> {
    web::Data::new(Store::new(Box::new(MemoryBackend::new(DEFAULT_QUOTA_BYTES))))
}

/// Store with a quota small enough that writing the employee list fails.
pub fn cramped_store(quota: usize) -> web::Data<Store> {
    web::Data::new(Store::new(Box::new(MemoryBackend::new(quota))))
}

/// Store backed by a JSON file, so a second open sees the first one's writes.
pub fn file_store(path: &Path) -> web::Data<Store> {
    let backend = FileBackend::open(path, DEFAULT_QUOTA_BYTES).expect("storage file should open");
    web::Data::new(Store::new(Box::new(backend)))
}

pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.resize(len, 0);
    bytes
}

/// Assembles a multipart/form-data body from text fields plus an optional
/// file part. Returns the content-type header value and the raw body.
pub fn multipart_form(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Complete, valid text fields for the employee form.
pub fn employee_fields<'a>(full_name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("fullName", full_name),
        ("gender", "Male"),
        ("dob", "1990-05-15"),
        ("state", "California"),
        ("isActive", "true"),
    ]
}

pub fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().expect("location header should be ascii"))
        .unwrap_or("")
}

pub async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("response body should be utf-8")
}

pub mod auth;
pub mod employee;
pub mod print;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::views::{self, Toast, ToastKind};

pub const HTML: &str = "text/html; charset=utf-8";

/// One-shot notification carried in the query string across a redirect.
#[derive(Debug, Deserialize)]
pub struct ToastParams {
    pub toast: Option<String>,
    pub kind: Option<String>,
}

pub fn toast_from_query(params: &ToastParams) -> Option<Toast> {
    params.toast.as_ref().map(|message| Toast {
        message: message.clone(),
        kind: ToastKind::parse(params.kind.as_deref().unwrap_or("success")),
    })
}

pub fn html_page(markup: String) -> HttpResponse {
    HttpResponse::Ok().content_type(HTML).body(markup)
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Joins the non-empty query fragments onto the base path.
pub fn compose_url(base: &str, parts: &[String]) -> String {
    let query: Vec<&str> = parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect();
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query.join("&"))
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(HTML)
        .body(views::not_found_page())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(auth::index)))
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_form))
                .route(web::post().to(auth::login)),
        )
        .service(web::resource("/logout").route(web::post().to(auth::logout)))
        .service(web::resource("/dashboard").route(web::get().to(employee::dashboard)))
        .service(
            web::resource("/dashboard/add")
                .route(web::get().to(employee::new_employee_form))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/dashboard/edit/{id}")
                .route(web::get().to(employee::edit_employee_form))
                .route(web::post().to(employee::update_employee)),
        )
        .service(
            web::resource("/dashboard/delete/{id}")
                .route(web::get().to(employee::delete_employee_confirm))
                .route(web::post().to(employee::delete_employee)),
        )
        .service(
            web::resource("/dashboard/toggle/{id}")
                .route(web::post().to(employee::toggle_employee_status)),
        )
        .service(web::resource("/dashboard/print").route(web::get().to(print::print_employee_list)))
        .service(
            web::resource("/dashboard/print/{id}")
                .route(web::get().to(print::print_employee_detail)),
        )
        .default_service(web::route().to(not_found));
}

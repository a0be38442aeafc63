use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{compose_url, html_page, see_other, toast_from_query, ToastParams};
use crate::errors::AppError;
use crate::forms::FieldError;
use crate::store::Store;
use crate::views::login::login_page;
use crate::views::Toast;

pub const VALID_EMAIL: &str = "admin@demo.com";
pub const VALID_PASSWORD: &str = "Admin@123";

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_login_email")]
    email: String,
    #[validate(custom = "validate_login_password")]
    password: String,
}

fn login_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_login_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(login_error("required", "Email is required"));
    }
    if !validator::validate_email(email) {
        return Err(login_error("email", "Please enter a valid email"));
    }
    Ok(())
}

fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(login_error("required", "Password is required"));
    }
    if password.chars().count() < 6 {
        return Err(login_error("length", "Password must be at least 6 characters"));
    }
    Ok(())
}

fn map_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .map(|(field, list)| {
            let message = list
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            FieldError::new(field, &message)
        })
        .collect()
}

pub async fn index(store: web::Data<Store>) -> HttpResponse {
    if store.is_authenticated() {
        see_other("/dashboard")
    } else {
        see_other("/login")
    }
}

pub async fn login_form(store: web::Data<Store>, query: web::Query<ToastParams>) -> HttpResponse {
    if store.is_authenticated() {
        return see_other("/dashboard");
    }
    let toast = toast_from_query(&query);
    html_page(login_page("", &[], toast.as_ref()))
}

pub async fn login(
    store: web::Data<Store>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    if let Err(errors) = form.validate() {
        let errors = map_validation_errors(&errors);
        return Ok(html_page(login_page(&form.email, &errors, None)));
    }

    if form.email == VALID_EMAIL && form.password == VALID_PASSWORD {
        store.set_authenticated(true).map_err(AppError::from)?;
        let toast = Toast::success("Login successful!");
        Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])))
    } else {
        let toast = Toast::error("Invalid credentials. Please try again.");
        Ok(html_page(login_page(&form.email, &[], Some(&toast))))
    }
}

pub async fn logout(store: web::Data<Store>) -> Result<HttpResponse, actix_web::Error> {
    store.clear_session().map_err(AppError::from)?;
    let toast = Toast::success("Logged out successfully");
    Ok(see_other(&compose_url("/login", &[toast.query_string()])))
}

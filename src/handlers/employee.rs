use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use super::{compose_url, html_page, see_other, toast_from_query, ToastParams};
use crate::errors::AppError;
use crate::forms::{self, EmployeeDraft, FieldError, FormValues, EMPLOYEE_FIELDS};
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::filter::{EmployeeFilter, FilterParams};
use crate::store::Store;
use crate::utils::images::{self, ImageError};
use crate::views::confirm::{confirm_page, ConfirmPrompt};
use crate::views::form::{employee_form_page, FormMode};
use crate::views::{dashboard, Toast};

/// Outcome of draining the upload part of a multipart submission.
enum UploadedImage {
    None,
    Oversized,
    Bytes(Vec<u8>),
}

struct FormSubmission {
    values: FormValues,
    image: UploadedImage,
}

/// Submission after validation and image encoding. `image` holds the data URI
/// to store, either freshly encoded or carried over from a previous attempt.
struct ProcessedForm {
    values: FormValues,
    errors: Vec<FieldError>,
    image: Option<String>,
}

async fn read_submission(mut payload: Multipart) -> Result<FormSubmission, actix_web::Error> {
    let mut values = FormValues::new();
    let mut image = UploadedImage::None;

    while let Some(mut field) = payload.try_next().await? {
        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or("")
            .to_string();

        if name == "profileImage" {
            let mut bytes: Vec<u8> = Vec::new();
            let mut oversized = false;
            while let Some(chunk) = field.try_next().await? {
                if oversized {
                    continue;
                }
                if bytes.len() + chunk.len() > images::MAX_IMAGE_BYTES {
                    oversized = true;
                    bytes.clear();
                    continue;
                }
                bytes.extend_from_slice(&chunk);
            }
            image = if oversized {
                UploadedImage::Oversized
            } else if bytes.is_empty() {
                UploadedImage::None
            } else {
                UploadedImage::Bytes(bytes)
            };
        } else {
            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await? {
                data.extend_from_slice(&chunk);
            }
            values.insert(name, String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok(FormSubmission { values, image })
}

fn process_submission(submission: FormSubmission, require_image: bool) -> ProcessedForm {
    let FormSubmission { values, image } = submission;
    let mut errors = forms::validate(&EMPLOYEE_FIELDS, &values);
    let mut encoded = None;

    match image {
        UploadedImage::Oversized => {
            errors.push(FieldError::new("profileImage", ImageError::TooLarge.message()));
        }
        UploadedImage::Bytes(bytes) => match images::encode_profile_image(&bytes) {
            Ok(uri) => encoded = Some(uri),
            Err(err) => errors.push(FieldError::new("profileImage", err.message())),
        },
        UploadedImage::None => {
            if let Some(existing) = values.get("existingImage") {
                if !existing.is_empty() {
                    encoded = Some(existing.clone());
                }
            }
            if encoded.is_none() && require_image {
                errors.push(FieldError::new("profileImage", "Profile image is required"));
            }
        }
    }

    ProcessedForm {
        values,
        errors,
        image: encoded,
    }
}

fn values_from_employee(employee: &Employee) -> FormValues {
    let mut values = FormValues::new();
    values.insert("fullName".to_string(), employee.full_name.clone());
    values.insert("gender".to_string(), employee.gender.to_string());
    values.insert("dob".to_string(), employee.dob.to_string());
    values.insert("state".to_string(), employee.state.clone());
    if employee.is_active {
        values.insert("isActive".to_string(), "true".to_string());
    }
    values
}

fn render_create_form(form: &ProcessedForm, toast: Option<&Toast>) -> HttpResponse {
    html_page(employee_form_page(
        &FormMode::Create,
        &form.values,
        form.image.as_deref(),
        true,
        &form.errors,
        toast,
    ))
}

pub async fn dashboard(
    store: web::Data<Store>,
    filters: web::Query<FilterParams>,
    toasts: web::Query<ToastParams>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }
    store.seed_if_empty().map_err(AppError::from)?;

    let employees = store.list();
    let filter = EmployeeFilter::from_params(&filters);
    let visible = filter.apply(&employees);
    let toast = toast_from_query(&toasts);
    Ok(html_page(dashboard::dashboard_page(
        &employees,
        &visible,
        &filter,
        toast.as_ref(),
    )))
}

pub async fn new_employee_form(store: web::Data<Store>) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }
    let mut values = FormValues::new();
    values.insert("isActive".to_string(), "true".to_string());
    Ok(html_page(employee_form_page(
        &FormMode::Create,
        &values,
        None,
        false,
        &[],
        None,
    )))
}

pub async fn create_employee(
    store: web::Data<Store>,
    payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let submission = read_submission(payload).await?;
    let form = process_submission(submission, true);
    if !form.errors.is_empty() {
        return Ok(render_create_form(&form, None));
    }

    let draft = EmployeeDraft::from_values(&form.values).ok_or_else(|| {
        AppError::InternalServerError("validated form values failed to parse".to_string())
    })?;
    let image = form.image.clone().ok_or_else(|| {
        AppError::InternalServerError("validated form is missing its image".to_string())
    })?;

    match store.add(draft.into_new(image)) {
        Ok(_) => {
            let toast = Toast::success("Employee added successfully!");
            Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])))
        }
        Err(err) => {
            let toast = Toast::error(&format!("Error saving employee: {}", err));
            Ok(render_create_form(&form, Some(&toast)))
        }
    }
}

pub async fn edit_employee_form(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let id = path.into_inner();
    let Some(employee) = store.get_by_id(&id) else {
        let toast = Toast::error("Employee not found");
        return Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])));
    };

    let values = values_from_employee(&employee);
    let mode = FormMode::Edit(employee.id.clone());
    Ok(html_page(employee_form_page(
        &mode,
        &values,
        Some(&employee.profile_image),
        false,
        &[],
        None,
    )))
}

pub async fn update_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let id = path.into_inner();
    let Some(existing) = store.get_by_id(&id) else {
        let toast = Toast::error("Employee not found");
        return Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])));
    };

    let submission = read_submission(payload).await?;
    let form = process_submission(submission, false);
    let mode = FormMode::Edit(id.clone());

    if !form.errors.is_empty() {
        let preview = form
            .image
            .clone()
            .unwrap_or_else(|| existing.profile_image.clone());
        return Ok(html_page(employee_form_page(
            &mode,
            &form.values,
            Some(&preview),
            false,
            &form.errors,
            None,
        )));
    }

    let draft = EmployeeDraft::from_values(&form.values).ok_or_else(|| {
        AppError::InternalServerError("validated form values failed to parse".to_string())
    })?;

    match store.update(&id, draft.into_patch(form.image.clone())) {
        Ok(Some(_)) => {
            let toast = Toast::success("Employee updated successfully!");
            Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])))
        }
        Ok(None) => {
            let toast = Toast::error("Employee not found");
            Ok(see_other(&compose_url("/dashboard", &[toast.query_string()])))
        }
        Err(err) => {
            let toast = Toast::error(&format!("Error saving employee: {}", err));
            let preview = form
                .image
                .clone()
                .unwrap_or_else(|| existing.profile_image.clone());
            Ok(html_page(employee_form_page(
                &mode,
                &form.values,
                Some(&preview),
                false,
                &form.errors,
                Some(&toast),
            )))
        }
    }
}

pub async fn toggle_employee_status(
    store: web::Data<Store>,
    path: web::Path<String>,
    form: web::Form<FilterParams>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let id = path.into_inner();
    let filter = EmployeeFilter::from_params(&form);
    let criteria = filter.query_string();

    let Some(employee) = store.get_by_id(&id) else {
        return Ok(see_other(&compose_url("/dashboard", &[criteria])));
    };

    let activating = !employee.is_active;
    let patch = EmployeePatch {
        is_active: Some(activating),
        ..Default::default()
    };
    store.update(&id, patch).map_err(AppError::from)?;

    let toast = Toast::success(if activating {
        "Employee activated successfully"
    } else {
        "Employee deactivated successfully"
    });
    Ok(see_other(&compose_url(
        "/dashboard",
        &[criteria, toast.query_string()],
    )))
}

pub async fn delete_employee_confirm(
    store: web::Data<Store>,
    path: web::Path<String>,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let id = path.into_inner();
    let filter = EmployeeFilter::from_params(&query);
    let criteria = filter.query_string();

    let Some(employee) = store.get_by_id(&id) else {
        let toast = Toast::error("Employee not found");
        return Ok(see_other(&compose_url(
            "/dashboard",
            &[criteria, toast.query_string()],
        )));
    };

    let action = compose_url(
        &format!("/dashboard/delete/{}", employee.id),
        &[criteria.clone()],
    );
    let cancel = compose_url("/dashboard", &[criteria]);
    let message = format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        employee.full_name
    );
    let prompt = ConfirmPrompt::new("Delete Employee", &message, &action, &cancel)
        .danger()
        .labels("Delete", "Cancel");
    Ok(html_page(confirm_page(&prompt)))
}

pub async fn delete_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let id = path.into_inner();
    store.remove(&id).map_err(AppError::from)?;

    let filter = EmployeeFilter::from_params(&query);
    let toast = Toast::success("Employee deleted successfully");
    Ok(see_other(&compose_url(
        "/dashboard",
        &[filter.query_string(), toast.query_string()],
    )))
}

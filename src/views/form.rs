use chrono::Utc;

use super::layout::{self, Nav};
use super::{escape_html, inline_error, Toast};
use crate::forms::{FieldError, FieldKind, FieldSpec, FormValues, EMPLOYEE_FIELDS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    fn action(&self) -> String {
        match self {
            FormMode::Create => "/dashboard/add".to_string(),
            FormMode::Edit(id) => format!("/dashboard/edit/{}", id),
        }
    }

    fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

const REQUIRED_MARK: &str = " <span style=\"color:#dc2626\">*</span>";

fn render_field(spec: &FieldSpec, values: &FormValues, errors: &[FieldError]) -> String {
    let value = values.get(spec.name).map(String::as_str).unwrap_or("");
    let mark = if spec.required.is_some() { REQUIRED_MARK } else { "" };
    let error = inline_error(errors, spec.name);
    let control = match spec.kind {
        FieldKind::Text => format!(
            "<label for=\"{name}\">{label}{mark}</label>\
<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\">",
            name = spec.name,
            label = spec.label,
            value = escape_html(value),
            placeholder = spec.placeholder.unwrap_or(""),
        ),
        FieldKind::Radio(options) => {
            let buttons: String = options
                .iter()
                .map(|option| {
                    let checked = if *option == value { " checked" } else { "" };
                    format!(
                        "<label><input type=\"radio\" name=\"{name}\" value=\"{option}\"{checked}> {option}</label>",
                        name = spec.name,
                    )
                })
                .collect();
            format!(
                "<label>{label}{mark}</label><div class=\"radio-row\">{buttons}</div>",
                label = spec.label,
            )
        }
        FieldKind::Date => format!(
            "<label for=\"{name}\">{label}{mark}</label>\
<input type=\"date\" id=\"{name}\" name=\"{name}\" value=\"{value}\" max=\"{today}\">",
            name = spec.name,
            label = spec.label,
            value = escape_html(value),
            today = Utc::now().date_naive(),
        ),
        FieldKind::Select(options) => {
            let placeholder = spec.placeholder.unwrap_or("Select");
            let items: String = options
                .iter()
                .map(|option| {
                    let selected = if *option == value { " selected" } else { "" };
                    format!("<option value=\"{option}\"{selected}>{option}</option>")
                })
                .collect();
            format!(
                "<label for=\"{name}\">{label}{mark}</label>\
<select id=\"{name}\" name=\"{name}\">\
<option value=\"\">{placeholder}</option>{items}</select>",
                name = spec.name,
                label = spec.label,
            )
        }
        FieldKind::Checkbox => {
            let checked = if values.contains_key(spec.name) { " checked" } else { "" };
            format!(
                "<div class=\"check-row\">\
<input type=\"checkbox\" id=\"{name}\" name=\"{name}\" value=\"true\"{checked}>\
<label for=\"{name}\">{label}</label></div>",
                name = spec.name,
                label = spec.label,
            )
        }
    };
    format!("<div class=\"field\">{control}{error}</div>")
}

fn image_block(
    mode: &FormMode,
    preview: Option<&str>,
    carry_preview: bool,
    errors: &[FieldError],
) -> String {
    let mark = if mode.is_edit() { "" } else { REQUIRED_MARK };
    let portrait = match preview {
        Some(uri) => format!(
            "<img class=\"image-preview\" src=\"{}\" alt=\"Profile preview\">",
            escape_html(uri)
        ),
        None => "<div class=\"image-placeholder\"></div>".to_string(),
    };
    let carried = match preview {
        Some(uri) if carry_preview => format!(
            "<input type=\"hidden\" name=\"existingImage\" value=\"{}\">",
            escape_html(uri)
        ),
        _ => String::new(),
    };
    let error = inline_error(errors, "profileImage");
    format!(
        "<div class=\"field\">\
<label for=\"profileImage\">Profile Image{mark}</label>\
<div class=\"image-row\">{portrait}\
<div><input type=\"file\" id=\"profileImage\" name=\"profileImage\" accept=\"image/*\">\
<p class=\"hint\">PNG, JPG up to 5MB</p></div>\
</div>{carried}{error}</div>"
    )
}

pub fn employee_form_page(
    mode: &FormMode,
    values: &FormValues,
    preview: Option<&str>,
    carry_preview: bool,
    errors: &[FieldError],
    toast: Option<&Toast>,
) -> String {
    let (heading, lede, submit) = if mode.is_edit() {
        ("Edit Employee", "Update employee information", "Update Employee")
    } else {
        (
            "Add New Employee",
            "Fill in the details to add a new employee",
            "Add Employee",
        )
    };
    let fields: String = EMPLOYEE_FIELDS
        .iter()
        .map(|spec| render_field(spec, values, errors))
        .collect();
    let content = format!(
        "<div class=\"form-card\">\
<h2>{heading}</h2><p class=\"lede\">{lede}</p>\
<form method=\"post\" action=\"{action}\" enctype=\"multipart/form-data\">\
{image}{fields}\
<div class=\"form-actions\">\
<a class=\"btn btn-outline\" href=\"/dashboard\">Cancel</a>\
<button type=\"submit\" class=\"btn btn-primary\">{submit}</button>\
</div>\
</form></div>",
        action = mode.action(),
        image = image_block(mode, preview, carry_preview, errors),
    );
    layout::app_page(heading, Nav::AddEmployee, toast, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn create_mode_renders_blank_schema_fields() {
        let form = values(&[("isActive", "true")]);
        let html = employee_form_page(&FormMode::Create, &form, None, false, &[], None);
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("Fill in the details to add a new employee"));
        assert!(html.contains("action=\"/dashboard/add\""));
        assert!(html.contains("name=\"fullName\""));
        assert!(html.contains("Select a state"));
        assert!(html.contains("PNG, JPG up to 5MB"));
        assert!(html.contains("type=\"checkbox\" id=\"isActive\" name=\"isActive\" value=\"true\" checked"));
        assert!(html.contains("enctype=\"multipart/form-data\""));
    }

    #[test]
    fn edit_mode_prefills_values_and_preview() {
        let form = values(&[
            ("fullName", "Jane Smith"),
            ("gender", "Female"),
            ("dob", "1988-12-03"),
            ("state", "New York"),
            ("isActive", "true"),
        ]);
        let html = employee_form_page(
            &FormMode::Edit("EMP-0002".to_string()),
            &form,
            Some("data:image/png;base64,QQQQ"),
            false,
            &[],
            None,
        );
        assert!(html.contains("Edit Employee"));
        assert!(html.contains("action=\"/dashboard/edit/EMP-0002\""));
        assert!(html.contains("value=\"Jane Smith\""));
        assert!(html.contains("value=\"Female\" checked"));
        assert!(html.contains("<option value=\"New York\" selected>"));
        assert!(html.contains("src=\"data:image/png;base64,QQQQ\""));
        assert!(!html.contains("existingImage"));
        assert!(html.contains("Update Employee"));
    }

    #[test]
    fn errors_render_next_to_their_fields() {
        let errors = vec![
            FieldError::new("fullName", "Full name is required"),
            FieldError::new("profileImage", "Profile image is required"),
        ];
        let html =
            employee_form_page(&FormMode::Create, &FormValues::new(), None, false, &errors, None);
        assert!(html.contains("Full name is required"));
        assert!(html.contains("Profile image is required"));
    }

    #[test]
    fn create_retry_carries_the_encoded_upload_forward() {
        let html = employee_form_page(
            &FormMode::Create,
            &FormValues::new(),
            Some("data:image/png;base64,KEEP"),
            true,
            &[],
            None,
        );
        assert!(html.contains("name=\"existingImage\" value=\"data:image/png;base64,KEEP\""));
    }
}

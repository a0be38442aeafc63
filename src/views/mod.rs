pub mod confirm;
pub mod dashboard;
pub mod form;
pub mod layout;
pub mod login;
pub mod print;

use chrono::{DateTime, NaiveDate, Utc};

use crate::forms::FieldError;

pub(crate) fn inline_error(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| format!("<p class=\"error-text\">{}</p>", escape_html(&e.message)))
        .unwrap_or_default()
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// "May 15, 1990" style used on screens and the detail printout.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "5/15/1990" style used in the printed list table.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    format_date(timestamp.date_naive())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn parse(value: &str) -> ToastKind {
        if value == "error" {
            ToastKind::Error
        } else {
            ToastKind::Success
        }
    }
}

/// One-shot notification banner, carried across redirects in the query
/// string.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: &str) -> Self {
        Toast {
            message: message.to_string(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Toast {
            message: message.to_string(),
            kind: ToastKind::Error,
        }
    }

    pub fn query_string(&self) -> String {
        format!("toast={}&kind={}", urlencode(&self.message), self.kind.as_str())
    }
}

pub fn not_found_page() -> String {
    layout::bare_page(
        "Page Not Found",
        None,
        "<div class=\"auth-card\" style=\"text-align:center\">\
<h1 style=\"font-size:2.5rem;margin-bottom:.5rem\">404</h1>\
<h2 style=\"margin-bottom:1rem\">Page Not Found</h2>\
<p style=\"color:#4b5563;margin-bottom:2rem\">The page you're looking for doesn't exist or has been moved.</p>\
<p><a class=\"btn btn-primary\" href=\"/dashboard\">Go to Dashboard</a></p>\
<p style=\"margin-top:1rem\"><a class=\"btn btn-outline\" href=\"/login\">Login</a></p>\
</div>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html("<b>\"Bo & Co's\"</b>"),
            "&lt;b&gt;&quot;Bo &amp; Co&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn dates_render_in_both_house_styles() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        assert_eq!(format_date(date), "May 15, 1990");
        assert_eq!(format_date_short(date), "5/15/1990");

        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(created), "Jan 2, 2024");
    }

    #[test]
    fn toast_query_string_is_url_safe() {
        let toast = Toast::success("Login successful!");
        assert_eq!(toast.query_string(), "toast=Login+successful%21&kind=success");
    }
}

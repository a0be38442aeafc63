use super::{escape_html, inline_error, layout, Toast};
use crate::forms::FieldError;

pub fn login_page(email: &str, errors: &[FieldError], toast: Option<&Toast>) -> String {
    let content = format!(
        "<div class=\"auth-card\">\
<div class=\"auth-head\">\
<div class=\"auth-icon\">EMS</div>\
<h1>Employee Management</h1>\
<p class=\"auth-sub\">Sign in to your account</p>\
</div>\
<form method=\"post\" action=\"/login\">\
<div class=\"field\">\
<label for=\"email\">Email Address</label>\
<input type=\"email\" id=\"email\" name=\"email\" value=\"{email}\" placeholder=\"Enter your email\">\
{email_error}\
</div>\
<div class=\"field\">\
<label for=\"password\">Password</label>\
<input type=\"password\" id=\"password\" name=\"password\" placeholder=\"Enter your password\">\
{password_error}\
</div>\
<button type=\"submit\" class=\"btn btn-primary\" style=\"width:100%;padding:.75rem\">Sign In</button>\
</form>\
<div class=\"demo-box\">\
<p style=\"margin-bottom:.5rem;color:#4b5563\">Demo Credentials:</p>\
<p class=\"mono\">Email: admin@demo.com</p>\
<p class=\"mono\">Password: Admin@123</p>\
</div>\
</div>",
        email = escape_html(email),
        email_error = inline_error(errors, "email"),
        password_error = inline_error(errors, "password"),
    );
    layout::bare_page("Sign In - Employee Management", toast, &content)
}

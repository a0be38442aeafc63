use super::{escape_html, Toast, ToastKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    AddEmployee,
}

const STYLES: &str = "\
*{box-sizing:border-box;margin:0}\
body{font-family:'Segoe UI',Arial,sans-serif;background:#f9fafb;color:#111827}\
a{color:#4f46e5;text-decoration:none}\
h1,h2,h3{font-weight:700}\
.shell{display:flex;min-height:100vh}\
.sidebar{width:16rem;background:#fff;border-right:1px solid #e5e7eb;flex-shrink:0}\
.brand{display:block;padding:1.25rem 1rem;background:linear-gradient(to right,#4f46e5,#7c3aed);color:#fff;font-weight:700;font-size:1.1rem;text-align:center}\
.nav{padding:1rem .75rem}\
.nav a{display:block;padding:.6rem 1rem;border-radius:.75rem;color:#4b5563;margin-bottom:.5rem;font-size:.9rem}\
.nav a.current{background:#eef2ff;color:#4338ca;border-left:4px solid #4f46e5}\
.main{flex:1;display:flex;flex-direction:column;min-width:0}\
.header{display:flex;justify-content:space-between;align-items:center;background:#fff;border-bottom:1px solid #e5e7eb;padding:1rem 1.5rem}\
.header h2{font-size:1.25rem;font-weight:600}\
.header-right{display:flex;align-items:center;gap:1rem}\
.user-chip{background:#f9fafb;padding:.5rem .75rem;border-radius:.5rem;font-size:.875rem;font-weight:500}\
.content{padding:1.5rem}\
.cards{display:grid;grid-template-columns:repeat(3,1fr);gap:1.5rem;margin-bottom:1.5rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem}\
.metric-label{font-size:.875rem;color:#4b5563;font-weight:500}\
.metric-value{font-size:1.5rem;font-weight:700}\
.panel{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem}\
.panel-head{display:flex;justify-content:space-between;align-items:center;margin-bottom:1.5rem;flex-wrap:wrap;gap:.75rem}\
.panel-head h2{font-size:1.25rem}\
.head-actions{display:flex;gap:.75rem}\
.btn{display:inline-block;padding:.5rem 1rem;border-radius:.5rem;border:1px solid transparent;font-size:.875rem;cursor:pointer;font-family:inherit}\
.btn-primary{background:#4f46e5;color:#fff}\
.btn-primary:hover{background:#4338ca}\
.btn-outline{background:#fff;border-color:#d1d5db;color:#374151}\
.btn-outline:hover{background:#f9fafb}\
.btn-danger{background:#dc2626;color:#fff}\
.btn-danger:hover{background:#b91c1c}\
.filters{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem;margin-bottom:1.5rem}\
label{display:block;font-size:.875rem;font-weight:500;color:#374151;margin-bottom:.5rem}\
input[type=text],input[type=email],input[type=password],input[type=date],select{width:100%;padding:.5rem .75rem;border:1px solid #d1d5db;border-radius:.5rem;font-size:.9rem;font-family:inherit;background:#fff}\
table{width:100%;border-collapse:collapse;white-space:nowrap}\
th{text-align:left;padding:.75rem 1rem;font-size:.75rem;text-transform:uppercase;letter-spacing:.05em;color:#6b7280;background:#f9fafb}\
td{padding:.75rem 1rem;border-top:1px solid #e5e7eb;font-size:.875rem;vertical-align:middle}\
.emp-cell{display:flex;align-items:center;gap:1rem}\
.avatar{width:2.5rem;height:2.5rem;border-radius:50%;object-fit:cover}\
.emp-name{font-weight:500}\
.emp-id{color:#6b7280;font-size:.8rem}\
.status-btn{border:none;border-radius:1rem;padding:.25rem .75rem;font-size:.75rem;cursor:pointer;font-family:inherit}\
.status-active{background:#d1fae5;color:#065f46}\
.status-inactive{background:#fee2e2;color:#991b1b}\
.row-actions{display:flex;align-items:center;gap:.5rem}\
.row-actions form{display:inline}\
.link-danger{color:#dc2626}\
.toast{display:flex;justify-content:space-between;align-items:center;padding:.75rem 1rem;margin:1rem 1.5rem 0;border-radius:.5rem;font-size:.9rem}\
.toast-success{background:#d1fae5;color:#065f46}\
.toast-error{background:#fee2e2;color:#991b1b}\
.toast-close{background:none;border:none;font-size:1.1rem;cursor:pointer;color:inherit}\
.error-text{color:#dc2626;font-size:.85rem;margin-top:.25rem}\
.empty-state{text-align:center;padding:3rem 1rem}\
.empty-state h3{font-size:1.1rem;margin-bottom:.5rem}\
.empty-state p{color:#6b7280;margin-bottom:1rem}\
.auth-bg{min-height:100vh;display:flex;align-items:center;justify-content:center;background:linear-gradient(135deg,#eff6ff,#e0e7ff);padding:1rem}\
.auth-card{width:100%;max-width:28rem;background:#fff;border-radius:.75rem;box-shadow:0 10px 25px rgba(0,0,0,.1);padding:2rem}\
.auth-head{text-align:center;margin-bottom:2rem}\
.auth-icon{width:4rem;height:4rem;background:#4f46e5;border-radius:50%;margin:0 auto 1rem;display:flex;align-items:center;justify-content:center;color:#fff;font-size:1.5rem;font-weight:700}\
.auth-sub{color:#4b5563;margin-top:.5rem}\
.demo-box{background:#f9fafb;border-radius:.5rem;padding:1rem;margin-top:1.5rem;font-size:.875rem}\
.demo-box .mono{font-family:monospace;color:#1f2937}\
.field{margin-bottom:1.25rem}\
.radio-row{display:flex;gap:1.5rem}\
.radio-row label{display:flex;align-items:center;gap:.5rem;font-weight:400;margin:0}\
.check-row{display:flex;align-items:center;gap:.5rem}\
.check-row label{margin:0;font-weight:400}\
.image-row{display:flex;align-items:center;gap:1.5rem}\
.image-preview{width:6rem;height:6rem;border-radius:50%;object-fit:cover;background:#e5e7eb}\
.image-placeholder{width:6rem;height:6rem;border-radius:50%;background:#e5e7eb}\
.hint{font-size:.75rem;color:#6b7280;margin-top:.25rem}\
.form-actions{display:flex;justify-content:flex-end;gap:1rem;border-top:1px solid #e5e7eb;padding-top:1.5rem;margin-top:1.5rem}\
.form-card{max-width:56rem;margin:0 auto;background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem}\
.form-card .lede{color:#4b5563;margin:.5rem 0 1.5rem}\
.confirm-card{max-width:32rem;margin:10vh auto;background:#fff;border-radius:.5rem;box-shadow:0 10px 25px rgba(0,0,0,.15);padding:1.5rem}\
.confirm-icon{width:3rem;height:3rem;border-radius:50%;display:flex;align-items:center;justify-content:center;margin-bottom:1rem;font-weight:700}\
.confirm-danger{background:#fee2e2;color:#dc2626}\
.confirm-default{background:#eef2ff;color:#4f46e5}\
.confirm-card p{color:#6b7280;margin-top:.5rem}\
.confirm-actions{display:flex;justify-content:flex-end;gap:.75rem;margin-top:1.5rem}\
";

pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLES,
        body
    )
}

fn toast_banner(toast: &Toast) -> String {
    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    format!(
        "<div class=\"{}\" role=\"status\">{}\
<button type=\"button\" class=\"toast-close\" onclick=\"this.parentElement.remove()\">&times;</button></div>",
        class,
        escape_html(&toast.message)
    )
}

/// Standalone page without the dashboard chrome. Used for login, the
/// confirmation prompt, and error pages.
pub fn bare_page(title: &str, toast: Option<&Toast>, content: &str) -> String {
    let banner = toast.map(|t| toast_banner(t)).unwrap_or_default();
    document(
        title,
        &format!("<div class=\"auth-bg\"><div style=\"width:100%\">{banner}{content}</div></div>"),
    )
}

fn sidebar(active: Nav) -> String {
    let dash_class = if active == Nav::Dashboard { " class=\"current\"" } else { "" };
    let add_class = if active == Nav::AddEmployee { " class=\"current\"" } else { "" };
    format!(
        "<aside class=\"sidebar\"><span class=\"brand\">EMS Dashboard</span>\
<nav class=\"nav\">\
<a href=\"/dashboard\"{dash_class}>Dashboard</a>\
<a href=\"/dashboard/add\"{add_class}>Add Employee</a>\
</nav></aside>"
    )
}

fn header() -> String {
    "<header class=\"header\"><h2>Employee Management System</h2>\
<div class=\"header-right\"><span class=\"user-chip\">Admin User</span>\
<form method=\"post\" action=\"/logout\">\
<button type=\"submit\" class=\"btn btn-outline\">Logout</button>\
</form></div></header>"
        .to_string()
}

/// Full dashboard chrome: sidebar, header, optional toast, then content.
pub fn app_page(title: &str, active: Nav, toast: Option<&Toast>, content: &str) -> String {
    let banner = toast.map(|t| toast_banner(t)).unwrap_or_default();
    document(
        title,
        &format!(
            "<div class=\"shell\">{}<div class=\"main\">{}{}<main class=\"content\">{}</main></div></div>",
            sidebar(active),
            header(),
            banner,
            content
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_page_carries_chrome_and_content() {
        let html = app_page("Dashboard", Nav::Dashboard, None, "<p>hello</p>");
        assert!(html.contains("EMS Dashboard"));
        assert!(html.contains("Employee Management System"));
        assert!(html.contains("Admin User"));
        assert!(html.contains("action=\"/logout\""));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("<a href=\"/dashboard\" class=\"current\">"));
    }

    #[test]
    fn toast_banner_reflects_kind_and_escapes_text() {
        let html = app_page(
            "Dashboard",
            Nav::Dashboard,
            Some(&Toast::error("bad <input>")),
            "",
        );
        assert!(html.contains("toast-error"));
        assert!(html.contains("bad &lt;input&gt;"));
    }
}

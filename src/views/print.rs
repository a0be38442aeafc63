use chrono::Utc;

use super::{escape_html, format_date, format_date_short, format_timestamp};
use crate::models::employee::Employee;

const LIST_STYLES: &str = "\
body{font-family:Arial,sans-serif;padding:20px}\
.header{text-align:center;margin-bottom:30px}\
table{width:100%;border-collapse:collapse;margin-top:20px}\
th,td{border:1px solid #ddd;padding:8px;text-align:left}\
th{background-color:#f2f2f2;font-weight:bold}\
.profile-img{width:40px;height:40px;border-radius:50%;object-fit:cover}\
.status{padding:4px 8px;border-radius:12px;font-size:12px}\
.active{background-color:#d1fae5;color:#065f46}\
.inactive{background-color:#fee2e2;color:#991b1b}\
@media print{body{margin:0}.no-print{display:none}}\
";

const DETAIL_STYLES: &str = "\
body{font-family:Arial,sans-serif;padding:20px}\
.header{text-align:center;margin-bottom:30px}\
.employee-card{border:1px solid #ddd;padding:20px;border-radius:8px}\
.profile-img{width:100px;height:100px;border-radius:50%;object-fit:cover;margin:0 auto 20px;display:block}\
.info-row{display:flex;justify-content:space-between;margin-bottom:10px;padding:8px 0;border-bottom:1px solid #eee}\
.label{font-weight:bold}\
.status{padding:4px 12px;border-radius:20px;font-size:12px}\
.active{background-color:#d1fae5;color:#065f46}\
.inactive{background-color:#fee2e2;color:#991b1b}\
";

const PRINT_ON_LOAD: &str =
    "<script>window.addEventListener('load', () => window.print());</script>";

fn print_document(title: &str, styles: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
<style>{}</style>\n</head>\n<body>\n{}\n{}\n</body>\n</html>\n",
        escape_html(title),
        styles,
        body,
        PRINT_ON_LOAD
    )
}

fn status_badge(employee: &Employee) -> String {
    let class = if employee.is_active { "active" } else { "inactive" };
    format!(
        "<span class=\"status {}\">{}</span>",
        class,
        employee.status_label()
    )
}

/// Printable roster table for whatever subset the filters let through.
pub fn employee_list_document(employees: &[&Employee]) -> String {
    let rows: String = employees
        .iter()
        .map(|employee| {
            format!(
                "<tr>\
<td>{id}</td>\
<td><img src=\"{image}\" alt=\"{name}\" class=\"profile-img\"></td>\
<td>{name}</td>\
<td>{gender}</td>\
<td>{dob}</td>\
<td>{state}</td>\
<td>{status}</td>\
</tr>",
                id = escape_html(&employee.id),
                image = escape_html(&employee.profile_image),
                name = escape_html(&employee.full_name),
                gender = employee.gender,
                dob = format_date_short(employee.dob),
                state = escape_html(&employee.state),
                status = status_badge(employee),
            )
        })
        .collect();
    let body = format!(
        "<div class=\"header\">\
<h1>Employee Management System</h1>\
<h2>Employee List</h2>\
<p>Generated on {generated}</p>\
<p>Total Employees: {total}</p>\
</div>\
<table>\
<thead><tr><th>ID</th><th>Profile</th><th>Full Name</th><th>Gender</th>\
<th>Date of Birth</th><th>State</th><th>Status</th></tr></thead>\
<tbody>{rows}</tbody>\
</table>",
        generated = format_date_short(Utc::now().date_naive()),
        total = employees.len(),
    );
    print_document("Employee List", LIST_STYLES, &body)
}

/// Printable detail card for one record.
pub fn employee_detail_document(employee: &Employee) -> String {
    let info_rows = [
        ("Employee ID:", escape_html(&employee.id)),
        ("Full Name:", escape_html(&employee.full_name)),
        ("Gender:", employee.gender.to_string()),
        ("Date of Birth:", format_date(employee.dob)),
        ("State:", escape_html(&employee.state)),
        ("Status:", status_badge(employee)),
        ("Created:", format_timestamp(employee.created_at)),
    ];
    let rows: String = info_rows
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class=\"info-row\"><span class=\"label\">{label}</span><span>{value}</span></div>"
            )
        })
        .collect();
    let body = format!(
        "<div class=\"header\">\
<h1>Employee Details</h1>\
<p>Generated on {generated}</p>\
</div>\
<div class=\"employee-card\">\
<img src=\"{image}\" alt=\"{name}\" class=\"profile-img\">\
{rows}\
</div>",
        generated = format_date_short(Utc::now().date_naive()),
        image = escape_html(&employee.profile_image),
        name = escape_html(&employee.full_name),
    );
    print_document(
        &format!("Employee Details - {}", employee.full_name),
        DETAIL_STYLES,
        &body,
    )
}

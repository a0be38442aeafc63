use super::layout::{self, Nav};
use super::{escape_html, format_date, Toast};
use crate::models::employee::Employee;
use crate::models::filter::EmployeeFilter;

fn with_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}

fn summary_cards(all: &[Employee]) -> String {
    let total = all.len();
    let active = all.iter().filter(|e| e.is_active).count();
    let inactive = total - active;
    format!(
        "<div class=\"cards\">\
<div class=\"card\"><p class=\"metric-label\">Total Employees</p><p class=\"metric-value\">{total}</p></div>\
<div class=\"card\"><p class=\"metric-label\">Active Employees</p><p class=\"metric-value\">{active}</p></div>\
<div class=\"card\"><p class=\"metric-label\">Inactive Employees</p><p class=\"metric-value\">{inactive}</p></div>\
</div>"
    )
}

fn filter_bar(filter: &EmployeeFilter) -> String {
    let gender_options = ["All", "Male", "Female"];
    let status_options = ["All", "Active", "Inactive"];
    let gender_select: String = gender_options
        .iter()
        .map(|value| {
            let selected = if *value == filter.gender_label() { " selected" } else { "" };
            let label = if *value == "All" { "All Genders" } else { value };
            format!("<option value=\"{value}\"{selected}>{label}</option>")
        })
        .collect();
    let status_select: String = status_options
        .iter()
        .map(|value| {
            let selected = if *value == filter.status_label() { " selected" } else { "" };
            let label = if *value == "All" { "All Status" } else { value };
            format!("<option value=\"{value}\"{selected}>{label}</option>")
        })
        .collect();
    format!(
        "<form method=\"get\" action=\"/dashboard\" class=\"filters\">\
<div><label for=\"search\">Search by Name</label>\
<input type=\"text\" id=\"search\" name=\"search\" value=\"{search}\" placeholder=\"Search employees...\"></div>\
<div><label for=\"genderFilter\">Filter by Gender</label>\
<select id=\"genderFilter\" name=\"gender\" onchange=\"this.form.submit()\">{gender_select}</select></div>\
<div><label for=\"statusFilter\">Filter by Status</label>\
<select id=\"statusFilter\" name=\"status\" onchange=\"this.form.submit()\">{status_select}</select></div>\
</form>",
        search = escape_html(&filter.search),
    )
}

fn table_row(employee: &Employee, filter: &EmployeeFilter) -> String {
    let status_class = if employee.is_active {
        "status-btn status-active"
    } else {
        "status-btn status-inactive"
    };
    let hidden_filters = format!(
        "<input type=\"hidden\" name=\"search\" value=\"{}\">\
<input type=\"hidden\" name=\"gender\" value=\"{}\">\
<input type=\"hidden\" name=\"status\" value=\"{}\">",
        escape_html(&filter.search),
        filter.gender_label(),
        filter.status_label(),
    );
    format!(
        "<tr>\
<td><div class=\"emp-cell\">\
<img class=\"avatar\" src=\"{image}\" alt=\"{name}\">\
<div><div class=\"emp-name\">{name}</div><div class=\"emp-id\">{id}</div></div>\
</div></td>\
<td>{gender}</td>\
<td>{dob}</td>\
<td>{state}</td>\
<td><form method=\"post\" action=\"/dashboard/toggle/{id}\">{hidden_filters}\
<button type=\"submit\" class=\"{status_class}\" title=\"Toggle Status\">{status}</button></form></td>\
<td><div class=\"row-actions\">\
<a href=\"/dashboard/edit/{id}\" title=\"Edit Employee\">Edit</a>\
<a class=\"link-danger\" href=\"{delete_href}\" title=\"Delete Employee\">Delete</a>\
<a href=\"/dashboard/print/{id}\" target=\"_blank\" title=\"Print Employee\">Print</a>\
</div></td>\
</tr>",
        image = escape_html(&employee.profile_image),
        name = escape_html(&employee.full_name),
        id = escape_html(&employee.id),
        gender = employee.gender,
        dob = format_date(employee.dob),
        state = escape_html(&employee.state),
        status = employee.status_label(),
        delete_href = with_query(
            &format!("/dashboard/delete/{}", employee.id),
            &filter.query_string()
        ),
    )
}

fn employee_table(all: &[Employee], visible: &[&Employee], filter: &EmployeeFilter) -> String {
    if visible.is_empty() {
        let (hint, action) = if all.is_empty() {
            (
                "Get started by adding your first employee.",
                "<a class=\"btn btn-primary\" href=\"/dashboard/add\">Add Employee</a>",
            )
        } else {
            ("Try adjusting your search or filter criteria.", "")
        };
        return format!(
            "<div class=\"empty-state\"><h3>No employees found</h3><p>{hint}</p>{action}</div>"
        );
    }
    let rows: String = visible.iter().map(|e| table_row(e, filter)).collect();
    format!(
        "<table>\
<thead><tr><th>Employee</th><th>Gender</th><th>Date of Birth</th><th>State</th><th>Status</th><th>Actions</th></tr></thead>\
<tbody>{rows}</tbody>\
</table>"
    )
}

pub fn dashboard_page(
    all: &[Employee],
    visible: &[&Employee],
    filter: &EmployeeFilter,
    toast: Option<&Toast>,
) -> String {
    let query = filter.query_string();
    let content = format!(
        "{cards}\
<div class=\"panel\">\
<div class=\"panel-head\">\
<h2>Employee Management</h2>\
<div class=\"head-actions\">\
<a class=\"btn btn-outline\" href=\"{print_href}\" target=\"_blank\">Print Employees</a>\
<a class=\"btn btn-primary\" href=\"/dashboard/add\">Add Employee</a>\
</div>\
</div>\
{filters}\
{table}\
</div>",
        cards = summary_cards(all),
        print_href = with_query("/dashboard/print", &query),
        filters = filter_bar(filter),
        table = employee_table(all, visible, filter),
    );
    layout::app_page("Dashboard - Employee Management", Nav::Dashboard, toast, &content)
}

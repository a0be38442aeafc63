use actix_web::{web, HttpResponse};

use super::{compose_url, html_page, see_other};
use crate::models::filter::{EmployeeFilter, FilterParams};
use crate::store::Store;
use crate::views::print::{employee_detail_document, employee_list_document};
use crate::views::Toast;

pub async fn print_employee_list(
    store: web::Data<Store>,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, actix_web::Error> {
    if !store.is_authenticated() {
        return Ok(see_other("/login"));
    }

    let employees = store.list();
    let filter = EmployeeFilter::from_params(&query);
    let visible = filter.apply(&employees);
    Ok(html_page(employee_list_document(&visible)))
}

pub async fn print_employee_detail(
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
    Ok(html_page(employee_detail_document(&employee)))
}

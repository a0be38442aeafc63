use serde::Deserialize;

use crate::models::employee::{Employee, Gender};

/// Raw filter parameters as they arrive in a query string or form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
}

/// Resolved list filter. `None` means the "All" sentinel for that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub search: String,
    pub gender: Option<Gender>,
    pub status: Option<bool>,
}

impl EmployeeFilter {
    pub fn from_params(params: &FilterParams) -> Self {
        let search = params.search.clone().unwrap_or_default();
        let gender = params
            .gender
            .as_deref()
            .and_then(|value| value.parse::<Gender>().ok());
        let status = match params.status.as_deref() {
            Some("Active") => Some(true),
            Some("Inactive") => Some(false),
            _ => None,
        };
        EmployeeFilter {
            search,
            gender,
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.gender.is_none() && self.status.is_none()
    }

    /// Case-insensitive substring match on the name, then exact gender and
    /// status matches. All active criteria must hold.
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !employee.full_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if employee.gender != gender {
                return false;
            }
        }
        if let Some(active) = self.status {
            if employee.is_active != active {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }

    pub fn gender_label(&self) -> &'static str {
        match self.gender {
            Some(Gender::Male) => "Male",
            Some(Gender::Female) => "Female",
            None => "All",
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(true) => "Active",
            Some(false) => "Inactive",
            None => "All",
        }
    }

    /// Query-string form of the active criteria, used to keep the filter
    /// alive across redirects. Empty when nothing is filtered.
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            let encoded: String =
                url::form_urlencoded::byte_serialize(self.search.as_bytes()).collect();
            parts.push(format!("search={}", encoded));
        }
        if self.gender.is_some() {
            parts.push(format!("gender={}", self.gender_label()));
        }
        if self.status.is_some() {
            parts.push(format!("status={}", self.status_label()));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn employee(id: &str, name: &str, gender: Gender, active: bool) -> Employee {
        let now = Utc::now();
        Employee {
            id: id.to_string(),
            profile_image: String::new(),
            full_name: name.to_string(),
            gender,
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            state: "California".to_string(),
            is_active: active,
            created_at: now,
            updated_at: now,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee("EMP-0001", "Alice", Gender::Male, true),
            employee("EMP-0002", "Bob", Gender::Female, false),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let list = roster();
        let filter = EmployeeFilter {
            search: "ALI".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&list);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Alice");
    }

    #[test]
    fn gender_filter_matches_exactly() {
        let list = roster();
        let filter = EmployeeFilter {
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let hits = filter.apply(&list);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Bob");
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let list = roster();
        let filter = EmployeeFilter {
            search: "ali".to_string(),
            gender: Some(Gender::Female),
            ..Default::default()
        };
        assert!(filter.apply(&list).is_empty());
    }

    #[test]
    fn status_filter_selects_by_active_flag() {
        let list = roster();
        let filter = EmployeeFilter {
            status: Some(false),
            ..Default::default()
        };
        let hits = filter.apply(&list);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Bob");
    }

    #[test]
    fn all_sentinels_pass_everything_through() {
        let list = roster();
        let filter = EmployeeFilter::from_params(&FilterParams {
            search: None,
            gender: Some("All".to_string()),
            status: Some("All".to_string()),
        });
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&list).len(), 2);
    }

    #[test]
    fn query_string_round_trips_the_criteria() {
        let filter = EmployeeFilter {
            search: "a b".to_string(),
            gender: Some(Gender::Female),
            status: Some(true),
        };
        assert_eq!(filter.query_string(), "search=a+b&gender=Female&status=Active");
        assert_eq!(EmployeeFilter::default().query_string(), "");
    }
}

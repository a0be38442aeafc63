use chrono::Utc;
use std::io;

use super::kv::{KvBackend, StorageError};
use super::{seed, Store, StoreEvent, EMPLOYEES_KEY};
use crate::models::employee::{Employee, EmployeePatch, NewEmployee};

/// Next id from the highest numeric suffix already in use. Records with a
/// suffix that does not parse force a timestamp id so we never collide.
fn next_id(employees: &[Employee]) -> String {
    let mut max = 0u32;
    for employee in employees {
        match employee
            .id
            .split('-')
            .nth(1)
            .and_then(|suffix| suffix.parse::<u32>().ok())
        {
            Some(number) => max = max.max(number),
            None => return format!("EMP-{}", Utc::now().timestamp_millis()),
        }
    }
    format!("EMP-{:04}", max + 1)
}

fn read_list(backend: &dyn KvBackend) -> Vec<Employee> {
    match backend.get_item(EMPLOYEES_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        None => Vec::new(),
    }
}

fn write_list(backend: &mut dyn KvBackend, employees: &[Employee]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(employees)
        .map_err(|err| StorageError::Io(io::Error::new(io::ErrorKind::Other, err)))?;
    backend.set_item(EMPLOYEES_KEY, &raw)
}

impl Store {
    pub fn list(&self) -> Vec<Employee> {
        read_list(&**self.backend())
    }

    pub fn get_by_id(&self, id: &str) -> Option<Employee> {
        self.list().into_iter().find(|e| e.id == id)
    }

    pub fn add(&self, new: NewEmployee) -> Result<Employee, StorageError> {
        let (employee, count) = {
            let mut backend = self.backend();
            let mut employees = read_list(&**backend);
            let now = Utc::now();
            let employee = Employee {
                id: next_id(&employees),
                profile_image: new.profile_image,
                full_name: new.full_name,
                gender: new.gender,
                dob: new.dob,
                state: new.state,
                is_active: new.is_active,
                created_at: now,
                updated_at: now,
            };
            employees.push(employee.clone());
            write_list(&mut **backend, &employees)?;
            (employee, employees.len())
        };
        self.notify(StoreEvent::EmployeesChanged { count });
        Ok(employee)
    }

    /// Applies the patch to the matching record. Id and creation time are
    /// never touched; the update time always advances. Returns `Ok(None)`
    /// when no record has the given id.
    pub fn update(&self, id: &str, patch: EmployeePatch) -> Result<Option<Employee>, StorageError> {
        let (updated, count) = {
            let mut backend = self.backend();
            let mut employees = read_list(&**backend);
            let Some(slot) = employees.iter_mut().find(|e| e.id == id) else {
                return Ok(None);
            };
            if let Some(profile_image) = patch.profile_image {
                slot.profile_image = profile_image;
            }
            if let Some(full_name) = patch.full_name {
                slot.full_name = full_name;
            }
            if let Some(gender) = patch.gender {
                slot.gender = gender;
            }
            if let Some(dob) = patch.dob {
                slot.dob = dob;
            }
            if let Some(state) = patch.state {
                slot.state = state;
            }
            if let Some(is_active) = patch.is_active {
                slot.is_active = is_active;
            }
            slot.updated_at = Utc::now();
            let updated = slot.clone();
            write_list(&mut **backend, &employees)?;
            (updated, employees.len())
        };
        self.notify(StoreEvent::EmployeesChanged { count });
        Ok(Some(updated))
    }

    /// Drops the matching record and persists the remaining list as-is.
    /// Removing an unknown id is not an error.
    pub fn remove(&self, id: &str) -> Result<(), StorageError> {
        let count = {
            let mut backend = self.backend();
            let mut employees = read_list(&**backend);
            employees.retain(|e| e.id != id);
            write_list(&mut **backend, &employees)?;
            employees.len()
        };
        self.notify(StoreEvent::EmployeesChanged { count });
        Ok(())
    }

    /// Writes the sample roster the first time the store is used. A present
    /// employees entry, even an empty list, is left alone.
    pub fn seed_if_empty(&self) -> Result<bool, StorageError> {
        let seeded = {
            let mut backend = self.backend();
            if backend.get_item(EMPLOYEES_KEY).is_some() {
                None
            } else {
                let employees = seed::sample_employees(Utc::now());
                write_list(&mut **backend, &employees)?;
                Some(employees.len())
            }
        };
        match seeded {
            Some(count) => {
                self.notify(StoreEvent::EmployeesChanged { count });
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

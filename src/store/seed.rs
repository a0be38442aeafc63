use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::employee::{Employee, Gender};

type SeedRow = (&'static str, Gender, (i32, u32, u32), &'static str, bool, &'static str);

// name, gender, dob, state, active flag, avatar circle color
const SEED_ROWS: [SeedRow; 5] = [
    ("John Doe", Gender::Male, (1990, 5, 15), "California", true, "#6366F1"),
    ("Jane Smith", Gender::Female, (1988, 12, 3), "New York", true, "#F56565"),
    ("Mike Johnson", Gender::Male, (1992, 8, 20), "Texas", false, "#10B981"),
    ("Sarah Wilson", Gender::Female, (1985, 3, 10), "Florida", true, "#F59928"),
    ("David Brown", Gender::Male, (1993, 11, 25), "Illinois", true, "#8B5CF6"),
];

fn avatar_data_uri(fill: &str) -> String {
    let svg = format!(
        "<svg width=\"40\" height=\"40\" viewBox=\"0 0 40 40\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\">\n\
<circle cx=\"20\" cy=\"20\" r=\"20\" fill=\"{fill}\"/>\n\
<svg x=\"8\" y=\"8\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\">\n\
<path d=\"M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2\" stroke=\"white\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n\
<circle cx=\"12\" cy=\"7\" r=\"4\" stroke=\"white\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n\
</svg>\n\
</svg>\n"
    );
    format!("data:image/svg+xml;base64,{}", B64.encode(svg))
}

pub fn sample_employees(now: DateTime<Utc>) -> Vec<Employee> {
    SEED_ROWS
        .into_iter()
        .enumerate()
        .map(|(index, (name, gender, (year, month, day), state, active, fill))| Employee {
            id: format!("EMP-{:04}", index + 1),
            profile_image: avatar_data_uri(fill),
            full_name: name.to_string(),
            gender,
            dob: NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid"),
            state: state.to_string(),
            is_active: active,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_five_records_with_sequential_ids() {
        let list = sample_employees(Utc::now());
        assert_eq!(list.len(), 5);
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["EMP-0001", "EMP-0002", "EMP-0003", "EMP-0004", "EMP-0005"]);
        assert_eq!(list[0].full_name, "John Doe");
        assert_eq!(list[2].full_name, "Mike Johnson");
        assert!(!list[2].is_active);
    }

    #[test]
    fn avatars_encode_the_per_record_color() {
        let uri = avatar_data_uri("#6366F1");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(B64.decode(payload).unwrap()).unwrap();
        assert!(svg.contains("fill=\"#6366F1\""));
        assert!(svg.starts_with("<svg width=\"40\""));
    }

    #[test]
    fn first_avatar_matches_the_known_indigo_badge() {
        let uri = avatar_data_uri("#6366F1");
        assert_eq!(
            uri,
            "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAiIGhlaWdodD0iNDAiIHZpZXdCb3g9IjAgMCA0MCA0MCIgZmlsbD0ibm9uZSIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj4KPGNpcmNsZSBjeD0iMjAiIGN5PSIyMCIgcj0iMjAiIGZpbGw9IiM2MzY2RjEiLz4KPHN2ZyB4PSI4IiB5PSI4IiB3aWR0aD0iMjQiIGhlaWdodD0iMjQiIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0ibm9uZSI+CjxwYXRoIGQ9Ik0yMCAyMXYtMmE0IDQgMCAwIDAtNC00SDhhNCA0IDAgMCAwLTQgNHYyIiBzdHJva2U9IndoaXRlIiBzdHJva2Utd2lkdGg9IjIiIHN0cm9rZS1saW5lY2FwPSJyb3VuZCIgc3Ryb2tlLWxpbmVqb2luPSJyb3VuZCIvPgo8Y2lyY2xlIGN4PSIxMiIgY3k9IjciIHI9IjQiIHN0cm9rZT0id2hpdGUiIHN0cm9rZS13aWR0aD0iMiIgc3Ryb2tlLWxpbmVjYXA9InJvdW5kIiBzdHJva2UtbGluZWpvaW49InJvdW5kIi8+Cjwvc3ZnPgo8L3N2Zz4K"
        );
    }
}

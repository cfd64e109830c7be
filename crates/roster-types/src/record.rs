use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// NOTE: Wire Shape Goals
//
// 1. Opacity: identifiers are server-assigned and never interpreted.
//    - The server may emit integers or strings; we echo back the same JSON shape.
//
// 2. Leniency: list responses are read with defaults for every optional column.
//    - A missing `salary` and an explicit `null` are the same thing to the UI.
//
// 3. No client-side derivation: `department_name` is denormalized by the server
//    and rendered as-is, even if the department list says otherwise.

/// Server-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Parse a form value (e.g. the selected department option).
    ///
    /// Digit-only input becomes a numeric id so it serializes the way the
    /// server emitted it; anything else stays text.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<i64>() {
            Ok(n) if !trimmed.starts_with('+') => RecordId::Number(n),
            _ => RecordId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecordId::parse(s))
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

/// Monetary amount as delivered by the server.
///
/// The backend stores salaries as floats, but nothing stops a row from
/// carrying a numeric string, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Numeric value, if the amount is present and finite.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Number(n) if n.is_finite() => Some(*n),
            Amount::Number(_) => None,
            Amount::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Raw text used to pre-fill the salary input.
    pub fn to_input(&self) -> String {
        match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department_id: Option<RecordId>,
    /// Display name joined in by the server
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub salary: Option<Amount>,
    #[serde(default)]
    pub hire_date: Option<String>,
}

impl Employee {
    /// Salary as a number, skipping absent or non-numeric values.
    pub fn numeric_salary(&self) -> Option<f64> {
        self.salary.as_ref().and_then(Amount::as_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_keeps_wire_shape() {
        let numeric: RecordId = serde_json::from_value(json!(7)).unwrap();
        let textual: RecordId = serde_json::from_value(json!("emp-7")).unwrap();

        assert_eq!(numeric, RecordId::Number(7));
        assert_eq!(textual, RecordId::Text("emp-7".to_string()));
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(&textual).unwrap(), json!("emp-7"));
    }

    #[test]
    fn test_record_id_parse_from_form_value() {
        assert_eq!(RecordId::parse("12"), RecordId::Number(12));
        assert_eq!(RecordId::parse(" 12 "), RecordId::Number(12));
        assert_eq!(RecordId::parse("+12"), RecordId::Text("+12".to_string()));
        assert_eq!(RecordId::parse("ops"), RecordId::Text("ops".to_string()));
        assert_eq!(RecordId::parse("12").to_string(), "12");
    }

    #[test]
    fn test_employee_defaults_missing_columns() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 3,
            "name": "Ana"
        }))
        .unwrap();

        assert_eq!(employee.department_id, None);
        assert_eq!(employee.department_name, None);
        assert_eq!(employee.salary, None);
        assert_eq!(employee.hire_date, None);
    }

    #[test]
    fn test_numeric_salary_skips_garbage() {
        let mut employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Bo",
            "salary": 1250.5
        }))
        .unwrap();
        assert_eq!(employee.numeric_salary(), Some(1250.5));

        employee.salary = Some(Amount::Text("2000".to_string()));
        assert_eq!(employee.numeric_salary(), Some(2000.0));

        employee.salary = Some(Amount::Text("n/a".to_string()));
        assert_eq!(employee.numeric_salary(), None);

        employee.salary = None;
        assert_eq!(employee.numeric_salary(), None);
    }

    #[test]
    fn test_amount_to_input_drops_trailing_zero_fraction() {
        assert_eq!(Amount::Number(50000.0).to_input(), "50000");
        assert_eq!(Amount::Number(1500.5).to_input(), "1500.5");
    }
}

//! Customer domain entity

use chrono::{DateTime, Utc};

/// Guest identified by a unique email
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer from a single "full name" field.
    pub fn from_full_name(full_name: &str, email: impl Into<String>, phone: Option<String>) -> Self {
        let (first_name, last_name) = split_name(full_name);
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email: email.into(),
            phone,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// First word is the first name, the rest is the last name.
pub fn split_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_space() {
        assert_eq!(
            split_name("Mary Ann Smith"),
            ("Mary".to_string(), "Ann Smith".to_string())
        );
    }

    #[test]
    fn single_word_has_empty_last_name() {
        assert_eq!(split_name("  Cher "), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn full_name_rejoins() {
        let c = Customer::from_full_name("Jo  Doe", "jo@example.com", None);
        assert_eq!(c.first_name, "Jo");
        assert_eq!(c.last_name, "Doe");
        assert_eq!(c.full_name(), "Jo Doe");
    }
}

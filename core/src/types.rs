//! Domain DTOs for the customer API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CustomerId = u64;

const PORTRAIT_BASE_URL: &str = "https://randomuser.me/api/portraits";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn portrait_folder(self) -> &'static str {
        match self {
            Gender::Male => "men",
            Gender::Female => "women",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("MALE"),
            Gender::Female => f.write_str("FEMALE"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown gender `{0}`, expected MALE or FEMALE")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// A single customer returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

impl Customer {
    /// Portrait slot derived from the id; the portrait service hosts 100 per folder.
    pub fn image_index(&self) -> u64 {
        self.id % 100
    }

    pub fn portrait_url(&self) -> String {
        format!(
            "{PORTRAIT_BASE_URL}/{}/{}.jpg",
            self.gender.portrait_folder(),
            self.image_index()
        )
    }
}

/// Request payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

/// Request payload for updating an existing customer. Omitted fields remain
/// unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: CustomerId, gender: Gender) -> Customer {
        Customer {
            id,
            name: "Jamila".to_string(),
            email: "jamila@gmail.com".to_string(),
            age: 19,
            gender,
        }
    }

    #[test]
    fn image_index_wraps_at_one_hundred() {
        assert_eq!(customer(7, Gender::Female).image_index(), 7);
        assert_eq!(customer(142, Gender::Female).image_index(), 42);
    }

    #[test]
    fn portrait_url_uses_gender_folder() {
        assert_eq!(
            customer(2, Gender::Female).portrait_url(),
            "https://randomuser.me/api/portraits/women/2.jpg"
        );
        assert_eq!(
            customer(101, Gender::Male).portrait_url(),
            "https://randomuser.me/api/portraits/men/1.jpg"
        );
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn update_omits_absent_fields() {
        let update = CustomerUpdate {
            age: Some(30),
            ..CustomerUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "age": 30 }));
    }
}

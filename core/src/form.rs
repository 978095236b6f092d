//! Editable customer form and its validation rules.

use thiserror::Error;

use crate::types::{Customer, CustomerUpdate, Gender, NewCustomer};

const NAME_MAX_CHARS: usize = 15;
const MIN_AGE: u32 = 16;
const MAX_AGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("name must be 15 characters or less")]
    NameTooLong,
    #[error("email is required")]
    EmailRequired,
    #[error("email address is invalid")]
    EmailInvalid,
    #[error("age is required")]
    AgeRequired,
    #[error("must be at least 16 years of age")]
    AgeTooYoung,
    #[error("must be at most 100 years of age")]
    AgeTooOld,
    #[error("gender is required")]
    GenderRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid form: {}", join(.0))]
pub struct FormErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

impl From<&Customer> for CustomerForm {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            age: Some(customer.age),
            gender: Some(customer.gender),
        }
    }
}

impl CustomerForm {
    pub fn to_new_customer(&self) -> Result<NewCustomer, FormErrors> {
        let mut errors = self.common_errors();
        if self.gender.is_none() {
            errors.push(FieldError::GenderRequired);
        }
        match (self.age, self.gender) {
            (Some(age), Some(gender)) if errors.is_empty() => Ok(NewCustomer {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                age,
                gender,
            }),
            _ => Err(FormErrors(errors)),
        }
    }

    /// The update form edits name, email and age; gender is left untouched.
    pub fn to_update(&self) -> Result<CustomerUpdate, FormErrors> {
        let errors = self.common_errors();
        if !errors.is_empty() {
            return Err(FormErrors(errors));
        }
        Ok(CustomerUpdate {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            age: self.age,
            gender: None,
        })
    }

    fn common_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::NameRequired);
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.push(FieldError::NameTooLong);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !is_valid_email(email) {
            errors.push(FieldError::EmailInvalid);
        }

        match self.age {
            None => errors.push(FieldError::AgeRequired),
            Some(age) if age < MIN_AGE => errors.push(FieldError::AgeTooYoung),
            Some(age) if age > MAX_AGE => errors.push(FieldError::AgeTooOld),
            Some(_) => {}
        }

        errors
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            name: "Alex".to_string(),
            email: "alex@gmail.com".to_string(),
            age: Some(21),
            gender: Some(Gender::Male),
        }
    }

    #[test]
    fn empty_form_reports_every_missing_field() {
        let err = CustomerForm::default().to_new_customer().unwrap_err();
        assert_eq!(
            err.0,
            vec![
                FieldError::NameRequired,
                FieldError::EmailRequired,
                FieldError::AgeRequired,
                FieldError::GenderRequired,
            ]
        );
    }

    #[test]
    fn filled_form_builds_trimmed_payload() {
        let form = CustomerForm {
            name: "  Alex ".to_string(),
            ..filled()
        };
        let payload = form.to_new_customer().unwrap();
        assert_eq!(payload.name, "Alex");
        assert_eq!(payload.gender, Gender::Male);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, expected) in [
            (15, Some(FieldError::AgeTooYoung)),
            (16, None),
            (100, None),
            (101, Some(FieldError::AgeTooOld)),
        ] {
            let form = CustomerForm {
                age: Some(age),
                ..filled()
            };
            assert_eq!(form.to_new_customer().err().map(|e| e.0[0]), expected, "age {age}");
        }
    }

    #[test]
    fn long_name_and_bad_email_are_rejected() {
        let form = CustomerForm {
            name: "Bartholomew Jones".to_string(),
            email: "not-an-email".to_string(),
            ..filled()
        };
        let err = form.to_update().unwrap_err();
        assert_eq!(err.0, vec![FieldError::NameTooLong, FieldError::EmailInvalid]);
        assert_eq!(
            err.to_string(),
            "invalid form: name must be 15 characters or less; email address is invalid"
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn update_leaves_gender_out() {
        let update = filled().to_update().unwrap();
        assert_eq!(update.gender, None);
        assert_eq!(update.age, Some(21));
    }
}

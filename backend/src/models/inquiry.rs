use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 32;
const MAX_OPTIONAL_LEN: usize = 200;

/// Body of `POST /api/contact` as sent by the site's contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: String,
    pub language: String,
}

/// A validated inquiry ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct InquiryReceipt {
    pub id: Uuid,
    pub status: &'static str,
}

impl InquiryReceipt {
    pub fn received(id: Uuid) -> Self {
        Self { id, status: "received" }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::Validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

impl ContactRequest {
    pub fn validate(self) -> Result<Inquiry, ApiError> {
        let name = self.name.trim().to_string();
        check_length("name", &name, 2, 100)?;

        let email = self.email.trim().to_string();
        if email.len() > MAX_EMAIL_LEN || !EMAIL_PATTERN.is_match(&email) {
            return Err(ApiError::Validation("email address is not valid".into()));
        }

        let message = self.message.trim().to_string();
        check_length("message", &message, 10, 5000)?;

        let phone = trimmed(self.phone);
        if let Some(phone) = &phone {
            let allowed = phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
            if !allowed || phone.chars().count() > MAX_PHONE_LEN {
                return Err(ApiError::Validation("phone number is not valid".into()));
            }
        }

        let company = trimmed(self.company);
        let service = trimmed(self.service);
        for (field, value) in [("company", &company), ("service", &service)] {
            if let Some(value) = value {
                check_length(field, value, 1, MAX_OPTIONAL_LEN)?;
            }
        }

        let language = self.language.trim().to_string();
        if language != "en" && language != "ar" {
            return Err(ApiError::Validation("language must be 'en' or 'ar'".into()));
        }

        Ok(Inquiry {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name,
            email,
            phone,
            company,
            service,
            message,
            language,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_request() -> ContactRequest {
    ContactRequest {
        name: "Layla Haddad".into(),
        email: "layla@example.sa".into(),
        phone: Some("+966 11 234 5678".into()),
        company: Some("Riyadh Logistics".into()),
        service: Some("cctv".into()),
        message: "We need a CCTV upgrade for two warehouses.".into(),
        language: "en".into(),
    }
}

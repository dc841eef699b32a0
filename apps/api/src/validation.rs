//! Payload validation for write endpoints.
//!
//! Every rule is checked and all violations are reported together, so a
//! form can highlight every bad field from one response.

use portfolio_types::{BioRequest, Profile, ProjectInput};

use crate::errors::AppError;

#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(format!("{field} cannot be empty"));
        }
    }

    fn require_tags(&mut self, field: &str, values: &[String]) {
        if values.is_empty() {
            self.0.push(format!("{field} must contain at least one entry"));
        } else if values.iter().any(|v| v.trim().is_empty()) {
            self.0.push(format!("{field} entries cannot be empty"));
        }
    }

    fn require_email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(format!("{field} cannot be empty"));
        } else if !looks_like_email(value) {
            self.0.push(format!("{field} '{value}' is not a valid address"));
        }
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0.join("; ")))
        }
    }
}

/// Title and description must be non-blank and `tech` must hold at least one
/// non-blank tag.
pub fn validate_project(input: &ProjectInput) -> Result<(), AppError> {
    let mut v = Violations::default();
    v.require_text("title", &input.title);
    v.require_text("description", &input.description);
    v.require_tags("tech", &input.tech);
    v.into_result()
}

pub fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    let mut v = Violations::default();
    v.require_text("name", &profile.name);
    v.require_text("title", &profile.title);
    v.require_email("email", &profile.email);
    v.into_result()
}

pub fn validate_bio_request(request: &BioRequest) -> Result<(), AppError> {
    let mut v = Violations::default();
    v.require_text("title", &request.title);
    v.require_tags("skills", &request.skills);
    v.into_result()
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

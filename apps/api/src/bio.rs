//! Bio generation.
//!
//! Default: `TemplateBioGenerator` (a single string template, no network).
//! `AppState` holds an `Arc<dyn BioGenerator>`, so a real backend can be
//! swapped in at startup without touching the handler.

use async_trait::async_trait;

use crate::errors::AppError;

/// Turns a job title and a skill list into a short bio.
///
/// Callers validate that `title` and `skills` are non-empty before invoking.
/// Implementations are not required to be deterministic; callers must accept
/// any non-empty sentence.
#[async_trait]
pub trait BioGenerator: Send + Sync {
    async fn generate(&self, skills: &[String], title: &str) -> Result<String, AppError>;
}

pub struct TemplateBioGenerator;

#[async_trait]
impl BioGenerator for TemplateBioGenerator {
    async fn generate(&self, skills: &[String], title: &str) -> Result<String, AppError> {
        let skills: Vec<&str> = skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(format!(
            "I am a passionate {} with expertise in {}. I love building solutions that make a difference and I am always learning new technologies.",
            title.trim(),
            join_human(&skills)
        ))
    }
}

/// "a", "a and b", "a, b and c".
fn join_human(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

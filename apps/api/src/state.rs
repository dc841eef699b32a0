use std::sync::Arc;

use crate::bio::{BioGenerator, TemplateBioGenerator};
use crate::config::Config;
use crate::store::seed::{blank_profile, seed_profile, seed_projects};
use crate::store::{ProfileStore, ProjectStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileStore>,
    pub projects: Arc<ProjectStore>,
    /// Pluggable bio generator. Default: TemplateBioGenerator.
    pub bio: Arc<dyn BioGenerator>,
    pub config: Config,
}

impl AppState {
    /// Builds fresh stores, seeded unless `config.seed_data` is off.
    pub fn new(config: Config) -> Self {
        let (profile, projects) = if config.seed_data {
            (seed_profile(), ProjectStore::with_seed(seed_projects()))
        } else {
            (blank_profile(), ProjectStore::empty())
        };

        Self {
            profile: Arc::new(ProfileStore::new(profile)),
            projects: Arc::new(projects),
            bio: Arc::new(TemplateBioGenerator),
            config,
        }
    }
}

// In-memory storage for the portfolio.
// Stores are constructed once at startup and shared through `AppState`.
// Each call holds the store's lock only for its own duration: concurrent
// writers are not isolated from each other and the last write wins.

pub mod profile;
pub mod project;
pub mod seed;

pub use profile::ProfileStore;
pub use project::{ProjectNotFound, ProjectStore};

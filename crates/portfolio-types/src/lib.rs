//! Wire and domain types shared by the portfolio API server and its client.
//!
//! Field names are camelCase on the wire so the JSON matches what browser
//! clients already send.

mod bio;
mod profile;
mod project;

pub use bio::{BioRequest, BioResponse};
pub use profile::{Profile, Socials};
pub use project::{Project, ProjectId, ProjectInput};

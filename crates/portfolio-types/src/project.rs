use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a showcased project.
///
/// The server hands out positive ids from a counter that never goes back.
/// Negative ids only ever exist in a client cache, as placeholders for
/// projects whose creation has not been confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl ProjectId {
    pub fn is_placeholder(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
}

impl Project {
    pub fn from_input(id: ProjectId, input: ProjectInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            image: input.image,
            tech: input.tech,
        }
    }
}

/// The writable fields of a project, sent as the body of create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
}

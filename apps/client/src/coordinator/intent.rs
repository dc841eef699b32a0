use std::fmt;

use portfolio_types::{Profile, Project, ProjectId, ProjectInput};

use crate::cache::{QueryData, QueryKey};

/// A write the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateProject(ProjectInput),
    UpdateProject { id: ProjectId, input: ProjectInput },
    DeleteProject(ProjectId),
    ReplaceProfile(Profile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    CreateProject,
    UpdateProject,
    DeleteProject,
    ReplaceProfile,
}

/// What the server returned for a committed mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResponse {
    Project(Project),
    Deleted(ProjectId),
    Profile(Profile),
}

impl MutationKind {
    /// The cache entry this kind of mutation touches.
    pub fn key(self) -> QueryKey {
        match self {
            MutationKind::ReplaceProfile => QueryKey::Profile,
            _ => QueryKey::Projects,
        }
    }

    pub fn success_title(self) -> &'static str {
        match self {
            MutationKind::CreateProject => "Project created",
            MutationKind::UpdateProject => "Project updated",
            MutationKind::DeleteProject => "Project deleted",
            MutationKind::ReplaceProfile => "Profile updated",
        }
    }

    pub fn success_description(self) -> &'static str {
        match self {
            MutationKind::CreateProject => "Your project has been added successfully.",
            MutationKind::UpdateProject => "Your project has been updated successfully.",
            MutationKind::DeleteProject => "Your project has been removed successfully.",
            MutationKind::ReplaceProfile => "Your profile has been updated successfully.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            MutationKind::CreateProject => "Failed to create project. Please try again.",
            MutationKind::UpdateProject => "Failed to update project. Please try again.",
            MutationKind::DeleteProject => "Failed to delete project. Please try again.",
            MutationKind::ReplaceProfile => "Failed to update profile. Please try again.",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MutationKind::CreateProject => "create project",
            MutationKind::UpdateProject => "update project",
            MutationKind::DeleteProject => "delete project",
            MutationKind::ReplaceProfile => "update profile",
        })
    }
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::CreateProject(_) => MutationKind::CreateProject,
            Mutation::UpdateProject { .. } => MutationKind::UpdateProject,
            Mutation::DeleteProject(_) => MutationKind::DeleteProject,
            Mutation::ReplaceProfile(_) => MutationKind::ReplaceProfile,
        }
    }

    pub fn key(&self) -> QueryKey {
        self.kind().key()
    }

    /// The local view as it should look if the server accepts this mutation.
    ///
    /// `current` is whatever the cache held for `self.key()`. A create on an
    /// unloaded list starts from an empty one; an update or delete has
    /// nothing to edit and yields `None`. `placeholder` is only called for
    /// creates.
    pub fn optimistic(
        &self,
        current: Option<QueryData>,
        placeholder: impl FnOnce() -> ProjectId,
    ) -> Option<QueryData> {
        match self {
            Mutation::ReplaceProfile(profile) => Some(QueryData::Profile(profile.clone())),
            Mutation::CreateProject(input) => {
                let mut projects = projects_of(current).unwrap_or_default();
                projects.push(Project::from_input(placeholder(), input.clone()));
                Some(QueryData::Projects(projects))
            }
            Mutation::UpdateProject { id, input } => {
                let mut projects = projects_of(current)?;
                for project in projects.iter_mut().filter(|p| p.id == *id) {
                    *project = Project::from_input(*id, input.clone());
                }
                Some(QueryData::Projects(projects))
            }
            Mutation::DeleteProject(id) => {
                let mut projects = projects_of(current)?;
                projects.retain(|p| p.id != *id);
                Some(QueryData::Projects(projects))
            }
        }
    }
}

fn projects_of(current: Option<QueryData>) -> Option<Vec<Project>> {
    match current? {
        QueryData::Projects(projects) => Some(projects),
        QueryData::Profile(_) => None,
    }
}

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use portfolio_types::{Project, ProjectId, ProjectInput};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Project {0} not found")]
pub struct ProjectNotFound(pub ProjectId);

struct ProjectTable {
    /// Next id to hand out. Only ever increases, so deleted ids are never reused.
    next_id: i64,
    /// Keyed by id; ids are issued in increasing order, so key order is
    /// insertion order.
    records: BTreeMap<ProjectId, Project>,
}

/// Keyed collection of showcased projects.
pub struct ProjectStore {
    table: RwLock<ProjectTable>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ProjectStore {
    pub fn empty() -> Self {
        Self {
            table: RwLock::new(ProjectTable {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    /// Builds a store holding `inputs`, with ids assigned in order from 1.
    pub fn with_seed(inputs: impl IntoIterator<Item = ProjectInput>) -> Self {
        let store = Self::empty();
        for input in inputs {
            store.create(input);
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, ProjectTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProjectTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Project> {
        self.read().records.values().cloned().collect()
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.read().records.get(&id).cloned()
    }

    pub fn create(&self, input: ProjectInput) -> Project {
        let mut table = self.write();
        let id = ProjectId(table.next_id);
        table.next_id += 1;

        let project = Project::from_input(id, input);
        table.records.insert(id, project.clone());
        info!("Created project {id} ({})", project.title);
        project
    }

    /// Replaces every field of project `id`, keeping the id.
    pub fn update(&self, id: ProjectId, input: ProjectInput) -> Result<Project, ProjectNotFound> {
        let mut table = self.write();
        let slot = table.records.get_mut(&id).ok_or(ProjectNotFound(id))?;
        *slot = Project::from_input(id, input);
        info!("Updated project {id}");
        Ok(slot.clone())
    }

    /// Removes project `id`. Returns whether it existed.
    pub fn delete(&self, id: ProjectId) -> bool {
        let removed = self.write().records.remove(&id).is_some();
        if removed {
            info!("Deleted project {id}");
        }
        removed
    }
}

//! Mutation Coordinator: optimistic writes with rollback and refetch.
//!
//! Every mutation walks the same states:
//!
//! ```text
//! Idle -> Applying -> Pending -> Committed  -> Settled
//!                             \-> RolledBack -/
//! ```
//!
//! 1. Applying: snapshot the cache entry, publish the optimistic view.
//! 2. Pending: one remote write. Nothing is locked; other mutations keep going.
//! 3. Committed / RolledBack: on failure the snapshot is put back verbatim and
//!    an error notification goes out.
//! 4. Settled: the entry is always refetched from the server, so whichever
//!    refetch lands last decides the final cache state. On success a success
//!    notification goes out.
//!
//! No retries. A mutation can only be cancelled before it is applied.

mod handle;
mod intent;
mod state;

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use portfolio_types::ProjectId;
use thiserror::Error;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::PortfolioApi;
use crate::cache::{QueryCache, QueryData, QueryKey};
use crate::notify::{Notification, Notifier};
use crate::transport::TransportError;

pub use handle::MutationHandle;
pub use intent::{Mutation, MutationKind, MutationResponse};
pub use state::MutationState;

#[derive(Debug, Error)]
pub enum MutationError {
    #[error("{kind} failed: {source}")]
    Rejected {
        kind: MutationKind,
        #[source]
        source: TransportError,
    },

    #[error("{kind} cancelled before it was applied")]
    Cancelled { kind: MutationKind },

    #[error("{kind} task aborted: {message}")]
    Aborted { kind: MutationKind, message: String },
}

struct Inner {
    api: PortfolioApi,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
    /// Last placeholder id handed out; counts down from 0.
    placeholder_seq: AtomicI64,
    shutdown: CancellationToken,
}

#[derive(Clone)]
pub struct MutationCoordinator {
    inner: Arc<Inner>,
}

impl MutationCoordinator {
    pub fn new(api: PortfolioApi, cache: QueryCache, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                cache,
                notifier,
                placeholder_seq: AtomicI64::new(0),
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    pub fn api(&self) -> &PortfolioApi {
        &self.inner.api
    }

    /// Cancels every mutation that has not been applied yet, and every one
    /// started afterwards. Writes already sent are unaffected.
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
    }

    /// Loads `key` from the server into the cache.
    pub async fn refresh(&self, key: QueryKey) -> Result<(), TransportError> {
        let data = match key {
            QueryKey::Profile => QueryData::Profile(self.inner.api.get_profile().await?),
            QueryKey::Projects => QueryData::Projects(self.inner.api.list_projects().await?),
        };
        self.inner.cache.set(data);
        Ok(())
    }

    /// Runs `mutation` to Settled on the current task.
    pub async fn run(&self, mutation: Mutation) -> Result<MutationResponse, MutationError> {
        let (state, _) = watch::channel(MutationState::Idle);
        self.execute(
            Uuid::new_v4(),
            mutation,
            self.inner.shutdown.child_token(),
            &state,
        )
        .await
    }

    /// Runs `mutation` on its own task. The handle reports progress and
    /// yields the outcome.
    pub fn spawn(&self, mutation: Mutation) -> MutationHandle {
        let id = Uuid::new_v4();
        let kind = mutation.kind();
        let token = self.inner.shutdown.child_token();
        let (state_tx, state_rx) = watch::channel(MutationState::Idle);

        let coordinator = self.clone();
        let task_token = token.clone();
        let task = tokio::spawn(async move {
            coordinator
                .execute(id, mutation, task_token, &state_tx)
                .await
        });

        MutationHandle::new(id, kind, state_rx, token, task)
    }

    fn next_placeholder(&self) -> ProjectId {
        ProjectId(self.inner.placeholder_seq.fetch_sub(1, Ordering::Relaxed) - 1)
    }

    async fn execute(
        &self,
        id: Uuid,
        mutation: Mutation,
        token: CancellationToken,
        state: &watch::Sender<MutationState>,
    ) -> Result<MutationResponse, MutationError> {
        let kind = mutation.kind();
        let key = kind.key();
        let cache = &self.inner.cache;

        if token.is_cancelled() {
            info!("Mutation {id} ({kind}) cancelled before apply");
            return Err(MutationError::Cancelled { kind });
        }

        state.send_replace(MutationState::Applying);
        let snapshot = cache.snapshot(key);
        let was_unloaded = snapshot.is_none();
        let optimistic = mutation.optimistic(snapshot.as_ref().map(|e| e.data.clone()), || {
            self.next_placeholder()
        });
        if let Some(view) = optimistic {
            cache.set(view);
        }

        state.send_replace(MutationState::Pending);
        let outcome = self.send(&mutation).await;

        match &outcome {
            Ok(_) => {
                state.send_replace(MutationState::Committed);
                info!("Mutation {id} ({kind}) committed");
            }
            Err(e) => {
                cache.restore(key, snapshot);
                state.send_replace(MutationState::RolledBack);
                warn!("Mutation {id} ({kind}) rolled back: {e}");
                self.inner
                    .notifier
                    .notify(Notification::error(kind.failure_message()));
            }
        }

        self.reconcile(key, was_unloaded).await;
        state.send_replace(MutationState::Settled);

        match outcome {
            Ok(response) => {
                self.inner.notifier.notify(Notification::success(
                    kind.success_title(),
                    kind.success_description(),
                ));
                Ok(response)
            }
            Err(source) => Err(MutationError::Rejected { kind, source }),
        }
    }

    async fn send(&self, mutation: &Mutation) -> Result<MutationResponse, TransportError> {
        let api = &self.inner.api;
        match mutation {
            Mutation::CreateProject(input) => {
                api.create_project(input).await.map(MutationResponse::Project)
            }
            Mutation::UpdateProject { id, input } => api
                .update_project(*id, input)
                .await
                .map(MutationResponse::Project),
            Mutation::DeleteProject(id) => api
                .delete_project(*id)
                .await
                .map(|()| MutationResponse::Deleted(*id)),
            Mutation::ReplaceProfile(profile) => api
                .update_profile(profile)
                .await
                .map(MutationResponse::Profile),
        }
    }

    /// Overwrites `key` with server truth. If that fails the entry stays as
    /// it is but is marked stale, unless `key` was never loaded, in which
    /// case whatever the mutation put there is dropped again.
    async fn reconcile(&self, key: QueryKey, was_unloaded: bool) {
        if let Err(e) = self.refresh(key).await {
            if was_unloaded {
                warn!("Refetch of {key} failed, dropping unconfirmed entry: {e}");
                self.inner.cache.restore(key, None);
            } else {
                warn!("Refetch of {key} failed, marking stale: {e}");
                self.inner.cache.invalidate(key);
            }
        }
    }
}

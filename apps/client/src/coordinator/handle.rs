use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{MutationError, MutationKind, MutationResponse, MutationState};

/// A mutation running on its own task.
pub struct MutationHandle {
    id: Uuid,
    kind: MutationKind,
    state: watch::Receiver<MutationState>,
    token: CancellationToken,
    task: JoinHandle<Result<MutationResponse, MutationError>>,
}

impl MutationHandle {
    pub(super) fn new(
        id: Uuid,
        kind: MutationKind,
        state: watch::Receiver<MutationState>,
        token: CancellationToken,
        task: JoinHandle<Result<MutationResponse, MutationError>>,
    ) -> Self {
        Self {
            id,
            kind,
            state,
            token,
            task,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    pub fn state(&self) -> MutationState {
        *self.state.borrow()
    }

    /// Waits until the mutation is at `target` or past it, and returns the
    /// state it was observed in.
    pub async fn wait_for(&mut self, target: MutationState) -> MutationState {
        let reached = self
            .state
            .wait_for(|s| s.has_reached(target))
            .await
            .map(|s| *s);
        reached.unwrap_or_else(|_| *self.state.borrow())
    }

    /// Asks the mutation not to run. Only honoured if it has not been
    /// applied yet; a write already in flight runs to Settled.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub async fn settled(self) -> Result<MutationResponse, MutationError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(MutationError::Aborted {
                kind: self.kind,
                message: e.to_string(),
            }),
        }
    }
}

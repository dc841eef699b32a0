use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    Applying,
    Pending,
    Committed,
    RolledBack,
    Settled,
}

impl MutationState {
    /// Position along the state machine. Committed and RolledBack are
    /// alternatives and share a step.
    pub fn step(self) -> u8 {
        match self {
            MutationState::Idle => 0,
            MutationState::Applying => 1,
            MutationState::Pending => 2,
            MutationState::Committed | MutationState::RolledBack => 3,
            MutationState::Settled => 4,
        }
    }

    pub fn has_reached(self, target: MutationState) -> bool {
        self.step() >= target.step()
    }
}

impl fmt::Display for MutationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationState::Idle => "idle",
            MutationState::Applying => "applying",
            MutationState::Pending => "pending",
            MutationState::Committed => "committed",
            MutationState::RolledBack => "rolled back",
            MutationState::Settled => "settled",
        };
        f.write_str(name)
    }
}

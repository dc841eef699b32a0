//! Client side of the portfolio: a local query cache kept in step with the
//! API through optimistic mutations.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use std::sync::Arc;
//! use portfolio_client::{
//!     ClientConfig, HttpTransport, Mutation, MutationCoordinator, PortfolioApi, QueryCache,
//!     QueryKey, TracingNotifier,
//! };
//! use portfolio_types::ProjectId;
//!
//! let config = ClientConfig::from_env()?;
//! let api = PortfolioApi::new(Arc::new(HttpTransport::new(&config)));
//! let coordinator = MutationCoordinator::new(api, QueryCache::new(), Arc::new(TracingNotifier));
//!
//! coordinator.refresh(QueryKey::Projects).await?;
//! coordinator.run(Mutation::DeleteProject(ProjectId(2))).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod coordinator;
pub mod notify;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::PortfolioApi;
pub use cache::{CacheEntry, QueryCache, QueryData, QueryKey};
pub use config::ClientConfig;
pub use coordinator::{
    Mutation, MutationCoordinator, MutationError, MutationHandle, MutationKind, MutationResponse,
    MutationState,
};
pub use notify::{ChannelNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use transport::{HttpTransport, Transport, TransportError};

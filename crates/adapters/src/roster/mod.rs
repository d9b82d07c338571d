// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server roster queries

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRosterAdapter;

use async_trait::async_trait;
use dues_core::event::{GuildId, Member};
use thiserror::Error;

/// Errors from roster queries
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("guild not available: {0}")]
    GuildUnavailable(GuildId),
    #[error("roster fetch failed: {0}")]
    FetchFailed(String),
}

/// Adapter for reading the guild roster
#[async_trait]
pub trait RosterAdapter: Clone + Send + Sync + 'static {
    /// Current members of the guild. Membership can change between
    /// calls; there is no snapshot guarantee.
    async fn members(&self, guild: GuildId) -> Result<Vec<Member>, RosterError>;
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Privilege checks, delegated entirely to the platform

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePermissionAdapter;

use async_trait::async_trait;
use dues_core::event::{GuildId, MemberId};
use thiserror::Error;

/// Errors from privilege lookups
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("permission lookup failed: {0}")]
    LookupFailed(String),
}

/// Adapter for checking a member's privilege level
#[async_trait]
pub trait PermissionAdapter: Clone + Send + Sync + 'static {
    /// Whether the member holds administrator rights in the guild
    async fn is_admin(&self, guild: GuildId, member: MemberId) -> Result<bool, PermissionError>;
}

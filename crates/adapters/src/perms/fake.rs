// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake permission adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PermissionAdapter, PermissionError};
use async_trait::async_trait;
use dues_core::event::{GuildId, MemberId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Fake permission adapter with an explicit admin set
#[derive(Clone, Default)]
pub struct FakePermissionAdapter {
    admins: Arc<Mutex<HashSet<MemberId>>>,
}

impl FakePermissionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant administrator rights to a member
    pub fn grant(&self, member: MemberId) {
        self.admins
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(member);
    }

    /// Revoke administrator rights from a member
    pub fn revoke(&self, member: MemberId) {
        self.admins
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&member);
    }
}

#[async_trait]
impl PermissionAdapter for FakePermissionAdapter {
    async fn is_admin(&self, _guild: GuildId, member: MemberId) -> Result<bool, PermissionError> {
        Ok(self
            .admins
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&member))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake roster adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RosterAdapter, RosterError};
use async_trait::async_trait;
use dues_core::event::{GuildId, Member};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Fake roster adapter backed by an in-memory member list
#[derive(Clone, Default)]
pub struct FakeRosterAdapter {
    members: Arc<Mutex<Vec<Member>>>,
    fail: Arc<AtomicBool>,
}

impl FakeRosterAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let roster = Self::default();
        roster.set_members(members);
        roster
    }

    /// Replace the roster wholesale, as a membership change would.
    pub fn set_members(&self, members: Vec<Member>) {
        *self.members.lock().unwrap_or_else(|e| e.into_inner()) = members;
    }

    /// Make subsequent queries fail, simulating an unavailable guild
    pub fn fail_queries(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RosterAdapter for FakeRosterAdapter {
    async fn members(&self, guild: GuildId) -> Result<Vec<Member>, RosterError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RosterError::GuildUnavailable(guild));
        }
        Ok(self
            .members
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

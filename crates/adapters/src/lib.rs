// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapter traits for the chat platform collaborators
//!
//! The core never talks to the platform directly; everything it needs
//! (outbound delivery, history, the roster, privilege checks) comes
//! through these traits. Fakes live behind the `test-support` feature.

pub mod chat;
pub mod history;
pub mod perms;
pub mod roster;

pub use chat::{ChatAdapter, ChatError};
pub use history::{HistoryAdapter, HistoryError};
pub use perms::{PermissionAdapter, PermissionError};
pub use roster::{RosterAdapter, RosterError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use chat::{FakeChatAdapter, SentMessage};
#[cfg(any(test, feature = "test-support"))]
pub use history::FakeHistoryAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use perms::FakePermissionAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use roster::FakeRosterAdapter;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger reconstruction from channel history
//!
//! On startup the ledger is rebuilt by replaying the check-in channel's
//! history since the start of the accounting week. Replay must run to
//! completion before live intake begins so a message is never counted
//! twice; the runtime enforces this by sequencing, not locking.

use crate::event::InboundMessage;
use crate::ledger::CheckInLedger;

/// Whether a message counts as a check-in trigger during replay: not
/// authored by a bot, and the trimmed text is the trigger token followed
/// by whitespace and at least one non-whitespace character.
pub fn is_checkin_trigger(msg: &InboundMessage, trigger: &str) -> bool {
    if msg.author_is_bot {
        return false;
    }
    let Some(rest) = msg.text.trim().strip_prefix(trigger) else {
        return false;
    };
    rest.starts_with(char::is_whitespace) && !rest.trim_start().is_empty()
}

/// Rebuild the ledger from an oldest-first slice of channel history.
///
/// Clears the ledger first, then applies exactly one increment per valid
/// trigger, so rebuilding twice from the same history yields the same
/// final ledger. Returns the number of check-ins replayed.
pub fn rebuild(ledger: &mut CheckInLedger, history: &[InboundMessage], trigger: &str) -> usize {
    ledger.clear();
    let mut replayed = 0;
    for msg in history {
        if is_checkin_trigger(msg, trigger) {
            ledger.increment(msg.author);
            replayed += 1;
        }
    }
    replayed
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;

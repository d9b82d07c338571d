// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weekly settlement: classify payers and receivers, split the pool
//!
//! A pure function of the roster and the ledger. The report is a value,
//! not a formatted string; rendering is a separate concern.

use crate::event::Member;
use crate::ledger::CheckInLedger;

/// One member owing a penalty for missed check-ins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerLine {
    pub member: Member,
    pub count: u32,
    pub owed: u64,
}

/// Terminal classification of a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Everyone met the target; nothing to collect.
    NoPenalty,
    /// Penalties were collected but nobody qualifies to receive them,
    /// so no distribution is computed.
    NoReceivers,
    /// Equal split among receivers. The remainder of the floor division
    /// is reported but deliberately not distributed.
    Distributed { per_receiver: u64, remainder: u64 },
}

/// Derived settlement value. Computed fresh each time, never persisted.
///
/// List ordering is unspecified; rendering sorts by display name,
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    pub target: u32,
    pub penalty_per_miss: u64,
    pub payers: Vec<PayerLine>,
    pub receivers: Vec<Member>,
    pub total_penalty: u64,
    pub outcome: SettlementOutcome,
}

/// Settle the week for a roster that already excludes non-countable
/// accounts. Members at or above `target` receive; everyone else owes
/// `penalty_per_miss` per missed check-in.
pub fn settle(
    roster: &[Member],
    ledger: &CheckInLedger,
    target: u32,
    penalty_per_miss: u64,
) -> SettlementReport {
    let mut payers = Vec::new();
    let mut receivers = Vec::new();
    let mut total_penalty: u64 = 0;

    for member in roster {
        let count = ledger.get(member.id);
        if count >= target {
            receivers.push(member.clone());
        } else {
            let owed = u64::from(target - count) * penalty_per_miss;
            total_penalty += owed;
            payers.push(PayerLine {
                member: member.clone(),
                count,
                owed,
            });
        }
    }

    // Terminal cases in order: an empty pool first, then a pool with
    // nobody to give it to. Division only happens past both.
    let outcome = if total_penalty == 0 {
        SettlementOutcome::NoPenalty
    } else if receivers.is_empty() {
        SettlementOutcome::NoReceivers
    } else {
        let shares = receivers.len() as u64;
        SettlementOutcome::Distributed {
            per_receiver: total_penalty / shares,
            remainder: total_penalty % shares,
        }
    };

    SettlementReport {
        target,
        penalty_per_miss,
        payers,
        receivers,
        total_penalty,
        outcome,
    }
}

#[cfg(test)]
#[path = "settle_tests.rs"]
mod tests;

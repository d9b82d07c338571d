// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Announcement text for the chat surface
//!
//! Output is line-oriented so the delivery layer can split anything that
//! exceeds the platform's message size limit. Lists are sorted by display
//! name, case-insensitive; a member missing from the roster renders as a
//! `<@id>` mention.

use crate::event::{Member, MemberId};
use crate::ledger::CheckInLedger;
use crate::router::Rejection;
use crate::settle::{SettlementOutcome, SettlementReport};

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Display name for a member id, with a mention fallback for members no
/// longer in the roster.
pub fn display_name(roster: &[Member], id: MemberId) -> String {
    roster
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.display_name.clone())
        .unwrap_or_else(|| format!("<@{id}>"))
}

pub fn checkin_ack(name: &str, count: u32) -> String {
    format!("{name}, check-in recorded!\nThis week: {count}")
}

/// Current standings, used by the `week` command and the status snapshot.
pub fn weekly_standings(ledger: &CheckInLedger, roster: &[Member]) -> String {
    if ledger.is_empty() {
        return "No check-ins recorded this week yet.".to_string();
    }
    let mut rows: Vec<(String, u32)> = ledger
        .all()
        .map(|(id, count)| (display_name(roster, id), count))
        .collect();
    rows.sort_by_key(|(name, _)| name_key(name));

    let mut lines = vec!["Check-ins this week:".to_string()];
    for (name, count) in rows {
        lines.push(format!("- {name}: {count}"));
    }
    lines.join("\n")
}

pub fn settlement(report: &SettlementReport) -> String {
    let (per_receiver, remainder) = match report.outcome {
        SettlementOutcome::NoPenalty => {
            return "No penalties this week. Well done, everyone!".to_string();
        }
        SettlementOutcome::NoReceivers => {
            return format!(
                "Nobody reached {} check-ins this week, so there is no one to distribute to.\nTotal penalty: {}",
                report.target, report.total_penalty
            );
        }
        SettlementOutcome::Distributed {
            per_receiver,
            remainder,
        } => (per_receiver, remainder),
    };

    let mut payers = report.payers.clone();
    payers.sort_by_key(|p| name_key(&p.member.display_name));
    let mut receivers = report.receivers.clone();
    receivers.sort_by_key(|m| name_key(&m.display_name));

    let mut lines = vec![
        "Weekly settlement:".to_string(),
        String::new(),
        format!("- Target: {} check-ins per week", report.target),
        format!("- Penalty per miss: {}", report.penalty_per_miss),
        format!("- Total penalty: {}", report.total_penalty),
        String::new(),
    ];
    if payers.is_empty() {
        lines.push("Owing a penalty: nobody".to_string());
    } else {
        lines.push("Owing a penalty:".to_string());
        for payer in &payers {
            lines.push(format!(
                "  - {}: {} check-ins, owes {}",
                payer.member.display_name, payer.count, payer.owed
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!("Reached {} check-ins:", report.target));
    for member in &receivers {
        lines.push(format!("  - {}", member.display_name));
    }
    lines.push(String::new());
    lines.push(format!("Each receiver gets: {per_receiver}"));
    if remainder > 0 {
        lines.push(format!("Undistributed remainder: {remainder}"));
    }
    lines.join("\n")
}

pub fn roster_list(roster: &[Member]) -> String {
    if roster.is_empty() {
        return "No members found.".to_string();
    }
    let mut names: Vec<&str> = roster.iter().map(|m| m.display_name.as_str()).collect();
    names.sort_by_key(|name| name_key(name));

    let mut lines = vec![format!("Members ({}):", names.len())];
    for name in names {
        lines.push(format!("- {name}"));
    }
    lines.join("\n")
}

pub fn reset_notice() -> &'static str {
    "Weekly records have been reset. A new week starts now!"
}

pub fn manual_reset_ack() -> &'static str {
    "This week's records have been reset."
}

pub fn not_permitted() -> &'static str {
    "You need administrator rights to do that."
}

pub fn help(prefix: &str) -> String {
    [
        "Commands:".to_string(),
        format!("  {prefix}solve <url>   record a problem check-in (check-in channel only)"),
        format!("  {prefix}week          show this week's check-in counts"),
        format!("  {prefix}settle        run the weekly settlement (settlement channel only)"),
        format!("  {prefix}resetweek     reset this week's records (admin only)"),
        format!("  {prefix}members       list server members"),
        format!("  {prefix}help          show this help"),
    ]
    .join("\n")
}

pub fn rejection(rejection: &Rejection, prefix: &str) -> String {
    match rejection {
        Rejection::WrongChannel { expected } => {
            format!("This command can only be used in <#{expected}>.")
        }
        Rejection::MissingArgument => format!("Usage: {prefix}solve <url>"),
        Rejection::MalformedUrl => format!(
            "That doesn't look like a URL. Example: {prefix}solve https://example.com/problem/1000"
        ),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

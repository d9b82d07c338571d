// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::event::MemberId;

fn ledger_with(counts: &[(u64, u32)]) -> CheckInLedger {
    let mut ledger = CheckInLedger::new();
    for (id, count) in counts {
        for _ in 0..*count {
            ledger.increment(MemberId(*id));
        }
    }
    ledger
}

fn payer_for<'a>(report: &'a SettlementReport, id: u64) -> &'a PayerLine {
    report
        .payers
        .iter()
        .find(|p| p.member.id == MemberId(id))
        .unwrap()
}

#[test]
fn splits_total_penalty_equally_among_receivers() {
    let roster = vec![
        Member::new(1, "ara"),
        Member::new(2, "bomi"),
        Member::new(3, "chan"),
        Member::new(4, "doyun"),
    ];
    let ledger = ledger_with(&[(1, 5), (2, 3), (3, 7)]);

    let report = settle(&roster, &ledger, 5, 1000);

    assert_eq!(report.total_penalty, 7000);
    assert_eq!(report.payers.len(), 2);
    let bomi = payer_for(&report, 2);
    assert_eq!((bomi.count, bomi.owed), (3, 2000));
    let doyun = payer_for(&report, 4);
    assert_eq!((doyun.count, doyun.owed), (0, 5000));
    let mut receiver_ids: Vec<_> = report.receivers.iter().map(|m| m.id).collect();
    receiver_ids.sort();
    assert_eq!(receiver_ids, vec![MemberId(1), MemberId(3)]);
    assert_eq!(
        report.outcome,
        SettlementOutcome::Distributed {
            per_receiver: 3500,
            remainder: 0
        }
    );
}

#[test]
fn no_receivers_reports_total_without_dividing() {
    let roster = vec![Member::new(1, "ara"), Member::new(2, "bomi")];
    let ledger = CheckInLedger::new();

    let report = settle(&roster, &ledger, 5, 1000);

    assert_eq!(report.total_penalty, 10000);
    assert!(report.receivers.is_empty());
    assert_eq!(report.outcome, SettlementOutcome::NoReceivers);
}

#[test]
fn everyone_at_target_means_no_penalty() {
    let roster = vec![Member::new(1, "ara"), Member::new(2, "bomi")];
    let ledger = ledger_with(&[(1, 5), (2, 6)]);

    let report = settle(&roster, &ledger, 5, 1000);

    assert_eq!(report.total_penalty, 0);
    assert!(report.payers.is_empty());
    assert_eq!(report.outcome, SettlementOutcome::NoPenalty);
}

#[test]
fn empty_roster_is_no_penalty() {
    let report = settle(&[], &CheckInLedger::new(), 5, 1000);
    assert_eq!(report.outcome, SettlementOutcome::NoPenalty);
    assert_eq!(report.total_penalty, 0);
}

#[test]
fn inexact_division_keeps_the_remainder_undistributed() {
    let roster = vec![
        Member::new(1, "ara"),
        Member::new(2, "bomi"),
        Member::new(3, "chan"),
        Member::new(4, "doyun"),
    ];
    // One miss: 1000 split across three receivers.
    let ledger = ledger_with(&[(1, 5), (2, 5), (3, 5), (4, 4)]);

    let report = settle(&roster, &ledger, 5, 1000);

    assert_eq!(report.total_penalty, 1000);
    assert_eq!(
        report.outcome,
        SettlementOutcome::Distributed {
            per_receiver: 333,
            remainder: 1
        }
    );
}

#[test]
fn settlement_is_a_pure_function_of_its_inputs() {
    let roster = vec![
        Member::new(1, "ara"),
        Member::new(2, "bomi"),
        Member::new(3, "chan"),
    ];
    let ledger = ledger_with(&[(1, 5), (2, 2)]);

    let first = settle(&roster, &ledger, 5, 1000);
    let second = settle(&roster, &ledger, 5, 1000);

    assert_eq!(first, second);
}

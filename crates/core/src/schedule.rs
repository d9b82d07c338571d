// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock anchored weekly tasks
//!
//! Each task is armed at its next weekday+time occurrence and fires at
//! most once per matching instant. The coordinator is poll-driven: the
//! hosting loop calls [`ScheduleCoordinator::poll`] with the current
//! time, which keeps tests deterministic with a fake clock.

use crate::clock::{next_occurrence, Clock};
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Weekday};
use tracing::warn;

/// What a fired task should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Compute and announce the weekly settlement
    AutoSettle,
    /// Clear the ledger for the new week
    AutoReset,
    /// Post the current standings
    StatusSnapshot,
}

/// Arming state of a weekly task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Not yet armed; never fires
    Idle,
    /// Waiting for `fire_at`
    Armed { fire_at: DateTime<FixedOffset> },
}

/// A recurring task anchored to a weekday and time-of-day
#[derive(Debug, Clone)]
pub struct WeeklyTask {
    pub name: String,
    pub kind: TaskKind,
    pub weekday: Weekday,
    pub at: NaiveTime,
    state: TaskState,
    last_fired: Option<DateTime<FixedOffset>>,
}

impl WeeklyTask {
    pub fn new(name: impl Into<String>, kind: TaskKind, weekday: Weekday, at: NaiveTime) -> Self {
        Self {
            name: name.into(),
            kind,
            weekday,
            at,
            state: TaskState::Idle,
            last_fired: None,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }
}

/// A task due for execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFire {
    pub name: String,
    pub kind: TaskKind,
    pub fire_at: DateTime<FixedOffset>,
}

/// Holds the weekly tasks and decides when each fires.
///
/// Tasks are independent; when settle and reset share a day, their
/// relative order comes only from settle's time-of-day being configured
/// strictly earlier than reset's.
#[derive(Debug, Default)]
pub struct ScheduleCoordinator {
    tasks: Vec<WeeklyTask>,
}

impl ScheduleCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: WeeklyTask) {
        self.tasks.push(task);
    }

    /// Arm every task at its next occurrence after `now`.
    pub fn arm_all(&mut self, clock: &impl Clock) {
        let now = clock.now();
        for task in &mut self.tasks {
            task.state = TaskState::Armed {
                fire_at: next_occurrence(now, task.weekday, task.at),
            };
        }
    }

    /// Collect tasks due at or before `now`, oldest instant first.
    ///
    /// Each matching instant fires at most once, and a firing that lands
    /// on the wrong weekday (clock skew, or a restart re-arming across a
    /// day boundary) skips its action. Either way the task is re-armed
    /// for its next occurrence.
    pub fn poll(&mut self, now: DateTime<FixedOffset>) -> Vec<TaskFire> {
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            let TaskState::Armed { fire_at } = task.state else {
                continue;
            };
            if fire_at > now {
                continue;
            }
            task.state = TaskState::Armed {
                fire_at: next_occurrence(now, task.weekday, task.at),
            };
            if task.last_fired == Some(fire_at) {
                continue;
            }
            task.last_fired = Some(fire_at);
            if now.weekday() != task.weekday {
                warn!(task = %task.name, %fire_at, "weekday filter skipped a firing");
                continue;
            }
            fired.push(TaskFire {
                name: task.name.clone(),
                kind: task.kind,
                fire_at,
            });
        }
        fired.sort_by_key(|f| f.fire_at);
        fired
    }

    /// The earliest armed fire time, if any
    pub fn next_fire_time(&self) -> Option<DateTime<FixedOffset>> {
        self.tasks
            .iter()
            .filter_map(|task| match task.state {
                TaskState::Armed { fire_at } => Some(fire_at),
                TaskState::Idle => None,
            })
            .min()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;

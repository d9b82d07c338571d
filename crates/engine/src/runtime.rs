// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the dues engine
//!
//! Owns the check-in ledger exclusively and coordinates startup replay,
//! live command handling, and scheduled task firing. The hosting event
//! loop serializes all calls: `on_ready` runs to completion before the
//! first `handle_message`, so replay and live intake never overlap.

use crate::error::RuntimeError;
use chrono::{DateTime, FixedOffset};
use dues_adapters::{ChatAdapter, HistoryAdapter, PermissionAdapter, RosterAdapter};
use dues_core::clock::{start_of_week, Clock};
use dues_core::config::BotConfig;
use dues_core::event::{InboundMessage, Member};
use dues_core::ledger::CheckInLedger;
use dues_core::router::{self, CommandRouter, Disposition};
use dues_core::schedule::{ScheduleCoordinator, TaskFire, TaskKind};
use dues_core::settle::settle;
use dues_core::{render, replay};
use tracing::{info, warn};

/// Runtime adapter dependencies
pub struct RuntimeDeps<Ch, H, R, P> {
    pub chat: Ch,
    pub history: H,
    pub roster: R,
    pub perms: P,
}

/// Coordinates the ledger, router, settlement, and scheduled tasks
pub struct Runtime<Ch, H, R, P, C: Clock> {
    chat: Ch,
    history: H,
    roster: R,
    perms: P,
    clock: C,
    config: BotConfig,
    router: CommandRouter,
    ledger: CheckInLedger,
    schedule: ScheduleCoordinator,
}

impl<Ch, H, R, P, C> Runtime<Ch, H, R, P, C>
where
    Ch: ChatAdapter,
    H: HistoryAdapter,
    R: RosterAdapter,
    P: PermissionAdapter,
    C: Clock,
{
    /// Create a new runtime. The weekly tasks come from the config's
    /// schedule table; they stay idle until [`Runtime::on_ready`] arms
    /// them.
    pub fn new(
        deps: RuntimeDeps<Ch, H, R, P>,
        config: BotConfig,
        clock: C,
    ) -> Result<Self, RuntimeError> {
        let router = CommandRouter::new(
            config.checkin_channel_id(),
            config.settlement_channel_id(),
        );
        let mut schedule = ScheduleCoordinator::new();
        for task in config.tasks()? {
            schedule.add(task);
        }
        Ok(Self {
            chat: deps.chat,
            history: deps.history,
            roster: deps.roster,
            perms: deps.perms,
            clock,
            config,
            router,
            ledger: CheckInLedger::new(),
            schedule,
        })
    }

    /// Rebuild the ledger from this week's check-in channel history and
    /// arm the weekly tasks. Safe to call again on reconnect: the
    /// rebuild is idempotent over the same history.
    pub async fn on_ready(&mut self) -> Result<(), RuntimeError> {
        let since = start_of_week(self.clock.now());
        let history = self
            .history
            .messages_since(self.config.checkin_channel_id(), since)
            .await?;
        let replayed = replay::rebuild(&mut self.ledger, &history, &self.config.checkin_trigger());
        info!(
            replayed,
            members = self.ledger.len(),
            %since,
            "ledger rebuilt from channel history"
        );
        self.schedule.arm_all(&self.clock);
        Ok(())
    }

    /// Route one live message. Bot authors and non-command text are
    /// ignored without a reply.
    pub async fn handle_message(&mut self, msg: &InboundMessage) -> Result<(), RuntimeError> {
        if msg.author_is_bot {
            return Ok(());
        }
        let Some(command) = router::parse(&msg.text, &self.config.command_prefix) else {
            return Ok(());
        };
        match self.router.route(msg.channel, command) {
            Disposition::RecordCheckIn { .. } => {
                let count = self.ledger.increment(msg.author);
                self.chat
                    .send(msg.channel, &render::checkin_ack(&msg.author_name, count))
                    .await?;
            }
            Disposition::ShowWeek => {
                let roster = self.countable_roster().await?;
                self.chat
                    .send(msg.channel, &render::weekly_standings(&self.ledger, &roster))
                    .await?;
            }
            Disposition::RunSettlement => {
                let roster = self.countable_roster().await?;
                let report = settle(
                    &roster,
                    &self.ledger,
                    self.config.weekly_target,
                    self.config.penalty_per_miss,
                );
                self.chat
                    .send(msg.channel, &render::settlement(&report))
                    .await?;
            }
            Disposition::ResetWeek => {
                let allowed = self
                    .perms
                    .is_admin(self.config.guild_id(), msg.author)
                    .await?;
                if allowed {
                    self.ledger.clear();
                    info!(by = %msg.author, "weekly records reset manually");
                    self.chat.send(msg.channel, render::manual_reset_ack()).await?;
                } else {
                    self.chat.send(msg.channel, render::not_permitted()).await?;
                }
            }
            Disposition::ListMembers => {
                let roster = self.countable_roster().await?;
                self.chat
                    .send(msg.channel, &render::roster_list(&roster))
                    .await?;
            }
            Disposition::ShowHelp => {
                self.chat
                    .send(msg.channel, &render::help(&self.config.command_prefix))
                    .await?;
            }
            Disposition::Reject(rejection) => {
                // Routing rejections reply to the user and change nothing.
                self.chat
                    .send(
                        msg.channel,
                        &render::rejection(&rejection, &self.config.command_prefix),
                    )
                    .await?;
            }
        }
        Ok(())
    }

    /// Fire any due scheduled tasks. A collaborator failure inside a
    /// task logs and skips that single firing; the task is already
    /// re-armed for next week, and nothing is retried within the cycle.
    pub async fn tick(&mut self) {
        for fire in self.schedule.poll(self.clock.now()) {
            if let Err(error) = self.run_task(&fire).await {
                warn!(task = %fire.name, %error, "scheduled task skipped");
            }
        }
    }

    async fn run_task(&mut self, fire: &TaskFire) -> Result<(), RuntimeError> {
        info!(task = %fire.name, fire_at = %fire.fire_at, "scheduled task firing");
        match fire.kind {
            TaskKind::AutoSettle => {
                let roster = self.countable_roster().await?;
                let report = settle(
                    &roster,
                    &self.ledger,
                    self.config.weekly_target,
                    self.config.penalty_per_miss,
                );
                self.chat
                    .send(
                        self.config.settlement_channel_id(),
                        &render::settlement(&report),
                    )
                    .await?;
            }
            TaskKind::AutoReset => {
                self.ledger.clear();
                self.chat
                    .send(self.config.checkin_channel_id(), render::reset_notice())
                    .await?;
            }
            TaskKind::StatusSnapshot => {
                let roster = self.countable_roster().await?;
                self.chat
                    .send(
                        self.config.checkin_channel_id(),
                        &render::weekly_standings(&self.ledger, &roster),
                    )
                    .await?;
            }
        }
        Ok(())
    }

    /// Roster with service accounts excluded; settlement and standings
    /// never count bots.
    async fn countable_roster(&self) -> Result<Vec<Member>, RuntimeError> {
        let members = self.roster.members(self.config.guild_id()).await?;
        Ok(members.into_iter().filter(|m| !m.is_bot).collect())
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &CheckInLedger {
        &self.ledger
    }

    /// The earliest armed fire time, if any
    pub fn next_fire_time(&self) -> Option<DateTime<FixedOffset>> {
        self.schedule.next_fire_time()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;

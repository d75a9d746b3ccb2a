//! In-memory usage counters
//!
//! Counts dispatched tasks per kind for the stats endpoint. Counters live for
//! the process lifetime only; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dispatch::TaskKind;

#[derive(Debug)]
pub struct UsageStats {
    started_at: DateTime<Utc>,
    speech: AtomicU64,
    minutes: AtomicU64,
    email: AtomicU64,
    presentation: AtomicU64,
    code_review: AtomicU64,
    translate: AtomicU64,
    quiz: AtomicU64,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            speech: AtomicU64::new(0),
            minutes: AtomicU64::new(0),
            email: AtomicU64::new(0),
            presentation: AtomicU64::new(0),
            code_review: AtomicU64::new(0),
            translate: AtomicU64::new(0),
            quiz: AtomicU64::new(0),
        }
    }

    /// Record one completed task of the given kind.
    pub fn record(&self, kind: TaskKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, kind: TaskKind) -> u64 {
        self.counter(kind).load(Ordering::Relaxed)
    }

    fn counter(&self, kind: TaskKind) -> &AtomicU64 {
        match kind {
            TaskKind::Speech => &self.speech,
            TaskKind::Minutes => &self.minutes,
            TaskKind::Email => &self.email,
            TaskKind::Presentation => &self.presentation,
            TaskKind::CodeReview => &self.code_review,
            TaskKind::Translate => &self.translate,
            TaskKind::Quiz => &self.quiz,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started_at: self.started_at,
            uptime_secs: (Utc::now() - self.started_at).num_seconds().max(0) as u64,
            usage: UsageCounts {
                speech: self.count(TaskKind::Speech),
                minutes: self.count(TaskKind::Minutes),
                email: self.count(TaskKind::Email),
                presentation: self.count(TaskKind::Presentation),
                code_review: self.count(TaskKind::CodeReview),
                translate: self.count(TaskKind::Translate),
                quiz: self.count(TaskKind::Quiz),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsSnapshot {
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
    pub usage: UsageCounts,
}

#[derive(Debug, Serialize)]
pub struct UsageCounts {
    pub speech: u64,
    pub minutes: u64,
    pub email: u64,
    pub presentation: u64,
    pub code_review: u64,
    pub translate: u64,
    pub quiz: u64,
}

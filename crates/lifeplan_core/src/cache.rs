//! Fingerprint-based memoization of projection results.
//!
//! The engine recomputes from scratch on every call. Callers that re-run it
//! on every redraw can hold a `CachedProjection`, which only re-runs the
//! engine when some input actually changed.

use std::hash::{Hash, Hasher};

use jiff::civil::Date;
use rustc_hash::FxHasher;

use crate::config::ProjectionInput;
use crate::model::{LifeEvent, MicroPlan, PlanSettings, ProjectionResult};
use crate::projection::project;

/// Hash of every projection input plus the as-of date.
///
/// Floats are hashed by bit pattern, so `0.0` and `-0.0` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputFingerprint(pub u64);

impl InputFingerprint {
    #[must_use]
    pub fn of(input: &ProjectionInput, as_of: Date) -> Self {
        let mut hasher = FxHasher::default();
        as_of.hash(&mut hasher);
        input.profile.hash(&mut hasher);
        hash_settings(&input.settings, &mut hasher);

        input.events.len().hash(&mut hasher);
        for event in &input.events {
            hash_event(event, &mut hasher);
        }
        input.micro_plans.len().hash(&mut hasher);
        for plan in &input.micro_plans {
            hash_micro_plan(plan, &mut hasher);
        }

        Self(hasher.finish())
    }
}

fn hash_f64(value: f64, hasher: &mut impl Hasher) {
    value.to_bits().hash(hasher);
}

fn hash_settings(settings: &PlanSettings, hasher: &mut impl Hasher) {
    for value in [
        settings.base_net_worth,
        settings.base_monthly_income,
        settings.base_monthly_expenses,
        settings.monthly_contribution,
        settings.expected_return_yearly,
        settings.inflation_yearly,
        settings.retirement_monthly_income,
    ] {
        hash_f64(value, hasher);
    }
    settings.inflate_income.hash(hasher);
    settings.inflate_expenses.hash(hasher);
    settings.inflate_retirement_income.hash(hasher);
    settings.retirement_age.hash(hasher);
}

fn hash_event(event: &LifeEvent, hasher: &mut impl Hasher) {
    event.id.hash(hasher);
    event.kind.hash(hasher);
    event.title.hash(hasher);
    event.date.hash(hasher);
    event.end_date.hash(hasher);
    hash_f64(event.amount, hasher);
    event.frequency.hash(hasher);
    event.duration_months.hash(hasher);
    event.inflation_indexed.hash(hasher);
}

fn hash_micro_plan(plan: &MicroPlan, hasher: &mut impl Hasher) {
    plan.id.hash(hasher);
    plan.effective_date.hash(hasher);
    hash_f64(plan.monthly_income, hasher);
    hash_f64(plan.monthly_expenses, hasher);
    hash_f64(plan.monthly_contribution, hasher);
}

#[derive(Debug)]
struct CacheEntry {
    fingerprint: InputFingerprint,
    result: ProjectionResult,
}

/// Holds the most recent projection and the fingerprint it was computed for.
#[derive(Debug, Default)]
pub struct CachedProjection {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl CachedProjection {
    /// Create a new empty cache
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Get the cached result if it was computed for exactly these inputs.
    #[must_use]
    pub fn get(&self, input: &ProjectionInput, as_of: Date) -> Option<&ProjectionResult> {
        let fingerprint = InputFingerprint::of(input, as_of);
        self.entry
            .as_ref()
            .filter(|e| e.fingerprint == fingerprint)
            .map(|e| &e.result)
    }

    /// Return the cached result, re-running the projection first if any
    /// input changed since it was computed.
    pub fn get_or_compute(&mut self, input: &ProjectionInput, as_of: Date) -> &ProjectionResult {
        let fingerprint = InputFingerprint::of(input, as_of);
        let fresh = matches!(&self.entry, Some(e) if e.fingerprint == fingerprint);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
        }

        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            fingerprint,
            result: project(input, as_of),
        });
        &entry.result
    }

    /// Explicitly invalidate the cache.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of calls served from the cache
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that ran the projection
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

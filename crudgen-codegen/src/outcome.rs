//! Structured result of a generation that may have skipped statements.

use std::fmt;

use indexmap::IndexSet;

/// Why part of an artifact could not be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegradationReason {
    /// The table has no primary key: delete, getByPk and search are skipped.
    NoPrimaryKey,
    /// `updater` / `updateDt` are missing: update is skipped.
    NoUpdateAuditColumns,
}

impl fmt::Display for DegradationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradationReason::NoPrimaryKey => {
                f.write_str("no primary key, delete/getByPk/search skipped")
            }
            DegradationReason::NoUpdateAuditColumns => {
                f.write_str("no updater/updateDt columns, update skipped")
            }
        }
    }
}

/// A generated value, either complete or degraded with the reasons why.
///
/// Degraded output is still usable; placeholder comments mark the gaps in
/// the text, and the reasons are kept here so callers need not look for
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult<T> {
    Complete(T),
    Degraded(T, IndexSet<DegradationReason>),
}

impl<T> GenerationResult<T> {
    /// `Complete` when `reasons` is empty, `Degraded` otherwise.
    pub fn new(value: T, reasons: IndexSet<DegradationReason>) -> Self {
        if reasons.is_empty() {
            GenerationResult::Complete(value)
        } else {
            GenerationResult::Degraded(value, reasons)
        }
    }

    pub fn value(&self) -> &T {
        match self {
            GenerationResult::Complete(value) | GenerationResult::Degraded(value, _) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            GenerationResult::Complete(value) | GenerationResult::Degraded(value, _) => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, GenerationResult::Degraded(..))
    }

    /// Reasons for degradation, empty when complete.
    pub fn reasons(&self) -> impl Iterator<Item = &DegradationReason> {
        match self {
            GenerationResult::Complete(_) => None,
            GenerationResult::Degraded(_, reasons) => Some(reasons.iter()),
        }
        .into_iter()
        .flatten()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GenerationResult<U> {
        match self {
            GenerationResult::Complete(value) => GenerationResult::Complete(f(value)),
            GenerationResult::Degraded(value, reasons) => {
                GenerationResult::Degraded(f(value), reasons)
            }
        }
    }
}

//! Availability ranking
//!
//! A book is looked up in several library systems at once and each system
//! reports its own status label. The front end shows a single status per
//! book: the row whose label ranks highest in [`RANK_TABLE`].
//!
//! The table is the only place that knows about status labels. Both the
//! ranking and the positive/neutral display tone are derived from it.

use crate::models::AvailabilityRow;
use serde::Serialize;

/// Rank given to labels that are not in [`RANK_TABLE`]
pub const UNRECOGNIZED_RANK: u8 = 4;

/// Shelf state a group of status labels stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShelfClass {
    /// On the shelf, can be borrowed now
    Available,
    /// Lent out
    CheckedOut,
    /// Lent out but a reservation can be placed
    Reservable,
}

/// One row of the priority table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRule {
    /// Shelf state
    pub class: ShelfClass,
    /// Priority; lower ranks are shown first
    pub rank: u8,
    /// Status labels that belong to this rule
    pub labels: &'static [&'static str],
}

impl RankRule {
    /// Whether `status` is one of this rule's labels
    #[must_use]
    pub fn matches(&self, status: &str) -> bool {
        self.labels.contains(&status)
    }
}

/// Status priority table, best first
pub const RANK_TABLE: [RankRule; 3] = [
    RankRule {
        class: ShelfClass::Available,
        rank: 1,
        labels: &["在架", "available"],
    },
    RankRule {
        class: ShelfClass::CheckedOut,
        rank: 2,
        labels: &["貸出中", "checked out"],
    },
    RankRule {
        class: ShelfClass::Reservable,
        rank: 3,
        labels: &["予約受付中", "reservable"],
    },
];

/// Visual treatment of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// The book can be borrowed now
    Positive,
    /// Anything else
    Neutral,
}

/// Find the rule a status label belongs to
#[must_use]
pub fn classify(status: &str) -> Option<&'static RankRule> {
    RANK_TABLE.iter().find(|rule| rule.matches(status))
}

/// Rank of a status label
#[must_use]
pub fn status_rank(status: &str) -> u8 {
    classify(status).map_or(UNRECOGNIZED_RANK, |rule| rule.rank)
}

fn top_rank() -> u8 {
    RANK_TABLE
        .iter()
        .map(|rule| rule.rank)
        .min()
        .unwrap_or(UNRECOGNIZED_RANK)
}

/// Display tone of a status label
///
/// Positive exactly for labels in the top-ranked rule.
#[must_use]
pub fn tone_for(status: &str) -> StatusTone {
    match classify(status) {
        Some(rule) if rule.rank == top_rank() => StatusTone::Positive,
        _ => StatusTone::Neutral,
    }
}

/// The row chosen to represent a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRow<'a> {
    /// Selected row
    pub row: &'a AvailabilityRow,
    /// Its rank
    pub rank: u8,
    /// The rule its label matched, if any
    pub rule: Option<&'static RankRule>,
}

impl RankedRow<'_> {
    /// Whether the label was found in the table
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.rule.is_some()
    }

    /// Display tone
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        tone_for(&self.row.status)
    }

    /// Status label
    #[must_use]
    pub fn status(&self) -> &str {
        &self.row.status
    }
}

/// What to show for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus<'a> {
    /// No rows yet
    Pending,
    /// Best row among those received
    Ranked(RankedRow<'a>),
}

impl<'a> DisplayStatus<'a> {
    /// The selected row, if any
    #[must_use]
    pub fn best(&self) -> Option<&RankedRow<'a>> {
        match self {
            Self::Pending => None,
            Self::Ranked(ranked) => Some(ranked),
        }
    }

    /// Whether no rows were available
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Pick the row to display for one book
///
/// Returns the first row with the lowest rank, or [`DisplayStatus::Pending`]
/// for an empty slice.
#[must_use]
pub fn select_best(rows: &[AvailabilityRow]) -> DisplayStatus<'_> {
    rows.iter()
        .map(|row| {
            let rule = classify(&row.status);
            RankedRow {
                row,
                rank: rule.map_or(UNRECOGNIZED_RANK, |r| r.rank),
                rule,
            }
        })
        .min_by_key(|ranked| ranked.rank)
        .map_or(DisplayStatus::Pending, DisplayStatus::Ranked)
}

/// Split rows into per-book groups, in first-seen ISBN order
#[must_use]
pub fn group_by_isbn(rows: &[AvailabilityRow]) -> Vec<(&str, Vec<&AvailabilityRow>)> {
    let mut groups: Vec<(&str, Vec<&AvailabilityRow>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(isbn, _)| *isbn == row.isbn13) {
            Some((_, members)) => members.push(row),
            None => groups.push((row.isbn13.as_str(), vec![row])),
        }
    }
    groups
}

/// First catalog link among the rows
#[must_use]
pub fn catalog_url<'a, I>(rows: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a AvailabilityRow>,
{
    rows.into_iter().find_map(|row| row.opac_url.as_deref())
}

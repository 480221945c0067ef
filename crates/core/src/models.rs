//! Domain model shared by every LibreMore client
//!
//! Field names follow the backend's JSON. All values are transient copies of
//! data the backend owns; nothing here is persisted locally.

use crate::error::Error;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recommended book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// ISBN-13, the join key with [`AvailabilityRow`]
    pub isbn13: String,
    /// Title
    pub title: String,
    /// Author
    #[serde(default)]
    pub author: Option<String>,
    /// Why this book was recommended
    #[serde(default)]
    pub reason: Option<String>,
    /// Nippon Decimal Classification
    #[serde(default)]
    pub ndc: Option<String>,
    /// National Diet Library Classification
    #[serde(default)]
    pub ndlc: Option<String>,
    /// Publisher
    #[serde(default)]
    pub publisher: Option<String>,
    /// Publication year
    #[serde(default)]
    pub pubyear: Option<i32>,
}

impl Recommendation {
    /// Classification codes that are present, NDC first
    pub fn classifications(&self) -> impl Iterator<Item = &str> {
        self.ndc.iter().chain(self.ndlc.iter()).map(String::as_str)
    }
}

/// One library system's lending status for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    /// ISBN-13 of the book
    pub isbn13: String,
    /// Owning library system
    pub systemid: String,
    /// Status label as reported by the library system
    pub status: String,
    /// Catalog (OPAC) page for this book in this system
    #[serde(rename = "opacUrl", default)]
    pub opac_url: Option<String>,
}

impl AvailabilityRow {
    /// Create a row without a catalog link
    pub fn new(
        isbn13: impl Into<String>,
        systemid: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            isbn13: isbn13.into(),
            systemid: systemid.into(),
            status: status.into(),
            opac_url: None,
        }
    }

    /// Builder-style method to set the catalog link
    #[must_use]
    pub fn with_opac_url(mut self, url: impl Into<String>) -> Self {
        self.opac_url = Some(url.into());
        self
    }
}

/// Reading status of a book within a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalBookStatus {
    /// Not started
    Unread,
    /// In progress
    Reading,
    /// Finished
    Done,
}

impl GoalBookStatus {
    /// Every valid status, in reading order
    pub const ALL: [Self; 3] = [Self::Unread, Self::Reading, Self::Done];

    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Reading => "reading",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for GoalBookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalBookStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

/// A reading goal as listed on the user's page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    /// Opaque goal identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Target date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last update time
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Whether the goal is archived
    pub archived: bool,
    /// Fraction of books done, computed by the backend
    pub progress: f64,
    /// Number of books in the goal
    pub total_books: u32,
    /// Number of books marked done
    pub done_books: u32,
}

impl GoalSummary {
    /// Progress as a whole percentage in `0..=100`
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        percent(self.progress)
    }

    /// Whether every book in the goal is done
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_books > 0 && self.done_books >= self.total_books
    }
}

/// A book entry inside a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalBook {
    /// The book
    pub book: Recommendation,
    /// Reading status within this goal
    pub status: GoalBookStatus,
    /// Display position
    pub position: i32,
    /// When the book was marked done
    #[serde(default, with = "timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A goal together with its books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDetail {
    /// Summary fields
    #[serde(flatten)]
    pub summary: GoalSummary,
    /// Books in the goal
    #[serde(default)]
    pub books: Vec<GoalBook>,
}

impl GoalDetail {
    /// Books ordered by position; equal positions keep their received order
    #[must_use]
    pub fn books_in_order(&self) -> Vec<&GoalBook> {
        let mut books: Vec<&GoalBook> = self.books.iter().collect();
        books.sort_by_key(|entry| entry.position);
        books
    }

    /// Find a book entry by ISBN-13
    #[must_use]
    pub fn book(&self, isbn13: &str) -> Option<&GoalBook> {
        self.books.iter().find(|entry| entry.book.isbn13 == isbn13)
    }
}

/// Progress returned after changing a book's status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Backend acknowledgement
    #[serde(default = "default_true")]
    pub ok: bool,
    /// Fraction of books done
    pub progress: f64,
    /// Number of books in the goal
    pub total_books: u32,
    /// Number of books marked done
    pub done_books: u32,
}

impl GoalProgress {
    /// Progress as a whole percentage in `0..=100`
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent(self.progress)
    }
}

fn default_true() -> bool {
    true
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Request body for creating a goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// Title
    pub title: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Books to attach, by ISBN-13
    #[serde(default)]
    pub recommended_isbns: Vec<String>,
}

impl NewGoal {
    /// Create a goal request with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Attach books
    #[must_use]
    pub fn with_isbns<I, S>(mut self, isbns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommended_isbns.extend(isbns.into_iter().map(Into::into));
        self
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// User identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// Registration time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Token issued by a successful login
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer credential
    pub access_token: String,
    /// Token scheme, normally `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Backend liveness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok` when healthy
    pub status: String,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Timestamps as sent by the backend
///
/// Accepts RFC 3339 and offset-less ISO-8601 values; the latter are UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Parse a backend timestamp
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc())
            })
    }

    /// Serialize as RFC 3339
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserialize from RFC 3339 or naive ISO-8601
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Optional variant
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        /// Serialize as RFC 3339 or null
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize from RFC 3339, naive ISO-8601 or null
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::parse(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const SUMMARY_JSON: &str = r#"{
        "id": "5b0e7c1a-0d4e-4c55-9d8b-2f7a6c1e9a10",
        "title": "Learn statistics",
        "description": null,
        "due_date": "2026-12-31",
        "created_at": "2026-01-05T09:30:00.123456",
        "updated_at": "2026-01-06T10:00:00+09:00",
        "archived": false,
        "progress": 0.5,
        "total_books": 4,
        "done_books": 2
    }"#;

    #[test]
    fn test_recommendation_deserialize_minimal() {
        let json = r#"{"isbn13": "9784003101018", "title": "Botchan"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.isbn13, "9784003101018");
        assert!(rec.author.is_none());
        assert_eq!(rec.classifications().count(), 0);
    }

    #[test]
    fn test_recommendation_classifications() {
        let json = r#"{"isbn13": "9784003101018", "title": "Botchan", "ndc": "913.6", "ndlc": "KH"}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.classifications().collect::<Vec<_>>(), vec!["913.6", "KH"]);
    }

    #[test]
    fn test_availability_row_opac_url_rename() {
        let json = r#"{"isbn13": "9784003101018", "systemid": "Tokyo_Pref", "status": "在架", "opacUrl": "https://opac.example/isbn"}"#;
        let row: AvailabilityRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.opac_url.as_deref(), Some("https://opac.example/isbn"));

        let back = serde_json::to_value(&row).unwrap();
        assert!(back.get("opacUrl").is_some());
    }

    #[test]
    fn test_goal_book_status_parse() {
        assert_eq!("reading".parse::<GoalBookStatus>().unwrap(), GoalBookStatus::Reading);
        assert!("finished".parse::<GoalBookStatus>().is_err());
        assert!("Done".parse::<GoalBookStatus>().is_err());
    }

    #[test]
    fn test_goal_book_status_wire_format() {
        let json = serde_json::to_string(&GoalBookStatus::Done).unwrap();
        assert_eq!(json, "\"done\"");
        assert!(serde_json::from_str::<GoalBookStatus>("\"skipped\"").is_err());
    }

    #[test]
    fn test_goal_summary_timestamps() {
        let goal: GoalSummary = serde_json::from_str(SUMMARY_JSON).unwrap();
        assert_eq!(goal.created_at.hour(), 9);
        assert_eq!(goal.updated_at.hour(), 1);
        assert_eq!(goal.due_date.unwrap().year(), 2026);
        assert_eq!(goal.progress_percent(), 50);
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_progress_percent_clamped() {
        let mut goal: GoalSummary = serde_json::from_str(SUMMARY_JSON).unwrap();
        goal.progress = 1.7;
        assert_eq!(goal.progress_percent(), 100);
        goal.progress = -0.2;
        assert_eq!(goal.progress_percent(), 0);
    }

    #[test]
    fn test_goal_detail_orders_books() {
        let json = r#"{
            "id": "g1",
            "title": "Classics",
            "created_at": "2026-01-05T09:30:00Z",
            "updated_at": "2026-01-05T09:30:00Z",
            "archived": false,
            "progress": 0.0,
            "total_books": 3,
            "done_books": 0,
            "books": [
                {"book": {"isbn13": "3", "title": "C"}, "status": "unread", "position": 2, "completed_at": null},
                {"book": {"isbn13": "1", "title": "A"}, "status": "done", "position": 0, "completed_at": "2026-01-07T08:00:00"},
                {"book": {"isbn13": "2", "title": "B"}, "status": "reading", "position": 1}
            ]
        }"#;
        let detail: GoalDetail = serde_json::from_str(json).unwrap();
        let order: Vec<_> = detail
            .books_in_order()
            .iter()
            .map(|entry| entry.book.isbn13.as_str())
            .collect();
        assert_eq!(order, vec!["1", "2", "3"]);
        assert!(detail.book("1").unwrap().completed_at.is_some());
        assert!(detail.book("2").unwrap().completed_at.is_none());
        assert_eq!(detail.summary.title, "Classics");
    }

    #[test]
    fn test_new_goal_skips_absent_fields() {
        let goal = NewGoal::new("Read more").with_isbns(["9784003101018"]);
        let value = serde_json::to_value(&goal).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["recommended_isbns"][0], "9784003101018");
    }

    #[test]
    fn test_access_token_debug_redacted() {
        let token = AccessToken {
            access_token: "secret".into(),
            token_type: "bearer".into(),
        };
        assert!(!format!("{token:?}").contains("secret"));
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert!(timestamp::parse("yesterday").is_err());
    }
}

//! Photo metadata records shown by the content area

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Photo identifier, unique and stable within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoId(pub u32);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File size in megabytes, kept at one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FileSize(f64);

impl FileSize {
    pub fn from_megabytes(mb: f64) -> Self {
        Self((mb * 10.0).round() / 10.0)
    }

    pub fn megabytes(self) -> f64 {
        self.0
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} MB", self.0)
    }
}

/// Review status assigned to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoStatus {
    Good,
    Bad,
    Review,
}

impl PhotoStatus {
    pub const ALL: [PhotoStatus; 3] = [PhotoStatus::Good, PhotoStatus::Bad, PhotoStatus::Review];

    /// Badge color as RGB
    pub fn color(self) -> [u8; 3] {
        match self {
            PhotoStatus::Good => [0x52, 0xc4, 0x1a],
            PhotoStatus::Bad => [0xff, 0x4d, 0x4f],
            PhotoStatus::Review => [0xfa, 0xad, 0x14],
        }
    }

    /// Localization key of the badge label
    pub fn label_key(self) -> &'static str {
        match self {
            PhotoStatus::Good => "status-good",
            PhotoStatus::Bad => "status-bad",
            PhotoStatus::Review => "status-review",
        }
    }
}

/// Color label attached to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Red,
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Purple,
    ];

    /// Tags the generator draws from
    pub const GENERATED: [ColorTag; 3] = [ColorTag::Red, ColorTag::Green, ColorTag::Blue];

    pub fn color(self) -> [u8; 3] {
        match self {
            ColorTag::Red => [0xf5, 0x22, 0x2d],
            ColorTag::Yellow => [0xfa, 0xad, 0x14],
            ColorTag::Green => [0x52, 0xc4, 0x1a],
            ColorTag::Blue => [0x16, 0x77, 0xff],
            ColorTag::Purple => [0x72, 0x2e, 0xd1],
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ColorTag::Red => "tag-red",
            ColorTag::Yellow => "tag-yellow",
            ColorTag::Green => "tag-green",
            ColorTag::Blue => "tag-blue",
            ColorTag::Purple => "tag-purple",
        }
    }
}

/// A detected quality problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    Blur,
    ClosedEyes,
    Exposure,
    Expression,
}

/// How loudly an issue is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Red,
    Orange,
}

impl Issue {
    pub fn label_key(self) -> &'static str {
        match self {
            Issue::Blur => "issue-blur",
            Issue::ClosedEyes => "issue-closed-eyes",
            Issue::Exposure => "issue-exposure",
            Issue::Expression => "issue-expression",
        }
    }

    pub fn severity(self) -> IssueSeverity {
        match self {
            Issue::Blur | Issue::ClosedEyes => IssueSeverity::Red,
            Issue::Exposure | Issue::Expression => IssueSeverity::Orange,
        }
    }
}

/// Independent quality flags of a photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFlags {
    pub blur: bool,
    pub closed_eyes: bool,
    pub exposure: bool,
    pub expression: bool,
}

impl IssueFlags {
    pub fn any(&self) -> bool {
        self.blur || self.closed_eyes || self.exposure || self.expression
    }

    /// Active issues in display order
    pub fn active(&self) -> Vec<Issue> {
        [
            (self.blur, Issue::Blur),
            (self.closed_eyes, Issue::ClosedEyes),
            (self.exposure, Issue::Exposure),
            (self.expression, Issue::Expression),
        ]
        .into_iter()
        .filter_map(|(set, issue)| set.then_some(issue))
        .collect()
    }
}

/// Immutable metadata of one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub name: String,
    pub size: FileSize,
    pub kind: String,
    pub resolution: String,
    pub modified: NaiveDate,
    pub rating: u8,
    pub tag: ColorTag,
    pub status: PhotoStatus,
    pub issues: IssueFlags,
}

impl PhotoRecord {
    pub const MAX_RATING: u8 = 5;

    /// File name for a 1-based sequence number (`photo_007.jpg`)
    pub fn file_name(sequence: u32) -> String {
        format!("photo_{:03}.jpg", sequence)
    }

    /// Short zh-CN date, e.g. `2026/2/25`
    pub fn modified_display(&self) -> String {
        format_short_date(self.modified)
    }
}

pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_padding() {
        assert_eq!(PhotoRecord::file_name(1), "photo_001.jpg");
        assert_eq!(PhotoRecord::file_name(24), "photo_024.jpg");
        assert_eq!(PhotoRecord::file_name(1000), "photo_1000.jpg");
    }

    #[test]
    fn test_file_size_rounding_and_display() {
        let size = FileSize::from_megabytes(3.249);
        assert_eq!(size.to_string(), "3.2 MB");
        assert!(FileSize::from_megabytes(1.5) < FileSize::from_megabytes(10.0));
    }

    #[test]
    fn test_short_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        assert_eq!(format_short_date(date), "2026/2/5");
    }

    #[test]
    fn test_issue_flags() {
        let none = IssueFlags::default();
        assert!(!none.any());
        assert!(none.active().is_empty());

        let flags = IssueFlags { blur: true, expression: true, ..Default::default() };
        assert!(flags.any());
        assert_eq!(flags.active(), vec![Issue::Blur, Issue::Expression]);
        assert_eq!(Issue::Expression.severity(), IssueSeverity::Orange);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// One input row as read from the laureate dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub fullname: String,
}

impl RawRecord {
    #[must_use]
    pub fn new(year: i32, category: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            year,
            category: category.into(),
            fullname: fullname.into(),
        }
    }
}

/// Binary grouping of prize categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryGroup {
    #[serde(rename = "STEM")]
    Stem,
    #[serde(rename = "Non-STEM")]
    NonStem,
}

impl CategoryGroup {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stem => "STEM",
            Self::NonStem => "Non-STEM",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub record: RawRecord,
    pub category_group: CategoryGroup,
}

impl ClassifiedRecord {
    #[must_use]
    pub fn year(&self) -> i32 {
        self.record.year
    }
}

/// A record rejected under `ValidationPolicy::SkipAndReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub row: usize,
    pub field: String,
    pub reason: String,
}

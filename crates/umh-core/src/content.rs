//! Content (movie catalog) records

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::{parse_grouped_number, FieldValue, RecordKind, Result, TableRecord, UmhError};

/// Genres offered by the catalog and the edit form
pub const GENRES: &[&str] = &["Sci-Fi", "Action", "Drama", "Thriller", "Horror", "Adventure"];

/// Publication status of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PublishStatus {
    #[default]
    Published,
    Draft,
}

impl PublishStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Published, Self::Draft]
    }
}

impl Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PublishStatus {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmhError::UnknownStatus(s.to_string()))
    }
}

/// Encoding quality of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Quality {
    #[default]
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "8K")]
    EightK,
}

impl Quality {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hd => "HD",
            Self::FourK => "4K",
            Self::EightK => "8K",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Hd, Self::FourK, Self::EightK]
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|quality| quality.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmhError::InvalidValue(format!("unknown quality '{}'", s)))
    }
}

/// Sortable columns of the content table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    Title,
    Genre,
    Year,
    Quality,
    Rating,
    Views,
    Status,
}

impl ContentField {
    /// Field name as used by the rendering surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::Year => "year",
            Self::Quality => "quality",
            Self::Rating => "rating",
            Self::Views => "views",
            Self::Status => "status",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Title,
            Self::Genre,
            Self::Year,
            Self::Quality,
            Self::Rating,
            Self::Views,
            Self::Status,
        ]
    }
}

impl Display for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentField {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmhError::UnknownField(s.to_string()))
    }
}

/// A title in the streaming catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub director: String,
    pub genre: String,
    pub year: i32,
    pub quality: Quality,
    /// Average rating rendered with one decimal, e.g. "4.3"
    pub rating: String,
    /// View count rendered with grouping separators, e.g. "12,345"
    pub views: String,
    pub status: PublishStatus,
}

impl TableRecord for ContentRecord {
    type Field = ContentField;
    type Status = PublishStatus;

    const KIND: RecordKind = RecordKind::Content;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.genre, self.status.label()]
    }

    fn sort_value(&self, field: ContentField) -> FieldValue {
        match field {
            ContentField::Title => FieldValue::Text(self.title.clone()),
            ContentField::Genre => FieldValue::Text(self.genre.clone()),
            ContentField::Year => FieldValue::Integer(self.year as i64),
            ContentField::Quality => FieldValue::Label(self.quality.label()),
            ContentField::Rating => match self.rating.trim().parse::<f64>() {
                Ok(rating) => FieldValue::Decimal(rating),
                Err(_) => FieldValue::Text(self.rating.clone()),
            },
            ContentField::Views => match parse_grouped_number(&self.views) {
                Some(views) => FieldValue::Integer(views),
                None => FieldValue::Text(self.views.clone()),
            },
            ContentField::Status => FieldValue::Label(self.status.label()),
        }
    }

    fn status(&self) -> PublishStatus {
        self.status
    }

    fn set_status(&mut self, status: PublishStatus) {
        self.status = status;
    }
}

//! Edit form models for content and account records

use serde::{Deserialize, Serialize};
use umh_core::{
    AccountRecord, AccountStatus, ContentRecord, Plan, PublishStatus, Quality, Record, RecordKind,
    Result, UmhError,
};

/// Editable fields of a content record.
///
/// View count is not on the form and is carried over from the record being
/// edited.
///
/// # Examples
///
/// ```
/// use umh_admin::ContentForm;
///
/// let mut form = ContentForm::blank("MOV-1000");
/// form.set_field("year", "2023").unwrap();
/// assert_eq!(form.year, 2023);
/// assert!(form.set_field("year", "soon").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentForm {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub genre: String,
    pub year: i32,
    pub quality: Quality,
    pub rating: String,
    pub status: PublishStatus,
}

impl ContentForm {
    /// Empty form for `id`
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            director: None,
            genre: String::new(),
            year: 0,
            quality: Quality::default(),
            rating: String::new(),
            status: PublishStatus::default(),
        }
    }

    /// Capture the editable fields of `record`
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: Some(record.description.clone()),
            director: Some(record.director.clone()),
            genre: record.genre.clone(),
            year: record.year,
            quality: record.quality,
            rating: record.rating.clone(),
            status: record.status,
        }
    }

    /// Set one field from its text value
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name.trim().to_ascii_lowercase().as_str() {
            "title" => self.title = value.to_string(),
            "description" => self.description = optional_text(value),
            "director" => self.director = optional_text(value),
            "genre" => self.genre = value.to_string(),
            "year" => {
                self.year = value.trim().parse().map_err(|_| {
                    UmhError::InvalidValue(format!("year must be a whole number, got '{}'", value))
                })?
            }
            "quality" => self.quality = value.parse()?,
            "rating" => {
                let rating = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|rating| rating.is_finite())
                    .ok_or_else(|| {
                        UmhError::InvalidValue(format!("rating must be a number, got '{}'", value))
                    })?;
                self.rating = format!("{:.1}", rating);
            }
            "status" => self.status = value.parse()?,
            "id" | "views" => {
                return Err(UmhError::InvalidValue(format!(
                    "field '{}' is not editable",
                    name
                )));
            }
            _ => return Err(UmhError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Merge the form onto `existing`, keeping the fields the form lacks
    pub fn merge(&self, existing: &ContentRecord) -> ContentRecord {
        ContentRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            director: self.director.clone().unwrap_or_default(),
            genre: self.genre.clone(),
            year: self.year,
            quality: self.quality,
            rating: self.rating.clone(),
            views: existing.views.clone(),
            status: self.status,
        }
    }
}

/// Editable fields of an account record.
///
/// Last login is carried over from the record being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: Plan,
    pub status: AccountStatus,
}

impl AccountForm {
    pub fn from_record(record: &AccountRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            plan: record.plan,
            status: record.status,
        }
    }

    /// Set one field from its text value
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "plan" => self.plan = value.parse()?,
            "status" => self.status = value.parse()?,
            "id" | "lastlogin" | "last_login" => {
                return Err(UmhError::InvalidValue(format!(
                    "field '{}' is not editable",
                    name
                )));
            }
            _ => return Err(UmhError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    pub fn merge(&self, existing: &AccountRecord) -> AccountRecord {
        AccountRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            plan: self.plan,
            status: self.status,
            last_login: existing.last_login,
        }
    }
}

/// An edit form for either record variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordForm {
    Content(ContentForm),
    Account(AccountForm),
}

impl RecordForm {
    pub fn from_record(record: &Record) -> Self {
        match record {
            Record::Content(r) => RecordForm::Content(ContentForm::from_record(r)),
            Record::Account(r) => RecordForm::Account(AccountForm::from_record(r)),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RecordForm::Content(_) => RecordKind::Content,
            RecordForm::Account(_) => RecordKind::Account,
        }
    }

    /// Id of the record this form edits
    pub fn id(&self) -> &str {
        match self {
            RecordForm::Content(form) => &form.id,
            RecordForm::Account(form) => &form.id,
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match self {
            RecordForm::Content(form) => form.set_field(name, value),
            RecordForm::Account(form) => form.set_field(name, value),
        }
    }
}

impl From<ContentForm> for RecordForm {
    fn from(form: ContentForm) -> Self {
        RecordForm::Content(form)
    }
}

impl From<AccountForm> for RecordForm {
    fn from(form: AccountForm) -> Self {
        RecordForm::Account(form)
    }
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

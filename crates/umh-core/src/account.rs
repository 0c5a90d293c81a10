//! Account (subscriber) records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::{FieldValue, RecordKind, Result, TableRecord, UmhError};

/// Account standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Active, Self::Suspended]
    }
}

impl Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountStatus {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmhError::UnknownStatus(s.to_string()))
    }
}

/// Subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Plan {
    #[default]
    Free,
    Basic,
    Premium,
    Ultra,
}

impl Plan {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Ultra => "Ultra",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Free, Self::Basic, Self::Premium, Self::Ultra]
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Plan {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|plan| plan.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmhError::InvalidValue(format!("unknown plan '{}'", s)))
    }
}

/// Sortable columns of the accounts table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    Name,
    Email,
    Plan,
    Status,
    LastLogin,
}

impl AccountField {
    /// Field name as used by the rendering surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Plan => "plan",
            Self::Status => "status",
            Self::LastLogin => "lastLogin",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Email,
            Self::Plan,
            Self::Status,
            Self::LastLogin,
        ]
    }
}

impl Display for AccountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccountField {
    type Err = UmhError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s.trim().chars().filter(|c| *c != '_').collect();
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UmhError::UnknownField(s.to_string()))
    }
}

/// A subscriber account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: Plan,
    pub status: AccountStatus,
    pub last_login: DateTime<Utc>,
}

impl AccountRecord {
    /// Last login rendered as a short date ("1/5/2025")
    pub fn last_login_label(&self) -> String {
        self.last_login.format("%-m/%-d/%Y").to_string()
    }
}

impl TableRecord for AccountRecord {
    type Field = AccountField;
    type Status = AccountStatus;

    const KIND: RecordKind = RecordKind::Account;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, self.plan.label()]
    }

    fn sort_value(&self, field: AccountField) -> FieldValue {
        match field {
            AccountField::Name => FieldValue::Text(self.name.clone()),
            AccountField::Email => FieldValue::Text(self.email.clone()),
            AccountField::Plan => FieldValue::Label(self.plan.label()),
            AccountField::Status => FieldValue::Label(self.status.label()),
            AccountField::LastLogin => FieldValue::Timestamp(self.last_login),
        }
    }

    fn status(&self) -> AccountStatus {
        self.status
    }

    fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }
}

//! Concierge system instruction

use serde::{Deserialize, Serialize};
use umh_core::ContentRecord;

/// A title the concierge knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
    pub description: String,
}

impl From<&ContentRecord> for CatalogEntry {
    fn from(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year,
            genres: vec![record.genre.clone()],
            description: record.description.clone(),
        }
    }
}

impl CatalogEntry {
    /// "- Title (2024): Sci-Fi, Action. Plot: ..."
    pub fn prompt_line(&self) -> String {
        format!(
            "- {} ({}): {}. Plot: {}",
            self.title,
            self.year,
            self.genres.join(", "),
            self.description
        )
    }
}

/// Build the concierge persona instruction listing `catalog`
pub fn system_instruction(catalog: &[CatalogEntry]) -> String {
    let lines: Vec<String> = catalog.iter().map(CatalogEntry::prompt_line).collect();
    format!(
        "You are the AI Concierge for \"Universal Movies Hub\" (UMH), a premium movie streaming service.\n\
         Your tone is futuristic, witty, and helpful.\n\
         You have access to the following current movie catalog:\n\
         {}\n\n\
         When a user asks for a recommendation, prioritize movies from this list, but you can discuss general cinema knowledge.\n\
         Keep responses concise (under 100 words) and formatting clean.\n",
        lines.join("\n")
    )
}

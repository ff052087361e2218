//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Roster Types** - categories and their name lists
//! - **Option Types** - team generation settings
//! - **API Types** - backend request/response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::File;

use crate::config::{DEFAULT_TEAM_SIZE, MIN_TEAM_SIZE};

// =============================================================================
// Roster Types
// =============================================================================

/// One of the three participant groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::C];

    /// Single-letter label used in headings and upload filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
        }
    }

    /// Filename attached to this category's PDF in the multipart upload.
    pub fn upload_filename(&self) -> &'static str {
        match self {
            Category::A => "A.pdf",
            Category::B => "B.pdf",
            Category::C => "C.pdf",
        }
    }
}

/// Participant names per category.
///
/// Keys missing from a backend payload deserialize as empty lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(rename = "A", default)]
    pub a: Vec<String>,
    #[serde(rename = "B", default)]
    pub b: Vec<String>,
    #[serde(rename = "C", default)]
    pub c: Vec<String>,
}

impl Categories {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::A => &self.a,
            Category::B => &self.b,
            Category::C => &self.c,
        }
    }

    pub fn set(&mut self, category: Category, names: Vec<String>) {
        match category {
            Category::A => self.a = names,
            Category::B => self.b = names,
            Category::C => self.c = names,
        }
    }

    /// Total number of participants across all categories.
    pub fn total(&self) -> usize {
        self.a.len() + self.b.len() + self.c.len()
    }
}

/// PDF files picked by the user, one slot per input.
#[derive(Clone, Debug, Default)]
pub struct RosterFiles {
    pub a: Option<File>,
    pub b: Option<File>,
    pub c: Option<File>,
    pub single: Option<File>,
}

impl RosterFiles {
    pub fn get(&self, category: Category) -> Option<&File> {
        match category {
            Category::A => self.a.as_ref(),
            Category::B => self.b.as_ref(),
            Category::C => self.c.as_ref(),
        }
    }

    pub fn set(&mut self, category: Category, file: Option<File>) {
        match category {
            Category::A => self.a = file,
            Category::B => self.b = file,
            Category::C => self.c = file,
        }
    }

    /// Categories that currently have a file selected, in order.
    pub fn selected_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some())
            .collect()
    }

    /// Whether "Parse Separate PDFs" has anything to send.
    pub fn can_parse_separate(&self, parsing: bool) -> bool {
        !parsing && !self.selected_categories().is_empty()
    }

    /// Whether "Parse Single PDF" has anything to send.
    pub fn can_parse_single(&self, parsing: bool) -> bool {
        !parsing && self.single.is_some()
    }
}

// =============================================================================
// Option Types
// =============================================================================

/// How the backend hands out the extra member when only two categories
/// have participants left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoCategoryStrategy {
    /// The larger category gives the extra member.
    #[default]
    Larger,
    /// Categories take turns giving the extra member.
    Alternate,
    /// The extra member comes from a random category.
    Random,
}

impl TwoCategoryStrategy {
    pub const ALL: [TwoCategoryStrategy; 3] = [
        TwoCategoryStrategy::Larger,
        TwoCategoryStrategy::Alternate,
        TwoCategoryStrategy::Random,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TwoCategoryStrategy::Larger => "larger",
            TwoCategoryStrategy::Alternate => "alternate",
            TwoCategoryStrategy::Random => "random",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TwoCategoryStrategy::Larger => "Larger category gives extra",
            TwoCategoryStrategy::Alternate => "Alternate extra pick",
            TwoCategoryStrategy::Random => "Random extra pick",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Team generation settings sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Members per team, never below [`MIN_TEAM_SIZE`].
    pub team_size: usize,
    /// Keep the final short team instead of dropping it.
    pub allow_incomplete_teams: bool,
    pub two_category_strategy: TwoCategoryStrategy,
    /// Let a participant appear in more than one team.
    pub allow_reuse: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE.max(MIN_TEAM_SIZE),
            allow_incomplete_teams: true,
            two_category_strategy: TwoCategoryStrategy::default(),
            allow_reuse: false,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body of `POST /api/generate-teams`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateRequest {
    pub categories: Categories,
    pub options: GenerateOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

/// Response from both parse endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub categories: Categories,
}

/// Response from the generate endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub teams: Vec<Vec<String>>,
    pub meta: GenerateMeta,
}

/// Summary returned alongside generated teams.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMeta {
    #[serde(default)]
    pub incomplete_teams: usize,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. Components flatten it
/// into a single message string for display.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// A browser API (FormData, Blob, clipboard...) failed.
    #[error("Browser error: {0}")]
    Browser(String),

    /// Teams could not be rendered for export.
    #[error("Export error: {0}")]
    Export(String),

    /// An action needed a file that was not selected.
    #[error("Please select {0}")]
    MissingFile(&'static str),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_tolerate_missing_keys() {
        let categories: Categories = serde_json::from_str(r#"{"A": ["Asha"], "C": []}"#).unwrap();
        assert_eq!(categories.a, vec!["Asha".to_string()]);
        assert!(categories.b.is_empty());
        assert_eq!(categories.total(), 1);
    }

    #[test]
    fn test_categories_get_set() {
        let mut categories = Categories::default();
        categories.set(Category::B, vec!["Ravi".into(), "Meena".into()]);
        assert_eq!(categories.get(Category::B).len(), 2);
        assert!(categories.get(Category::A).is_empty());
        assert_eq!(categories.total(), 2);
    }

    #[test]
    fn test_no_file_disables_parse_actions() {
        let files = RosterFiles::default();
        assert!(!files.can_parse_single(false));
        assert!(!files.can_parse_separate(false));
        assert!(files.selected_categories().is_empty());
    }

    #[test]
    fn test_generate_request_serialization() {
        let mut categories = Categories::default();
        categories.set(Category::A, vec!["Asha".into()]);
        let request = GenerateRequest {
            categories,
            options: GenerateOptions::default(),
            seed: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("seed").is_none());
        assert_eq!(value["categories"]["A"][0], "Asha");
        assert_eq!(value["options"]["teamSize"], 3);
        assert_eq!(value["options"]["allowIncompleteTeams"], true);
        assert_eq!(value["options"]["twoCategoryStrategy"], "larger");
        assert_eq!(value["options"]["allowReuse"], false);
    }

    #[test]
    fn test_generate_request_keeps_seed() {
        let request = GenerateRequest {
            categories: Categories::default(),
            options: GenerateOptions {
                two_category_strategy: TwoCategoryStrategy::Alternate,
                ..GenerateOptions::default()
            },
            seed: Some(42),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["options"]["twoCategoryStrategy"], "alternate");
    }

    #[test]
    fn test_strategy_round_trips_through_option_value() {
        for strategy in TwoCategoryStrategy::ALL {
            assert_eq!(TwoCategoryStrategy::from_value(strategy.as_str()), Some(strategy));
        }
        assert_eq!(TwoCategoryStrategy::from_value("biggest"), None);
    }

    #[test]
    fn test_generate_response_deserialization() {
        let json = r#"{
            "teams": [["Asha", "Ravi", "Kiran"], ["Meena", "Dev"]],
            "meta": { "incompleteTeams": 1 }
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.teams.len(), 2);
        assert_eq!(response.teams[1], vec!["Meena".to_string(), "Dev".to_string()]);
        assert_eq!(response.meta.incomplete_teams, 1);
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Server { status: 500, body: "boom".into() };
        assert_eq!(err.to_string(), "Server error (500): boom");
        assert_eq!(
            AppError::MissingFile("a single PDF file").to_string(),
            "Please select a single PDF file"
        );
    }
}

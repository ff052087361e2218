//! Application configuration.
//!
//! Centralized configuration for the Team Builder frontend.
//! The backend URL is baked in at build time; everything else is fixed.

/// Backend API base URL.
///
/// Set `TEAM_BUILDER_API_BASE` when running `trunk build` to point the
/// app at another backend. Defaults to the local development server.
pub const API_BASE: &str = match option_env!("TEAM_BUILDER_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Smallest team size the backend accepts.
pub const MIN_TEAM_SIZE: usize = 2;

/// Team size preselected in the options panel.
pub const DEFAULT_TEAM_SIZE: usize = 3;

/// File name offered for the CSV export.
pub const CSV_FILENAME: &str = "teams.csv";

/// `accept` filter for every roster file input.
pub const PDF_ACCEPT: &str = "application/pdf";

/// How long the "Copied!" label stays on the clipboard button.
pub const COPIED_FLASH_MS: u32 = 2_000;

/// Upper bound for seeds drawn by the random seed button.
pub const MAX_RANDOM_SEED: i64 = 999_999;

/// Resolve an endpoint path against [`API_BASE`].
pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let url = endpoint("/api/parse-single");
        assert!(url.ends_with("/api/parse-single"));
        assert!(!url.contains("//api"));
    }

    #[test]
    fn test_defaults_respect_minimum() {
        assert!(DEFAULT_TEAM_SIZE >= MIN_TEAM_SIZE);
    }
}

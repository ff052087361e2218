//! Helpers for the editable name lists and the numeric option inputs.

use crate::config::MIN_TEAM_SIZE;

/// Split textarea input into participant names.
///
/// Names may be separated by newlines, commas or semicolons. Surrounding
/// whitespace is trimmed and blank entries are dropped. Duplicates stay.
pub fn parse_names(text: &str) -> Vec<String> {
    text.split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render names one per line for a textarea.
pub fn names_to_text(names: &[String]) -> String {
    names.join("\n")
}

/// Parse the team size input, clamped to [`MIN_TEAM_SIZE`].
pub fn parse_team_size(input: &str) -> usize {
    input
        .trim()
        .parse::<usize>()
        .map_or(MIN_TEAM_SIZE, |size| size.max(MIN_TEAM_SIZE))
}

/// Parse the optional seed input. Empty or non-integer input means no seed.
pub fn parse_seed(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_all_separators() {
        let names = parse_names("Asha\nRavi, Kiran;Meena\r\n  Dev  ");
        assert_eq!(names, vec!["Asha", "Ravi", "Kiran", "Meena", "Dev"]);
    }

    #[test]
    fn test_parse_names_drops_blanks_keeps_duplicates() {
        let names = parse_names("\n\nAsha,,;Asha\n   \n");
        assert_eq!(names, vec!["Asha", "Asha"]);
        assert!(parse_names("").is_empty());
    }

    #[test]
    fn test_names_text_round_trip() {
        let names = vec!["Asha".to_string(), "Ravi".to_string()];
        assert_eq!(names_to_text(&names), "Asha\nRavi");
        assert_eq!(parse_names(&names_to_text(&names)), names);
    }

    #[test]
    fn test_team_size_never_below_minimum() {
        assert_eq!(parse_team_size("5"), 5);
        assert_eq!(parse_team_size("1"), MIN_TEAM_SIZE);
        assert_eq!(parse_team_size("0"), MIN_TEAM_SIZE);
        assert_eq!(parse_team_size("-3"), MIN_TEAM_SIZE);
        assert_eq!(parse_team_size("abc"), MIN_TEAM_SIZE);
        assert_eq!(parse_team_size(""), MIN_TEAM_SIZE);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("   "), None);
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed("-7"), Some(-7));
        assert_eq!(parse_seed("4.2"), None);
    }
}

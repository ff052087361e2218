//! Rendering generated teams for export, clipboard and status display.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::types::{AppError, AppResult, GenerateMeta};

/// Display name for the team at `index` (0-based).
pub fn team_label(index: usize) -> String {
    format!("Team {}", index + 1)
}

/// Whether a team came back short of the requested size.
pub fn is_incomplete(team: &[String], team_size: usize) -> bool {
    team.len() < team_size
}

/// Serialize teams as CSV, one row per team: `"Team n","member",...`.
///
/// Every cell is quoted and embedded quotes are doubled. Rows are separated
/// by `\n` with no trailing newline.
pub fn teams_to_csv(teams: &[Vec<String>]) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for (index, team) in teams.iter().enumerate() {
        let label = team_label(index);
        let row = std::iter::once(label.as_str()).chain(team.iter().map(String::as_str));
        writer
            .write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    let mut csv = String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))?;
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}

/// Plain-text listing for the clipboard: `Team n: a, b, c` per line.
pub fn teams_to_clipboard_text(teams: &[Vec<String>]) -> String {
    teams
        .iter()
        .enumerate()
        .map(|(index, team)| format!("{}: {}", team_label(index), team.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line shown after a successful generation.
pub fn generation_message(meta: &GenerateMeta) -> String {
    if meta.incomplete_teams > 0 {
        format!("{} incomplete team(s)", meta.incomplete_teams)
    } else {
        "All teams complete".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_csv_quotes_commas_and_quotes() {
        let teams = teams(&[&["Asha", "Singh, Ravi"], &["Kiran \"KD\" Das"]]);
        let csv = teams_to_csv(&teams).unwrap();
        assert_eq!(
            csv,
            "\"Team 1\",\"Asha\",\"Singh, Ravi\"\n\"Team 2\",\"Kiran \"\"KD\"\" Das\""
        );
    }

    #[test]
    fn test_csv_handles_uneven_rows_and_empty_cells() {
        let teams = teams(&[&["Asha", "", "Dev"], &[]]);
        let csv = teams_to_csv(&teams).unwrap();
        assert_eq!(csv, "\"Team 1\",\"Asha\",\"\",\"Dev\"\n\"Team 2\"");
    }

    #[test]
    fn test_csv_empty() {
        assert_eq!(teams_to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_clipboard_text() {
        let teams = teams(&[&["Asha", "Ravi"], &["Meena"]]);
        assert_eq!(
            teams_to_clipboard_text(&teams),
            "Team 1: Asha, Ravi\nTeam 2: Meena"
        );
    }

    #[test]
    fn test_generation_message() {
        assert_eq!(
            generation_message(&GenerateMeta { incomplete_teams: 2 }),
            "2 incomplete team(s)"
        );
        assert_eq!(generation_message(&GenerateMeta::default()), "All teams complete");
    }

    #[test]
    fn test_is_incomplete() {
        let team = vec!["Asha".to_string(), "Ravi".to_string()];
        assert!(is_incomplete(&team, 3));
        assert!(!is_incomplete(&team, 2));
    }
}

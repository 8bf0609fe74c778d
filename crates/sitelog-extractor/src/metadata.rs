//! Header metadata: log date, site name, submitter
//!
//! Each field is tried against an ordered list of patterns and the first
//! usable match wins. A field nobody can find is simply `None`.

use chrono::NaiveDate;
use regex::Regex;
use sitelog_domain::LogMetadata;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::ExtractorConfig;

/// Calendar formats tried against every structural date match
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d %B %Y"];

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)Date:\s*(\d{1,2}/\d{1,2}/\d{4})"),
        pattern(r"(?i)Date:\s*(\d{1,2}-\d{1,2}-\d{4})"),
        pattern(
            r"(?i)(\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4})",
        ),
    ]
});

static SITE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?im)(?:Project|Site):\s*(.+?)(?:\n|$)"),
        pattern(r"(?im)^(.+?)\s*(?:Daily|Site)\s*(?:Report|Log)"),
        pattern(r"(?im)(?:Daily|Site)\s+(?:Report|Log)\s*[-:]\s*(.+?)(?:\n|Date)"),
        pattern(r"(?im)Report\s*[-:]\s*(.+?)(?:\n|Date)"),
    ]
});

// Name words are separated by spaces or tabs only, so a name stops at the
// end of its line and never absorbs a capitalized word from the next one.
static MANAGER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?:Site\s+Manager|Logged\s+by|Manager|Reporting\s+Officer|Supervisor):\s*([A-Z][a-z]+(?:[ \t]+[A-Z][a-zA-Z-]+)+)",
        ),
        pattern(r"by:?\s*([A-Z][a-z]+(?:[ \t]+[A-Z][a-zA-Z-]+)+)"),
    ]
});

fn pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid metadata regex pattern")
}

/// Parse all three header fields
pub fn parse_metadata(text: &str, config: &ExtractorConfig) -> LogMetadata {
    LogMetadata {
        log_date: extract_date(text),
        site_name: extract_site_name(text, &config.known_sites, config.min_site_name_chars),
        submitted_by: extract_manager_name(text),
    }
}

/// First date whose structural match is also a real calendar date
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    for regex in DATE_PATTERNS.iter() {
        let Some(caps) = regex.captures(text) else {
            continue;
        };
        let date_str = &caps[1];
        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_str, fmt).ok())
        {
            return Some(date);
        }
        debug!("Date-like text '{}' is not a calendar date", date_str);
    }
    None
}

/// Known site name anywhere in the text, else the first header capture
/// longer than `min_chars`
pub fn extract_site_name(text: &str, known_sites: &[String], min_chars: usize) -> Option<String> {
    let lower = text.to_lowercase();
    if let Some(site) = known_sites
        .iter()
        .find(|site| lower.contains(&site.to_lowercase()))
    {
        return Some(site.clone());
    }

    SITE_PATTERNS.iter().find_map(|regex| {
        let caps = regex.captures(text)?;
        let site = caps[1].trim();
        (site.chars().count() > min_chars).then(|| site.to_string())
    })
}

/// Capitalized two-or-more-word name after a submitter label
pub fn extract_manager_name(text: &str) -> Option<String> {
    MANAGER_PATTERNS
        .iter()
        .find_map(|regex| regex.captures(text).map(|caps| caps[1].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sites() -> Vec<String> {
        ExtractorConfig::default().known_sites
    }

    #[test]
    fn test_slash_date() {
        assert_eq!(extract_date("Date: 15/10/2025"), NaiveDate::from_ymd_opt(2025, 10, 15));
    }

    #[test]
    fn test_dash_date_and_single_digits() {
        assert_eq!(extract_date("date: 3-7-2025\n"), NaiveDate::from_ymd_opt(2025, 7, 3));
    }

    #[test]
    fn test_long_month_date() {
        let text = "Daily report for 22 October 2025, prepared on site";
        assert_eq!(extract_date(text), NaiveDate::from_ymd_opt(2025, 10, 22));
    }

    #[test]
    fn test_invalid_calendar_date_is_none() {
        assert_eq!(extract_date("Date: 31/02/2025"), None);
    }

    #[test]
    fn test_invalid_date_falls_through_to_later_pattern() {
        let text = "Date: 31/02/2025\nRevised: 1 March 2025";
        assert_eq!(extract_date(text), NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("Nothing to see here"), None);
    }

    #[test]
    fn test_known_site_wins_over_header() {
        let text = "Project: Harbour Works\nDeliveries for sedra phase 2";
        assert_eq!(extract_site_name(text, &sites(), 3), Some("SEDRA".to_string()));
    }

    #[test]
    fn test_known_site_list_order() {
        // "MARAFY" precedes "MARAFY Waterfront" in the list
        let text = "Daily Site Log - MARAFY Waterfront";
        assert_eq!(extract_site_name(text, &sites(), 3), Some("MARAFY".to_string()));
    }

    #[test]
    fn test_project_header() {
        let text = "Project: Harbour Towers\nDate: 01/11/2025";
        assert_eq!(extract_site_name(text, &sites(), 3), Some("Harbour Towers".to_string()));
    }

    #[test]
    fn test_leading_line_before_report_keyword() {
        let text = "Northgate Villas Daily Report\nDate: 01/11/2025";
        assert_eq!(extract_site_name(text, &sites(), 3), Some("Northgate Villas".to_string()));
    }

    #[test]
    fn test_short_captures_are_rejected() {
        let text = "Site: A1\nNothing else";
        assert_eq!(extract_site_name(text, &sites(), 3), None);
    }

    #[test]
    fn test_manager_label() {
        let text = "Site Manager: Ahmed Al-Rashid\nLocation: Tower A";
        assert_eq!(extract_manager_name(text), Some("Ahmed Al-Rashid".to_string()));
    }

    #[test]
    fn test_manager_label_variants() {
        assert_eq!(
            extract_manager_name("Reporting Officer: Faisal Al-Mutairi"),
            Some("Faisal Al-Mutairi".to_string())
        );
        assert_eq!(
            extract_manager_name("Logged by: Omar Abdulaziz"),
            Some("Omar Abdulaziz".to_string())
        );
        assert_eq!(
            extract_manager_name("Report prepared by Khalid Rahman"),
            Some("Khalid Rahman".to_string())
        );
    }

    #[test]
    fn test_manager_name_stops_at_line_end() {
        assert_eq!(
            extract_manager_name("Supervisor: Salem Otaibi\nTower Crane idle"),
            Some("Salem Otaibi".to_string())
        );
        // A lone first name cannot borrow a second word from the next line
        assert_eq!(extract_manager_name("Supervisor: Salem\nTower Crane idle"), None);
    }

    #[test]
    fn test_single_word_name_is_rejected() {
        assert_eq!(extract_manager_name("Supervisor: Salem"), None);
    }

    #[test]
    fn test_parse_metadata() {
        let text = "Daily Site Log - SEDRA Residential\nDate: 22/10/2025\nSite Manager: Omar Abdulaziz\n";
        let metadata = parse_metadata(text, &ExtractorConfig::default());
        assert_eq!(metadata.log_date, NaiveDate::from_ymd_opt(2025, 10, 22));
        assert_eq!(metadata.site_name.as_deref(), Some("SEDRA"));
        assert_eq!(metadata.submitted_by.as_deref(), Some("Omar Abdulaziz"));
    }
}

//! Signal detectors: pure predicates and measurements over résumé text.
//!
//! Every detector is infallible: degenerate input (no lines, no words, no bullets) yields a
//! neutral value rather than an error. Functions taking `lower` expect text that has already
//! been lower-cased by the caller.

use std::collections::{BTreeSet, HashMap};

use regex::Regex;

use crate::scoring::tables::{
    ScoringTables, ACTION_VERBS, ATS_FONTS, HEADLINE_INDICATORS, LEADING_CONTACT_MARKERS,
    LOCATION_KEYWORDS, PORTFOLIO_MARKERS, SOFT_SKILLS, STOP_WORDS,
};

/// Lines considered when looking for the candidate's name.
const NAME_SCAN_LINES: usize = 5;
/// Lines considered when looking for a headline.
const HEADLINE_SCAN_LINES: usize = 10;
const HEADLINE_MAX_WORDS: usize = 6;
/// Lines read after a summary heading.
const SUMMARY_SCAN_LINES: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Generic helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| lower.contains(needle))
}

/// Total non-overlapping occurrences of every needle.
pub fn count_occurrences(lower: &str, needles: &[&str]) -> usize {
    needles.iter().map(|needle| lower.matches(needle).count()).sum()
}

/// Total non-overlapping matches across a pattern family.
pub fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

pub fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|re| re.is_match(text))
}

/// `numerator / denominator * 100`, or 0 when the denominator is zero.
pub fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

/// A non-blank line among the first five with at least two words, no `@` and no digit.
pub fn has_name_line(text: &str) -> bool {
    text.split('\n').take(NAME_SCAN_LINES).any(|line| {
        !line.trim().is_empty()
            && line.split_whitespace().count() >= 2
            && !line.contains('@')
            && !line.chars().any(|c| c.is_ascii_digit())
    })
}

pub fn has_phone(tables: &ScoringTables, text: &str) -> bool {
    tables.patterns.phone.is_match(text)
}

pub fn has_email(tables: &ScoringTables, text: &str) -> bool {
    tables.patterns.email.is_match(text)
}

/// A location keyword or a `City, ST` token.
pub fn has_location(tables: &ScoringTables, text: &str, lower: &str) -> bool {
    contains_any(lower, LOCATION_KEYWORDS) || tables.patterns.city_state.is_match(text)
}

pub fn has_city_state(tables: &ScoringTables, text: &str) -> bool {
    tables.patterns.city_state.is_match(text)
}

/// A LinkedIn profile path or any portfolio/URL marker.
pub fn has_profile_link(tables: &ScoringTables, text: &str, lower: &str) -> bool {
    tables.patterns.linkedin.is_match(text) || contains_any(lower, PORTFOLIO_MARKERS)
}

/// True when the very first line carries contact details (a header-style layout).
pub fn leading_line_has_contact(text: &str) -> bool {
    let first = text.split('\n').next().unwrap_or_default().to_lowercase();
    contains_any(&first, LEADING_CONTACT_MARKERS)
}

// ────────────────────────────────────────────────────────────────────────────
// Headline / summary
// ────────────────────────────────────────────────────────────────────────────

/// Short lines after the first one that look like a title or headline.
pub fn headline_candidates(text: &str) -> Vec<&str> {
    text.split('\n')
        .take(HEADLINE_SCAN_LINES)
        .skip(1)
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.contains('@')
                && !line.chars().take(5).any(|c| c.is_ascii_digit())
                && line.split_whitespace().count() <= HEADLINE_MAX_WORDS
        })
        .collect()
}

/// Non-blank lines in the four lines that follow the first summary indicator.
///
/// `None` when the résumé has no summary-style heading at all.
pub fn summary_line_count(lower: &str) -> Option<usize> {
    let indicator = HEADLINE_INDICATORS
        .iter()
        .find(|indicator| lower.contains(*indicator))?;
    let start = lower.find(indicator)?;
    let count = lower[start..]
        .split('\n')
        .skip(1)
        .take(SUMMARY_SCAN_LINES)
        .filter(|line| !line.trim().is_empty())
        .count();
    Some(count)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn find_technical_skills(tables: &ScoringTables, lower: &str) -> Vec<&'static str> {
    tables
        .technical_skills()
        .filter(|skill| lower.contains(skill))
        .collect()
}

pub fn find_soft_skills(lower: &str) -> Vec<&'static str> {
    SOFT_SKILLS
        .iter()
        .copied()
        .filter(|skill| lower.contains(skill))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

/// A recognised date notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateFormat {
    /// `03/2021`
    MonthSlashYear,
    /// `2019-2021` or `2019–2021`
    YearRange,
    /// `Mar 2021`
    MonthNameYear,
}

/// Four-digit years 1900–2099 in order of appearance.
pub fn find_years(tables: &ScoringTables, text: &str) -> Vec<u16> {
    tables
        .patterns
        .year
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Later-listed years never exceed earlier ones. Vacuously true for fewer than two years.
pub fn is_reverse_chronological(years: &[u16]) -> bool {
    years.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Distinct date notations used anywhere in the text.
pub fn date_formats(tables: &ScoringTables, text: &str) -> BTreeSet<DateFormat> {
    let p = &tables.patterns;
    [
        (&p.date_slash, DateFormat::MonthSlashYear),
        (&p.date_range, DateFormat::YearRange),
        (&p.date_month, DateFormat::MonthNameYear),
    ]
    .into_iter()
    .filter(|(re, _)| re.is_match(text))
    .map(|(_, format)| format)
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Bullets and achievements
// ────────────────────────────────────────────────────────────────────────────

pub fn has_bullet_markers(tables: &ScoringTables, text: &str) -> bool {
    tables.patterns.bullet_marker.is_match(text)
}

pub fn count_bullets(tables: &ScoringTables, text: &str) -> usize {
    tables.patterns.bullet_count.find_iter(text).count()
}

/// Distinct action verbs appearing anywhere (substring match).
pub fn action_verb_count(lower: &str) -> usize {
    ACTION_VERBS.iter().filter(|verb| lower.contains(*verb)).count()
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Blank-line paragraph breaks are rare relative to line breaks.
pub fn has_low_paragraph_ratio(text: &str) -> bool {
    let paragraph_breaks = text.matches("\n\n").count();
    if paragraph_breaks == 0 {
        return true;
    }
    (paragraph_breaks as f64) < text.matches('\n').count() as f64 * 0.1
}

/// Share of non-blank lines, in [0, 1].
pub fn non_blank_line_ratio(text: &str) -> f64 {
    let lines: Vec<&str> = text.split('\n').collect();
    let non_blank = lines.iter().filter(|line| !line.trim().is_empty()).count();
    non_blank as f64 / lines.len() as f64
}

/// Whether any reported font is on the ATS-friendly list. `None` without font data.
pub fn uses_ats_font<'a>(fonts: impl IntoIterator<Item = &'a String>) -> Option<bool> {
    let mut seen_any = false;
    for font in fonts {
        seen_any = true;
        let font_lower = font.to_lowercase();
        if ATS_FONTS.iter().any(|ats_font| font_lower.contains(ats_font)) {
            return Some(true);
        }
    }
    seen_any.then_some(false)
}

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

/// Distinct `\w{4,}` tokens of lower-cased text.
pub fn token_set(tables: &ScoringTables, lower: &str) -> BTreeSet<String> {
    tables
        .patterns
        .word_token
        .find_iter(lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Stop-word-filtered tokens, most frequent first, ties in order of first appearance.
pub fn ranked_keywords(tables: &ScoringTables, lower: &str) -> Vec<String> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();

    for token in tables.patterns.word_token.find_iter(lower).map(|m| m.as_str()) {
        if STOP_WORDS.contains(&token) {
            continue;
        }
        let count = frequency.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first-appearance order among equal frequencies.
    first_seen.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    first_seen.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ScoringTables {
        ScoringTables::new().unwrap()
    }

    #[test]
    fn test_name_line_requires_two_words_without_digits() {
        assert!(has_name_line("Jane Doe\njane@example.com"));
        assert!(!has_name_line("Resume\njane@example.com\n555 123 4567"));
        assert!(!has_name_line("Jane Doe 2024"));
    }

    #[test]
    fn test_name_line_only_scans_first_five_lines() {
        assert!(!has_name_line("a\nb\nc\nd\ne\nJane Doe"));
    }

    #[test]
    fn test_phone_and_email_patterns() {
        let t = tables();
        assert!(has_phone(&t, "Call (555) 123-4567"));
        assert!(has_phone(&t, "+1 555.123.4567"));
        assert!(!has_phone(&t, "Call 555-1234"));
        assert!(has_email(&t, "JANE.DOE@Example.COM"));
        assert!(!has_email(&t, "jane at example dot com"));
    }

    #[test]
    fn test_location_keyword_or_city_state() {
        let t = tables();
        assert!(has_location(&t, "Austin, TX", "austin, tx"));
        assert!(has_location(&t, "Open to relocation", "open to relocation"));
        assert!(!has_location(&t, "Austin TX", "austin tx"));
    }

    #[test]
    fn test_profile_link_detection() {
        let t = tables();
        let text = "linkedin.com/in/jane-doe";
        assert!(has_profile_link(&t, text, &text.to_lowercase()));
        let text = "See my portfolio";
        assert!(has_profile_link(&t, text, &text.to_lowercase()));
        let text = "No links here";
        assert!(!has_profile_link(&t, text, &text.to_lowercase()));
    }

    #[test]
    fn test_leading_contact_line() {
        assert!(leading_line_has_contact("jane@example.com | Jane Doe\nEngineer"));
        assert!(leading_line_has_contact("Phone: 555 123 4567"));
        assert!(!leading_line_has_contact("Jane Doe\njane@example.com"));
    }

    #[test]
    fn test_headline_candidates_skip_first_line() {
        let text = "Jane Doe\nSenior Backend Engineer\njane@example.com\n2019 - present";
        assert_eq!(headline_candidates(text), vec!["Senior Backend Engineer"]);
    }

    #[test]
    fn test_summary_line_count() {
        let lower = "jane doe\nsummary\nline one\nline two\n\nline three\nline four";
        assert_eq!(summary_line_count(lower), Some(3));
        assert_eq!(summary_line_count("no heading at all"), None);
    }

    #[test]
    fn test_skill_matching_is_substring_based() {
        let t = tables();
        let found = find_technical_skills(&t, "javascript and docker");
        // "java" is a substring of "javascript"
        assert_eq!(found, vec!["java", "javascript", "docker"]);
        assert_eq!(find_soft_skills("strong leadership and teamwork"), vec!["leadership", "teamwork"]);
    }

    #[test]
    fn test_years_parsed_as_full_years() {
        let t = tables();
        assert_eq!(find_years(&t, "2021 - 2019, 1999, 2150, 123456"), vec![2021, 2019, 1999]);
    }

    #[test]
    fn test_reverse_chronological_vacuous_below_two_years() {
        assert!(is_reverse_chronological(&[]));
        assert!(is_reverse_chronological(&[2020]));
        assert!(is_reverse_chronological(&[2022, 2022, 2019]));
        assert!(!is_reverse_chronological(&[2019, 2022]));
    }

    #[test]
    fn test_date_formats_are_classified() {
        let t = tables();
        let formats = date_formats(&t, "03/2021 – Present, Jan 2019, 2015-2018");
        assert_eq!(formats.len(), 3);
        assert!(date_formats(&t, "no dates").is_empty());
    }

    #[test]
    fn test_bullets_detected_and_counted() {
        let t = tables();
        let text = "• Built things\n- Shipped things\n* Led things\nplain-line";
        assert!(has_bullet_markers(&t, text));
        assert_eq!(count_bullets(&t, text), 3);
        assert!(!has_bullet_markers(&t, "plain-line only"));
    }

    #[test]
    fn test_percentage_handles_zero_denominator() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_paragraph_ratio() {
        assert!(has_low_paragraph_ratio("a\nb\nc"));
        assert!(!has_low_paragraph_ratio("a\n\nb\n\nc"));
    }

    #[test]
    fn test_non_blank_line_ratio() {
        assert_eq!(non_blank_line_ratio("a\n\nb\n"), 0.5);
        assert_eq!(non_blank_line_ratio(""), 0.0);
    }

    #[test]
    fn test_ats_font_detection() {
        let fonts: BTreeSet<String> = ["Calibri-Bold".to_string()].into();
        assert_eq!(uses_ats_font(&fonts), Some(true));
        let fonts: BTreeSet<String> = ["Comic Sans".to_string()].into();
        assert_eq!(uses_ats_font(&fonts), Some(false));
        assert_eq!(uses_ats_font(&BTreeSet::new()), None);
    }

    #[test]
    fn test_ranked_keywords_by_frequency_then_first_seen() {
        let t = tables();
        let ranked = ranked_keywords(&t, "kafka with rust, rust and kafka, rust streams");
        assert_eq!(ranked, vec!["rust", "kafka", "streams"]);
    }
}

//! Repository language breakdowns.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Matches runs of whitespace in language names.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Shares below this percentage are left off the language bar.
const MIN_VISIBLE_PERCENT: f64 = 0.1;

/// Key used to look up a language's display color.
///
/// Lower-cases and rewrites characters that cannot appear in a style key:
/// `C++` → `cpp`, `C#` → `csharp`, `Vim Script` → `vimscript`,
/// `Objective-C` → `objectivec`. Missing names map to `default`.
pub fn normalize_language_key(name: Option<&str>) -> String {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return "default".to_string();
    };
    let key = name
        .to_lowercase()
        .replace('+', "p")
        .replace('#', "sharp")
        .replace('.', "dot")
        .replace('-', "");
    WHITESPACE_RE.replace_all(&key, "").into_owned()
}

/// One language's share of a repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub bytes: u64,
    pub percentage: f64,
}

impl LanguageShare {
    /// Percentage rounded to one decimal for display, e.g. `67.3`.
    pub fn display_percentage(&self) -> String {
        format!("{:.1}", self.percentage)
    }

    /// Color lookup key for this language.
    pub fn color_key(&self) -> String {
        normalize_language_key(Some(&self.name))
    }
}

/// Byte-accurate language percentages, largest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LanguageBreakdown {
    shares: Vec<LanguageShare>,
}

impl LanguageBreakdown {
    /// Builds a breakdown from GitHub's `{language: bytes}` map.
    ///
    /// Ties are ordered by name so output is stable.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_bytes(languages: &HashMap<String, u64>) -> Self {
        let total: u64 = languages.values().sum();
        if total == 0 {
            return Self::default();
        }

        let mut shares: Vec<_> = languages
            .iter()
            .map(|(name, &bytes)| LanguageShare {
                name: name.clone(),
                bytes,
                percentage: bytes as f64 / total as f64 * 100.0,
            })
            .collect();
        shares.sort_by(|a, b| {
            b.bytes
                .cmp(&a.bytes)
                .then_with(|| a.name.cmp(&b.name))
        });

        Self { shares }
    }

    pub fn shares(&self) -> &[LanguageShare] {
        &self.shares
    }

    /// Shares large enough to draw on the language bar.
    pub fn visible(&self) -> impl Iterator<Item = &LanguageShare> {
        self.shares
            .iter()
            .filter(|share| share.percentage >= MIN_VISIBLE_PERCENT)
    }

    /// Language names, largest first.
    pub fn names(&self) -> Vec<String> {
        self.shares.iter().map(|share| share.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_awkward_language_names() {
        assert_eq!(normalize_language_key(Some("C++")), "cpp");
        assert_eq!(normalize_language_key(Some("C#")), "csharp");
        assert_eq!(normalize_language_key(Some("F#")), "fsharp");
        assert_eq!(normalize_language_key(Some("Objective-C")), "objectivec");
        assert_eq!(normalize_language_key(Some("Vim Script")), "vimscript");
        assert_eq!(normalize_language_key(Some("ASP.NET")), "aspdotnet");
        assert_eq!(normalize_language_key(Some("Rust")), "rust");
    }

    #[test]
    fn missing_language_uses_default_key() {
        assert_eq!(normalize_language_key(None), "default");
        assert_eq!(normalize_language_key(Some("  ")), "default");
    }

    #[test]
    fn percentages_are_byte_accurate_and_sorted() {
        let languages = HashMap::from([
            ("CSS".to_string(), 1_000),
            ("JavaScript".to_string(), 3_000),
            ("HTML".to_string(), 6_000),
        ]);
        let breakdown = LanguageBreakdown::from_bytes(&languages);
        let names = breakdown.names();
        assert_eq!(names, ["HTML", "JavaScript", "CSS"]);

        let pct: Vec<_> = breakdown
            .shares()
            .iter()
            .map(LanguageShare::display_percentage)
            .collect();
        assert_eq!(pct, ["60.0", "30.0", "10.0"]);

        let sum: f64 = breakdown.shares().iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_shares_are_not_visible() {
        let languages = HashMap::from([
            ("Rust".to_string(), 999_999),
            ("Makefile".to_string(), 1),
        ]);
        let breakdown = LanguageBreakdown::from_bytes(&languages);
        assert_eq!(breakdown.shares().len(), 2);
        let visible: Vec<_> = breakdown.visible().map(|s| s.name.as_str()).collect();
        assert_eq!(visible, ["Rust"]);
    }

    #[test]
    fn empty_map_is_empty_breakdown() {
        assert!(LanguageBreakdown::from_bytes(&HashMap::new()).is_empty());
        let zeroes = HashMap::from([("Shell".to_string(), 0)]);
        assert!(LanguageBreakdown::from_bytes(&zeroes).is_empty());
    }
}

//! Placeholder resolution and text helpers
//!
//! A token is `{name}` where `name` is one or more ASCII alphanumerics or
//! underscores. Tokens without candidates stay in the output verbatim and are
//! listed in [`Resolved::unresolved`] so callers can log or ignore them.

use rand::Rng;
use rand::seq::SliceRandom;

use super::templates::CategoryTemplate;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Result of resolving one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Text with every resolvable token substituted
    pub text: String,
    /// Names of tokens left verbatim, in order of appearance
    pub unresolved: Vec<String>,
}

/// Source of candidate values for token names
pub trait PlaceholderSource {
    fn candidates(&self, token: &str) -> Option<&[&str]>;
}

impl PlaceholderSource for CategoryTemplate {
    fn candidates(&self, token: &str) -> Option<&[&str]> {
        CategoryTemplate::candidates(self, token)
    }
}

impl PlaceholderSource for [(&str, &[&str])] {
    fn candidates(&self, token: &str) -> Option<&[&str]> {
        self.iter().find(|(name, _)| *name == token).map(|(_, c)| *c)
    }
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Resolve every `{token}` in `template`, sampling each occurrence independently
pub fn resolve<S, R>(template: &str, source: &S, rng: &mut R) -> Resolved
where
    S: PlaceholderSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut text = String::with_capacity(template.len() + 32);
    let mut unresolved = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_token_name(&after[..close]) => {
                let name = &after[..close];
                match source.candidates(name).and_then(|c| c.choose(rng)) {
                    Some(value) => text.push_str(value),
                    None => {
                        text.push_str(&rest[open..open + close + 2]);
                        unresolved.push(name.to_string());
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                text.push('{');
                rest = after;
            }
        }
    }
    text.push_str(rest);

    Resolved { text, unresolved }
}

/// Token names appearing in a template, in order, including duplicates
pub fn token_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_token_name(&after[..close]) => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            _ => rest = after,
        }
    }
    names
}

/// Truncate to at most `max_chars` characters, appending [`ELLIPSIS`] when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TABLE: &[(&str, &[&str])] = &[("color", &["red", "blue"]), ("size", &["large"])];

    #[test]
    fn test_resolves_known_tokens() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let resolved = resolve("A {size} {color} box", TABLE, &mut rng);
        assert!(
            resolved.text == "A large red box" || resolved.text == "A large blue box",
            "{}",
            resolved.text
        );
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn test_unknown_token_is_left_verbatim_and_reported() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let resolved = resolve("{size} gift from {organization} and {sponsor}", TABLE, &mut rng);
        assert_eq!(resolved.text, "large gift from {organization} and {sponsor}");
        assert_eq!(resolved.unresolved, vec!["organization", "sponsor"]);
    }

    #[test]
    fn test_empty_candidate_list_counts_as_unresolved() {
        let table: &[(&str, &[&str])] = &[("empty", &[])];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let resolved = resolve("x {empty} y", table, &mut rng);
        assert_eq!(resolved.text, "x {empty} y");
        assert_eq!(resolved.unresolved, vec!["empty"]);
    }

    #[test]
    fn test_malformed_braces_are_not_tokens() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let resolved = resolve("{} { size } {size {unclosed", TABLE, &mut rng);
        assert_eq!(resolved.text, "{} { size } {size {unclosed");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let table: &[(&str, &[&str])] = &[("a", &["{b}"]), ("b", &["nested"])];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let resolved = resolve("{a}", table, &mut rng);
        assert_eq!(resolved.text, "{b}");
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn test_each_occurrence_sampled_independently() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut saw_mixed = false;
        for _ in 0..64 {
            let resolved = resolve("{color}/{color}", TABLE, &mut rng);
            let (left, right) = resolved.text.split_once('/').unwrap();
            if left != right {
                saw_mixed = true;
                break;
            }
        }
        assert!(saw_mixed);
    }

    #[test]
    fn test_token_names() {
        assert_eq!(
            token_names("{a} and {b_2} but not {} or { c }"),
            vec!["a", "b_2"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("hello world again", 6), "hello...");
        assert_eq!(truncate("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Neural Analyzer Engine"), "neural-analyzer-engine");
        assert_eq!(slugify("CI/CD  Automation!"), "ci-cd-automation");
        assert_eq!(slugify("  --Edge--  "), "edge");
        assert_eq!(slugify("Weights & Biases"), "weights-biases");
    }
}

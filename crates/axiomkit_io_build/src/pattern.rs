//! Wildcard fragment compilation.
//!
//! A fragment is split into literal and wildcard tokens and translated
//! token-by-token into an anchored regular expression. No token is merged
//! or dropped: `**` stays two tokens and `?*` still needs one character.

use regex::Regex;

use crate::spec::{BuildFsError, Result};

/// One token of a wildcard fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumPatternToken {
    /// Characters matched verbatim, case-sensitively.
    Literal(String),
    /// `?`: exactly one character.
    AnyOne,
    /// `*`: zero or more characters.
    AnyRun,
}

/// `true` when the fragment contains `*` or `?`.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// Split a fragment into tokens, keeping wildcard order.
pub fn tokenize(pattern: &str) -> Vec<EnumPatternToken> {
    let mut l_tokens = Vec::new();
    let mut c_literal = String::new();

    for ch in pattern.chars() {
        let token = match ch {
            '?' => EnumPatternToken::AnyOne,
            '*' => EnumPatternToken::AnyRun,
            _ => {
                c_literal.push(ch);
                continue;
            }
        };
        if !c_literal.is_empty() {
            l_tokens.push(EnumPatternToken::Literal(std::mem::take(&mut c_literal)));
        }
        l_tokens.push(token);
    }
    if !c_literal.is_empty() {
        l_tokens.push(EnumPatternToken::Literal(c_literal));
    }
    l_tokens
}

/// Compiled whole-name matcher for a single path segment.
#[derive(Debug, Clone)]
pub struct SpecPattern {
    c_pattern: String,
    l_tokens: Vec<EnumPatternToken>,
    regex: Regex,
}

impl SpecPattern {
    /// Compile a base-name fragment where `*` matches any run and `?` one character.
    pub fn compile(pattern: &str) -> Result<Self> {
        let l_tokens = tokenize(pattern);

        let mut c_regex = String::from("(?s)^");
        for token in &l_tokens {
            match token {
                EnumPatternToken::Literal(txt) => c_regex.push_str(&regex::escape(txt)),
                EnumPatternToken::AnyOne => c_regex.push('.'),
                EnumPatternToken::AnyRun => c_regex.push_str(".*"),
            }
        }
        c_regex.push('$');

        let regex = Regex::new(&c_regex)
            .map_err(|e| BuildFsError::InvalidPattern(format!("`{pattern}`: {e}")))?;

        Ok(Self {
            c_pattern: pattern.to_string(),
            l_tokens,
            regex,
        })
    }

    /// Test a base name (never a full path).
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The fragment as given.
    pub fn as_str(&self) -> &str {
        &self.c_pattern
    }

    /// Tokens the fragment compiled from.
    pub fn tokens(&self) -> &[EnumPatternToken] {
        &self.l_tokens
    }
}

impl PartialEq for SpecPattern {
    fn eq(&self, other: &Self) -> bool {
        self.l_tokens == other.l_tokens
    }
}

impl Eq for SpecPattern {}

#[cfg(test)]
mod tests {
    use yare::parameterized;

    use super::{EnumPatternToken, SpecPattern, has_wildcard, tokenize};

    #[parameterized(
        star_ext = { "*.png", "b.png", true },
        star_ext_rejects_suffix = { "*.png", "d.png.gif", false },
        single = { "?", "e", true },
        single_rejects_longer = { "?", "b.png", false },
        prefix_absent = { "g*", "b.png", false },
        one_then_any_short = { "?*", "e", true },
        one_then_any_long = { "?*", "d.png.gif", true },
        any_then_one_short = { "*?", "e", true },
        any_then_one_empty = { "*?", "", false },
        double_star = { "**", "", true },
        literal_dot = { "a.b", "axb", false },
        literal_exact = { "a.b", "a.b", true },
        case_sensitive = { "*.PNG", "b.png", false },
        regex_meta_literal = { "a+(b)", "a+(b)", true },
        anchored_start = { "png", "b.png", false },
    )]
    fn pattern_matches_whole_name(pattern: &str, name: &str, expected: bool) {
        let spec = SpecPattern::compile(pattern).expect("compile");
        assert_eq!(
            spec.is_match(name),
            expected,
            "pattern {pattern:?} against {name:?}"
        );
    }

    #[test]
    fn tokens_keep_every_wildcard() {
        assert_eq!(
            tokenize("a*?b"),
            vec![
                EnumPatternToken::Literal("a".to_string()),
                EnumPatternToken::AnyRun,
                EnumPatternToken::AnyOne,
                EnumPatternToken::Literal("b".to_string()),
            ]
        );
        assert_eq!(
            tokenize("**"),
            vec![EnumPatternToken::AnyRun, EnumPatternToken::AnyRun]
        );
    }

    #[test]
    fn equivalence_is_token_equality() {
        let a = SpecPattern::compile("**").expect("compile");
        let b = SpecPattern::compile("*").expect("compile");
        assert_ne!(a, b);
        assert_eq!(a, SpecPattern::compile("**").expect("compile"));
    }

    #[test]
    fn wildcard_detection() {
        assert!(has_wildcard("*.png"));
        assert!(has_wildcard("?"));
        assert!(!has_wildcard("b.png"));
    }

    #[test]
    fn wildcards_match_multibyte_characters() {
        let spec = SpecPattern::compile("?.txt").expect("compile");
        assert!(spec.is_match("é.txt"));
        assert_eq!(spec.as_str(), "?.txt");
        assert_eq!(spec.tokens().len(), 2);
    }
}

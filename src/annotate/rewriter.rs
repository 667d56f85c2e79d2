/// Heading line rewriting.
///
/// A heading can already carry a pattern in one of two syntaxes:
///
/// - canonical: `## Title {data-state="grid-fine"}`
/// - legacy shorthand: `## Title {.grid-fine}`
///
/// Matchers are tried in priority order and the first hit wins, so a line that
/// somehow carries both keeps its legacy group untouched while the canonical
/// value is replaced. A heading with neither gets the canonical attribute
/// appended.
use super::config::STATE_ATTRIBUTE;
use super::pattern::GridPattern;
use once_cell::sync::Lazy;
use regex::Regex;

static CANONICAL_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{data-state="[^"]+"\}"#).expect("valid canonical attribute regex")
});

static LEGACY_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\.grid-[^}]+\}").expect("valid legacy class regex"));

/// Which existing syntax a heading carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingAttribute {
    /// `{data-state="..."}`
    Canonical,
    /// `{.grid-...}`
    LegacyClass,
}

/// Ordered matcher table; earlier entries take precedence.
static MATCHERS: [(ExistingAttribute, &Lazy<Regex>); 2] = [
    (ExistingAttribute::Canonical, &CANONICAL_ATTRIBUTE),
    (ExistingAttribute::LegacyClass, &LEGACY_CLASS),
];

/// How a heading was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteKind {
    /// No attribute was present; one was appended
    Added,
    /// An existing attribute was replaced
    Updated(ExistingAttribute),
}

/// A rewritten heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The new line, terminator included
    pub line: String,
    /// What happened to it
    pub kind: RewriteKind,
}

/// Render the canonical attribute group for `pattern`.
pub fn canonical_attribute(pattern: GridPattern) -> String {
    format!("{{{STATE_ATTRIBUTE}=\"{pattern}\"}}")
}

/// Find the first matcher that recognizes an attribute on `line`.
pub fn detect_attribute(line: &str) -> Option<(ExistingAttribute, &'static Regex)> {
    MATCHERS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|&(kind, regex)| (kind, Lazy::force(regex)))
}

/// Rewrite a heading line to carry `pattern`.
pub fn rewrite_heading(line: &str, pattern: GridPattern) -> Rewrite {
    let attribute = canonical_attribute(pattern);

    if let Some((existing, regex)) = detect_attribute(line) {
        let line = regex
            .replace_all(line, regex::NoExpand(&attribute))
            .into_owned();
        return Rewrite {
            line,
            kind: RewriteKind::Updated(existing),
        };
    }

    let (content, terminator) = split_terminator(line);
    let mut out = String::with_capacity(content.len() + attribute.len() + 3);
    out.push_str(content);
    out.push(' ');
    out.push_str(&attribute);
    out.push_str(if terminator.is_empty() { "\n" } else { terminator });

    Rewrite {
        line: out,
        kind: RewriteKind::Added,
    }
}

/// Split a line into its content and trailing `\n`/`\r\n`/`\r` run.
fn split_terminator(line: &str) -> (&str, &str) {
    let content = line.trim_end_matches(['\n', '\r']);
    (content, &line[content.len()..])
}

// Content scanning for slide bodies.
//
// A slide body runs from the line after its heading up to the next slide
// heading or the end of the document. Slides that show a figure or an
// embedded frame need a plain background, so the scanner only answers one
// question: does the body contain either signal?

use super::config::{FIGURE_LABEL_MARKER, IFRAME_TAG, SLIDE_MARKER};
use aho_corasick::AhoCorasick;
use memchr::memmem;
use once_cell::sync::Lazy;

static FIGURE_FINDER: Lazy<memmem::Finder<'static>> =
    Lazy::new(|| memmem::Finder::new(FIGURE_LABEL_MARKER.as_bytes()));

static IFRAME_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([IFRAME_TAG])
        .expect("valid iframe matcher")
});

/// Whether a line opens a new slide.
#[inline]
pub fn is_slide_marker(line: &str) -> bool {
    line.starts_with(SLIDE_MARKER)
}

/// Whether a single line carries a figure label or an embedded frame.
pub fn line_has_content_signal(line: &str) -> bool {
    FIGURE_FINDER.find(line.as_bytes()).is_some() || IFRAME_MATCHER.is_match(line)
}

/// Scan the body of the slide whose heading sits at `heading_index`.
///
/// Returns `true` as soon as a body line carries a figure label or an
/// `<iframe` tag (any letter case). The heading line itself is not scanned.
pub fn slide_has_figure_or_iframe<S: AsRef<str>>(lines: &[S], heading_index: usize) -> bool {
    lines
        .iter()
        .skip(heading_index + 1)
        .map(AsRef::as_ref)
        .take_while(|line| !is_slide_marker(line))
        .any(line_has_content_signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_label_detected() {
        let lines = ["## Chart\n", "```{python}\n", "#| label: fig-chart\n", "```\n"];
        assert!(slide_has_figure_or_iframe(&lines, 0));
    }

    #[test]
    fn test_iframe_case_insensitive() {
        let lines = ["## Demo\n", "<IFrame src=\"https://example.com\"></IFrame>\n"];
        assert!(slide_has_figure_or_iframe(&lines, 0));
    }

    #[test]
    fn test_line_signal_any_letter_case() {
        assert!(line_has_content_signal("<iFrAmE src=\"a\">"));
        assert!(line_has_content_signal("  <iframe"));
        assert!(!line_has_content_signal("<frame src=\"a\">"));
        assert!(!line_has_content_signal("i frame"));
    }

    #[test]
    fn test_scan_stops_at_next_slide() {
        let lines = [
            "## Plain\n",
            "Some text\n",
            "## Chart\n",
            "#| label: fig-later\n",
        ];
        assert!(!slide_has_figure_or_iframe(&lines, 0));
        assert!(slide_has_figure_or_iframe(&lines, 2));
    }

    #[test]
    fn test_heading_line_not_scanned() {
        let lines = ["## <iframe> in the title\n", "body\n"];
        assert!(!slide_has_figure_or_iframe(&lines, 0));
    }

    #[test]
    fn test_deeper_headings_stay_in_body() {
        let lines = ["## Outer\n", "### Inner\n", "#| label: fig-inner\n"];
        assert!(slide_has_figure_or_iframe(&lines, 0));
    }

    #[test]
    fn test_figure_label_is_case_sensitive() {
        let lines = ["## Table\n", "#| label: tbl-results\n", "#| LABEL: FIG-x\n"];
        assert!(!slide_has_figure_or_iframe(&lines, 0));
    }

    #[test]
    fn test_last_slide_runs_to_end() {
        let lines = ["## Only\n"];
        assert!(!slide_has_figure_or_iframe(&lines, 0));
    }
}

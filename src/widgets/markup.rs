//! Line markup for static text screens.
//!
//! A line ending in `:` is a section header, a line starting with `-` or `•`
//! is a tip, an empty line is a spacer, and anything else is body text.
//! Tip markers win over a trailing colon.

/// Role of one line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Tip,
    Body,
    Blank,
}

/// A classified line, with any tip marker stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

const TIP_MARKERS: [char; 2] = ['-', '•'];

pub fn classify(line: &str) -> MarkupLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        MarkupLine {
            kind: LineKind::Blank,
            text: "",
        }
    } else if let Some(rest) = trimmed.strip_prefix(TIP_MARKERS) {
        MarkupLine {
            kind: LineKind::Tip,
            text: rest.trim_start(),
        }
    } else if trimmed.ends_with(':') {
        MarkupLine {
            kind: LineKind::Header,
            text: trimmed,
        }
    } else {
        MarkupLine {
            kind: LineKind::Body,
            text: trimmed,
        }
    }
}

pub fn parse(text: &str) -> Vec<MarkupLine<'_>> {
    text.lines().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rules() {
        assert_eq!(classify("Voice commands:").kind, LineKind::Header);
        assert_eq!(classify("- Say jump").kind, LineKind::Tip);
        assert_eq!(classify("• Speak clearly").kind, LineKind::Tip);
        assert_eq!(classify("Guide the hero.").kind, LineKind::Body);
        assert_eq!(classify("   ").kind, LineKind::Blank);
    }

    #[test]
    fn test_tip_marker_is_stripped() {
        assert_eq!(classify("-   Say \"run\"").text, "Say \"run\"");
        assert_eq!(classify("•Speak").text, "Speak");
    }

    #[test]
    fn test_tip_wins_over_colon() {
        assert_eq!(classify("- Commands:").kind, LineKind::Tip);
    }

    #[test]
    fn test_colon_inside_line_is_body() {
        assert_eq!(classify("Tip: speak clearly").kind, LineKind::Body);
    }

    #[test]
    fn test_parse_keeps_line_count() {
        let lines = parse("Goal:\nReach the flag\n\n- Jump\n");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Header, LineKind::Body, LineKind::Blank, LineKind::Tip]
        );
    }
}

// Output styles for annotated text.

/// How the renderer marks words that need attention.
///
/// Each method appends the marked-up `word` to `out`.
pub trait Markup: Send + Sync {
    /// A minor mistake.
    fn minor(&self, word: &str, out: &mut String);

    /// A major mistake.
    fn major(&self, word: &str, out: &mut String);

    /// A reference word that was not recognized at all.
    fn deleted(&self, word: &str, out: &mut String);

    /// A recognized word with no reference counterpart.
    fn inserted(&self, word: &str, out: &mut String) {
        self.major(word, out);
    }
}

/// Coloured inline `<span>` elements, as shown in the trainer UI.
///
/// Reference text is written as is, without HTML escaping, so only pass
/// trusted reference phrases. Recognized words contain letters only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

const HTML_MINOR: &str = "color:#F9A825; font-weight: 500;";
const HTML_MAJOR: &str = "color:#C62828; font-weight: 600;";
const HTML_DELETED: &str = "color:#C62828; font-weight: 600; text-decoration: line-through;";

fn span(style: &str, word: &str, out: &mut String) {
    out.push_str("<span style=\"");
    out.push_str(style);
    out.push_str("\">");
    out.push_str(word);
    out.push_str("</span>");
}

impl Markup for HtmlMarkup {
    fn minor(&self, word: &str, out: &mut String) {
        span(HTML_MINOR, word, out);
    }

    fn major(&self, word: &str, out: &mut String) {
        span(HTML_MAJOR, word, out);
    }

    fn deleted(&self, word: &str, out: &mut String) {
        span(HTML_DELETED, word, out);
    }
}

/// Markdown emphasis: `_minor_`, `**major**`, `~~deleted~~`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownMarkup;

impl Markup for MarkdownMarkup {
    fn minor(&self, word: &str, out: &mut String) {
        out.push('_');
        out.push_str(word);
        out.push('_');
    }

    fn major(&self, word: &str, out: &mut String) {
        out.push_str("**");
        out.push_str(word);
        out.push_str("**");
    }

    fn deleted(&self, word: &str, out: &mut String) {
        out.push_str("~~");
        out.push_str(word);
        out.push_str("~~");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(f: impl FnOnce(&mut String)) -> String {
        let mut out = String::new();
        f(&mut out);
        out
    }

    #[test]
    fn html_spans() {
        assert_eq!(
            marked(|o| HtmlMarkup.minor("Kaliit", o)),
            "<span style=\"color:#F9A825; font-weight: 500;\">Kaliit</span>"
        );
        assert_eq!(
            marked(|o| HtmlMarkup.major("kiitoz", o)),
            "<span style=\"color:#C62828; font-weight: 600;\">kiitoz</span>"
        );
        assert_eq!(
            marked(|o| HtmlMarkup.deleted("nyt", o)),
            "<span style=\"color:#C62828; font-weight: 600; text-decoration: line-through;\">nyt</span>"
        );
        assert_eq!(
            marked(|o| HtmlMarkup.inserted("joo", o)),
            marked(|o| HtmlMarkup.major("joo", o))
        );
    }

    #[test]
    fn markdown_emphasis() {
        assert_eq!(marked(|o| MarkdownMarkup.minor("a", o)), "_a_");
        assert_eq!(marked(|o| MarkdownMarkup.major("a", o)), "**a**");
        assert_eq!(marked(|o| MarkdownMarkup.deleted("a", o)), "~~a~~");
        assert_eq!(marked(|o| MarkdownMarkup.inserted("a", o)), "**a**");
    }
}

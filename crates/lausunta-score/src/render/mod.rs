// Renderer: rebuilds the reference text with every word marked by how it
// was recognized.
//
// Whitespace, punctuation and unknown runs of the reference are copied as
// they are. Word tokens are matched against the alignment units in order;
// a unit covering two reference words (compound merge) covers two word
// tokens. Trailing insertions are appended after the last token.

mod markup;

pub use markup::{HtmlMarkup, MarkdownMarkup, Markup};

use lausunta_core::case::with_initial_case;
use lausunta_core::enums::Severity;
use lausunta_core::token::Token;

use crate::alignment::{AlignmentUnit, UnitKind, default_strategy};
use crate::classifier::Classifier;
use crate::rules::RuleTable;
use crate::tokenizer::tokenize;

/// Render `units` over the tokens of `reference_text`.
pub fn render_units(
    reference_text: &str,
    units: &[AlignmentUnit],
    markup: &dyn Markup,
) -> String {
    render_tokens(&tokenize(reference_text), units, markup)
}

/// Render `units` over an already tokenized reference.
pub fn render_tokens(tokens: &[Token], units: &[AlignmentUnit], markup: &dyn Markup) -> String {
    let capacity = tokens.iter().map(|t| t.text.len()).sum::<usize>() * 2;
    let mut out = String::with_capacity(capacity);

    let mut covering = units.iter().filter(|u| !u.is_insertion());
    let mut current: Option<&AlignmentUnit> = None;
    let mut offset = 0;

    for token in tokens {
        if !token.is_word() {
            out.push_str(&token.text);
            continue;
        }
        if current.is_none_or(|u| offset >= u.reference.len()) {
            current = covering.next();
            offset = 0;
        }
        match current {
            Some(unit) => render_word(&token.text, unit, markup, &mut out),
            // More word tokens than the alignment covers.
            None => out.push_str(&token.text),
        }
        offset += 1;
    }

    for unit in units.iter().filter(|u| u.is_insertion()) {
        for word in &unit.hypothesis {
            out.push(' ');
            markup.inserted(word, &mut out);
        }
    }
    out
}

fn render_word(word: &str, unit: &AlignmentUnit, markup: &dyn Markup, out: &mut String) {
    match unit.kind {
        // Accepted abbreviations keep the reference spelling ("EU", not "Ee").
        UnitKind::Correct { .. }
        | UnitKind::CompoundMerge { .. }
        | UnitKind::CompoundSplit { .. } => out.push_str(word),
        UnitKind::Mismatch { severity } => {
            let heard = unit.hypothesis.first().map_or(word, String::as_str);
            let shown = with_initial_case(word, heard);
            match severity {
                Severity::Minor => markup.minor(&shown, out),
                _ => markup.major(&shown, out),
            }
        }
        UnitKind::Deletion => markup.deleted(word, out),
        UnitKind::Insertion => {}
    }
}

/// Render a recognized transcript against a reference phrase with the
/// default HTML markup.
pub fn render_annotated(reference: &str, hypothesis: &str, rules: &RuleTable) -> String {
    let tokens = tokenize(reference);
    let units = default_strategy().align_text(&tokens, hypothesis, &Classifier::new(rules));
    render_tokens(&tokens, &units, &HtmlMarkup)
}

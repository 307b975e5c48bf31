//! Plain-text rendering for the terminal.

use std::fmt::Write;

use grammr::{
    inflection::{InflectionTable, Paradigm},
    token::DisplayToken,
};

/// Characters that attach to the preceding word instead of standing alone.
const CLOSING: &[char] = &[',', '.', '!', '?', ';', ':', ')', ']', '}', '…', '»', '"'];

/// Joins an aligned sentence into one line.
pub fn line(display: &[DisplayToken<'_>]) -> String {
    let mut out = String::new();

    display.iter().for_each(|token| {
        let attach = token.is_synthetic() && token.text().starts_with(CLOSING);

        if !out.is_empty() && !attach {
            out.push(' ');
        }

        out.push_str(token.text());
    });

    out
}

/// One line per analyzed word: text, part of speech, lemma, features and
/// translation. Synthetic entries are skipped.
pub fn words(display: &[DisplayToken<'_>]) -> String {
    let mut out = String::new();

    display.iter().filter_map(DisplayToken::word).for_each(|token| {
        let morphology = &token.morphology;
        let _ = write!(out, "{:<16} {:<6}", token.text, morphology.pos);

        if token.is_inflected() {
            let _ = write!(
                out,
                " from {} ({})",
                morphology.lemma,
                morphology.describe_features()
            );
        }

        if !token.translation.translation.is_empty() {
            let _ = write!(out, " = {}", token.translation.translation);
        }

        out.push('\n');
    });

    out
}

/// Grammar table with a header row; empty cells render as `-`.
pub fn table(part_of_speech: &str, table: &InflectionTable) -> String {
    let paradigm = Paradigm::for_part_of_speech(part_of_speech);

    let width = table
        .iter()
        .flat_map(|(key, cells)| {
            [
                key.chars().count(),
                cells.singular.chars().count(),
                cells.plural.chars().count(),
            ]
        })
        .chain([paradigm.primary.len(), "singular".len()])
        .max()
        .unwrap_or_default();

    let cell = |value: &str| match value {
        "" => "-".to_string(),
        value => value.to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:<width$}  {}",
        paradigm.primary, "singular", "plural"
    );

    table.iter().for_each(|(key, cells)| {
        let _ = writeln!(
            out,
            "{:<width$}  {:<width$}  {}",
            key,
            cell(&cells.singular),
            cell(&cells.plural)
        );
    });

    out
}

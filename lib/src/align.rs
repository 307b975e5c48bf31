//! Token-to-text alignment.
//!
//! The analysis service returns words without the punctuation around them,
//! in analysis order and with normalized casing. [`align`] places every
//! token back at its leftmost free position in the literal text and
//! recovers the character runs in between as synthetic tokens.
//!
//! Matching is case-insensitive. Every character is lowercased on its own
//! and the Greek final sigma `'ς'` is folded to `'σ'`, since per-character
//! lowercasing turns `'Σ'` into `'σ'` wherever it stands. Lowercasing can
//! change the byte length of a character (`'İ'` becomes `"i\u{307}"`), so
//! each folded byte remembers which original character it came from. Match
//! ranges are always mapped back onto character boundaries of the original
//! text.

extern crate hashbrown;

use hashbrown::HashSet;
use tracing::{debug, trace, warn};

use crate::{
    error::AlignError,
    token::{DisplayToken, SyntheticToken, Token},
};

/// Lowercases `text` one character at a time, with `'ς'` folded to `'σ'`.
#[inline]
pub fn fold(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

// 'ς' and 'σ' are both two bytes wide, so the origin map is unaffected.
#[inline]
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|lower| match lower {
        'ς' => 'σ',
        lower => lower,
    })
}

/// A lowercased copy of a text that can be mapped back onto the original.
#[derive(Debug)]
struct FoldedText {
    folded: String,

    // Byte range in the original text of the character each folded byte
    // was produced from.
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());

        text.char_indices().for_each(|(start, ch)| {
            let end = start + ch.len_utf8();

            fold_char(ch).for_each(|lower| {
                folded.push(lower);
                origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
            });
        });

        Self { folded, origin }
    }

    /// Every occurrence of `needle`, overlapping ones included, as byte
    /// ranges of the original text. The search restarts one character
    /// after the start of each hit.
    fn occurrences(&self, needle: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();

        if needle.is_empty() {
            return found;
        }

        let mut position = 0;

        while let Some(offset) = self.folded[position..].find(needle) {
            let start = position + offset;
            let end = start + needle.len();

            found.push((self.origin[start].0, self.origin[end - 1].1));

            let step = self.folded[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);

            position = start + step;

            if position >= self.folded.len() {
                break;
            }
        }

        found
    }
}

/// A candidate placement of the token at `slot` in the input array.
#[derive(Clone, Copy, Debug)]
struct Match {
    slot: usize,
    start: usize,
    end: usize,
}

/// Reinserts `tokens` into `text`, in text order.
///
/// Candidates from all tokens are sorted by start position (stable, so ties
/// keep token input order then occurrence order) and accepted greedily when
/// they do not overlap the previously accepted one. Text between accepted
/// matches, and after the last one, becomes a [`SyntheticToken`] trimmed at
/// both ends; runs that are pure whitespace are dropped.
///
/// # Errors
///
/// [`AlignError::Unresolved`] names every token whose text, ignoring case,
/// was not accepted anywhere. Tokens with empty text never match.
pub fn align<'t>(text: &str, tokens: &'t [Token]) -> Result<Vec<DisplayToken<'t>>, AlignError> {
    let haystack = FoldedText::new(text);
    let needles = tokens
        .iter()
        .map(|token| fold(token.as_str()))
        .collect::<Vec<_>>();

    let mut candidates = needles
        .iter()
        .enumerate()
        .flat_map(|(slot, needle)| {
            haystack
                .occurrences(needle)
                .into_iter()
                .map(move |(start, end)| Match { slot, start, end })
        })
        .collect::<Vec<_>>();

    candidates.sort_by_key(|candidate| candidate.start);

    let accepted = select(&candidates);

    debug!(
        tokens = tokens.len(),
        candidates = candidates.len(),
        accepted = accepted.len(),
        "aligned tokens against text"
    );

    let resolved = accepted
        .iter()
        .map(|m| needles[m.slot].as_str())
        .collect::<HashSet<_>>();

    let missing = tokens
        .iter()
        .zip(&needles)
        .filter(|(_, needle)| !resolved.contains(needle.as_str()))
        .map(|(token, _)| token.text.clone())
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        warn!(missing = ?missing, "tokens could not be located in text");
        return Err(AlignError::Unresolved { tokens: missing });
    }

    let mut display = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;

    for m in &accepted {
        if m.start > cursor {
            push_gap(&mut display, &text[cursor..m.start]);
        }

        trace!(slot = m.slot, start = m.start, end = m.end, "placed token");
        display.push(DisplayToken::Word(&tokens[m.slot]));
        cursor = m.end;
    }

    if cursor < text.len() {
        push_gap(&mut display, &text[cursor..]);
    }

    Ok(display)
}

/// Leftmost, non-overlapping, first-fit selection over sorted candidates.
fn select(candidates: &[Match]) -> Vec<Match> {
    let mut accepted = Vec::with_capacity(candidates.len());
    let mut last_end = 0;

    candidates.iter().for_each(|candidate| {
        if candidate.start >= last_end {
            accepted.push(*candidate);
            last_end = candidate.end;
        }
    });

    accepted
}

#[inline]
fn push_gap<'t>(display: &mut Vec<DisplayToken<'t>>, gap: &str) {
    let gap = gap.trim();

    if !gap.is_empty() {
        display.push(DisplayToken::Synthetic(SyntheticToken::new(gap)));
    }
}

//! Bullet extraction from model responses
//!
//! Models answer insight prompts in all kinds of shapes: dashed lists,
//! numbered lists, or plain paragraphs. This module normalizes them into
//! a flat list of short lines.

/// Extract up to `max_items` insight lines from a model response.
///
/// Line-based extraction first (bullet and number prefixes stripped);
/// when the response is a single paragraph, falls back to sentence
/// splitting.
#[must_use]
pub fn to_bullets(text: &str, max_items: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut cleaned: Vec<String> = Vec::new();
    for line in text.lines() {
        let item = strip_markers(line);
        if !item.is_empty() {
            cleaned.push(item);
        }
        if cleaned.len() >= max_items {
            break;
        }
    }

    if cleaned.is_empty() {
        cleaned = split_sentences(text)
            .into_iter()
            .take(max_items)
            .collect();
    }

    cleaned
}

/// Strip leading bullet characters and numeric list prefixes
fn strip_markers(line: &str) -> String {
    let mut rest = line.trim().trim_start_matches(['-', '•', '*']).trim_start();

    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix(')').or_else(|| after.strip_prefix('.')) {
            rest = stripped.trim_start();
        }
    }

    rest.trim().to_string()
}

/// Split a paragraph into sentences on `.`, `!`, `?` boundaries
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.trim().chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_none_or(|next| next.is_whitespace()) {
            let sentence = current.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let tail = current.trim().to_string();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?]+\s+)").expect("sentence pattern is valid"));

/// Split text into batches of at most `max_len` bytes, preferring sentence
/// boundaries. Sentences longer than `max_len` are cut on char boundaries.
pub fn split_into_batches(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut last_end = 0;

    let mut pieces: Vec<&str> = SENTENCE_END
        .find_iter(text)
        .map(|m| {
            let piece = &text[last_end..m.end()];
            last_end = m.end();
            piece
        })
        .collect();
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    for piece in pieces {
        if !current.is_empty() && current.len() + piece.len() > max_len {
            push_trimmed(&mut batches, &current);
            current.clear();
        }

        if piece.len() > max_len {
            for chunk in chunk_by_bytes(piece, max_len) {
                push_trimmed(&mut batches, chunk);
            }
        } else {
            current.push_str(piece);
        }
    }

    push_trimmed(&mut batches, &current);
    batches
}

fn push_trimmed(batches: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
}

fn chunk_by_bytes(text: &str, max_len: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_len).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        chunks.push(&text[start..end]);
        start = end;
    }

    chunks
}

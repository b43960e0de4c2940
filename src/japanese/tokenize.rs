//! Tokenizer driver (C10): greedy longest-match walk over normalized input.

use crate::kana::{normalize_input, NormalizeOptions, OffsetMap};

use super::dictionary::Dictionary;
use super::search::word_search;
use super::types::{Reason, Token, WordEntry};

fn is_digit_char(c: char) -> bool {
	c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// Builds a [Token] covering normalized UTF-16 units `[utf16_start, utf16_end)`,
/// with `text` sliced from the *original* (pre-normalization) character
/// buffer through `offsets`, so folding/ZWNJ-stripping done for lookup
/// purposes never shows up in the returned text.
fn make_token(
	orig_chars: &[char],
	offsets: &OffsetMap,
	utf16_start: usize,
	utf16_end: usize,
	dictionary_entry: Option<WordEntry>,
	deinflection_reasons: Option<Vec<Reason>>,
) -> Token {
	let start = offsets[utf16_start];
	let end = offsets[utf16_end];
	Token {
		text: orig_chars[start..end].iter().collect(),
		start,
		end,
		dictionary_entry,
		deinflection_reasons,
	}
}

/// Tokenizes `text` into a sequence of [Token]s covering it exactly once.
///
/// Without a `dictionary`, every position falls back to a single-character
/// token. With one, each position tries the longest dictionary- or
/// deinflection-backed match first, falling back to a single character
/// only when nothing matches.
pub fn tokenize(text: &str, dictionary: Option<&Dictionary>, max_results: usize) -> Vec<Token> {
	time!(t_tokenize);
	let (normalized, offsets) = normalize_input(text, NormalizeOptions::default());
	let chars: Vec<char> = normalized.chars().collect();
	let orig_chars: Vec<char> = text.chars().collect();
	let mut tokens = Vec::new();

	// `pos` indexes `chars` (normalized, char units — what search/deinflect
	// operate on). `utf16_pos` tracks the matching position in UTF-16 code
	// units within `normalized`, which is what `offsets` is keyed by; the
	// two diverge for any non-BMP character, so both must be kept in sync
	// rather than using `pos` to index `offsets` directly.
	let mut pos = 0usize;
	let mut utf16_pos = 0usize;

	while pos < chars.len() {
		if is_digit_char(chars[pos]) {
			let run_start = pos;
			while pos < chars.len() && is_digit_char(chars[pos]) {
				pos += 1;
			}
			let consumed_utf16: usize = chars[run_start..pos].iter().map(|c| c.len_utf16()).sum();
			tokens.push(make_token(&orig_chars, &offsets, utf16_pos, utf16_pos + consumed_utf16, None, None));
			utf16_pos += consumed_utf16;
			continue;
		}

		let remaining: String = chars[pos..].iter().collect();
		let hit = dictionary.and_then(|dict| {
			let results = word_search(&remaining, dict, max_results);
			results.into_iter().next()
		});

		match hit {
			Some(result) => {
				let end = pos + result.match_len;
				let consumed_utf16: usize = chars[pos..end].iter().map(|c| c.len_utf16()).sum();
				tokens.push(make_token(
					&orig_chars,
					&offsets,
					utf16_pos,
					utf16_pos + consumed_utf16,
					Some(result.entry),
					result.reason_chains.into_iter().next(),
				));
				utf16_pos += consumed_utf16;
				pos = end;
			}
			None => {
				let consumed_utf16 = chars[pos].len_utf16();
				tokens.push(make_token(&orig_chars, &offsets, utf16_pos, utf16_pos + consumed_utf16, None, None));
				utf16_pos += consumed_utf16;
				pos += 1;
			}
		}
	}

	debug!(slog_scope::logger(), "tokenize"; "input_len" => chars.len(), "tokens" => tokens.len(), t_tokenize);

	tokens
}

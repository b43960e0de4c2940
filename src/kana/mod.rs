//! Text normalization and character classification for Japanese input.
//!
//! Offsets produced here are counted in UTF-16 code units, matching the
//! reference implementation's `.length`/`.substring` semantics: a character
//! outside the Basic Multilingual Plane contributes two positions to an
//! [OffsetMap], not one.

mod constants;
mod is;
mod util;
mod yoon;

pub use self::is::*;
pub use self::yoon::*;

use unicode_normalization::UnicodeNormalization;

use self::constants::*;
use self::util::char_in_range;

const ZWNJ: char = '\u{200C}';

/// Maps normalized positions (UTF-16 code units) back to positions in the
/// original input string (also UTF-16 code units).
///
/// `offsets[i]` is the original-input position that normalized position `i`
/// corresponds to. Has length `normalized.len_utf16() + 1`, with the final
/// entry equal to the original input's UTF-16 length.
pub type OffsetMap = Vec<usize>;

/// Options controlling [normalize_input].
#[derive(Clone, Copy, Debug)]
pub struct NormalizeOptions {
	/// Convert half-width digits (U+0030-U+0039) to full-width
	/// (U+FF10-U+FF19) before Unicode normalization.
	pub fold_numbers_full_width: bool,
	/// Strip zero-width non-joiners (U+200C) after normalization.
	pub strip_zwnj: bool,
}

impl Default for NormalizeOptions {
	fn default() -> NormalizeOptions {
		NormalizeOptions {
			fold_numbers_full_width: true,
			strip_zwnj: true,
		}
	}
}

/// Normalizes `text` for dictionary lookup, returning the normalized string
/// together with an [OffsetMap] back to the original input.
pub fn normalize_input(text: &str, opts: NormalizeOptions) -> (String, OffsetMap) {
	if text.is_empty() {
		return (String::new(), vec![0]);
	}

	let folded = if opts.fold_numbers_full_width {
		half_to_full_width_num(text)
	} else {
		text.to_string()
	};

	let (normalized, offsets) = to_normalized(&folded);

	if opts.strip_zwnj {
		strip_zwnj(&normalized, &offsets)
	} else {
		(normalized, offsets)
	}
}

/// Converts half-width digits to their full-width counterparts.
fn half_to_full_width_num(text: &str) -> String {
	text.chars()
		.map(|c| {
			let code = c as u32;
			if (0x0030..=0x0039).contains(&code) {
				std::char::from_u32(code - 0x0030 + 0xFF10).unwrap()
			} else {
				c
			}
		})
		.collect()
}

/// Applies Unicode NFC normalization and builds the UTF-16-position
/// [OffsetMap] for the result.
fn to_normalized(text: &str) -> (String, OffsetMap) {
	let normalized: String = text.nfc().collect();

	if normalized.is_empty() {
		return (normalized, vec![0]);
	}

	let mut offsets = Vec::with_capacity(normalized.len() + 1);
	let mut original_pos = 0usize;
	for c in normalized.chars() {
		let units = c.len_utf16();
		for _ in 0..units {
			offsets.push(original_pos);
		}
		original_pos += 1;
	}
	offsets.push(original_pos);

	(normalized, offsets)
}

/// Strips zero-width non-joiners from `text`, adjusting `offsets` to match.
///
/// Google Docs (and some IMEs) insert ZWNJ between every character; this
/// undoes that without disturbing the rest of the offset mapping.
fn strip_zwnj(text: &str, offsets: &OffsetMap) -> (String, OffsetMap) {
	let mut result = String::with_capacity(text.len());
	let mut new_offsets = Vec::with_capacity(offsets.len());
	let mut last = 0usize;

	let mut unit_pos = 0usize;
	for c in text.chars() {
		let units = c.len_utf16();
		if c != ZWNJ {
			result.push(c);
			for k in 0..units {
				new_offsets.push(offsets[unit_pos + k]);
			}
			last = offsets[(unit_pos + units).min(offsets.len() - 1)];
		}
		unit_pos += units;
	}

	if !result.is_empty() || last != 0 {
		new_offsets.push(last);
	}
	if new_offsets.is_empty() {
		new_offsets.push(0);
	}

	(result, new_offsets)
}

/// Maps katakana to hiragana. U+30A1-U+30F6 map by a fixed offset; the four
/// combining-voice katakana U+30F7-U+30FA map to わゐゑを respectively. All
/// other code points pass through unchanged.
pub fn kana_to_hiragana(text: &str) -> String {
	text.chars()
		.map(|c| {
			let code = c as u32;
			if char_in_range(c, KATAKANA_START, KATAKANA_TO_HIRAGANA_END) {
				let offset = code - KATAKANA_TO_HIRAGANA_OFFSET_SUB;
				std::char::from_u32(offset).unwrap()
			} else {
				match code {
					0x30F7 => 'わ',
					0x30F8 => 'ゐ',
					0x30F9 => 'ゑ',
					0x30FA => 'を',
					_ => c,
				}
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_empty() {
		let (normalized, offsets) = normalize_input("", NormalizeOptions::default());
		assert_eq!(normalized, "");
		assert_eq!(offsets, vec![0]);
	}

	#[test]
	fn test_normalize_half_to_full_width_digits() {
		let (normalized, _) = normalize_input("123", NormalizeOptions::default());
		assert_eq!(normalized, "\u{FF11}\u{FF12}\u{FF13}");
	}

	#[test]
	fn test_normalize_disabled_folding() {
		let opts = NormalizeOptions {
			fold_numbers_full_width: false,
			strip_zwnj: true,
		};
		let (normalized, _) = normalize_input("123", opts);
		assert_eq!(normalized, "123");
	}

	#[test]
	fn test_normalize_offsets_ascii() {
		let (normalized, offsets) = normalize_input("abc", NormalizeOptions::default());
		assert_eq!(normalized, "abc");
		assert_eq!(offsets, vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_normalize_strips_zwnj() {
		let input = format!("食{}べ{}る", ZWNJ, ZWNJ);
		let (normalized, offsets) = normalize_input(&input, NormalizeOptions::default());
		assert_eq!(normalized, "食べる");
		// Every kept character still maps back to a valid original offset.
		assert_eq!(offsets.len(), normalized.chars().count() + 1);
	}

	#[test]
	fn test_normalize_idempotent() {
		let input = "食べさせられませんでした　１２３";
		let (once, _) = normalize_input(input, NormalizeOptions::default());
		let (twice, _) = normalize_input(&once, NormalizeOptions::default());
		assert_eq!(once, twice);
	}

	#[test]
	fn test_kana_to_hiragana() {
		assert_eq!(kana_to_hiragana("カタカナ"), "かたかな");
		assert_eq!(kana_to_hiragana("ヷヸヹヺ"), "わゐゑを");
		assert_eq!(kana_to_hiragana("漢字"), "漢字");
		assert_eq!(kana_to_hiragana(""), "");
	}

	#[test]
	fn test_kana_to_hiragana_idempotent() {
		let input = "ワニカニ漢字アイウエオ";
		let once = kana_to_hiragana(input);
		let twice = kana_to_hiragana(&once);
		assert_eq!(once, twice);
	}
}

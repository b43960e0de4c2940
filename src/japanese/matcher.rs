//! Word-type compatibility check (C7): does a dictionary entry's
//! part-of-speech tagging admit the grammatical class a deinflection
//! candidate settled on?

use super::types::{WordEntry, WordType};

/// Maps a JMdict-style part-of-speech tag to the [WordType] bits it
/// contributes. Unrecognized tags contribute no bits and are never an
/// error: dictionaries carry tags this table doesn't enumerate (regional
/// variants, archaic forms), and silently ignoring them is the documented
/// policy rather than rejecting the entry outright.
fn tag_to_type(tag: &str) -> WordType {
	match tag {
		"v1" | "v1-s" => WordType::ICHIDAN,
		"v5k" | "v5k-s" => WordType::GODAN_K,
		"v5g" => WordType::GODAN_G,
		"v5s" => WordType::GODAN_S,
		"v5t" => WordType::GODAN_T,
		"v5n" => WordType::GODAN_N,
		"v5b" => WordType::GODAN_B,
		"v5m" => WordType::GODAN_M,
		"v5r" | "v5r-i" => WordType::GODAN_R,
		"v5u" | "v5u-s" => WordType::GODAN_W,
		"vs" | "vs-i" | "vs-c" => WordType::SURU,
		"vs-s" => WordType::SURU_SPECIAL,
		"vk" => WordType::KURU,
		"adj-i" => WordType::ADJ_I,
		"adj-na" => WordType::ADJ_NA,
		"n" | "n-adv" | "n-suf" | "n-pref" => WordType::NOUN,
		_ => {
			warn!(slog_scope::logger(), "unrecognized part-of-speech tag"; "tag" => tag);
			WordType::empty()
		}
	}
}

/// The type mask implied by every sense's part-of-speech tags on `entry`.
fn entry_type_mask(entry: &WordEntry) -> WordType {
	entry
		.senses
		.iter()
		.flat_map(|sense| sense.pos_tags.iter())
		.fold(WordType::empty(), |mask, tag| mask | tag_to_type(tag))
}

/// Returns true if `entry` can plausibly be the dictionary form behind a
/// deinflection candidate typed `required_mask`.
///
/// [WordType::INITIAL] in `required_mask` always passes: it means the
/// candidate was never deinflected, so there is no grammatical class to
/// check against. An entry with no recognized conjugation tag at all (a
/// particle, an adverb with no POS overlap) only matches undeinflected
/// (INITIAL) candidates.
pub fn entry_matches_type(entry: &WordEntry, required_mask: WordType) -> bool {
	if required_mask.contains(WordType::INITIAL) {
		return true;
	}
	!(entry_type_mask(entry) & required_mask).is_empty()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::japanese::types::Sense;
	use std::collections::HashSet;

	fn entry_with_tags(tags: &[&str]) -> WordEntry {
		WordEntry {
			entry_id: 1,
			ent_seq: "1".to_string(),
			kanji_readings: vec![],
			kana_readings: vec![],
			senses: vec![Sense {
				index: 0,
				pos_tags: tags.iter().map(|s| s.to_string()).collect::<HashSet<_>>(),
				glosses: vec![],
				info: None,
				fields: vec![],
				misc: vec![],
				dial: vec![],
			}],
		}
	}

	#[test]
	fn test_initial_always_matches() {
		let entry = entry_with_tags(&["n"]);
		assert!(entry_matches_type(&entry, WordType::INITIAL));
	}

	#[test]
	fn test_ichidan_entry_matches_ichidan_mask() {
		let entry = entry_with_tags(&["v1"]);
		assert!(entry_matches_type(&entry, WordType::ICHIDAN));
		assert!(!entry_matches_type(&entry, WordType::GODAN_K));
	}

	#[test]
	fn test_ambiguous_ru_mask_matches_either_class() {
		let ichidan = entry_with_tags(&["v1"]);
		let godan_r = entry_with_tags(&["v5r"]);
		let mask = WordType::ICHIDAN | WordType::GODAN_R;
		assert!(entry_matches_type(&ichidan, mask));
		assert!(entry_matches_type(&godan_r, mask));
	}

	#[test]
	fn test_unrecognized_tag_only_matches_initial() {
		let entry = entry_with_tags(&["exp"]);
		assert!(entry_matches_type(&entry, WordType::INITIAL));
		assert!(!entry_matches_type(&entry, WordType::ICHIDAN));
	}
}

//! Longest-match word search (C9): deinflects and looks up every prefix of
//! `text`, from `max_lookup_length` characters down to one, stopping at the
//! first prefix length that yields any result.

use crate::kana::{expand_choon, kyuujitai_to_shinjitai};

use super::deinflect::deinflect;
use super::dictionary::Dictionary;
use super::matcher::entry_matches_type;
use super::rank::rank;
use super::types::{MatchType, WordResult, WordType};

/// Searches `text` (already normalized) for the dictionary entries backing
/// its longest matching prefix, trying shorter prefixes only if the longest
/// one has no dictionary hit. Returns an empty vector if nothing in
/// `text[..max_lookup_length]` matches at any length.
pub fn word_search(text: &str, dictionary: &Dictionary, max_results: usize) -> Vec<WordResult> {
	let chars: Vec<char> = text.chars().collect();
	let config = dictionary.config();
	let longest = chars.len().min(config.max_lookup_length);

	for prefix_len in (1..=longest).rev() {
		let prefix: String = chars[..prefix_len].iter().collect();
		let mut results = search_prefix(&prefix, dictionary, max_results);
		if !results.is_empty() {
			rank(&mut results);
			results.truncate(max_results);
			return results;
		}
	}

	Vec::new()
}

/// Looks up `prefix` directly, then — only on a miss — retries with its
/// kyūjitai-folded and chōon-expanded variants. `match_len` always reflects
/// `prefix` itself, never the variant actually used to look it up, since the
/// consumed length in the original text doesn't change.
fn search_prefix(prefix: &str, dictionary: &Dictionary, max_results: usize) -> Vec<WordResult> {
	let results = search_candidates(prefix, prefix, dictionary, max_results);
	if !results.is_empty() {
		return results;
	}

	let shinjitai = kyuujitai_to_shinjitai(prefix);
	if shinjitai != prefix {
		let results = search_candidates(&shinjitai, prefix, dictionary, max_results);
		if !results.is_empty() {
			return results;
		}
	}

	let expanded = expand_choon(prefix);
	if expanded != prefix {
		let results = search_candidates(&expanded, prefix, dictionary, max_results);
		if !results.is_empty() {
			return results;
		}
	}

	Vec::new()
}

fn search_candidates(word: &str, original_prefix: &str, dictionary: &Dictionary, max_results: usize) -> Vec<WordResult> {
	let candidates = deinflect(word, dictionary.config().deinflect_depth_cap);
	let mut results = Vec::new();

	for candidate in candidates {
		let entries = dictionary.get_words(&candidate.word, max_results);
		for entry in entries {
			if !entry_matches_type(&entry, candidate.type_mask) {
				continue;
			}

			let is_identity = candidate.type_mask.contains(WordType::INITIAL);
			let match_type = if is_identity {
				classify_identity_match(&entry)
			} else {
				MatchType::Deinflected
			};

			results.push(WordResult {
				entry,
				match_len: original_prefix.chars().count(),
				reason_chains: candidate.reason_chains.clone(),
				match_type,
			});
		}
	}

	results
}

fn classify_identity_match(entry: &super::types::WordEntry) -> MatchType {
	if entry.kanji_readings.iter().any(|k| k.matched) {
		MatchType::ExactKanji
	} else if entry.kana_readings.iter().any(|k| k.matched) {
		MatchType::ExactKana
	} else {
		MatchType::KanaFold
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::japanese::types::{KanaReading, KanjiReading, Sense, WordEntry};
	use crate::Config;

	fn dictionary() -> Dictionary {
		let entry = WordEntry {
			entry_id: 1,
			ent_seq: "1".to_string(),
			kanji_readings: vec![KanjiReading {
				text: "食べる".to_string(),
				priority: None,
				info: None,
				match_range: None,
				matched: false,
			}],
			kana_readings: vec![KanaReading {
				text: "たべる".to_string(),
				no_kanji: false,
				priority: None,
				info: None,
				match_range: None,
				matched: false,
			}],
			senses: vec![Sense {
				index: 0,
				pos_tags: vec!["v1".to_string()].into_iter().collect(),
				glosses: vec![],
				info: None,
				fields: vec![],
				misc: vec![],
				dial: vec![],
			}],
		};
		Dictionary::new(vec![entry], Config::default()).unwrap()
	}

	#[test]
	fn test_word_search_exact_match() {
		let dict = dictionary();
		let results = word_search("食べる", &dict, 10);
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].match_type, MatchType::ExactKanji);
		assert_eq!(results[0].match_len, 3);
	}

	#[test]
	fn test_word_search_deinflected_match() {
		let dict = dictionary();
		let results = word_search("食べました", &dict, 10);
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].match_type, MatchType::Deinflected);
		assert_eq!(results[0].match_len, 5);
	}

	#[test]
	fn test_word_search_no_match_returns_empty() {
		let dict = dictionary();
		let results = word_search("存在しない言葉", &dict, 10);
		assert!(results.is_empty());
	}

	#[test]
	fn test_word_search_stops_at_longest_matching_prefix() {
		let dict = dictionary();
		// "食べるもの" has no entry itself, but "食べる" (a strict prefix) does;
		// the 3-character prefix should win over any shorter match.
		let results = word_search("食べるもの", &dict, 10);
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].match_len, 3);
	}

	fn kyuujitai_dictionary() -> Dictionary {
		let entry = WordEntry {
			entry_id: 1,
			ent_seq: "1".to_string(),
			kanji_readings: vec![KanjiReading {
				text: "国".to_string(),
				priority: None,
				info: None,
				match_range: None,
				matched: false,
			}],
			kana_readings: vec![KanaReading {
				text: "くに".to_string(),
				no_kanji: false,
				priority: None,
				info: None,
				match_range: None,
				matched: false,
			}],
			senses: vec![Sense {
				index: 0,
				pos_tags: Default::default(),
				glosses: vec![],
				info: None,
				fields: vec![],
				misc: vec![],
				dial: vec![],
			}],
		};
		Dictionary::new(vec![entry], Config::default()).unwrap()
	}

	#[test]
	fn test_word_search_retries_kyuujitai_variant_on_miss() {
		let dict = kyuujitai_dictionary();
		// "國" (kyūjitai) has no direct entry, only its shinjitai form "国" does.
		let results = word_search("國", &dict, 10);
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].match_len, 1);
		assert!(results[0].entry.kanji_readings.iter().any(|k| k.text == "国"));
	}
}

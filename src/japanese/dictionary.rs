//! In-memory dictionary store (C5): surface-form lookup backed by the C6
//! index, with bounded positive/negative lookup caches.

use std::collections::HashMap;

use crate::kana::{is_pure_katakana, kana_to_hiragana};
use crate::util::{BoundedCache, Result, ToError};
use crate::Config;

use super::trie::Trie;
use super::types::WordEntry;

/// Loaded dictionary content plus the caches and index built over it.
pub struct Dictionary {
	words: HashMap<u64, WordEntry>,
	index: Trie,
	config: Config,
	negative_cache: BoundedCache<String, ()>,
	positive_cache: BoundedCache<String, Vec<u64>>,
}

impl Dictionary {
	/// Builds the surface-form index over `words` and allocates the lookup
	/// caches sized per `config`. Fails if two entries share an `entry_id`.
	pub fn new(words: Vec<WordEntry>, config: Config) -> Result<Dictionary> {
		time!(t_load);
		let mut index = Trie::new();
		let mut by_id = HashMap::with_capacity(words.len());
		let mut kanji_count = 0usize;
		let mut reading_count = 0usize;

		for entry in words {
			if by_id.contains_key(&entry.entry_id) {
				return Err(format!("duplicate entry_id {} in dictionary", entry.entry_id).to_err());
			}

			kanji_count += entry.kanji_readings.len();
			reading_count += entry.kana_readings.len();

			for kanji in &entry.kanji_readings {
				index.insert(&kanji.text, entry.entry_id);
			}
			for kana in &entry.kana_readings {
				// Only the exact surface form is indexed here. A katakana
				// reading is never indexed under its hiragana fold: doing so
				// would create a key that any hiragana query collides with,
				// regardless of script (§4.5). Katakana queries instead fold
				// themselves to hiragana at lookup time and match directly
				// against hiragana-spelled readings indexed under their own key.
				index.insert(&kana.text, entry.entry_id);
			}

			by_id.insert(entry.entry_id, entry);
		}

		info!(slog_scope::logger(), "dictionary loaded";
			"entries" => by_id.len(), "kanji" => kanji_count, "readings" => reading_count, t_load);

		Ok(Dictionary {
			words: by_id,
			index,
			negative_cache: BoundedCache::new(config.negative_cache_capacity, config.negative_cache_trim),
			positive_cache: BoundedCache::new(config.positive_cache_capacity, config.positive_cache_trim),
			config,
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Current `(positive, negative)` lookup cache occupancy, for diagnostics.
	pub fn cache_stats(&self) -> (usize, usize) {
		(self.positive_cache.len(), self.negative_cache.len())
	}

	/// True if `text` appears as a surface form (kanji, kana, or
	/// hiragana-folded kana) in any indexed entry. The hiragana fold is only
	/// attempted for purely-katakana text — folding a mixed-script or
	/// hiragana input would match unrelated katakana-only readings.
	pub fn exists(&self, text: &str) -> bool {
		if self.index.contains_key(text) {
			return true;
		}
		if !is_pure_katakana(text) {
			return false;
		}
		let folded = kana_to_hiragana(text);
		folded != text && self.index.contains_key(&folded)
	}

	fn lookup_ids(&self, text: &str) -> Vec<u64> {
		if let Some(hit) = self.positive_cache.get(&text.to_string()) {
			return hit;
		}
		if self.negative_cache.get(&text.to_string()).is_some() {
			return Vec::new();
		}

		let mut ids: Vec<u64> = self.index.get(text).to_vec();
		// Mixed-script or hiragana input is never hiragana-folded for lookup:
		// folding "かたかな" would collide with a katakana-only reading
		// "カタカナ". Only purely-katakana text is eligible.
		if is_pure_katakana(text) {
			let folded = kana_to_hiragana(text);
			if folded != text {
				for id in self.index.get(&folded) {
					if !ids.contains(id) {
						ids.push(*id);
					}
				}
			}
		}

		if ids.is_empty() {
			self.negative_cache.insert(text.to_string(), ());
		} else {
			self.positive_cache.insert(text.to_string(), ids.clone());
		}
		ids
	}

	/// Entries whose surface form (or hiragana fold) equals `text`, up to
	/// `max_results`, with reading `matched`/`match_range` fields set
	/// against `text`.
	pub fn get_words(&self, text: &str, max_results: usize) -> Vec<WordEntry> {
		let ids = self.lookup_ids(text);
		self.get_entries_by_ids(&ids, Some(text), max_results)
	}

	/// Entries by id, with reading match fields computed against
	/// `matching_text` (or left vacuously matched if `None`), up to
	/// `max_results`.
	pub fn get_entries_by_ids(&self, ids: &[u64], matching_text: Option<&str>, max_results: usize) -> Vec<WordEntry> {
		ids.iter()
			.filter_map(|id| self.words.get(id))
			.take(max_results)
			.map(|entry| {
				let mut entry = entry.clone();
				apply_match(&mut entry, matching_text);
				entry
			})
			.collect()
	}
}

/// Implements the vacuous-match algorithm: kanji readings are checked
/// first; kana readings are only checked if no kanji reading actually
/// matched. If a script class has readings but none of them actually
/// matches, every reading in that class is marked `matched` anyway, since
/// there is nothing in that class to discriminate against.
fn apply_match(entry: &mut WordEntry, matching_text: Option<&str>) {
	let text = match matching_text {
		Some(t) => t,
		None => {
			for kanji in entry.kanji_readings.iter_mut() {
				kanji.matched = true;
			}
			for kana in entry.kana_readings.iter_mut() {
				kana.matched = true;
			}
			return;
		}
	};
	let range = Some((0, text.chars().count()));

	let mut kanji_hit = false;
	for kanji in entry.kanji_readings.iter_mut() {
		if kanji.text == text {
			kanji.matched = true;
			kanji.match_range = range;
			kanji_hit = true;
		} else {
			kanji.matched = false;
			kanji.match_range = None;
		}
	}
	if !kanji_hit && !entry.kanji_readings.is_empty() {
		for kanji in entry.kanji_readings.iter_mut() {
			kanji.matched = true;
		}
	}

	if kanji_hit {
		for kana in entry.kana_readings.iter_mut() {
			kana.matched = false;
			kana.match_range = None;
		}
		return;
	}

	// Only fold to hiragana when `text` is itself purely katakana; otherwise
	// require an exact match so hiragana input never collides with a
	// katakana-only reading by way of a shared fold.
	let fold_for_compare = is_pure_katakana(text);
	let folded_text = kana_to_hiragana(text);
	let mut kana_hit = false;
	for kana in entry.kana_readings.iter_mut() {
		let matches = if fold_for_compare {
			kana_to_hiragana(&kana.text) == folded_text
		} else {
			kana.text == text
		};
		if matches {
			kana.matched = true;
			kana.match_range = range;
			kana_hit = true;
		} else {
			kana.matched = false;
			kana.match_range = None;
		}
	}
	if !kana_hit && !entry.kana_readings.is_empty() {
		for kana in entry.kana_readings.iter_mut() {
			kana.matched = true;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::japanese::types::{KanaReading, KanjiReading, Sense};

	fn entry(id: u64, kanji: &[&str], kana: &[&str]) -> WordEntry {
		WordEntry {
			entry_id: id,
			ent_seq: id.to_string(),
			kanji_readings: kanji
				.iter()
				.map(|t| KanjiReading {
					text: t.to_string(),
					priority: None,
					info: None,
					match_range: None,
					matched: false,
				})
				.collect(),
			kana_readings: kana
				.iter()
				.map(|t| KanaReading {
					text: t.to_string(),
					no_kanji: kanji.is_empty(),
					priority: None,
					info: None,
					match_range: None,
					matched: false,
				})
				.collect(),
			senses: vec![Sense {
				index: 0,
				pos_tags: Default::default(),
				glosses: vec![],
				info: None,
				fields: vec![],
				misc: vec![],
				dial: vec![],
			}],
		}
	}

	#[test]
	fn test_get_words_exact_kanji() {
		let dict = Dictionary::new(vec![entry(1, &["食べる"], &["たべる"])], Config::default()).unwrap();
		let results = dict.get_words("食べる", 10);
		assert_eq!(results.len(), 1);
		assert!(results[0].kanji_readings[0].matched);
		assert!(!results[0].kana_readings[0].matched);
	}

	#[test]
	fn test_get_words_kana_fallback_when_no_kanji_hit() {
		let dict = Dictionary::new(vec![entry(1, &["食べる"], &["たべる"])], Config::default()).unwrap();
		let results = dict.get_words("たべる", 10);
		assert_eq!(results.len(), 1);
		// Kanji class is non-empty but had zero matches: vacuously matched.
		assert!(results[0].kanji_readings[0].matched);
		assert!(results[0].kana_readings[0].matched);
	}

	#[test]
	fn test_exists_folds_katakana() {
		let dict = Dictionary::new(vec![entry(1, &[], &["たべる"])], Config::default()).unwrap();
		assert!(dict.exists("たべる"));
		assert!(!dict.exists("のむ"));
	}

	#[test]
	fn test_get_words_respects_max_results() {
		let dict = Dictionary::new(
			vec![entry(1, &["犬"], &["いぬ"]), entry(2, &["犬"], &["いぬ"])],
			Config::default(),
		)
		.unwrap();
		let results = dict.get_words("犬", 1);
		assert_eq!(results.len(), 1);
	}

	#[test]
	fn test_new_rejects_duplicate_entry_id() {
		let err = Dictionary::new(vec![entry(1, &["犬"], &["いぬ"]), entry(1, &["猫"], &["ねこ"])], Config::default());
		assert!(err.is_err());
	}

	#[test]
	fn test_negative_lookup_returns_empty() {
		let dict = Dictionary::new(vec![entry(1, &["犬"], &["いぬ"])], Config::default()).unwrap();
		assert!(dict.get_words("存在しない", 10).is_empty());
	}

	#[test]
	fn test_hiragana_input_does_not_fold_match_katakana_reading() {
		let dict = Dictionary::new(vec![entry(1, &[], &["カタカナ"])], Config::default()).unwrap();
		assert!(dict.get_words("かたかな", 10).is_empty());
		assert!(!dict.exists("かたかな"));
	}

	#[test]
	fn test_pure_katakana_input_still_folds_to_hiragana_reading() {
		let dict = Dictionary::new(vec![entry(1, &[], &["たべる"])], Config::default()).unwrap();
		let results = dict.get_words("タベル", 10);
		assert_eq!(results.len(), 1);
		assert!(results[0].kana_readings[0].matched);
	}

	#[test]
	fn test_cache_stats_track_hits_and_misses() {
		let dict = Dictionary::new(vec![entry(1, &["犬"], &["いぬ"])], Config::default()).unwrap();
		dict.get_words("犬", 10);
		dict.get_words("存在しない", 10);
		assert_eq!(dict.cache_stats(), (1, 1));
	}
}

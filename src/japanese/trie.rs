//! In-memory surface-form index (C6).
//!
//! Not a real compressed trie: no crate in the surrounding ecosystem of
//! this project provides one, so this substitutes a `HashMap<String, _>`
//! keyed by exact surface form. Functionally equivalent for point lookups;
//! it gives up prefix enumeration, which word_search doesn't need since it
//! already tries every prefix length explicitly.

use std::collections::HashMap;

/// Maps every indexed surface form (kanji and kana readings, plus their
/// hiragana-folded variants) to the entry ids it belongs to.
#[derive(Debug, Default)]
pub struct Trie {
	entries: HashMap<String, Vec<u64>>,
}

impl Trie {
	pub fn new() -> Trie {
		Trie {
			entries: HashMap::new(),
		}
	}

	/// Associates `entry_id` with `surface`, appending if the key already
	/// has entries and skipping if `entry_id` is already present.
	pub fn insert(&mut self, surface: &str, entry_id: u64) {
		let ids = self.entries.entry(surface.to_string()).or_default();
		if !ids.contains(&entry_id) {
			ids.push(entry_id);
		}
	}

	/// Entry ids indexed under the exact string `surface`.
	pub fn get(&self, surface: &str) -> &[u64] {
		self.entries.get(surface).map(|v| v.as_slice()).unwrap_or(&[])
	}

	pub fn contains_key(&self, surface: &str) -> bool {
		self.entries.contains_key(surface)
	}
}

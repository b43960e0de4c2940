//! Japanese tokenizer and deinflector: normalize input, deinflect candidate
//! conjugations at each position, and match them against an in-memory
//! dictionary.

pub mod types;

mod deinflect;
mod dictionary;
mod matcher;
mod rank;
mod search;
mod tokenize;
mod trie;

pub use self::deinflect::{can_deinflect, deinflect};
pub use self::dictionary::Dictionary;
pub use self::matcher::entry_matches_type;
pub use self::search::word_search;
pub use self::tokenize::tokenize;
pub use self::types::{
	DeinflectCandidate, DeinflectRule, Gloss, KanaReading, KanjiReading, MatchType, Reason, Sense, Token, WordEntry,
	WordResult, WordType,
};

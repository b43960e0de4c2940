//! Core data model shared by the deinflector, dictionary store, and tokenizer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
	/// Grammatical category of a surface form at a point in deinflection.
	///
	/// A "type mask" is the bitwise OR of applicable variants; [WordType::INITIAL]
	/// matches anything and seeds the deinflection BFS.
	#[derive(Serialize, Deserialize)]
	pub struct WordType: u32 {
		/// Matches any dictionary entry; seeds the BFS and admits undeinflected hits.
		const INITIAL        = 1 << 0;
		const ICHIDAN        = 1 << 1;
		const GODAN_K         = 1 << 2;
		const GODAN_G         = 1 << 3;
		const GODAN_S         = 1 << 4;
		const GODAN_T         = 1 << 5;
		const GODAN_N         = 1 << 6;
		const GODAN_B         = 1 << 7;
		const GODAN_M         = 1 << 8;
		const GODAN_R         = 1 << 9;
		const GODAN_W         = 1 << 10;
		const SURU            = 1 << 11;
		const SURU_SPECIAL    = 1 << 12;
		const KURU            = 1 << 13;
		const ADJ_I           = 1 << 14;
		const ADJ_NA          = 1 << 15;
		const NOUN            = 1 << 16;

		/// Union of every concrete (non-[INITIAL]) word class. Rules whose
		/// applicability does not hinge on a specific upstream class use this
		/// as their `from_type`.
		const ALL = Self::ICHIDAN.bits | Self::GODAN_K.bits | Self::GODAN_G.bits
			| Self::GODAN_S.bits | Self::GODAN_T.bits | Self::GODAN_N.bits
			| Self::GODAN_B.bits | Self::GODAN_M.bits | Self::GODAN_R.bits
			| Self::GODAN_W.bits | Self::SURU.bits | Self::SURU_SPECIAL.bits
			| Self::KURU.bits | Self::ADJ_I.bits | Self::ADJ_NA.bits | Self::NOUN.bits;
	}
}

/// Closed set of grammatical transformations a [super::deinflect::DeinflectRule]
/// may record on a reason chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
	PolitePast,
	PoliteNegativePast,
	Polite,
	PoliteNegative,
	PoliteVolitional,
	Past,
	Negative,
	Te,
	Continuous,
	Passive,
	Causative,
	CausativePassive,
	Potential,
	PotentialOrPassive,
	Imperative,
	Volitional,
	Conditional,
	Tara,
	Tari,
	Zu,
	Nu,
	MasuStem,
	Desire,
	Adv,
	NounIzing,
	Sou,
	Sugiru,
	Chau,
	Nasai,
	Toku,
}

/// One row in the static deinflection rule table (C3).
#[derive(Clone, Copy, Debug)]
pub struct DeinflectRule {
	/// Suffix matched against the end of the surface form.
	pub from: &'static str,
	/// Suffix that replaces it.
	pub to: &'static str,
	/// Required type mask the candidate must currently satisfy.
	pub from_type: WordType,
	/// Type mask assigned to the resulting candidate.
	pub to_type: WordType,
	/// Reason recorded on the chain when this rule fires.
	pub reason: Reason,
}

/// Intermediate BFS state: a surface string plus the type mask it currently
/// satisfies, together with every reason chain that reached it.
#[derive(Clone, Debug)]
pub struct DeinflectCandidate {
	pub word: String,
	pub type_mask: WordType,
	pub reason_chains: Vec<Vec<Reason>>,
}

/// Kanji spelling of a dictionary entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KanjiReading {
	pub text: String,
	pub priority: Option<String>,
	pub info: Option<String>,
	#[serde(skip)]
	pub match_range: Option<(usize, usize)>,
	#[serde(skip)]
	pub matched: bool,
}

/// Kana spelling of a dictionary entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KanaReading {
	pub text: String,
	pub no_kanji: bool,
	pub priority: Option<String>,
	pub info: Option<String>,
	#[serde(skip)]
	pub match_range: Option<(usize, usize)>,
	#[serde(skip)]
	pub matched: bool,
}

/// A single gloss (translation) attached to a [Sense].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gloss {
	pub text: String,
	pub lang: String,
	pub g_type: Option<String>,
}

/// One sense (meaning) of a dictionary entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sense {
	pub index: usize,
	pub pos_tags: HashSet<String>,
	pub glosses: Vec<Gloss>,
	pub info: Option<String>,
	pub fields: Vec<String>,
	pub misc: Vec<String>,
	pub dial: Vec<String>,
}

/// One dictionary record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordEntry {
	pub entry_id: u64,
	pub ent_seq: String,
	pub kanji_readings: Vec<KanjiReading>,
	pub kana_readings: Vec<KanaReading>,
	pub senses: Vec<Sense>,
}

/// How a [WordResult] was obtained relative to the input prefix it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
	ExactKanji,
	ExactKana,
	KanaFold,
	Deinflected,
}

/// An entry surfaced at a tokenizer position (C9 output).
#[derive(Clone, Debug)]
pub struct WordResult {
	pub entry: WordEntry,
	pub match_len: usize,
	pub reason_chains: Vec<Vec<Reason>>,
	pub match_type: MatchType,
}

/// Final tokenizer output unit.
#[derive(Clone, Debug)]
pub struct Token {
	pub text: String,
	pub start: usize,
	pub end: usize,
	pub dictionary_entry: Option<WordEntry>,
	pub deinflection_reasons: Option<Vec<Reason>>,
}

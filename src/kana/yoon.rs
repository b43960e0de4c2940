//! Yoon detection and orthographic-variant expansion.

use std::collections::HashMap;

/// Mora that can be palatalized by a following small ゃ/ゅ/ょ.
const YOON_START: &[char] = &['き', 'し', 'ち', 'に', 'ひ', 'み', 'り', 'ぎ', 'じ', 'び', 'ぴ'];

/// Small y-kana that mark a palatalized (yoon) syllable.
const SMALL_Y: &[char] = &['ゃ', 'ゅ', 'ょ'];

/// Returns true iff `text` ends in a yoon: its last character is one of
/// ゃゅょ and the one before it is a palatalizable mora.
pub fn ends_in_yoon(text: &str) -> bool {
	let chars: Vec<char> = text.chars().collect();
	if chars.len() < 2 {
		return false;
	}
	let last = chars[chars.len() - 1];
	let prev = chars[chars.len() - 2];
	SMALL_Y.contains(&last) && YOON_START.contains(&prev)
}

lazy_static! {
	/// Maps each katakana row's long-vowel expansion, keyed by the vowel
	/// carried by the mora preceding ー.
	static ref CHOON_VOWEL: HashMap<char, char> = {
		let mut m = HashMap::new();
		for &(vowel, row) in &[
			('あ', "あかさたなはまやらわがざだばぱ"),
			('い', "いきしちにひみりぎじぢびぴ"),
			('う', "うくすつぬふむゆるぐずづぶぷ"),
			('え', "えけせてねへめれげぜでべぺ"),
			('お', "おこそとのほもよろをごぞどぼぽ"),
		] {
			for c in row.chars() {
				m.insert(c, vowel);
			}
		}
		m
	};
}

/// Replaces each ー (U+30FC) with the vowel sound carried by the preceding
/// mora (expects `text` already folded to hiragana for the row lookup).
pub fn expand_choon(text: &str) -> String {
	let chars: Vec<char> = text.chars().collect();
	let mut out = String::with_capacity(text.len());
	let mut prev_vowel: Option<char> = None;

	for &c in &chars {
		if c == 'ー' {
			if let Some(v) = prev_vowel {
				out.push(v);
			}
			// prev_vowel carries through a run of choon marks unchanged.
		} else {
			out.push(c);
			prev_vowel = CHOON_VOWEL.get(&c).copied();
		}
	}

	out
}

lazy_static! {
	/// Pointwise kyūjitai (traditional) -> shinjitai (simplified) kanji table.
	static ref KYUUJITAI: HashMap<char, char> = {
		let mut m = HashMap::new();
		let pairs = [
			('國', '国'), ('學', '学'), ('會', '会'), ('體', '体'), ('佛', '仏'),
			('圖', '図'), ('號', '号'), ('壽', '寿'), ('專', '専'), ('廣', '広'),
			('惡', '悪'), ('拂', '払'), ('擔', '担'), ('數', '数'), ('櫻', '桜'),
			('氣', '気'), ('澤', '沢'), ('點', '点'), ('燈', '灯'), ('獨', '独'),
			('繼', '継'), ('續', '続'), ('聲', '声'), ('臺', '台'), ('與', '与'),
			('萬', '万'), ('觀', '観'), ('賣', '売'), ('實', '実'), ('寫', '写'),
		];
		for (from, to) in pairs {
			m.insert(from, to);
		}
		m
	};
}

/// Maps traditional (kyūjitai) kanji to their modern (shinjitai) form,
/// passing through any character with no known mapping.
pub fn kyuujitai_to_shinjitai(text: &str) -> String {
	text.chars()
		.map(|c| KYUUJITAI.get(&c).copied().unwrap_or(c))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ends_in_yoon() {
		assert!(ends_in_yoon("きゃ"));
		assert!(ends_in_yoon("しゃ"));
		assert!(ends_in_yoon("びゅ"));
		assert!(!ends_in_yoon("あい"));
		assert!(!ends_in_yoon("き"));
		assert!(!ends_in_yoon(""));
		assert!(!ends_in_yoon("あゃ"));
	}

	#[test]
	fn test_expand_choon() {
		assert_eq!(expand_choon("かーど"), "かあど");
		assert_eq!(expand_choon("こーひー"), "こおひい");
		assert_eq!(expand_choon("ー"), "");
	}

	#[test]
	fn test_kyuujitai_to_shinjitai() {
		assert_eq!(kyuujitai_to_shinjitai("國學"), "国学");
		assert_eq!(kyuujitai_to_shinjitai("日本語"), "日本語");
	}
}

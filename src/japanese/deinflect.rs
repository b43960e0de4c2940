//! Deinflection rule table (C3) and BFS deinflection engine (C4).

use std::collections::HashMap;
use std::collections::VecDeque;

use super::types::{DeinflectCandidate, DeinflectRule, Reason, WordType};

/// Rules whose applicability does not hinge on a specific upstream class:
/// they fire from the [WordType::INITIAL] seed as well as from any concrete
/// class produced by an earlier hop. The real selectivity in this table
/// comes from suffix-string specificity, not from-type gating; from_type
/// exists to satisfy the final word-type compatibility check performed by
/// the matcher (C7) against the candidate produced by the *last* hop.
fn any_from() -> WordType {
	WordType::ALL | WordType::INITIAL
}

/// Infers the type mask produced by ending in `suffix` (the rule's `to`
/// string), from its dictionary-form tail. "る" is ambiguous between Ichidan
/// and Godan-r verbs (e.g. 走る vs 食べる) and carries both bits; the
/// word-type matcher (C7) narrows this down against the dictionary entry's
/// actual part-of-speech tags.
fn type_for_ending(suffix: &str) -> WordType {
	if suffix.ends_with("する") {
		WordType::SURU
	} else if suffix.ends_with("くる") {
		WordType::KURU
	} else if suffix.ends_with('い') {
		WordType::ADJ_I
	} else {
		match suffix.chars().last() {
			Some('う') => WordType::GODAN_W,
			Some('く') => WordType::GODAN_K,
			Some('ぐ') => WordType::GODAN_G,
			Some('す') => WordType::GODAN_S,
			Some('つ') => WordType::GODAN_T,
			Some('ぬ') => WordType::GODAN_N,
			Some('ぶ') => WordType::GODAN_B,
			Some('む') => WordType::GODAN_M,
			Some('る') => WordType::ICHIDAN | WordType::GODAN_R,
			_ => WordType::ALL,
		}
	}
}

macro_rules! rules {
	( $( $reason:ident => { $( $from:literal => $to:literal )* } )* ) => {
		{
			let mut out = Vec::new();
			$(
				$(
					out.push(DeinflectRule {
						from: $from,
						to: $to,
						from_type: any_from(),
						to_type: type_for_ending($to),
						reason: Reason::$reason,
					});
				)*
			)*
			out
		}
	};
}

/// Builds the full static rule table (C3), translated from the classic
/// deinflection rule set used by popup dictionaries such as Yomichan, and
/// extended with a Continuous (ている) group the distilled rule set lacked.
#[allow(clippy::vec_init_then_push)]
fn build_rules() -> Vec<DeinflectRule> {
	// spell-checker: disable
	rules! {
		Conditional => {
			"えば" => "う"
			"けば" => "く"
			"げば" => "ぐ"
			"せば" => "す"
			"てば" => "つ"
			"ねば" => "ぬ"
			"べば" => "ぶ"
			"めば" => "む"
			"れば" => "る"
			"ければ" => "い"
		}
		Chau => {
			"ちゃう" => "る"
			"いじゃう" => "ぐ"
			"いちゃう" => "く"
			"きちゃう" => "くる"
			"しちゃう" => "する"
			"っちゃう" => "う"
		}
		Nasai => {
			"なさい" => "る"
			"いなさい" => "う"
			"きなさい" => "くる"
			"ぎなさい" => "ぐ"
			"しなさい" => "する"
			"ちなさい" => "つ"
			"になさい" => "ぬ"
			"びなさい" => "ぶ"
			"みなさい" => "む"
			"りなさい" => "る"
		}
		Nu => {
			"ぬ" => "る"
			"かぬ" => "く"
			"がぬ" => "ぐ"
			"こぬ" => "くる"
			"さぬ" => "す"
			"せぬ" => "する"
			"たぬ" => "つ"
			"ばぬ" => "ぶ"
			"まぬ" => "む"
			"らぬ" => "る"
			"わぬ" => "う"
		}
		Sou => {
			"そう" => "い"
			"そう" => "る"
			"いそう" => "う"
			"きそう" => "くる"
			"ぎそう" => "ぐ"
			"しそう" => "する"
			"ちそう" => "つ"
			"にそう" => "ぬ"
			"びそう" => "ぶ"
			"みそう" => "む"
			"りそう" => "る"
		}
		Sugiru => {
			"すぎる" => "い"
			"すぎる" => "る"
			"いすぎる" => "う"
			"きすぎる" => "くる"
			"ぎすぎる" => "ぐ"
			"しすぎる" => "する"
			"ちすぎる" => "つ"
			"にすぎる" => "ぬ"
			"びすぎる" => "ぶ"
			"みすぎる" => "む"
			"りすぎる" => "る"
		}
		Desire => {
			"たい" => "る"
			"いたい" => "う"
			"きたい" => "くる"
			"ぎたい" => "ぐ"
			"したい" => "する"
			"ちたい" => "つ"
			"にたい" => "ぬ"
			"びたい" => "ぶ"
			"みたい" => "む"
			"りたい" => "る"
		}
		Tara => {
			"たら" => "る"
			"いたら" => "く"
			"いだら" => "ぐ"
			"きたら" => "くる"
			"したら" => "する"
			"ったら" => "う"
			"んだら" => "ぬ"
			"かったら" => "い"
		}
		Tari => {
			"たり" => "る"
			"いたり" => "く"
			"いだり" => "ぐ"
			"きたり" => "くる"
			"したり" => "する"
			"ったり" => "う"
			"んだり" => "ぬ"
			"かったり" => "い"
		}
		Te => {
			"て" => "る"
			"いて" => "く"
			"いで" => "ぐ"
			"きて" => "くる"
			"くて" => "い"
			"して" => "する"
			"って" => "う"
			"んで" => "ぬ"
		}
		Toku => {
			"いとく" => "く"
			"いどく" => "ぐ"
			"きとく" => "くる"
			"しとく" => "する"
			"っとく" => "う"
			"んどく" => "ぬ"
			"とく" => "る"
		}
		Zu => {
			"ず" => "る"
			"かず" => "く"
			"がず" => "ぐ"
			"こず" => "くる"
			"さず" => "す"
			"せず" => "する"
			"たず" => "つ"
			"なず" => "ぬ"
			"ばず" => "ぶ"
			"まず" => "む"
			"らず" => "る"
			"わず" => "う"
		}
		Adv => {
			"く" => "い"
		}
		Causative => {
			"かせる" => "く"
			"がせる" => "ぐ"
			"させる" => "する"
			"させる" => "る"
			"たせる" => "つ"
			"ばせる" => "ぶ"
			"ませる" => "む"
			"らせる" => "る"
			"わせる" => "う"
			"こさせる" => "くる"
		}
		CausativePassive => {
			"かされる" => "く"
			"がされる" => "ぐ"
			"たされる" => "つ"
			"なされる" => "ぬ"
			"ばされる" => "ぶ"
			"まされる" => "む"
			"らされる" => "る"
			"わされる" => "う"
		}
		Imperative => {
			"い" => "る"
			"え" => "う"
			"け" => "く"
			"げ" => "ぐ"
			"せ" => "す"
			"て" => "つ"
			"ね" => "ぬ"
			"べ" => "ぶ"
			"め" => "む"
			"ろ" => "る"
			"こい" => "くる"
			"しろ" => "する"
			"せよ" => "する"
		}
		MasuStem => {
			"い" => "いる"
			"い" => "う"
			"え" => "える"
			"き" => "きる"
			"き" => "く"
			"き" => "くる"
			"ぎ" => "ぎる"
			"ぎ" => "ぐ"
			"け" => "ける"
			"げ" => "げる"
			"し" => "す"
			"じ" => "じる"
			"せ" => "せる"
			"ち" => "ちる"
			"ち" => "つ"
			"て" => "てる"
			"で" => "でる"
			"に" => "にる"
			"に" => "ぬ"
			"ね" => "ねる"
			"ひ" => "ひる"
			"び" => "びる"
			"び" => "ぶ"
			"へ" => "へる"
			"べ" => "べる"
			"み" => "みる"
			"み" => "む"
			"め" => "める"
			"り" => "りる"
			"り" => "る"
			"れ" => "れる"
		}
		Negative => {
			"ない" => "る"
			"かない" => "く"
			"がない" => "ぐ"
			"くない" => "い"
			"こない" => "くる"
			"さない" => "す"
			"しない" => "する"
			"たない" => "つ"
			"ばない" => "ぶ"
			"まない" => "む"
			"らない" => "る"
			"わない" => "う"
		}
		NounIzing => {
			"さ" => "い"
		}
		Passive => {
			"かれる" => "く"
			"がれる" => "ぐ"
			"される" => "する"
			"たれる" => "つ"
			"なれる" => "ぬ"
			"ばれる" => "ぶ"
			"まれる" => "む"
			"われる" => "う"
		}
		Past => {
			"た" => "る"
			"いた" => "く"
			"いだ" => "ぐ"
			"きた" => "くる"
			"した" => "する"
			"った" => "う"
			"んだ" => "ぬ"
			"かった" => "い"
		}
		Polite => {
			"ます" => "る"
			"います" => "う"
			"きます" => "く"
			"きます" => "くる"
			"ぎます" => "ぐ"
			"します" => "す"
			"します" => "する"
			"ちます" => "つ"
			"にます" => "ぬ"
			"びます" => "ぶ"
			"みます" => "む"
			"ります" => "る"
		}
		PoliteNegative => {
			"ません" => "る"
			"いません" => "う"
			"きません" => "く"
			"きません" => "くる"
			"ぎません" => "ぐ"
			"しません" => "す"
			"しません" => "する"
			"ちません" => "つ"
			"にません" => "ぬ"
			"びません" => "ぶ"
			"みません" => "む"
			"りません" => "る"
			"くありません" => "い"
		}
		PolitePast => {
			"ました" => "る"
			"いました" => "う"
			"きました" => "く"
			"きました" => "くる"
			"ぎました" => "ぐ"
			"しました" => "す"
			"しました" => "する"
			"ちました" => "つ"
			"にました" => "ぬ"
			"びました" => "ぶ"
			"みました" => "む"
			"りました" => "る"
		}
		PoliteNegativePast => {
			"ませんでした" => "る"
			"いませんでした" => "う"
			"きませんでした" => "く"
			"きませんでした" => "くる"
			"ぎませんでした" => "ぐ"
			"しませんでした" => "す"
			"しませんでした" => "する"
			"ちませんでした" => "つ"
			"にませんでした" => "ぬ"
			"びませんでした" => "ぶ"
			"みませんでした" => "む"
			"りませんでした" => "る"
			"くありませんでした" => "い"
		}
		PoliteVolitional => {
			"ましょう" => "る"
			"いましょう" => "う"
			"きましょう" => "く"
			"きましょう" => "くる"
			"ぎましょう" => "ぐ"
			"しましょう" => "する"
			"ちましょう" => "つ"
			"にましょう" => "ぬ"
			"びましょう" => "ぶ"
			"みましょう" => "む"
			"りましょう" => "る"
		}
		Potential => {
			"える" => "う"
			"ける" => "く"
			"げる" => "ぐ"
			"せる" => "す"
			"てる" => "つ"
			"ねる" => "ぬ"
			"べる" => "ぶ"
			"める" => "む"
			"これる" => "くる"
		}
		PotentialOrPassive => {
			"られる" => "る"
			"こられる" => "くる"
		}
		Volitional => {
			"おう" => "う"
			"こう" => "く"
			"ごう" => "ぐ"
			"そう" => "す"
			"とう" => "つ"
			"のう" => "ぬ"
			"ぼう" => "ぶ"
			"もう" => "む"
			"よう" => "る"
			"ろう" => "る"
			"こよう" => "くる"
			"しよう" => "する"
		}
		Continuous => {
			"ている" => "る"
			"ておる" => "る"
			"でいる" => "む"
			"でいる" => "ぬ"
			"でいる" => "ぶ"
			"てる" => "る"
		}
	}
	// spell-checker: enable
}

/// Rules grouped by `from` suffix, longest suffixes first within a group so
/// that a caller scanning candidate suffix lengths finds the most specific
/// match first. Built once and shared by every [deinflect] call.
struct RuleIndex {
	by_suffix: HashMap<&'static str, Vec<DeinflectRule>>,
}

impl RuleIndex {
	fn build() -> RuleIndex {
		let mut by_suffix: HashMap<&'static str, Vec<DeinflectRule>> = HashMap::new();
		for rule in build_rules() {
			by_suffix.entry(rule.from).or_default().push(rule);
		}
		RuleIndex { by_suffix }
	}

	/// Every rule whose `from` suffix matches the tail of `word`, longest
	/// suffix first.
	fn matching(&self, word: &str) -> Vec<&DeinflectRule> {
		let mut out: Vec<&DeinflectRule> = self
			.by_suffix
			.iter()
			.filter(|(suffix, _)| word.ends_with(*suffix))
			.flat_map(|(_, rules)| rules.iter())
			.collect();
		out.sort_by_key(|r| std::cmp::Reverse(r.from.len()));
		out
	}
}

lazy_static! {
	static ref RULES: RuleIndex = RuleIndex::build();
}

/// Quick pre-check: could `input`'s tail possibly match any rule's `from`
/// suffix? Used to short-circuit obviously non-inflected lookups.
pub fn can_deinflect(input: &str) -> bool {
	!RULES.matching(input).is_empty()
}

/// BFS-expands `word` into every reachable [DeinflectCandidate] (C4).
///
/// Always includes the identity candidate `(word, INITIAL, [[]])` first.
/// Candidates are deduplicated by `(word, type_mask)`; exceeding
/// `depth_cap` silently drops further expansion of that chain.
pub fn deinflect(word: &str, depth_cap: usize) -> Vec<DeinflectCandidate> {
	let mut order: Vec<(String, WordType)> = Vec::new();
	let mut by_key: HashMap<(String, WordType), usize> = HashMap::new();
	let mut candidates: Vec<DeinflectCandidate> = Vec::new();

	let identity = DeinflectCandidate {
		word: word.to_string(),
		type_mask: WordType::INITIAL,
		reason_chains: vec![vec![]],
	};
	by_key.insert((identity.word.clone(), identity.type_mask), 0);
	order.push((identity.word.clone(), identity.type_mask));
	candidates.push(identity);

	let mut queue: VecDeque<usize> = VecDeque::new();
	queue.push_back(0);
	let mut depth: HashMap<usize, usize> = HashMap::new();
	depth.insert(0, 0);

	while let Some(index) = queue.pop_front() {
		let current_depth = depth[&index];
		if current_depth >= depth_cap {
			continue;
		}

		let (word, type_mask, chains) = {
			let c = &candidates[index];
			(c.word.clone(), c.type_mask, c.reason_chains.clone())
		};

		for rule in RULES.matching(&word) {
			if !(rule.from_type & type_mask).is_empty() {
				let stem = &word[..word.len() - rule.from.len()];
				let new_word = format!("{}{}", stem, rule.to);
				if new_word.is_empty() {
					continue;
				}

				let new_chains: Vec<Vec<Reason>> = chains
					.iter()
					.map(|chain| {
						let mut new_chain = Vec::with_capacity(chain.len() + 1);
						new_chain.push(rule.reason);
						new_chain.extend_from_slice(chain);
						new_chain
					})
					.collect();

				let key = (new_word.clone(), rule.to_type);
				if let Some(&existing) = by_key.get(&key) {
					for chain in new_chains {
						if !candidates[existing].reason_chains.contains(&chain) {
							candidates[existing].reason_chains.push(chain);
						}
					}
				} else {
					let new_index = candidates.len();
					by_key.insert(key.clone(), new_index);
					order.push(key);
					candidates.push(DeinflectCandidate {
						word: new_word,
						type_mask: rule.to_type,
						reason_chains: new_chains,
					});
					depth.insert(new_index, current_depth + 1);
					queue.push_back(new_index);
				}
			}
		}
	}

	candidates
}

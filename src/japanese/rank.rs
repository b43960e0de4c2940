//! Result ranking (C8): orders [WordResult]s surfaced at a single position.

use super::types::{MatchType, WordResult};

fn has_priority_reading(result: &WordResult) -> bool {
	result.entry.kanji_readings.iter().any(|k| k.priority.is_some())
		|| result.entry.kana_readings.iter().any(|k| k.priority.is_some())
}

fn shortest_chain_len(result: &WordResult) -> usize {
	result
		.reason_chains
		.iter()
		.map(|chain| chain.len())
		.min()
		.unwrap_or(0)
}

fn match_type_rank(match_type: MatchType) -> u8 {
	match match_type {
		MatchType::ExactKanji | MatchType::ExactKana => 0,
		MatchType::KanaFold => 1,
		MatchType::Deinflected => 2,
	}
}

/// Sorts `results` in place by: longest match first, priority-marked
/// readings first, exact matches before deinflected ones, shorter reason
/// chains first, then smaller entry id first as a stable tiebreaker.
pub fn rank(results: &mut [WordResult]) {
	results.sort_by(|a, b| {
		b.match_len
			.cmp(&a.match_len)
			.then_with(|| has_priority_reading(b).cmp(&has_priority_reading(a)))
			.then_with(|| match_type_rank(a.match_type).cmp(&match_type_rank(b.match_type)))
			.then_with(|| shortest_chain_len(a).cmp(&shortest_chain_len(b)))
			.then_with(|| a.entry.entry_id.cmp(&b.entry.entry_id))
	});
}

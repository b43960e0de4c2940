//! Runtime-tunable knobs for the tokenizer and dictionary store.

/// Configuration for a [crate::japanese::Dictionary] and the tokenizer driver
/// built on top of it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
	/// Longest prefix, in characters, that word search will attempt to
	/// deinflect and look up. Beyond this no dictionary entry can match.
	pub max_lookup_length: usize,

	/// Safety cap on deinflection chain depth. Candidates whose chain would
	/// exceed this are silently dropped rather than expanded further.
	pub deinflect_depth_cap: usize,

	/// Maximum number of entries kept in the negative (miss) lookup cache.
	pub negative_cache_capacity: usize,

	/// Number of oldest entries dropped, in one batch, once the negative
	/// cache exceeds its capacity.
	pub negative_cache_trim: usize,

	/// Maximum number of entries kept in the positive (hit) lookup cache.
	pub positive_cache_capacity: usize,

	/// Number of oldest entries dropped, in one batch, once the positive
	/// cache exceeds its capacity.
	pub positive_cache_trim: usize,
}

impl Default for Config {
	fn default() -> Config {
		Config {
			max_lookup_length:       15,
			deinflect_depth_cap:     10,
			negative_cache_capacity: 100_000,
			negative_cache_trim:     20_000,
			positive_cache_capacity: 10_000,
			positive_cache_trim:     2_000,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = Config::default();
		assert_eq!(config.max_lookup_length, 15);
		assert_eq!(config.deinflect_depth_cap, 10);
		assert_eq!(config.negative_cache_capacity, 100_000);
		assert_eq!(config.negative_cache_trim, 20_000);
		assert_eq!(config.positive_cache_capacity, 10_000);
		assert_eq!(config.positive_cache_trim, 2_000);
	}
}

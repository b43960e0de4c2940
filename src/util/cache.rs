use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// Bounded, insertion-ordered cache with interior mutability.
///
/// Once `capacity` is exceeded, the oldest `trim` entries are dropped in one
/// batch rather than evicting a single entry per insert. This mirrors the
/// dictionary store's positive/negative lookup caches, which favor a cheap
/// amortized trim over strict LRU bookkeeping.
pub struct BoundedCache<K: Eq + Hash + Clone, V: Clone> {
	store: Arc<Mutex<CacheStore<K, V>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> Clone for BoundedCache<K, V> {
	fn clone(&self) -> Self {
		BoundedCache {
			store: self.store.clone(),
		}
	}
}

struct CacheStore<K: Eq + Hash + Clone, V: Clone> {
	capacity: usize,
	trim:     usize,
	order:    VecDeque<K>,
	map:      HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V: Clone> BoundedCache<K, V> {
	pub fn new(capacity: usize, trim: usize) -> BoundedCache<K, V> {
		BoundedCache {
			store: Arc::new(Mutex::new(CacheStore {
				capacity,
				trim,
				order: VecDeque::new(),
				map: HashMap::new(),
			})),
		}
	}

	pub fn get(&self, key: &K) -> Option<V> {
		let store = self.store.lock().unwrap();
		store.map.get(key).cloned()
	}

	pub fn insert(&self, key: K, val: V) {
		let mut store = self.store.lock().unwrap();
		if !store.map.contains_key(&key) {
			store.order.push_back(key.clone());
		}
		store.map.insert(key, val);

		if store.order.len() > store.capacity {
			let drop_n = store.trim.min(store.order.len());
			for _ in 0..drop_n {
				if let Some(old_key) = store.order.pop_front() {
					store.map.remove(&old_key);
				}
			}
		}
	}

	pub fn len(&self) -> usize {
		self.store.lock().unwrap().map.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_get() {
		let cache: BoundedCache<&str, i32> = BoundedCache::new(10, 2);
		cache.insert("a", 1);
		cache.insert("b", 2);
		assert_eq!(cache.get(&"a"), Some(1));
		assert_eq!(cache.get(&"b"), Some(2));
		assert_eq!(cache.get(&"c"), None);
	}

	#[test]
	fn test_trim_drops_oldest() {
		let cache: BoundedCache<i32, i32> = BoundedCache::new(4, 2);
		for i in 0..4 {
			cache.insert(i, i);
		}
		assert_eq!(cache.len(), 4);

		// Exceeding capacity triggers a batch trim of the oldest entries.
		cache.insert(4, 4);
		assert_eq!(cache.len(), 3);
		assert_eq!(cache.get(&0), None);
		assert_eq!(cache.get(&1), None);
		assert_eq!(cache.get(&2), Some(2));
		assert_eq!(cache.get(&4), Some(4));
	}
}

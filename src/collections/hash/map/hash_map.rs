use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::Index;
use std::{iter, mem};

use super::{Bucket, HashMapCursor, HashNode, HashRef, IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};
use crate::collections::contiguous::Vector;

const INITIAL_BUCKETS: usize = 16;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved by separate chaining: every bucket holds a singly linked list of the
/// entries whose hash selects it. The bucket count doubles once the map holds more than 3/4 as many
/// entries as it has buckets.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n + b)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `begins/ends` | `O(b)` |
///
/// \* Entries sharing a bucket are searched linearly. `insert` takes `O(n + b)` when it has to
/// grow the buckets.
///
/// # Examples
/// ```
/// # use original::collections::hash::HashMap;
/// let mut map: HashMap<_, _> = HashMap::new();
/// assert_eq!(map.insert("one", 1), None);
/// assert_eq!(map.insert("one", 10), Some(1));
/// assert_eq!(map["one"], 10);
/// assert_eq!(map.remove("one"), Some(10));
/// assert!(map.is_empty());
/// ```
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vector<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with the default number of buckets and the default value for `B`.
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_buckets_and_hasher(INITIAL_BUCKETS, B::default())
    }

    /// Creates a new HashMap with `count` buckets. At least one bucket is always allocated.
    pub fn with_buckets(count: usize) -> HashMap<K, V, B> {
        HashMap::with_buckets_and_hasher(count, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with the default number of buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap::with_buckets_and_hasher(INITIAL_BUCKETS, hasher)
    }

    /// Creates a new HashMap with `count` buckets and the provided `hasher`. At least one bucket is
    /// always allocated.
    pub fn with_buckets_and_hasher(count: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            buckets: empty_buckets(count.max(1)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub const fn buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, growing if required. If the key
    /// was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.find_node(&key) {
            return Some(mem::replace(existing.value_mut(), value));
        }

        let index = self.bucket_index(&key);
        let node = HashRef::from_node(HashNode {
            key,
            value,
            next: None,
        });

        // Entries are appended, so a bucket keeps its insertion order.
        let bucket = self.buckets[index];
        match bucket {
            None => self.buckets[index] = Some(node),
            Some(head) => {
                let mut tail = head;
                while let Some(next) = tail.next() {
                    tail = *next;
                }
                *tail.next_mut() = Some(node);
            },
        }
        self.len += 1;

        if self.should_grow() {
            self.rehash(self.buckets() * GROWTH_FACTOR);
        }
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_node(key).map(|node| (node.key(), node.value()))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_node(key).map(|node| node.value())
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_node(key).map(|node| node.value_mut())
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);

        let mut prev: Option<HashRef<K, V>> = None;
        let mut curr = self.buckets[index];
        while let Some(node) = curr {
            if node.key().borrow() == key {
                match prev {
                    Some(prev) => *prev.next_mut() = *node.next(),
                    None => self.buckets[index] = *node.next(),
                }
                self.len -= 1;

                let HashNode { key, value, .. } = node.take_node();
                return Some((key, value));
            }
            prev = curr;
            curr = *node.next();
        }
        None
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes every entry, keeping the current number of buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut curr = bucket.take();
            while let Some(node) = curr {
                curr = *node.next();
                drop(node.take_node());
            }
        }
        self.len = 0;
    }

    /// Returns a cursor at the first entry, skipping empty buckets. The cursor is invalid if the
    /// HashMap is empty.
    pub fn begins(&mut self) -> HashMapCursor<'_, K, V> {
        HashMapCursor::first(&mut self.buckets)
    }

    /// Returns a cursor at the last entry, skipping empty buckets. The cursor is invalid if the
    /// HashMap is empty.
    pub fn ends(&mut self) -> HashMapCursor<'_, K, V> {
        HashMapCursor::last(&mut self.buckets)
    }

    /// Returns an iterator over all key-value pairs in the HashMap, in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V, B> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V, B> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Determines whether the HashMap's length exceeds the load factor.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.buckets.len() * LOAD_FACTOR_NUMERATOR
    }

    /// Relinks every node into a fresh set of `count` buckets. Nodes aren't reallocated.
    pub(crate) fn rehash(&mut self, count: usize) {
        tracing::trace!(from = self.buckets(), to = count.max(1), len = self.len(), "rehashing hash map");
        let old = mem::replace(&mut self.buckets, empty_buckets(count.max(1)));

        for mut curr in old {
            while let Some(node) = curr {
                curr = *node.next();

                let index = self.bucket_index(node.key());
                *node.next_mut() = self.buckets[index];
                self.buckets[index] = Some(node);
            }
        }
    }

    /// Selects the bucket for the provided `hashable`.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        // The bucket count is never zero.
        (self.hasher.hash_one(hashable) % self.buckets.len() as u64) as usize
    }

    pub(crate) fn find_node<Q>(&self, key: &Q) -> Option<HashRef<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut curr = self.buckets[self.bucket_index(key)];
        while let Some(node) = curr {
            if node.key().borrow() == key {
                return Some(node);
            }
            curr = *node.next();
        }
        None
    }
}

fn empty_buckets<K, V>(count: usize) -> Vector<Bucket<K, V>> {
    iter::repeat_with(|| None).take(count).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Drop for HashMap<K, V, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        let mut map = HashMap::with_buckets_and_hasher(self.buckets(), self.hasher.clone());
        map.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        map
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K, Q, V, B> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// # Panics
    /// Panics if the key isn't present in the HashMap.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("Key not present in HashMap!"),
        }
    }
}

// SAFETY: A HashMap uniquely owns its nodes.
unsafe impl<K: Hash + Eq + Send, V: Send, B: BuildHasher + Send> Send for HashMap<K, V, B> {}
// SAFETY: Shared references only allow reads.
unsafe impl<K: Hash + Eq + Sync, V: Sync, B: BuildHasher + Sync> Sync for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("entries", &DebugEntries(self))
            .field("len", &self.len)
            .field("buckets", &self.buckets())
            .field("hasher", &self.hasher)
            .finish()
    }
}

struct DebugEntries<'a, K: Hash + Eq, V, B: BuildHasher>(&'a HashMap<K, V, B>);

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for DebugEntries<'_, K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

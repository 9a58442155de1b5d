use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice::Iter as BucketIter;

use super::{Bucket, HashMap, HashRef};

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            map: self,
            bucket: 0,
        }
    }
}

/// An owning iterator over the entries of a [`HashMap`], in bucket order.
pub struct IntoIter<K: Hash + Eq, V, B: BuildHasher> {
    // Entries are unlinked from the front of each bucket in turn, anything left over is freed by the
    // map itself.
    pub(crate) map: HashMap<K, V, B>,
    pub(crate) bucket: usize,
}

impl<K: Hash + Eq, V, B: BuildHasher> Iterator for IntoIter<K, V, B> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.bucket < self.map.buckets() {
            let bucket = self.map.buckets[self.bucket];
            if let Some(head) = bucket {
                self.map.buckets[self.bucket] = *head.next();
                self.map.len -= 1;

                let node = head.take_node();
                return Some((node.key, node.value));
            }
            self.bucket += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> FusedIterator for IntoIter<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher> ExactSizeIterator for IntoIter<K, V, B> {
    fn len(&self) -> usize {
        self.map.len()
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut HashMap<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            inner: RawIter::new(&self.buckets, self.len),
            _phantom: PhantomData,
        }
    }
}

/// Walks the nodes of every bucket in order, without producing references itself.
pub(crate) struct RawIter<'a, K, V> {
    buckets: BucketIter<'a, Bucket<K, V>>,
    node: Bucket<K, V>,
    len: usize,
}

impl<'a, K, V> RawIter<'a, K, V> {
    fn new(buckets: &'a [Bucket<K, V>], len: usize) -> RawIter<'a, K, V> {
        RawIter {
            buckets: buckets.iter(),
            node: None,
            len,
        }
    }
}

impl<'a, K, V> Iterator for RawIter<'a, K, V> {
    type Item = HashRef<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = *node.next();
                self.len -= 1;
                return Some(node);
            }
            self.node = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

/// A borrowing iterator over the entries of a [`HashMap`], with mutable access to the values.
pub struct IterMut<'a, K, V> {
    pub(crate) inner: RawIter<'a, K, V>,
    pub(crate) _phantom: PhantomData<&'a mut V>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (node.key(), node.value_mut()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: RawIter::new(&self.buckets, self.len),
        }
    }
}

/// A borrowing iterator over the entries of a [`HashMap`].
pub struct Iter<'a, K, V> {
    pub(crate) inner: RawIter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

pub struct IntoKeys<K: Hash + Eq, V, B: BuildHasher>(pub(crate) IntoIter<K, V, B>);

impl<K: Hash + Eq, V, B: BuildHasher> Iterator for IntoKeys<K, V, B> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct IntoValues<K: Hash + Eq, V, B: BuildHasher>(pub(crate) IntoIter<K, V, B>);

impl<K: Hash + Eq, V, B: BuildHasher> Iterator for IntoValues<K, V, B> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

use fdlist::{Fd, FdList};

use crate::map::FdMap;

/// Iterator over every `(fd, value)` pair in an [`FdMap`].
///
/// Pairs come out bucket by bucket; within a bucket, fds are ascending.
pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, FdList<V>>,
    current: Option<fdlist::Iter<'a, V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(map: &'a FdMap<V>) -> Self {
        Self {
            buckets: map.buckets().iter(),
            current: None,
            remaining: map.len(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Fd, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = &mut self.current {
                if let Some(pair) = chain.next() {
                    self.remaining -= 1;
                    return Some(pair);
                }
            }
            match self.buckets.next() {
                Some(bucket) => self.current = Some(bucket.iter()),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, V> IntoIterator for &'a FdMap<V> {
    type Item = (Fd, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

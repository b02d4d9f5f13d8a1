use fdlist::{Fd, FdList, Mode};

use crate::iter::Iter;

/// Bucket count used when the caller does not request a positive one.
pub const DEFAULT_BUCKETS: usize = 10;

/// A fixed-bucket hash table mapping open file descriptors to values.
///
/// Open descriptors are small, non-negative, and handed out roughly
/// sequentially, so routing by `fd % bucket_count` spreads live descriptors
/// close to uniformly across a modest fixed table. Each bucket is an
/// [`FdList`] in [`Mode::Ordered`], which keeps negative lookups cheap.
///
/// The bucket count never changes after construction; oversubscription
/// degrades to longer chains rather than triggering a rehash. Lookups are
/// the fast path, insertions and removals matter less.
///
/// Every keyed operation requires `fd >= 0`; violating that is a programmer
/// error, checked only in debug builds.
#[derive(Debug)]
pub struct FdMap<V> {
    buckets: Vec<FdList<V>>,
    items: usize,
}

impl<V> FdMap<V> {
    /// Creates a map with the default bucket count.
    pub fn new() -> Self {
        Self::with_buckets(0)
    }

    /// Creates a map with `requested` buckets, or the default count when
    /// `requested` is not positive.
    pub fn with_buckets(requested: i32) -> Self {
        let count = if requested > 0 {
            requested as usize
        } else {
            DEFAULT_BUCKETS
        };
        let buckets = (0..count).map(|_| FdList::new(Mode::Ordered)).collect();
        Self { buckets, items: 0 }
    }

    /// Returns the number of entries in the map, duplicates included.
    pub fn len(&self) -> usize {
        self.items
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts a mapping for `fd`, keeping any existing entries with the
    /// same fd. Every insert counts toward [`len`](Self::len).
    pub fn insert(&mut self, fd: Fd, value: V) {
        let index = self.bucket_index(fd);
        self.buckets[index].insert(fd, value);
        self.items += 1;
    }

    /// Removes the first entry keyed `fd` and returns its value.
    pub fn remove(&mut self, fd: Fd) -> Option<V> {
        let index = self.bucket_index(fd);
        let removed = self.buckets[index].remove(fd);
        if removed.is_some() {
            self.items -= 1;
        }
        removed
    }

    /// Returns a reference to the value of the first entry keyed `fd`.
    pub fn get(&self, fd: Fd) -> Option<&V> {
        let index = self.bucket_index(fd);
        self.buckets[index].get(fd)
    }

    /// Returns a mutable reference to the value of the first entry keyed `fd`.
    pub fn get_mut(&mut self, fd: Fd) -> Option<&mut V> {
        let index = self.bucket_index(fd);
        self.buckets[index].get_mut(fd)
    }

    /// Returns true if at least one entry is keyed `fd`.
    pub fn contains(&self, fd: Fd) -> bool {
        let index = self.bucket_index(fd);
        self.buckets[index].contains(fd)
    }

    /// Drops every entry; the bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.items = 0;
    }

    /// Iterates over all `(fd, value)` pairs, bucket by bucket; within a
    /// bucket, fds come out in ascending order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    pub(crate) fn buckets(&self) -> &[FdList<V>] {
        &self.buckets
    }

    fn bucket_index(&self, fd: Fd) -> usize {
        debug_assert!(fd >= 0, "fd must be non-negative, got {fd}");
        fd as usize % self.buckets.len()
    }
}

impl<V> Default for FdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

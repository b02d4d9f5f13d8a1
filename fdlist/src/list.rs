use slab::Slab;

use crate::iter::Iter;

/// File descriptor key. Used only for identity and ordering; the list never
/// interprets it beyond comparison.
pub type Fd = i32;

/// Sentinel slab key marking the end of a chain.
pub(crate) const NIL: usize = usize::MAX;

/// Traversal policy of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Insertion order is preserved: push at tail, pop from head.
    Fifo,
    /// Keys are kept non-decreasing from head to tail, so a miss can be
    /// reported as soon as a key larger than the probe is seen.
    Ordered,
}

#[derive(Debug)]
struct Node<V> {
    fd: Fd,
    value: V,
    prev: usize,
    next: usize,
}

/// A doubly linked fd->value chain with slab-backed node storage.
///
/// Nodes are addressed by stable slab keys rather than pointers, so unlinking
/// is plain index surgery. Duplicate fds are permitted; lookups and removals
/// act on the first match from the head.
///
/// In [`Mode::Fifo`] the list behaves as a queue; in [`Mode::Ordered`] it
/// behaves as a sorted chain where `pop_front` yields the smallest key.
#[derive(Debug)]
pub struct FdList<V> {
    mode: Mode,
    nodes: Slab<Node<V>>,
    head: usize,
    tail: usize,
}

impl<V> FdList<V> {
    /// Creates an empty list with the given traversal policy.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            nodes: Slab::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Creates an empty list with node storage for at least `capacity`
    /// entries preallocated.
    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Self {
            mode,
            nodes: Slab::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    /// Returns the traversal policy this list was created with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list contains no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a mapping for `fd`. Duplicate fds are allowed.
    ///
    /// Fifo lists append at the tail in O(1). Ordered lists scan from the
    /// head to the first node whose fd is greater than or equal to the new
    /// one and insert immediately before it, keeping keys non-decreasing;
    /// a new duplicate therefore lands before existing equals.
    pub fn insert(&mut self, fd: Fd, value: V) {
        let key = self.nodes.insert(Node {
            fd,
            value,
            prev: NIL,
            next: NIL,
        });
        let at = match self.mode {
            Mode::Fifo => NIL,
            Mode::Ordered => self.lower_bound(fd),
        };
        self.link_before(key, at);
    }

    /// Returns a reference to the value of the first entry keyed `fd`.
    pub fn get(&self, fd: Fd) -> Option<&V> {
        let key = self.find_key(fd);
        if key == NIL {
            return None;
        }
        Some(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the value of the first entry keyed `fd`.
    pub fn get_mut(&mut self, fd: Fd) -> Option<&mut V> {
        let key = self.find_key(fd);
        if key == NIL {
            return None;
        }
        Some(&mut self.nodes[key].value)
    }

    /// Returns true if at least one entry is keyed `fd`.
    pub fn contains(&self, fd: Fd) -> bool {
        self.find_key(fd) != NIL
    }

    /// Removes the first entry keyed `fd` and returns its value.
    ///
    /// At most one entry is removed per call. Uses the same search strategy
    /// as [`get`](Self::get), including the Ordered early exit.
    pub fn remove(&mut self, fd: Fd) -> Option<V> {
        let key = self.find_key(fd);
        if key == NIL {
            return None;
        }
        self.unlink(key);
        Some(self.nodes.remove(key).value)
    }

    /// Removes and returns the head entry: queue order for Fifo lists, the
    /// smallest key for Ordered lists.
    pub fn pop_front(&mut self) -> Option<(Fd, V)> {
        if self.head == NIL {
            return None;
        }
        let key = self.head;
        self.unlink(key);
        let node = self.nodes.remove(key);
        Some((node.fd, node.value))
    }

    /// Returns the head entry without removing it.
    pub fn peek_front(&self) -> Option<(Fd, &V)> {
        if self.head == NIL {
            return None;
        }
        let node = &self.nodes[self.head];
        Some((node.fd, &node.value))
    }

    /// Drops every entry, keeping the allocated node storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    /// Iterates over `(fd, value)` pairs from head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    pub(crate) fn head_key(&self) -> usize {
        self.head
    }

    pub(crate) fn entry_at(&self, key: usize) -> (Fd, &V, usize) {
        let node = &self.nodes[key];
        (node.fd, &node.value, node.next)
    }

    /// First node whose fd is >= the probe, or NIL. Ordered lists only.
    fn lower_bound(&self, fd: Fd) -> usize {
        let mut cur = self.head;
        while cur != NIL && self.nodes[cur].fd < fd {
            cur = self.nodes[cur].next;
        }
        cur
    }

    /// Slab key of the first entry keyed `fd`, or NIL.
    fn find_key(&self, fd: Fd) -> usize {
        let mut cur = self.head;
        while cur != NIL {
            let node = &self.nodes[cur];
            if node.fd == fd {
                return cur;
            }
            if self.mode == Mode::Ordered && node.fd > fd {
                return NIL;
            }
            cur = node.next;
        }
        NIL
    }

    /// Links an allocated, unlinked node before `at`; `at == NIL` appends at
    /// the tail.
    fn link_before(&mut self, key: usize, at: usize) {
        if at == NIL {
            if self.tail == NIL {
                debug_assert!(self.head == NIL);
                self.head = key;
                self.tail = key;
            } else {
                self.nodes[key].prev = self.tail;
                self.nodes[self.tail].next = key;
                self.tail = key;
            }
            return;
        }

        let prev = self.nodes[at].prev;
        self.nodes[key].next = at;
        self.nodes[key].prev = prev;
        self.nodes[at].prev = key;
        if prev == NIL {
            debug_assert!(self.head == at);
            self.head = key;
        } else {
            self.nodes[prev].next = key;
        }
    }

    /// Detaches a node from the chain, re-patching head/tail as needed. The
    /// slab slot itself is untouched.
    fn unlink(&mut self, key: usize) {
        let (prev, next) = {
            let node = &self.nodes[key];
            (node.prev, node.next)
        };

        if prev == NIL {
            debug_assert!(self.head == key);
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            debug_assert!(self.tail == key);
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[key].prev = NIL;
        self.nodes[key].next = NIL;
    }
}

use crate::list::{Fd, FdList, NIL};

/// Iterator over the `(fd, value)` pairs of an [`FdList`], head to tail.
pub struct Iter<'a, V> {
    list: &'a FdList<V>,
    cursor: usize,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(list: &'a FdList<V>) -> Self {
        Self {
            list,
            cursor: list.head_key(),
            remaining: list.len(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Fd, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let (fd, value, next) = self.list.entry_at(self.cursor);
        self.cursor = next;
        self.remaining -= 1;
        Some((fd, value))
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

impl<'a, V> IntoIterator for &'a FdList<V> {
    type Item = (Fd, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

mod iter;
mod map;

pub use fdlist::{Fd, FdList, Mode};
pub use iter::Iter;
pub use map::{FdMap, DEFAULT_BUCKETS};

mod iter;
mod list;

pub use iter::Iter;
pub use list::{Fd, FdList, Mode};

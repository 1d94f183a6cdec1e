use serde::{Deserialize, Serialize};

/// Largest page a listing returns.
pub const MAX_PAGE_SIZE: usize = 100;

/// A `skip`/`take` window over an ordered listing.
///
/// `take` is capped at [`MAX_PAGE_SIZE`], and the empty window `(0, 0)` asks
/// for the default page of [`MAX_PAGE_SIZE`] records. Any other `take == 0`
/// yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: usize,
    pub take: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            take: MAX_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    pub fn normalized(self) -> Self {
        if self.take > MAX_PAGE_SIZE || (self.skip == 0 && self.take == 0) {
            Self {
                skip: self.skip,
                take: MAX_PAGE_SIZE,
            }
        } else {
            self
        }
    }

    /// Applies the normalized window to an already ordered sequence.
    pub fn apply<T>(self, items: impl Iterator<Item = T>) -> Vec<T> {
        let Self { skip, take } = self.normalized();
        items.skip(skip).take(take).collect()
    }
}

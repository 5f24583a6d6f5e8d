mod error;
mod requests;
mod state;
mod traits;
mod types;

pub use error::{CacheError, Result};
pub use requests::{ReadRequest, WriteRequest};
pub use state::{decode_pinned_state, merge_pinned_state, take_pinned_state, PINNED_STATE_KEY};
pub use traits::GraphCache;
pub use types::{CacheDiff, CacheObject, PinnedSnapshots, QuerySnapshot, Variables};

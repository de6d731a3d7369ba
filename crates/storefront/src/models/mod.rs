//! Per-visitor state models.
//!
//! Everything here is stored in the session and mutated by whole-object
//! replacement: read, transform, write back. Reads are best-effort; missing
//! or malformed session data falls back to the empty state.

pub mod cart;
pub mod compare;
pub mod order;
pub mod recently_viewed;
pub mod session;
pub mod wishlist;

pub use cart::{Cart, CartLine};
pub use compare::{CompareOutcome, ComparisonSet, MAX_COMPARE_PRODUCTS};
pub use order::{Order, OrderLine};
pub use recently_viewed::{MAX_RECENTLY_VIEWED, RecentlyViewed};
pub use wishlist::{Wishlist, WishlistOutcome};

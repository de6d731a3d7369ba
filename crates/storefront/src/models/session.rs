//! Session key constants.
//!
//! All per-visitor state lives under these keys. Values are plain JSON
//! (id lists or whole objects); there is no versioning or migration.

/// Session keys for visitor state.
pub mod keys {
    /// Key for the shopping basket.
    pub const CART: &str = "cart";

    /// Key for the wishlist product-id list.
    pub const WISHLIST: &str = "wishlist";

    /// Key for the comparison-set product-id list.
    pub const COMPARE: &str = "compare";

    /// Key for the recently-viewed product-id list.
    pub const RECENTLY_VIEWED: &str = "recently_viewed";

    /// Key for the serialized order list.
    pub const ORDERS: &str = "orders";

    /// Key for the chat assistant transcript.
    pub const CHAT_TRANSCRIPT: &str = "chat_transcript";

    /// Key for a pending direct-buy line (checkout bypassing the basket).
    pub const BUY_NOW: &str = "buy_now";
}

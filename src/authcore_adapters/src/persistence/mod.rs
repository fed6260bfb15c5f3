pub mod hashmap_refresh_token_store;
pub mod hashmap_user_store;

pub use hashmap_refresh_token_store::HashMapRefreshTokenStore;
pub use hashmap_user_store::HashMapUserStore;

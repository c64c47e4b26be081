mod analysis;
mod auth;
pub mod cache;
pub mod client;
pub mod types;
mod users;

pub use cache::{CacheTag, CacheTags};
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

pub mod client;
pub mod source;

pub use client::FeedLoader;
pub use source::FeedSource;

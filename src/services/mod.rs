pub mod providers;
pub mod ranking;
pub mod recommendations;
pub mod retry;
pub mod streams;

pub use providers::{MetadataProvider, TmdbProvider};
pub use ranking::RankingConfig;
pub use retry::RetryPolicy;

pub mod entry;
pub mod fetcher;
pub mod lifecycle;
pub mod manager;
pub mod offline;
pub mod router;
pub mod store;

pub use entry::{Method, Request, StoredResponse};
pub use fetcher::{FetchError, ResourceFetcher};
pub use lifecycle::{LifecycleError, LifecyclePhase, OperatorMessage};
pub use manager::{CacheConfig, CacheManager, InstallOutcome, ServeOutcome};
pub use router::{classify, RequestClass};
pub use store::{BucketStore, FsBucketStore, StoreError};

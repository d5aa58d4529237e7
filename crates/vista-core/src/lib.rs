//! Vista Core - Multi-provider stock-photo search engine.
//!
//! Vista queries one or more stock-photo APIs (Unsplash, Getty Images),
//! normalizes their heterogeneous responses into a single record shape,
//! merges and filters the results, and tracks per-topic pagination and
//! selection state for an interactive session.
//!
//! # Architecture
//!
//! ```text
//! Query → Session → Aggregator → Provider Adapters → normalized records
//!                      ↓
//!              Filter Engine → ResultPage → Selection
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use vista_core::{Config, SearchSession, Topic};
//!
//! #[tokio::main]
//! async fn main() -> vista_core::Result<()> {
//!     let config = Config::load()?;
//!     let mut session = SearchSession::from_config(&config)?;
//!
//!     session.set_query(Topic::City, "Paris");
//!     session.search(Topic::City, None).await?;
//!     for record in session.result_page(Topic::City).records {
//!         println!("{} by {}", record.id, record.attribution);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod provider;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient access
pub use aggregate::{AggregateResult, Aggregator, FetchOptions};
pub use config::Config;
pub use error::{ConfigError, Result, SearchError, VistaError};
pub use provider::{ImageProvider, ProviderFactory};
pub use session::{Phase, SearchSession};
pub use types::{ImageRecord, Orientation, ProviderKind, ResultPage, SearchBatch, Topic};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

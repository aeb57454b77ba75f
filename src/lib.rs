//! Rank numbers for search results: dense, competition, ordinal and fractional.
//!
//! Given the rank-source values of a result set, already sorted by the host,
//! this crate assigns every document a rank under one of six conventions. The
//! interesting part is the engine, a handful of pure functions that turn a
//! facet histogram (or the raw ordered hit list) into a rank map.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────────┐     ┌──────────────┐
//! │ strategy.rs  │────▶│  engine/facet.rs   │────▶│  RankMap     │
//! │ (wire keys)  │     │  engine/position.rs│     │ key → Rank   │
//! └──────────────┘     │  engine/iter.rs    │     └──────────────┘
//!                      └────────────────────┘            │
//!        ▲                       │                       ▼
//!        │                       ▼                ┌──────────────┐
//! ┌──────────────┐     ┌────────────────────┐     │ host/        │
//! │ host/params  │     │   contracts.rs     │     │ component.rs │
//! │ (sn.rank.*)  │     │ (debug assertions) │     │ (rank field) │
//! └──────────────┘     └────────────────────┘     └──────────────┘
//! ```
//!
//! # Strategies
//!
//! | Module           | Entry point                     | Input              |
//! |------------------|---------------------------------|--------------------|
//! | `engine::facet`  | `compute_facet_based_rank`      | tie-group histogram|
//! | `engine::position`| `compute_ordinal_based_rank`   | page documents     |
//! | `engine::position`| `compute_legacy_dense_rank`    | ordered hit list   |
//!
//! # Usage
//!
//! ```
//! use facetrank::{compute_facet_based_rank, Pair, Rank, RankStrategy};
//!
//! let histogram = vec![Pair::new("100", 1), Pair::new("90", 2), Pair::new("80", 1)];
//! let strategy = RankStrategy::by_key("fractional").unwrap();
//! let ranks = compute_facet_based_rank(&histogram, strategy).unwrap();
//!
//! assert_eq!(ranks["90"].as_f64(), 2.5);
//! assert_eq!(ranks["80"], Rank::whole(4));
//! ```

// Module declarations
pub mod contracts;
pub mod engine;
mod error;
pub mod host;
mod strategy;
pub mod testing;
mod types;

// Re-exports for public API
pub use engine::{
    compute_dense_rank, compute_facet_based_rank, compute_fractional_rank,
    compute_legacy_dense_rank, compute_modified_rank, compute_ordinal_based_rank,
    compute_standard_rank, DenseRankExt, DenseRanks,
};
pub use error::{RankError, Result};
pub use host::{HostError, RankComponent, RankParams, RankRequest};
pub use strategy::RankStrategy;
pub use types::{HistogramEntry, HitEntry, Pair, Rank, RankMap};

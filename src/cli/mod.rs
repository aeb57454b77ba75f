// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the facetrank command-line interface.
//!
//! Two subcommands: `rank` runs the rank component over a JSON request and
//! prints the annotated documents, and `strategies` lists the wire keys the
//! component accepts.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "facetrank",
    about = "Dense, competition, ordinal and fractional ranks for search results",
    version
)]
pub struct Cli {
    /// Log engine decisions to stderr (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the documents of a JSON request
    ///
    /// The request carries `params` (name → value), `docs`, and either
    /// `facets` ([value, count] pairs) or `hits` ([identity, score] pairs)
    /// depending on the strategy.
    Rank {
        /// Request file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Strategy wire key, overriding `sn.rank.strategy` in the request
        #[arg(short, long)]
        strategy: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the supported rank strategies
    Strategies {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

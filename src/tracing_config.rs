//! Tracing configuration for debugging name derivations.
//!
//! Supports three output formats controlled by `NAMER_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every derivation branch, as a tree
//! NAMER_LOG=trace NAMER_LOG_FORMAT=tree cargo test -p namer-infer
//!
//! # Only final names
//! NAMER_LOG="namer_infer=debug" cargo test
//! ```
//!
//! The subscriber is only initialised when `NAMER_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead for hosts that install their own.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read from the `NAMER_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("NAMER_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `NAMER_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("NAMER_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `NAMER_LOG` nor `RUST_LOG` is set. Returns
/// `false` when a global subscriber was already installed.
///
/// All output goes to stderr.
pub fn init_tracing() -> bool {
    let has_namer_log = std::env::var("NAMER_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_namer_log && !has_rust_log {
        return true;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

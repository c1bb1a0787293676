// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Flags in [`crate::cli`] fall back to these same names through clap's
//! `env` support; everything else reads them here.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `SUGGEST_CHECK_LOG` — Write tracing output to this file instead of stderr.
pub fn log_file() -> Option<PathBuf> {
    std::env::var(names::SUGGEST_CHECK_LOG)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

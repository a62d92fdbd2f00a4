// Copyright 2026 the Bitfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `bitfont`.
//!
//! - The `util` module holds the shared sample descriptors and font
//!   builders the test modules need.
//! - We do not use the default Rust test harness; this `mod.rs` is the
//!   entry point for all other tests, which makes it easy to share
//!   utilities between them.
//! - Tests are grouped by topic: descriptor parsing in `parse.rs`, metric
//!   mutation in `metrics.rs`, run building in `runs.rs`, wrap-index
//!   resolution in `wrap.rs` and texture-coordinate mapping in `atlas.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(
    clippy::cast_possible_truncation,
    reason = "not critical for testing"
)]
#![allow(
    clippy::field_reassign_with_default,
    reason = "glyphs are filled in field by field from their default"
)]

mod metrics;
mod util;

//! # panel-split
//!
//! Turns a wide panorama into a multi-image carousel post for platforms that
//! only show fixed-aspect single images. Each run produces:
//!
//! - **Slices**: equal-width, full-height vertical panels. A ~12:5 source
//!   gives three 4:5 panels, a ~8:5 source gives two.
//! - **Overview**: the whole uncropped source on a white 4:5 canvas, so the
//!   reassembled image can be previewed as its own post.
//!
//! # Pipeline
//!
//! ```text
//! classify ratio → compute geometry → crop / paste pixels → write files
//! ```
//!
//! Any other aspect ratio is rejected up front; there is no fallback layout.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`split`] | Runs one source through slicing and overview composition |
//! | [`imaging`] | Layout classification, geometry, and the codec backend |
//! | [`naming`] | `<stem>_slice_N.<ext>` / `<stem>_overview.<ext>` output names |
//! | [`config`] | Optional `panel-split.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Geometry Is Pure
//!
//! All layout math lives in plain functions over integers
//! ([`imaging::calculate_slice_columns`], [`imaging::calculate_overview_geometry`]).
//! Pixel work goes through the [`imaging::ImageBackend`] trait, so the whole
//! pipeline is exercised in unit tests against a recording mock.
//!
//! ## Output Format Follows Input
//!
//! Slices and the overview are encoded with the source's own extension.
//! There is no format conversion; extensions the backend cannot both read and
//! write are refused before anything is written.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod split;

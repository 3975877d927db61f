#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Line-oriented parser for registry owner-list tables.
//!
//! Certified copies of the land registry render the owner list as a table
//! drawn with Unicode box-drawing glyphs. After text extraction, a page is
//! just a sequence of lines: rule lines between rows, a header row, and
//! data rows where a vertical divider separates the address column from
//! the name column. An owner's address frequently wraps over several rows
//! whose name column is blank, so rows cannot be parsed independently.
//!
//! Parsing is split into three layers:
//! - [`line`] classifies a raw line and cleans its cell segments,
//! - [`location`] recovers the jurisdiction announced in the page header,
//! - [`assembler`] is the state machine that decides, per data line,
//!   whether it opens a new owner record or continues the current address.
//!
//! [`document::parse_document`] drives all three over the ordered pages of
//! one document. The parser never fails: malformed lines degrade to no-ops
//! and are surfaced through [`assembler::ParseStats`].

pub mod assembler;
pub mod document;
pub mod line;
pub mod location;

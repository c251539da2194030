//! Tagline - build-time translation of tagged template literals
//!
//! Tagline finds tagged templates such as `` t`Hello ${name}` `` or
//! `` t("button")`Save` `` in JavaScript and TypeScript sources, replaces each
//! with the translated plain template literal taken from an input catalog, and
//! merges every text it saw into an output catalog for translators.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation engine (key resolution, lookup, extraction, merge)
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;

//! `stanza_core` parses profile-style, line-oriented configuration files and
//! merges any number of them into one queryable model.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source text (+ kind tag)
//!   → Line classifier (blank / comment / header / property / continuation)
//!   → Parser (state machine, produces ordered sections per source)
//!   → Aggregator (ordered merge across sources, later source wins per key)
//!   → ProfileSet (read-only: profiles by name, other sections by kind+name)
//! ```
//!
//! ## Format
//!
//! ```ini
//! # configuration file
//! [profile default]
//! region = eu-west-1
//!
//! [profile analytics]
//! region = us-east-2
//! endpoint =
//!  url = http://localhost:9000
//!
//! [session ci]
//! token_url = https://tokens.example.com
//! ```
//!
//! Property values may be empty, may embed `=` signs, and may continue onto
//! indented follow-up lines. An empty-valued property followed by indented
//! `key = value` lines additionally exposes each as a synthetic
//! `parent.key` property (`endpoint.url` above).
//!
//! ## Sources and Precedence
//!
//! Each source is tagged [`SourceKind::Configuration`] or
//! [`SourceKind::Credentials`]; the tag only changes how section headers are
//! interpreted. Aggregation merges sources in the given order, later sources
//! overriding earlier ones per property.
//!
//! ## Quick Start
//!
//! ```rust
//! use stanza_core::ProfileSet;
//! use stanza_core::SourceKind;
//!
//! let config = "[profile foo]\nregion = eu-west-1\n";
//! let credentials = "[foo]\naccess_key = abc123\n";
//!
//! let set = ProfileSet::from_texts([
//! 	(config, SourceKind::Configuration),
//! 	(credentials, SourceKind::Credentials),
//! ])
//! .unwrap();
//!
//! let foo = set.profile("foo").unwrap();
//! assert_eq!(foo.property("region"), Some("eu-west-1"));
//! assert_eq!(foo.property("access_key"), Some("abc123"));
//! ```

pub use aggregate::*;
pub use error::*;
pub use parser::*;
pub use section::*;

mod aggregate;
mod error;
pub(crate) mod line;
pub mod loader;
mod parser;
mod section;

#[cfg(test)]
mod __fixtures;

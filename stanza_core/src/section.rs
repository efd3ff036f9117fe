use std::collections::HashMap;

use serde::Serialize;
use serde::Serializer;

/// Check a profile, section, or property name against the allowed character
/// class. Names are restricted to ASCII letters, digits, and a small set of
/// punctuation so that newer file features can be skipped by older parsers
/// without ambiguity.
pub fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& name.chars().all(|c| {
			c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '/' | '%' | '@' | ':' | '+' | '-')
		})
}

/// The kind tag of a parsed section.
///
/// Profiles are the primary addressable unit of the merged model. Every other
/// header shape (e.g. `[session <name>]`) produces a [`SectionKind::Named`]
/// section, indexed separately by kind and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
	/// A profile: `[profile <name>]` in a configuration source, `[<name>]` in
	/// a credentials source, or the implicit `[default]` alias.
	Profile,
	/// Any other kinded grouping, tagged with its kind token.
	Named(String),
}

impl SectionKind {
	/// The kind token as written in a section header. Profiles use the fixed
	/// `profile` token.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Profile => "profile",
			Self::Named(kind) => kind,
		}
	}
}

impl Serialize for SectionKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl std::fmt::Display for SectionKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A named, flat mapping of configuration properties.
///
/// Sections are produced by the parser and are immutable once a
/// [`ParsedSource`](crate::ParsedSource) has been built. Property keys are
/// unique; within one source the last definition of a key wins. Values may be
/// empty and may contain embedded line breaks produced by continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
	kind: SectionKind,
	name: String,
	properties: HashMap<String, String>,
}

impl Section {
	pub(crate) fn new(kind: SectionKind, name: String, properties: HashMap<String, String>) -> Self {
		Self {
			kind,
			name,
			properties,
		}
	}

	pub fn kind(&self) -> &SectionKind {
		&self.kind
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Look up a single property value by exact key.
	pub fn property(&self, key: &str) -> Option<&str> {
		self.properties.get(key).map(String::as_str)
	}

	/// All properties of this section, keyed by property name.
	pub fn properties(&self) -> &HashMap<String, String> {
		&self.properties
	}

	/// Merge `other` into this section: existing keys are overwritten, new
	/// keys are added, nothing is removed.
	pub(crate) fn merge_from(&mut self, other: Section) {
		self.properties.extend(other.properties);
	}
}

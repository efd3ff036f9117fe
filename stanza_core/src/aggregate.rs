//! Multi-source aggregation.
//!
//! An ordered list of parsed sources is merged into one read-only
//! [`ProfileSet`]. Later sources take precedence over earlier ones on a
//! per-property basis; section-level records are never dropped by the merge,
//! only individual keys are overwritten.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::ParsedSource;
use crate::SourceKind;
use crate::StanzaResult;
use crate::parser::parse_source;
use crate::section::Section;
use crate::section::SectionKind;

/// The merged, immutable result of aggregating one or more sources.
///
/// Profiles are addressable by name; every non-profile section is indexed
/// separately by kind and name. A built set never changes and may be shared
/// freely across threads for concurrent reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileSet {
	profiles: HashMap<String, Section>,
	/// Non-profile sections: kind token → section name → section.
	sections: HashMap<String, HashMap<String, Section>>,
}

impl ProfileSet {
	/// Merge already-parsed sources, in precedence order: later sources win
	/// per property.
	pub fn aggregate<I>(sources: I) -> Self
	where
		I: IntoIterator<Item = ParsedSource>,
	{
		let mut set = Self::default();
		let mut source_count = 0usize;

		for source in sources {
			source_count += 1;
			for section in source.into_sections() {
				match section.kind().clone() {
					SectionKind::Profile => merge_section(&mut set.profiles, section),
					SectionKind::Named(kind) => {
						let by_name = set.sections.entry(kind).or_default();
						merge_section(by_name, section);
					}
				}
			}
		}

		debug!(
			sources = source_count,
			profiles = set.profiles.len(),
			"aggregated sources"
		);
		set
	}

	/// Parse an ordered list of `(text, kind)` pairs and aggregate them.
	/// Fails fast with the first structural violation in any source.
	pub fn from_texts<'a, I>(pairs: I) -> StanzaResult<Self>
	where
		I: IntoIterator<Item = (&'a str, SourceKind)>,
	{
		let mut sources = Vec::new();
		for (text, kind) in pairs {
			sources.push(parse_source(text, kind)?);
		}
		Ok(Self::aggregate(sources))
	}

	/// Build the set from the well-known default file locations. Files that
	/// do not exist contribute nothing; the credentials file takes precedence
	/// over the configuration file.
	pub fn from_default_files() -> StanzaResult<Self> {
		Ok(Self::aggregate(crate::loader::default_sources()?))
	}

	/// Look up a profile by exact name.
	pub fn profile(&self, name: &str) -> Option<&Section> {
		self.profiles.get(name)
	}

	/// Look up a non-profile section by kind token and exact name.
	pub fn section(&self, kind: &str, name: &str) -> Option<&Section> {
		self.sections.get(kind)?.get(name)
	}

	/// All merged profiles, keyed by name.
	pub fn profiles(&self) -> &HashMap<String, Section> {
		&self.profiles
	}

	pub fn profile_names(&self) -> impl Iterator<Item = &str> {
		self.profiles.keys().map(String::as_str)
	}

	pub fn profile_count(&self) -> usize {
		self.profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty() && self.sections.is_empty()
	}
}

/// Merge one section into a name-keyed map: existing keys of an existing
/// record are overwritten, new keys added, nothing removed.
fn merge_section(into: &mut HashMap<String, Section>, section: Section) {
	match into.get_mut(section.name()) {
		Some(existing) => existing.merge_from(section),
		None => {
			into.insert(section.name().to_string(), section);
		}
	}
}

/// Builder that collects sources in precedence order and aggregates them in
/// one step. Text entries are parsed at [`build`](Aggregator::build) time, so
/// a structural violation in any entry fails the whole construction.
#[derive(Debug, Default)]
pub struct Aggregator {
	entries: Vec<AggregatorEntry>,
}

#[derive(Debug)]
enum AggregatorEntry {
	Parsed(ParsedSource),
	Text { text: String, kind: SourceKind },
}

impl Aggregator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an already-parsed source. Later entries override earlier ones.
	#[must_use]
	pub fn add_source(mut self, source: ParsedSource) -> Self {
		self.entries.push(AggregatorEntry::Parsed(source));
		self
	}

	/// Append raw text to be parsed with the given kind at build time.
	#[must_use]
	pub fn add_text(mut self, text: impl Into<String>, kind: SourceKind) -> Self {
		self.entries.push(AggregatorEntry::Text {
			text: text.into(),
			kind,
		});
		self
	}

	pub fn build(self) -> StanzaResult<ProfileSet> {
		let mut sources = Vec::with_capacity(self.entries.len());
		for entry in self.entries {
			sources.push(match entry {
				AggregatorEntry::Parsed(source) => source,
				AggregatorEntry::Text { text, kind } => parse_source(&text, kind)?,
			});
		}
		Ok(ProfileSet::aggregate(sources))
	}
}

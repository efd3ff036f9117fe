use std::collections::HashMap;

use crate::ProfileSet;
use crate::Section;
use crate::SectionKind;
use crate::SourceKind;
use crate::StanzaResult;

/// Build a set from one configuration source.
pub(crate) fn config_set(text: &str) -> StanzaResult<ProfileSet> {
	ProfileSet::from_texts([(text, SourceKind::Configuration)])
}

/// Build a set from one credentials source.
pub(crate) fn credentials_set(text: &str) -> StanzaResult<ProfileSet> {
	ProfileSet::from_texts([(text, SourceKind::Credentials)])
}

/// Build a set from a configuration source followed by a credentials source,
/// so the credentials source takes precedence.
pub(crate) fn aggregate_set(config: &str, credentials: &str) -> StanzaResult<ProfileSet> {
	ProfileSet::from_texts([
		(config, SourceKind::Configuration),
		(credentials, SourceKind::Credentials),
	])
}

/// Expected-value constructor for a profile section.
pub(crate) fn profile(name: &str, properties: &[(&str, &str)]) -> Section {
	section(SectionKind::Profile, name, properties)
}

/// Expected-value constructor for an arbitrary section.
pub(crate) fn section(kind: SectionKind, name: &str, properties: &[(&str, &str)]) -> Section {
	let properties: HashMap<String, String> = properties
		.iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();
	Section::new(kind, name.to_string(), properties)
}

/// Expected-value constructor for a whole profile map.
pub(crate) fn profiles(sections: &[Section]) -> HashMap<String, Section> {
	sections
		.iter()
		.map(|section| (section.name().to_string(), section.clone()))
		.collect()
}

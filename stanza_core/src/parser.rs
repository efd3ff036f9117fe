//! Line-by-line parser for stanza files.
//!
//! The parser is a single-pass state machine over physical lines. It tracks
//! the section currently being filled and the most recently opened property
//! (which may still accept continuation lines), and produces an ordered
//! [`ParsedSource`] for one textual input. Structural violations abort the
//! parse with a line-numbered error; sections and properties with invalid
//! names are consumed but excluded from the result.

use std::collections::HashMap;

use tracing::debug;
use tracing::warn;

use crate::StanzaError;
use crate::StanzaResult;
use crate::line;
use crate::line::LineClass;
use crate::section::Section;
use crate::section::SectionKind;
use crate::section::is_valid_name;

/// How section headers of a source are interpreted.
///
/// The grammar is identical for both kinds; only header interpretation
/// differs. A configuration source requires the `profile ` prefix (or the
/// bare `default` alias) for profile headers and recognizes `<kind> <name>`
/// headers as non-profile sections. A credentials source treats every bare
/// `[name]` header as a profile named `name` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	Configuration,
	Credentials,
}

/// The ordered sections parsed from one textual input.
///
/// Duplicate headers for the same section within one input collapse into a
/// single record (later property definitions win). Instances are immutable
/// once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
	kind: SourceKind,
	sections: Vec<Section>,
}

impl ParsedSource {
	pub fn kind(&self) -> SourceKind {
		self.kind
	}

	/// The addressable sections of this source, in file order of first
	/// appearance.
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	pub(crate) fn into_sections(self) -> Vec<Section> {
		self.sections
	}
}

/// Parse one source text into its ordered sections.
///
/// Accepts `\n` and `\r\n` line terminators. Fails fast with the first
/// structural violation; naming problems are skipped silently (surfaced only
/// as warnings).
pub fn parse_source(text: &str, kind: SourceKind) -> StanzaResult<ParsedSource> {
	let mut parser = Parser::new(kind);

	for raw_line in text.split('\n') {
		let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
		parser.feed(line)?;
	}

	Ok(parser.finish())
}

/// A section being accumulated during the parse, before sub-property
/// expansion and default-alias resolution.
struct RawSection {
	kind: SectionKind,
	name: String,
	/// True for a bare `[default]` header in a configuration source. Bare
	/// sections lose to `[profile default]` at source finalization.
	bare_default: bool,
	properties: HashMap<String, String>,
}

impl RawSection {
	/// Finalize into an immutable [`Section`], expanding sub-properties.
	///
	/// A property whose value starts with a line break was defined empty and
	/// filled entirely by continuation lines; each of those lines is also
	/// recorded as a synthetic `parent.key` property. Sub-keys that fail the
	/// name character check are left out (the parent keeps the literal text).
	fn finalize(self) -> Section {
		let mut properties = self.properties;
		let mut expanded = Vec::new();

		for (key, value) in &properties {
			let Some(body) = value.strip_prefix('\n') else {
				continue;
			};

			for sub_line in body.split('\n') {
				let Some((sub_key, sub_value)) = sub_line.split_once('=') else {
					continue;
				};
				let sub_key = sub_key.trim();
				if !is_valid_name(sub_key) {
					debug!("not expanding sub-property `{sub_key}` of `{key}`: invalid name");
					continue;
				}
				expanded.push((format!("{key}.{sub_key}"), sub_value.trim().to_string()));
			}
		}

		properties.extend(expanded);
		Section::new(self.kind, self.name, properties)
	}
}

/// Where property definitions currently land.
#[derive(Clone, Copy)]
enum SectionSlot {
	/// Index into `Parser::sections`.
	Live(usize),
	/// The current header was skipped; its body is consumed and dropped.
	Ignored,
}

/// The property that may still accept continuation lines.
enum OpenProperty {
	Tracked {
		section: usize,
		key: String,
		/// Set when the property was defined with an empty value: every
		/// continuation must then parse as `key = value` so it can later be
		/// expanded into a sub-property.
		validate_subs: bool,
	},
	/// The property (or its whole section) was skipped; continuations are
	/// consumed without effect.
	Ignored,
}

struct Parser {
	source_kind: SourceKind,
	line_number: usize,
	sections: Vec<RawSection>,
	current_section: Option<SectionSlot>,
	current_property: Option<OpenProperty>,
}

impl Parser {
	fn new(source_kind: SourceKind) -> Self {
		Self {
			source_kind,
			line_number: 0,
			sections: Vec::new(),
			current_section: None,
			current_property: None,
		}
	}

	fn feed(&mut self, line: &str) -> StanzaResult<()> {
		self.line_number += 1;

		match line::classify(line) {
			LineClass::Blank | LineClass::Comment => Ok(()),
			LineClass::SectionHeader => self.read_section_header(line),
			LineClass::Continuation => self.read_continuation(line),
			LineClass::Property => self.read_property(line),
		}
	}

	fn read_section_header(&mut self, raw: &str) -> StanzaResult<()> {
		let stripped = line::strip_header_comment(raw).trim();
		if !stripped.ends_with(']') {
			return Err(StanzaError::UnterminatedSectionHeader {
				line: self.line_number,
			});
		}

		// A new header always closes the open property, even when the header
		// itself ends up skipped.
		self.current_property = None;

		let header = stripped[1..stripped.len() - 1].trim();
		self.current_section = Some(self.open_section(header));
		Ok(())
	}

	/// Interpret a trimmed header body and return the slot new properties go
	/// to. Unaddressable and invalidly named sections are skipped, never
	/// errors.
	fn open_section(&mut self, header: &str) -> SectionSlot {
		let (kind, name, bare_default) = match self.source_kind {
			SourceKind::Credentials => (SectionKind::Profile, header.to_string(), false),
			SourceKind::Configuration => {
				if let Some(name) = profile_prefixed_name(header) {
					(SectionKind::Profile, name.to_string(), false)
				} else if header == "default" {
					(SectionKind::Profile, header.to_string(), true)
				} else if let Some((kind, name)) = header.split_once([' ', '\t']) {
					(SectionKind::Named(kind.to_string()), name.trim().to_string(), false)
				} else {
					warn!(
						"ignoring section `[{header}]` on line {}: expected a `profile ` prefix or \
						 `default`",
						self.line_number
					);
					return SectionSlot::Ignored;
				}
			}
		};

		if !is_valid_name(&name) {
			warn!(
				"ignoring section `[{header}]` on line {}: name contains invalid characters",
				self.line_number
			);
			return SectionSlot::Ignored;
		}

		SectionSlot::Live(self.section_index(kind, name, bare_default))
	}

	/// Find the existing record for this section, or append a new one.
	/// Duplicate headers in one source merge into the first occurrence.
	fn section_index(&mut self, kind: SectionKind, name: String, bare_default: bool) -> usize {
		let existing = self.sections.iter().position(|section| {
			section.kind == kind && section.name == name && section.bare_default == bare_default
		});

		match existing {
			Some(index) => index,
			None => {
				self.sections.push(RawSection {
					kind,
					name,
					bare_default,
					properties: HashMap::new(),
				});
				self.sections.len() - 1
			}
		}
	}

	fn read_property(&mut self, raw: &str) -> StanzaResult<()> {
		let index = match self.current_section {
			None => {
				return Err(StanzaError::PropertyOutsideSection {
					line: self.line_number,
				});
			}
			Some(SectionSlot::Ignored) => {
				// The enclosing section was skipped: consume the property and
				// any continuations that follow it.
				self.current_property = Some(OpenProperty::Ignored);
				return Ok(());
			}
			Some(SectionSlot::Live(index)) => index,
		};

		let stripped = line::strip_property_comment(raw);
		let (key, value) = parse_property_definition(stripped, self.line_number)?;

		if !is_valid_name(&key) {
			warn!(
				"ignoring property `{key}` on line {}: name contains invalid characters",
				self.line_number
			);
			self.current_property = Some(OpenProperty::Ignored);
			return Ok(());
		}

		let validate_subs = value.is_empty();
		self.sections[index].properties.insert(key.clone(), value);
		self.current_property = Some(OpenProperty::Tracked {
			section: index,
			key,
			validate_subs,
		});
		Ok(())
	}

	fn read_continuation(&mut self, raw: &str) -> StanzaResult<()> {
		let Some(open) = &self.current_property else {
			return Err(StanzaError::UnexpectedContinuation {
				line: self.line_number,
			});
		};

		let OpenProperty::Tracked {
			section,
			key,
			validate_subs,
		} = open
		else {
			return Ok(());
		};

		// Continuation text keeps comment markers verbatim; only surrounding
		// whitespace is stripped.
		let text = raw.trim();

		if *validate_subs {
			parse_property_definition(text, self.line_number)?;
		}

		if let Some(value) = self.sections[*section].properties.get_mut(key) {
			value.push('\n');
			value.push_str(text);
		}
		Ok(())
	}

	fn finish(self) -> ParsedSource {
		let has_prefixed_default = self.sections.iter().any(|section| {
			section.kind == SectionKind::Profile && section.name == "default" && !section.bare_default
		});

		if has_prefixed_default && self.sections.iter().any(|section| section.bare_default) {
			warn!("ignoring `[default]` sections: `[profile default]` takes precedence");
		}

		let sections = self
			.sections
			.into_iter()
			.filter(|section| !(section.bare_default && has_prefixed_default))
			.map(RawSection::finalize)
			.collect();

		ParsedSource {
			kind: self.source_kind,
			sections,
		}
	}
}

/// Extract the name after a `profile` prefix, which must be separated from
/// the name by at least one space or tab.
fn profile_prefixed_name(header: &str) -> Option<&str> {
	let rest = header.strip_prefix("profile")?;
	if rest.starts_with([' ', '\t']) {
		Some(rest.trim())
	} else {
		None
	}
}

/// Split a property line on its first `=`. Later `=` signs belong to the
/// value. The key must be non-empty after trimming; the value may be empty.
fn parse_property_definition(text: &str, line_number: usize) -> StanzaResult<(String, String)> {
	let Some((raw_key, raw_value)) = text.split_once('=') else {
		return Err(StanzaError::MissingEqualsSign { line: line_number });
	};

	let key = raw_key.trim();
	if key.is_empty() {
		return Err(StanzaError::UnnamedProperty { line: line_number });
	}

	Ok((key.to_string(), raw_value.trim().to_string()))
}

//! Line classification for the stanza grammar.
//!
//! Each physical line of a source is classified exactly once; the parser then
//! dispatches on the class without re-inspecting the raw text. Classification
//! looks only at the first significant character, so the same line can mean
//! different things depending on parser state (a `Continuation` line is an
//! error unless a property is open).

/// Classification of one physical line, terminator already removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineClass {
	/// Empty or whitespace-only.
	Blank,
	/// First character is `#` or `;`.
	Comment,
	/// First character is `[`.
	SectionHeader,
	/// First character is a space or tab.
	Continuation,
	/// Anything else: a property definition attempt.
	Property,
}

pub(crate) fn classify(line: &str) -> LineClass {
	if line.trim().is_empty() {
		LineClass::Blank
	} else if line.starts_with('#') || line.starts_with(';') {
		LineClass::Comment
	} else if line.starts_with('[') {
		LineClass::SectionHeader
	} else if line.starts_with(' ') || line.starts_with('\t') {
		LineClass::Continuation
	} else {
		LineClass::Property
	}
}

/// Strip a trailing comment from a section-header line. On header lines a
/// `#` or `;` starts a comment even when it directly touches the `]`.
pub(crate) fn strip_header_comment(line: &str) -> &str {
	match line.find(['#', ';']) {
		Some(index) => &line[..index],
		None => line,
	}
}

/// Strip a trailing comment from a property-definition line. Here a marker
/// only counts when preceded by a space or tab; an adjacent `#` or `;` is
/// part of the value. The asymmetry with [`strip_header_comment`] is part of
/// the format contract.
pub(crate) fn strip_property_comment(line: &str) -> &str {
	let bytes = line.as_bytes();
	for index in 1..bytes.len() {
		if matches!(bytes[index], b'#' | b';') && matches!(bytes[index - 1], b' ' | b'\t') {
			return &line[..index];
		}
	}
	line
}

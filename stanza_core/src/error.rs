use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum StanzaError {
	#[error(transparent)]
	#[diagnostic(code(stanza::io_error))]
	Io(#[from] std::io::Error),

	#[error("Section definition must end with ']' on line {line}")]
	#[diagnostic(
		code(stanza::unterminated_section),
		help("close the section header with `]`, e.g. `[profile name]`")
	)]
	UnterminatedSectionHeader { line: usize },

	#[error("Expected a profile definition on line {line}")]
	#[diagnostic(
		code(stanza::property_outside_section),
		help("properties must appear below a section header such as `[profile name]`")
	)]
	PropertyOutsideSection { line: usize },

	#[error("Expected an '=' sign defining a property on line {line}")]
	#[diagnostic(code(stanza::missing_equals))]
	MissingEqualsSign { line: usize },

	#[error("Property did not have a name on line {line}")]
	#[diagnostic(code(stanza::unnamed_property))]
	UnnamedProperty { line: usize },

	#[error("Expected a profile or property definition on line {line}")]
	#[diagnostic(
		code(stanza::unexpected_continuation),
		help("continuation lines are only valid directly after a property definition")
	)]
	UnexpectedContinuation { line: usize },

	#[error("no profile named `{0}` in the merged configuration")]
	#[diagnostic(
		code(stanza::missing_profile),
		help("run `stanza profiles` to list the available profile names")
	)]
	MissingProfile(String),

	#[error("profile `{profile}` has no property `{key}`")]
	#[diagnostic(code(stanza::missing_property))]
	MissingProperty { profile: String, key: String },
}

pub type StanzaResult<T> = Result<T, StanzaError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

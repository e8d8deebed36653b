#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The input does not match the shape of the declared notation.
	#[error("input {input:?} does not match pattern {pattern:?}")]
	Format { pattern: &'static str, input: String },

	/// A stamp identifier outside the nine defined notations.
	#[error("unsupported stamp: {0}")]
	UnsupportedFormat(String),

	/// The wrong number of field values for the notation's pattern.
	#[error("expected {expected} fields, got {actual}")]
	FieldCount { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

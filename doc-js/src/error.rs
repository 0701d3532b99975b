use crate::loc::Loc;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// A stable classification of extraction errors.
///
/// Diagnostic codes (prefix `DE`) are assigned per variant and are stable:
/// - `DE0001`: [`DocErrorType::MissingParameterMatch`]
///
/// Unsupported type syntax and malformed comments are deliberately not
/// errors: the former prints as an empty string, the latter yields no
/// documentation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DocErrorType {
  // A documented `param` tag has no corresponding parameter at the
  // positional index derived from the tag sequence.
  MissingParameterMatch { tag: String, declaration: String },
}

#[derive(Clone)]
pub struct DocError {
  pub typ: DocErrorType,
  pub loc: Loc,
}

impl DocError {
  pub fn new(typ: DocErrorType, loc: Loc) -> DocError {
    DocError { typ, loc }
  }
}

impl Debug for DocError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc [{}:{}]", self, self.loc.0, self.loc.1)
  }
}

impl Display for DocError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.typ.code(), self.typ.message())
  }
}

impl Error for DocError {}

impl PartialEq for DocError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for DocError {}

pub type DocResult<T> = Result<T, DocError>;

impl DocErrorType {
  /// Stable diagnostic code for this error variant.
  pub fn code(&self) -> &'static str {
    match self {
      DocErrorType::MissingParameterMatch { .. } => "DE0001",
    }
  }

  /// Human-readable message describing this error.
  pub fn message(&self) -> String {
    match self {
      DocErrorType::MissingParameterMatch { tag, declaration } => format!(
        "no parameter matches documented tag `{}` on `{}`",
        tag, declaration
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_parameter_match_names_tag_and_declaration() {
    let err = DocError::new(
      DocErrorType::MissingParameterMatch {
        tag: "baz".into(),
        declaration: "getThing".into(),
      },
      Loc(4, 20),
    );
    assert_eq!(err.typ.code(), "DE0001");
    let msg = err.to_string();
    assert!(msg.contains("`baz`"));
    assert!(msg.contains("`getThing`"));
  }
}

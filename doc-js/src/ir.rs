use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::ast::Module;
use serde::Serialize;
use serde::Serializer;

/// One parsed documentation block: free-form description plus its tags, in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
  pub description: String,
  pub tags: Vec<Tag>,
}

/// One documented field of a declaration.
///
/// An explicit inline `type_` (from `{Type}` in the comment) is
/// authoritative and is never overwritten by inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
  pub kind: TagKind,
  // May be dotted for `param` tags referring into a destructured parameter,
  // e.g. `props.foo`. Empty for tags that take no name.
  pub name: String,
  pub description: String,
  #[serde(rename = "type")]
  pub type_: Option<String>,
  pub optional: bool,
  // Positional index assigned during extraction; `param` tags only.
  pub param_index: Option<usize>,
}

impl Tag {
  pub fn new(kind: TagKind) -> Tag {
    Tag {
      kind,
      name: String::new(),
      description: String::new(),
      type_: None,
      optional: false,
      param_index: None,
    }
  }
}

/// Documentation tag kinds. Only `Param`, `Return`, and `Type` participate
/// in type resolution; everything else is carried through for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
  Example,
  Param,
  Return,
  Type,
  Other(String),
}

impl TagKind {
  pub fn from_word(word: &str) -> TagKind {
    match word {
      "example" => TagKind::Example,
      "param" => TagKind::Param,
      "return" | "returns" => TagKind::Return,
      "type" => TagKind::Type,
      _ => TagKind::Other(word.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      TagKind::Example => "example",
      TagKind::Param => "param",
      TagKind::Return => "return",
      TagKind::Type => "type",
      TagKind::Other(word) => word,
    }
  }
}

impl Serialize for TagKind {
  fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// The per-export output record consumed by external renderers.
#[derive(Debug, Serialize)]
pub struct IrRecord<'a> {
  pub token: &'a Node<Stmt>,
  pub doc: Option<DocComment>,
  pub fragments: Vec<IrFragment>,
}

/// Currency of the injected cross-file resolver. The engine never inspects
/// fragment internals; their meaning belongs to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrFragment {
  pub name: String,
  pub path: Option<String>,
  pub doc: Option<DocComment>,
}

/// Cross-file collaborator used to expand re-exports and references to other
/// files. Absent by default ([`NoopResolver`]).
pub trait FragmentResolver {
  fn resolve(&self, path: Option<&str>, token: &Node<Stmt>, module: &Module) -> Vec<IrFragment>;
}

/// The default resolver: no cross-file expansion.
pub struct NoopResolver;

impl FragmentResolver for NoopResolver {
  fn resolve(&self, _path: Option<&str>, _token: &Node<Stmt>, _module: &Module) -> Vec<IrFragment> {
    Vec::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn tag_serializes_kind_as_string() {
    let mut tag = Tag::new(TagKind::Param);
    tag.name = "props.foo".into();
    tag.type_ = Some("string".into());
    tag.param_index = Some(0);
    let serialized = serde_json::to_value(&tag).unwrap();
    assert_eq!(
      serialized,
      json!({
        "kind": "param",
        "name": "props.foo",
        "description": "",
        "type": "string",
        "optional": false,
        "param_index": 0,
      })
    );
  }

  #[test]
  fn tag_kind_words_round_trip() {
    assert_eq!(TagKind::from_word("returns"), TagKind::Return);
    assert_eq!(TagKind::from_word("see"), TagKind::Other("see".into()));
    assert_eq!(TagKind::from_word("see").as_str(), "see");
  }
}

use crate::ast::node::Node;
use crate::ir::Tag;
use crate::ir::TagKind;
use derive_visitor::Drive;
use derive_visitor::DriveMut;

/// One source comment, delimiters excluded (`//` and `/* */`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
  pub multiline: bool,
  pub text: String,
}

/// Assoc key under which the parser attaches a node's leading comments, in
/// source order.
pub struct LeadingComments(pub Vec<Comment>);

pub fn leading_comments<S: Drive + DriveMut>(node: &Node<S>) -> &[Comment] {
  node
    .assoc
    .get::<LeadingComments>()
    .map(|c| c.0.as_slice())
    .unwrap_or(&[])
}

pub fn attach_leading<S: Drive + DriveMut>(node: &mut Node<S>, comments: Vec<Comment>) {
  node.assoc.set(LeadingComments(comments));
}

/// Parses a comment against the documentation-block grammar.
///
/// A documentation block is a multiline comment whose first line is the bare
/// sigil `*` (i.e. the source began with `/**`). Anything else yields `None`:
/// a malformed comment means "no documentation", not an error.
///
/// Tags produced here carry the inline `{Type}` if present and no positional
/// index; index assignment and type resolution happen in the extractor.
pub fn parse_doc_block(comment: &Comment) -> Option<(String, Vec<Tag>)> {
  if !comment.multiline {
    return None;
  }
  let mut lines = comment.text.split('\n');
  if lines.next()?.trim_end() != "*" {
    return None;
  }

  let mut description = String::new();
  let mut tags: Vec<Tag> = Vec::new();
  let mut in_fence = false;

  for line in lines {
    let stripped = strip_decoration(line);

    if !in_fence {
      if let Some(tag) = parse_tag_line(stripped) {
        tags.push(tag);
        continue;
      }
    }
    if stripped.trim_start().starts_with("```") {
      in_fence = !in_fence;
    }

    // Continuation line: attach to the open tag's description, or to the
    // main description if no tag has started yet. Fenced lines land here
    // verbatim.
    let sink = match tags.last_mut() {
      Some(tag) => &mut tag.description,
      None => &mut description,
    };
    if !sink.is_empty() {
      sink.push('\n');
    }
    sink.push_str(stripped);
  }

  for tag in &mut tags {
    tag.description = trim_block(&tag.description);
  }
  Some((trim_block(&description), tags))
}

// Removes the ` * ` furniture the block-comment style adds to every line.
// Indentation beyond the single decorative space is preserved, which is what
// keeps fenced code examples intact.
fn strip_decoration(line: &str) -> &str {
  let s = line.trim_start();
  let s = s.strip_prefix('*').unwrap_or(s);
  s.strip_prefix(' ').unwrap_or(s)
}

fn parse_tag_line(line: &str) -> Option<Tag> {
  let rest = line.strip_prefix('@')?;
  let word_end = rest
    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '-')
    .unwrap_or(rest.len());
  if word_end == 0 {
    return None;
  }
  let mut tag = Tag::new(TagKind::from_word(&rest[..word_end]));
  let mut rest = rest[word_end..].trim_start();

  if let Some((type_, after)) = parse_inline_type(rest) {
    tag.type_ = Some(type_);
    rest = after.trim_start();
  }

  if tag.kind == TagKind::Param {
    let (name, optional, after) = parse_param_name(rest);
    tag.name = name;
    tag.optional = optional;
    rest = after.trim_start();
  }

  tag.description = rest.to_string();
  Some(tag)
}

// `{Type}` with balanced braces, e.g. `{Record<string, {a: number}>}`.
fn parse_inline_type(rest: &str) -> Option<(String, &str)> {
  if !rest.starts_with('{') {
    return None;
  }
  let mut depth = 0usize;
  for (i, c) in rest.char_indices() {
    match c {
      '{' => depth += 1,
      '}' => {
        depth -= 1;
        if depth == 0 {
          return Some((rest[1..i].trim().to_string(), &rest[i + 1..]));
        }
      }
      _ => {}
    }
  }
  // Unbalanced: treat the braces as part of the description.
  None
}

// A (possibly dotted) parameter name; `[name]` and `[name=default]` mark the
// parameter optional.
fn parse_param_name(rest: &str) -> (String, bool, &str) {
  let end = rest
    .find(|c: char| c.is_whitespace())
    .unwrap_or(rest.len());
  let (word, after) = rest.split_at(end);
  if let Some(inner) = word.strip_prefix('[').and_then(|w| w.strip_suffix(']')) {
    let name = inner.split('=').next().unwrap_or(inner);
    (name.to_string(), true, after)
  } else {
    (word.to_string(), false, after)
  }
}

fn trim_block(text: &str) -> String {
  text.trim_matches(|c: char| c.is_whitespace()).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn doc(text: &str) -> Comment {
    Comment {
      multiline: true,
      text: text.to_string(),
    }
  }

  #[test]
  fn description_only() {
    let c = doc("*\n * Returns the first thing.\n ");
    let (description, tags) = parse_doc_block(&c).unwrap();
    assert_eq!(description, "Returns the first thing.");
    assert!(tags.is_empty());
  }

  #[test]
  fn tags_with_inline_types_and_dotted_names() {
    let c = doc(
      "*\n * Updates a thing.\n *\n * @param {Record<string, {a: number}>} props Props bag.\n * @param props.foo The foo.\n * @param {string} [props.bar=x] Optional bar.\n * @return {boolean} Whether it worked.\n ",
    );
    let (description, tags) = parse_doc_block(&c).unwrap();
    assert_eq!(description, "Updates a thing.");
    assert_eq!(tags.len(), 4);

    assert_eq!(tags[0].kind, TagKind::Param);
    assert_eq!(tags[0].name, "props");
    assert_eq!(tags[0].type_.as_deref(), Some("Record<string, {a: number}>"));
    assert_eq!(tags[0].description, "Props bag.");

    assert_eq!(tags[1].name, "props.foo");
    assert_eq!(tags[1].type_, None);
    assert!(!tags[1].optional);

    assert_eq!(tags[2].name, "props.bar");
    assert!(tags[2].optional);
    assert_eq!(tags[2].type_.as_deref(), Some("string"));

    assert_eq!(tags[3].kind, TagKind::Return);
    assert_eq!(tags[3].name, "");
    assert_eq!(tags[3].type_.as_deref(), Some("boolean"));
    assert_eq!(tags[3].description, "Whether it worked.");
  }

  #[test]
  fn fenced_code_is_preserved_verbatim() {
    let c = doc(
      "*\n * Does a thing.\n *\n * @example\n * ```js\n * // @param is not a tag in here\n * const x = thing( 1 );\n * ```\n ",
    );
    let (_, tags) = parse_doc_block(&c).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, TagKind::Example);
    assert_eq!(
      tags[0].description,
      "```js\n// @param is not a tag in here\nconst x = thing( 1 );\n```"
    );
  }

  #[test]
  fn continuation_lines_attach_to_the_open_tag() {
    let c = doc("*\n * @param props A bag\n * spanning two lines.\n ");
    let (_, tags) = parse_doc_block(&c).unwrap();
    assert_eq!(tags[0].description, "A bag\nspanning two lines.");
  }

  #[test]
  fn non_doc_comments_are_rejected() {
    assert!(parse_doc_block(&Comment {
      multiline: false,
      text: " not a block".into(),
    })
    .is_none());
    // Plain multiline comment: first line is not the bare sigil.
    assert!(parse_doc_block(&doc(" plain\n comment")).is_none());
  }

  #[test]
  fn unbalanced_braces_fall_into_the_description() {
    let c = doc("*\n * @param {broken props It happens.\n ");
    let (_, tags) = parse_doc_block(&c).unwrap();
    assert_eq!(tags[0].type_, None);
    assert_eq!(tags[0].name, "{broken");
  }
}

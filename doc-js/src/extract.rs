use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::ast::Module;
use crate::comment::leading_comments;
use crate::comment::parse_doc_block;
use crate::error::DocResult;
use crate::ir::DocComment;
use crate::ir::FragmentResolver;
use crate::ir::IrRecord;
use crate::ir::Tag;
use crate::ir::TagKind;
use crate::resolve::resolve_tag_type;
use crate::unwrap::UnwrapTable;

/// Enumerates a module's export tokens in source order, without
/// deduplication. A module with zero exports yields an empty list.
pub fn exported_tokens(module: &Module) -> Vec<&Node<Stmt>> {
  module
    .body
    .iter()
    .filter(|stmt| is_export(stmt))
    .collect()
}

fn is_export(stmt: &Node<Stmt>) -> bool {
  match stmt.stx.as_ref() {
    Stmt::ClassDecl(decl) => decl.stx.export || decl.stx.export_default,
    Stmt::FunctionDecl(decl) => decl.stx.export || decl.stx.export_default,
    Stmt::VarDecl(decl) => decl.stx.export,
    Stmt::ExportDefaultExpr(_) | Stmt::ExportList(_) => true,
    Stmt::Expr(_) | Stmt::Return(_) => false,
  }
}

/// Extracts and resolves the documentation comment for one token.
///
/// Only the last leading comment is considered; it must match the
/// documentation-block grammar, else the token has no documentation
/// (`Ok(None)`). Tags are assigned positional indices in source order and
/// missing types are filled in from the declaration's own annotations.
pub fn doc_for_token(token: &Node<Stmt>, table: &UnwrapTable) -> DocResult<Option<DocComment>> {
  let Some(comment) = leading_comments(token).last() else {
    return Ok(None);
  };
  let Some((description, mut tags)) = parse_doc_block(comment) else {
    return Ok(None);
  };

  assign_param_indices(&mut tags);
  for tag in &mut tags {
    resolve_tag_type(tag, token, table)?;
  }

  // A description-only comment still documents a typed declaration: derive
  // a single implicit `type` tag, kept only if resolution produced a type.
  if tags.is_empty() {
    let mut implicit = Tag::new(TagKind::Type);
    resolve_tag_type(&mut implicit, token, table)?;
    if implicit.type_.is_some() {
      tags.push(implicit);
    }
  }

  Ok(Some(DocComment { description, tags }))
}

// One fold over one comment's tag sequence; the counter never escapes it.
// An unqualified `param` tag takes the counter and opens a group; a dotted
// tag whose prefix matches the open group shares its index; a dotted tag
// with any other prefix opens a new group at the current counter.
fn assign_param_indices(tags: &mut [Tag]) {
  let mut counter = 0usize;
  let mut open_group: Option<(String, usize)> = None;
  for tag in tags.iter_mut().filter(|tag| tag.kind == TagKind::Param) {
    match tag.name.split_once('.') {
      None => {
        tag.param_index = Some(counter);
        open_group = Some((tag.name.clone(), counter));
        counter += 1;
      }
      Some((prefix, _)) => match &open_group {
        Some((name, index)) if name == prefix => tag.param_index = Some(*index),
        _ => {
          tag.param_index = Some(counter);
          open_group = Some((prefix.to_string(), counter));
          counter += 1;
        }
      },
    }
  }
}

/// The engine: one [`IrRecord`] per export token, with documentation and any
/// cross-file fragments the injected resolver contributes. A module with no
/// parseable content yields an empty record list.
pub fn extract<'a>(
  module: &'a Module,
  resolver: &dyn FragmentResolver,
  table: &UnwrapTable,
) -> DocResult<Vec<IrRecord<'a>>> {
  let mut records = Vec::new();
  for token in exported_tokens(module) {
    let doc = doc_for_token(token, table)?;
    let fragments = resolver.resolve(module.path.as_deref(), token, module);
    records.push(IrRecord {
      token,
      doc,
      fragments,
    });
  }
  Ok(records)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn param_tag(name: &str) -> Tag {
    let mut tag = Tag::new(TagKind::Param);
    tag.name = name.to_string();
    tag
  }

  #[test]
  fn indices_shared_within_groups_and_advanced_between_them() {
    let mut tags = vec![
      param_tag("props"),
      param_tag("props.foo"),
      param_tag("props.bar"),
      param_tag("baz"),
      param_tag("test0"),
      param_tag("props2.test"),
      param_tag("props2.test1"),
      param_tag("test3"),
    ];
    assign_param_indices(&mut tags);
    let indices = tags
      .iter()
      .map(|tag| tag.param_index.unwrap())
      .collect::<Vec<_>>();
    assert_eq!(indices, vec![0, 0, 0, 1, 2, 3, 3, 4]);
  }

  #[test]
  fn non_param_tags_do_not_move_the_counter() {
    let mut tags = vec![
      param_tag("first"),
      Tag::new(TagKind::Return),
      param_tag("second"),
    ];
    assign_param_indices(&mut tags);
    assert_eq!(tags[0].param_index, Some(0));
    assert_eq!(tags[1].param_index, None);
    assert_eq!(tags[2].param_index, Some(1));
  }
}

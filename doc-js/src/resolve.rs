use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::error::DocResult;
use crate::ir::Tag;
use crate::ir::TagKind;
use crate::param::resolve_param_type;
use crate::print::print_type;
use crate::unwrap::unwrap_token;
use crate::unwrap::UnwrapTable;

/// Fills in a missing type for one documentation tag.
///
/// An explicit inline type is authoritative: the tag is returned unchanged.
/// Tags outside `param`/`return`/`type` never carry inferred types.
pub fn resolve_tag_type(tag: &mut Tag, token: &Node<Stmt>, table: &UnwrapTable) -> DocResult<()> {
  if tag.type_.is_some() {
    return Ok(());
  }
  match tag.kind {
    TagKind::Param => {
      let segments = tag.name.split('.').skip(1).collect::<Vec<_>>();
      // Extraction assigns every param tag an index before resolving.
      let index = tag.param_index.unwrap_or(0);
      tag.type_ = resolve_param_type(token, index, &segments, &tag.name, table)?;
    }
    TagKind::Return => {
      tag.type_ = unwrap_token(token, table)
        .and_then(|func| func.return_type.as_ref())
        .map(print_type);
    }
    TagKind::Type => {
      tag.type_ = own_type(token);
    }
    TagKind::Example | TagKind::Other(_) => {}
  }
  Ok(())
}

// The declaration's own (non-parameter) type: a variable's annotation, or a
// class's name standing in as a pseudo-type.
fn own_type(token: &Node<Stmt>) -> Option<String> {
  match token.stx.as_ref() {
    Stmt::VarDecl(decl) => {
      let declarator = decl.stx.declarators.first()?;
      match declarator.type_annotation.as_ref() {
        Some(annotation) => Some(print_type(annotation)),
        // `const x = value as T;` annotates through the cast.
        None => match declarator.initializer.as_ref()?.stx.as_ref() {
          Expr::Cast(cast) => Some(print_type(&cast.stx.type_expr)),
          _ => None,
        },
      }
    }
    Stmt::ClassDecl(decl) => decl.stx.name.as_ref().map(|name| name.stx.name.clone()),
    _ => None,
  }
}

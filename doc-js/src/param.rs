use crate::ast::node::Node;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::ast::type_expr::TypeArray;
use crate::ast::type_expr::TypeExpr;
use crate::error::DocErrorType;
use crate::error::DocResult;
use crate::print::print_type;
use crate::unwrap::declaration_name;
use crate::unwrap::unwrap_token;
use crate::unwrap::UnwrapTable;

/// Resolves the type string for one documented parameter position.
///
/// `segments` are the dotted parts of the tag name after the parameter
/// itself (empty for an unqualified tag like `@param props`; `["foo"]` for
/// `@param props.foo`). Only the trailing segment participates in matching.
///
/// A missing parameter at `index` is the one hard failure
/// ([`DocErrorType::MissingParameterMatch`]); an untyped parameter is a
/// normal `Ok(None)`.
pub fn resolve_param_type(
  token: &Node<Stmt>,
  index: usize,
  segments: &[&str],
  tag_name: &str,
  table: &UnwrapTable,
) -> DocResult<Option<String>> {
  let missing = || {
    token.error(DocErrorType::MissingParameterMatch {
      tag: tag_name.to_string(),
      declaration: declaration_name(token),
    })
  };
  // No function-like node means no parameter list at all, which fails the
  // same way an out-of-range index does.
  let func = unwrap_token(token, table).ok_or_else(missing)?;
  let param = func.parameters.get(index).ok_or_else(missing)?;

  // A defaulted parameter's pattern is already the assignment's left-hand
  // side, so no extra peeling is needed here.
  let Some(annotation) = param.stx.type_annotation.as_ref() else {
    return Ok(None);
  };

  let pattern = param.stx.pattern.stx.pat.stx.as_ref();
  let Some(last) = segments.last() else {
    return Ok(Some(unqualified_type(pattern, annotation)));
  };
  Ok(Some(qualified_type(pattern, annotation, last)))
}

// An unqualified tag on an array-destructured parameter names the shared
// element type, not the array; every other pattern takes the whole type.
fn unqualified_type(pattern: &Pat, annotation: &Node<TypeExpr>) -> String {
  match (pattern, annotation.stx.as_ref()) {
    (Pat::Arr(_), TypeExpr::Array(array)) => element_type(array.stx.as_ref()),
    _ => print_type(annotation),
  }
}

fn qualified_type(pattern: &Pat, annotation: &Node<TypeExpr>, segment: &str) -> String {
  match pattern {
    // Qualification on a plain identifier is ignored.
    Pat::Id(_) => print_type(annotation),
    Pat::Arr(_) => match segment.parse::<usize>() {
      Ok(slot) => array_element_type(annotation, slot),
      // A non-numeric segment on an array destructure has no rule; fall
      // back to the whole type.
      Err(_) => print_type(annotation),
    },
    Pat::Obj(_) => object_member_type(annotation, segment),
  }
}

fn array_element_type(annotation: &Node<TypeExpr>, slot: usize) -> String {
  match annotation.stx.as_ref() {
    // Every element of an array shares one element type; the slot is
    // irrelevant.
    TypeExpr::Array(array) => element_type(array.stx.as_ref()),
    TypeExpr::Tuple(tuple) => match tuple.stx.elements.get(slot) {
      Some(element) => print_type(element),
      None => indexed_fallback(annotation, slot),
    },
    // Named alias or anything else: best-effort indexed form.
    _ => indexed_fallback(annotation, slot),
  }
}

// A reference element contributes its name alone.
fn element_type(array: &TypeArray) -> String {
  match array.element_type.stx.as_ref() {
    TypeExpr::Reference(reference) => reference.stx.name.clone(),
    _ => print_type(&array.element_type),
  }
}

fn indexed_fallback(annotation: &Node<TypeExpr>, slot: usize) -> String {
  format!("( {} )[ {} ]", print_type(annotation), slot)
}

fn object_member_type(annotation: &Node<TypeExpr>, member: &str) -> String {
  if let TypeExpr::ObjectLiteral(obj) = annotation.stx.as_ref() {
    for prop in &obj.stx.properties {
      if prop.stx.name == member {
        return print_type(&prop.stx.type_expr);
      }
    }
  }
  // Named alias, or a literal without that member: best-effort keyed form.
  format!("{}[ '{}' ]", print_type(annotation), member)
}

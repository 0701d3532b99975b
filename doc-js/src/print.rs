use crate::ast::node::Node;
use crate::ast::type_expr::*;

/// Prints one type-annotation node as a canonical type string.
///
/// Pure and deterministic: the same tree always prints the same string.
/// Unsupported syntax prints as an empty string, so partially recognized
/// trees still produce best-effort output instead of failing.
pub fn print_type(expr: &Node<TypeExpr>) -> String {
  match expr.stx.as_ref() {
    TypeExpr::Any(_) => "any".to_string(),
    TypeExpr::BigInt(_) => "BigInt".to_string(),
    TypeExpr::Boolean(_) => "boolean".to_string(),
    TypeExpr::Never(_) => "never".to_string(),
    TypeExpr::Null(_) => "null".to_string(),
    TypeExpr::Number(_) => "number".to_string(),
    TypeExpr::Object(_) => "object".to_string(),
    TypeExpr::String(_) => "string".to_string(),
    TypeExpr::Symbol(_) => "symbol".to_string(),
    TypeExpr::This(_) => "this".to_string(),
    TypeExpr::Undefined(_) => "undefined".to_string(),
    TypeExpr::Unknown(_) => "unknown".to_string(),
    TypeExpr::Void(_) => "void".to_string(),

    TypeExpr::Array(array) => format!("{}[]", print_type(&array.stx.element_type)),
    TypeExpr::Tuple(tuple) => print_tuple(tuple.stx.as_ref()),
    TypeExpr::Union(union) => print_joined(&union.stx.types, " | "),
    TypeExpr::Intersection(intersection) => print_joined(&intersection.stx.types, " & "),
    TypeExpr::Function(func) => format!(
      "({}) => {}",
      print_parameters(&func.stx.parameters),
      print_type(&func.stx.return_type)
    ),
    TypeExpr::Constructor(cons) => format!(
      "new ({}): {}",
      print_parameters(&cons.stx.parameters),
      print_type(&cons.stx.return_type)
    ),
    TypeExpr::ObjectLiteral(obj) => print_object_literal(obj.stx.as_ref()),
    TypeExpr::Mapped(mapped) => print_mapped(mapped.stx.as_ref()),
    TypeExpr::IndexedAccess(indexed) => format!(
      "{}[ {} ]",
      print_type(&indexed.stx.object_type),
      print_type(&indexed.stx.index_type)
    ),
    TypeExpr::Literal(lit) => print_literal(lit.stx.as_ref()),
    TypeExpr::Reference(reference) => print_reference(reference.stx.as_ref()),
    TypeExpr::Operator(op) => format!("{} {}", op.stx.operator, print_type(&op.stx.operand)),
    TypeExpr::Predicate(pred) => format!(
      "{} is {}",
      pred.stx.parameter_name,
      print_type(&pred.stx.type_expr)
    ),
    TypeExpr::Parenthesized(paren) => format!("( {} )", print_type(&paren.stx.type_expr)),
    TypeExpr::Optional(opt) => format!("{}?", print_type(&opt.stx.type_expr)),
    TypeExpr::Rest(rest) => format!("...{}", print_type(&rest.stx.type_expr)),
    TypeExpr::Import(import) => format!(
      "import( '{}' ).{}",
      import.stx.module_specifier, import.stx.member
    ),

    TypeExpr::Unsupported(_) => String::new(),
  }
}

fn print_joined(types: &[Node<TypeExpr>], separator: &str) -> String {
  types
    .iter()
    .map(print_type)
    .collect::<Vec<_>>()
    .join(separator)
}

fn print_tuple(tuple: &TypeTuple) -> String {
  if tuple.elements.is_empty() {
    return "[]".to_string();
  }
  format!("[ {} ]", print_joined(&tuple.elements, ", "))
}

fn print_parameters(parameters: &[Node<TypeFunctionParameter>]) -> String {
  parameters
    .iter()
    .map(|param| {
      let param = param.stx.as_ref();
      let prefix = if param.rest { "..." } else { "" };
      format!("{}{}: {}", prefix, param.name, print_type(&param.type_expr))
    })
    .collect::<Vec<_>>()
    .join(", ")
}

// `{ <calls>; <props>; <indices>; }` with a trailing `; ` after each
// non-empty group, in that fixed order. An empty literal prints `{ }`.
fn print_object_literal(obj: &TypeObjectLiteral) -> String {
  let mut out = "{ ".to_string();
  push_group(
    &mut out,
    obj.call_signatures.iter().map(|call| {
      format!(
        "({}): {}",
        print_parameters(&call.stx.parameters),
        print_type(&call.stx.return_type)
      )
    }),
  );
  push_group(
    &mut out,
    obj.properties.iter().map(|prop| {
      let prop = prop.stx.as_ref();
      let marker = if prop.optional { "?" } else { "" };
      format!("{}{}: {}", prop.name, marker, print_type(&prop.type_expr))
    }),
  );
  push_group(
    &mut out,
    obj.index_signatures.iter().map(|index| {
      let index = index.stx.as_ref();
      format!(
        "[ {}: {} ]: {}",
        index.parameter_name,
        print_type(&index.parameter_type),
        print_type(&index.type_annotation)
      )
    }),
  );
  out.push('}');
  out
}

fn push_group(out: &mut String, members: impl Iterator<Item = String>) {
  let group = members.collect::<Vec<_>>();
  if !group.is_empty() {
    out.push_str(&group.join("; "));
    out.push_str("; ");
  }
}

fn print_mapped(mapped: &TypeMapped) -> String {
  let operator = match &mapped.operator {
    Some(op) => format!("{} ", op),
    None => String::new(),
  };
  format!(
    "[ {} in {}{} ]: {}",
    mapped.type_parameter,
    operator,
    print_type(&mapped.constraint),
    print_type(&mapped.type_expr)
  )
}

fn print_literal(lit: &TypeLiteral) -> String {
  match lit {
    TypeLiteral::BigInt(value) => format!("{}n", value),
    TypeLiteral::Boolean(value) => value.to_string(),
    TypeLiteral::Number(value) => value.clone(),
    TypeLiteral::String(value) => format!("'{}'", value),
  }
}

fn print_reference(reference: &TypeReference) -> String {
  match reference.type_arguments.as_deref() {
    None | Some([]) => reference.name.clone(),
    Some(args) => format!("{}< {} >", reference.name, print_joined(args, ", ")),
  }
}

use super::node::Node;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

/// The closed set of type-annotation syntax the engine understands.
///
/// Anything the parser produces outside this set must be mapped to
/// [`TypeExpr::Unsupported`], which prints as an empty string (best-effort,
/// never an error). Keeping the unsupported case as a variant keeps the
/// printer's match exhaustive.
#[derive(Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t")]
pub enum TypeExpr {
  // Primitive keywords.
  Any(Node<TypeAny>),
  BigInt(Node<TypeBigInt>),
  Boolean(Node<TypeBoolean>),
  Never(Node<TypeNever>),
  Null(Node<TypeNull>),
  Number(Node<TypeNumber>),
  Object(Node<TypeObject>),
  String(Node<TypeString>),
  Symbol(Node<TypeSymbol>),
  This(Node<TypeThis>),
  Undefined(Node<TypeUndefined>),
  Unknown(Node<TypeUnknown>),
  Void(Node<TypeVoid>),

  // Composite types.
  Array(Node<TypeArray>),
  Constructor(Node<TypeConstructor>),
  Function(Node<TypeFunction>),
  IndexedAccess(Node<TypeIndexedAccess>),
  Intersection(Node<TypeIntersection>),
  Literal(Node<TypeLiteral>),
  Mapped(Node<TypeMapped>),
  ObjectLiteral(Node<TypeObjectLiteral>),
  Operator(Node<TypeOperator>),
  Optional(Node<TypeOptional>),
  Parenthesized(Node<TypeParenthesized>),
  Predicate(Node<TypePredicate>),
  Reference(Node<TypeReference>),
  Rest(Node<TypeRest>),
  Tuple(Node<TypeTuple>),
  Union(Node<TypeUnion>),

  // External references and the escape hatch.
  Import(Node<TypeImport>),
  Unsupported(Node<TypeUnsupported>),
}

/// Primitive type: any
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeAny {}

/// Primitive type: bigint (prints as `BigInt`)
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeBigInt {}

/// Primitive type: boolean
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeBoolean {}

/// Primitive type: never
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeNever {}

/// Primitive type: null
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeNull {}

/// Primitive type: number
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeNumber {}

/// Primitive type: object
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeObject {}

/// Primitive type: string
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeString {}

/// Primitive type: symbol
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeSymbol {}

/// Special type: this
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeThis {}

/// Primitive type: undefined
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeUndefined {}

/// Primitive type: unknown
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeUnknown {}

/// Primitive type: void
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeVoid {}

/// Array type: T[]
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeArray {
  pub element_type: Box<Node<TypeExpr>>,
}

/// Tuple type: [T, U]
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeTuple {
  pub elements: Vec<Node<TypeExpr>>,
}

/// Union type: T | U | V
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeUnion {
  pub types: Vec<Node<TypeExpr>>,
}

/// Intersection type: T & U & V
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeIntersection {
  pub types: Vec<Node<TypeExpr>>,
}

/// Function type: (x: T, y: U) => R
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeFunction {
  pub parameters: Vec<Node<TypeFunctionParameter>>,
  pub return_type: Box<Node<TypeExpr>>,
}

/// Constructor type: new (x: T): R
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeConstructor {
  pub parameters: Vec<Node<TypeFunctionParameter>>,
  pub return_type: Box<Node<TypeExpr>>,
}

/// Function type parameter
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeFunctionParameter {
  #[drive(skip)]
  pub name: String,
  #[drive(skip)]
  pub rest: bool,
  pub type_expr: Node<TypeExpr>,
}

/// Object type literal: { (): R; x: T; [k: K]: V; }
///
/// Member groups are kept separate because the printed form has a fixed
/// group order: call signatures, then properties, then index signatures.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeObjectLiteral {
  pub call_signatures: Vec<Node<TypeCallSignature>>,
  pub properties: Vec<Node<TypePropertySignature>>,
  pub index_signatures: Vec<Node<TypeIndexSignature>>,
}

/// Call signature: (x: T): U
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeCallSignature {
  pub parameters: Vec<Node<TypeFunctionParameter>>,
  pub return_type: Box<Node<TypeExpr>>,
}

/// Property signature: x: T, x?: T
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypePropertySignature {
  #[drive(skip)]
  pub name: String,
  #[drive(skip)]
  pub optional: bool,
  pub type_expr: Node<TypeExpr>,
}

/// Index signature: [key: string]: T
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeIndexSignature {
  #[drive(skip)]
  pub parameter_name: String,
  pub parameter_type: Node<TypeExpr>,
  pub type_annotation: Node<TypeExpr>,
}

/// Mapped type: [K in keyof T]: U
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeMapped {
  #[drive(skip)]
  pub type_parameter: String,
  // Operator keyword between `in` and the constraint, e.g. `keyof`.
  #[drive(skip)]
  pub operator: Option<String>,
  pub constraint: Box<Node<TypeExpr>>,
  pub type_expr: Box<Node<TypeExpr>>,
}

/// Indexed access type: T['prop']
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeIndexedAccess {
  pub object_type: Box<Node<TypeExpr>>,
  pub index_type: Box<Node<TypeExpr>>,
}

/// Literal type: 'foo', 42, true, 9007199254740993n
#[derive(Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t", content = "v")]
pub enum TypeLiteral {
  BigInt(#[drive(skip)] String),
  Boolean(#[drive(skip)] bool),
  Number(#[drive(skip)] String),
  String(#[drive(skip)] String),
}

/// Type reference: Foo, A.B.C, Foo<T, U>
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeReference {
  // Possibly dotted, e.g. `WPBlock` or `wp.blocks.WPBlock`.
  #[drive(skip)]
  pub name: String,
  pub type_arguments: Option<Vec<Node<TypeExpr>>>,
}

/// Type operator: keyof T, readonly T, unique symbol
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeOperator {
  #[drive(skip)]
  pub operator: String,
  pub operand: Box<Node<TypeExpr>>,
}

/// Type predicate: x is T
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypePredicate {
  #[drive(skip)]
  pub parameter_name: String,
  pub type_expr: Box<Node<TypeExpr>>,
}

/// Parenthesized type: (T)
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeParenthesized {
  pub type_expr: Box<Node<TypeExpr>>,
}

/// Optional marker inside tuples and parameter lists: T?
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeOptional {
  pub type_expr: Box<Node<TypeExpr>>,
}

/// Rest marker inside tuples and parameter lists: ...T
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeRest {
  pub type_expr: Box<Node<TypeExpr>>,
}

/// Import type: import('module').Member
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeImport {
  #[drive(skip)]
  pub module_specifier: String,
  // Possibly dotted member path after the closing parenthesis.
  #[drive(skip)]
  pub member: String,
}

/// Any type syntax outside the supported set (conditional types, type
/// queries, template literal types, ...).
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct TypeUnsupported {}

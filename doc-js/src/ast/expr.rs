use super::func::Func;
use super::node::Node;
use super::pat::ClassOrFuncName;
use super::type_expr::TypeExpr;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

/// The expression subset the engine needs: enough to peel export, variable,
/// cast, and wrapper-call layers off a declaration, plus a few literal forms
/// for initializers. Everything else the parser produces maps to
/// [`Expr::Unsupported`]; such expressions simply never unwrap to a function.
#[derive(Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t")]
pub enum Expr {
  ArrowFunc(Node<ArrowFuncExpr>),
  Call(Node<CallExpr>),
  Cast(Node<CastExpr>),
  Func(Node<FuncExpr>),
  Id(Node<IdExpr>),
  Member(Node<MemberExpr>),

  // Literals.
  LitBool(Node<LitBoolExpr>),
  LitNum(Node<LitNumExpr>),
  LitStr(Node<LitStrExpr>),

  Unsupported(Node<UnsupportedExpr>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ArrowFuncExpr {
  pub func: Node<Func>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CallArg {
  #[drive(skip)]
  pub spread: bool,
  pub value: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CallExpr {
  pub callee: Node<Expr>,
  pub arguments: Vec<Node<CallArg>>,
}

// TypeScript: `expr as T`, `<T>expr`, `expr satisfies T`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct CastExpr {
  pub expression: Node<Expr>,
  pub type_expr: Node<TypeExpr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncExpr {
  pub name: Option<Node<ClassOrFuncName>>,
  pub func: Node<Func>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct MemberExpr {
  pub left: Node<Expr>,
  #[drive(skip)]
  pub right: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct LitBoolExpr {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct LitNumExpr {
  #[drive(skip)]
  pub value: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct LitStrExpr {
  #[drive(skip)]
  pub value: String,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct UnsupportedExpr {}

use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::decl::ParamDecl;
use super::expr::Expr;
use super::node::Node;
use super::stmt::Stmt;
use super::type_expr::TypeExpr;

// This common type exists for better downstream usage, as one type is easier
// to match on and wrangle than many different types (ArrowFuncExpr, FuncDecl,
// FuncExpr, etc.).
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Func {
  #[drive(skip)]
  pub arrow: bool,
  #[drive(skip)]
  pub async_: bool,
  #[drive(skip)]
  pub generator: bool,
  pub parameters: Vec<Node<ParamDecl>>,
  pub return_type: Option<Node<TypeExpr>>,
  pub body: FuncBody,
}

#[derive(Debug, Drive, DriveMut, From, Serialize)]
pub enum FuncBody {
  Block(Vec<Node<Stmt>>),
  // If arrow function.
  Expression(Node<Expr>),
}

use super::expr::Expr;
use super::func::Func;
use super::node::Node;
use super::pat::ClassOrFuncName;
use super::pat::PatDecl;
use super::type_expr::TypeExpr;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ClassDecl {
  #[drive(skip)]
  pub export: bool,
  #[drive(skip)]
  pub export_default: bool,
  // Name can only be omitted in a default export.
  pub name: Option<Node<ClassOrFuncName>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct FuncDecl {
  #[drive(skip)]
  pub export: bool,
  #[drive(skip)]
  pub export_default: bool,
  // Name can only be omitted in a default export.
  pub name: Option<Node<ClassOrFuncName>>,
  pub function: Node<Func>,
}

/// One parameter position of a function.
///
/// A defaulted parameter keeps the assignment's left-hand side in `pattern`
/// and the right-hand side in `default_value`. A rest parameter sets `rest`.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ParamDecl {
  #[drive(skip)]
  pub rest: bool,
  pub pattern: Node<PatDecl>,
  pub type_annotation: Option<Node<TypeExpr>>,
  pub default_value: Option<Node<Expr>>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct VarDecl {
  #[drive(skip)]
  pub export: bool,
  pub mode: VarDeclMode,
  pub declarators: Vec<VarDeclarator>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct VarDeclarator {
  pub pattern: Node<PatDecl>,
  pub type_annotation: Option<Node<TypeExpr>>,
  pub initializer: Option<Node<Expr>>,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug, Serialize, Drive, DriveMut)]
pub enum VarDeclMode {
  Const,
  Let,
  Var,
}

use super::decl::ClassDecl;
use super::decl::FuncDecl;
use super::decl::VarDecl;
use super::expr::Expr;
use super::node::Node;
use super::pat::IdPat;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Deserialize;
use serde::Serialize;

/// The statement forms the engine distinguishes. Non-export statements can
/// appear in a module (and inside function bodies); they are simply never
/// export tokens.
#[derive(Debug, Drive, DriveMut, Serialize)]
#[serde(tag = "$t")]
pub enum Stmt {
  ClassDecl(Node<ClassDecl>),
  ExportDefaultExpr(Node<ExportDefaultExprStmt>),
  ExportList(Node<ExportListStmt>),
  Expr(Node<ExprStmt>),
  FunctionDecl(Node<FuncDecl>),
  Return(Node<ReturnStmt>),
  VarDecl(Node<VarDecl>),
}

// `export default <expr>;`
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportDefaultExprStmt {
  pub expression: Node<Expr>,
}

// `export {a as default, b as c, d}`
// `export {default, a as b, c} from "module"`
// `export * from "module"`
// `export * as name from "module"`
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportListStmt {
  pub names: ExportNames,
  #[drive(skip)]
  pub from: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ExportNames {
  // `export * from "module"`, with the alias if `* as name`.
  All(Option<Node<IdPat>>),
  // `default` is still a name, so we don't use an enum.
  Specific(Vec<Node<ExportName>>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportName {
  #[drive(skip)]
  pub exportable: ModuleExportName,
  // This is always set, even when no explicit alias is provided. This is for
  // simplicity for downstream tasks, as an implicit alias hides the implicit
  // IdPat usage.
  pub alias: Node<IdPat>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub enum ModuleExportName {
  Ident(String),
  Str(String),
}

impl ModuleExportName {
  pub fn as_str(&self) -> &str {
    match self {
      ModuleExportName::Ident(name) | ModuleExportName::Str(name) => name,
    }
  }
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExprStmt {
  pub expression: Node<Expr>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ReturnStmt {
  pub value: Option<Node<Expr>>,
}

#[cfg(test)]
mod tests {
  use super::ModuleExportName;
  use serde_json::json;

  #[test]
  fn module_export_name_serializes_with_tag() {
    let ident = ModuleExportName::Ident("useThing".into());
    let serialized = serde_json::to_value(&ident).unwrap();
    assert_eq!(serialized, json!({"Ident": "useThing"}));
    let roundtrip: ModuleExportName = serde_json::from_value(serialized).unwrap();
    assert_eq!(roundtrip, ident);
  }
}

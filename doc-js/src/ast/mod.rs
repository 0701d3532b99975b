use derive_visitor::Drive;
use derive_visitor::DriveMut;
use node::Node;
use serde::Serialize;
use stmt::Stmt;

pub mod decl;
pub mod expr;
pub mod func;
pub mod node;
pub mod pat;
pub mod stmt;
pub mod type_expr;

/// One parsed source unit, as handed over by the external parser.
///
/// A module with no path and no body is the "nothing parseable" case; the
/// engine yields zero records for it rather than failing.
#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct Module {
  #[drive(skip)]
  pub path: Option<String>,
  pub body: Vec<Node<Stmt>>,
}

impl Module {
  pub fn new(path: Option<String>, body: Vec<Node<Stmt>>) -> Module {
    Module { path, body }
  }

  pub fn empty() -> Module {
    Module {
      path: None,
      body: Vec::new(),
    }
  }
}

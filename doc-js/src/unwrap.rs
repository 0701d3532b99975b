use crate::ast::expr::CallExpr;
use crate::ast::expr::Expr;
use crate::ast::func::Func;
use crate::ast::func::FuncBody;
use crate::ast::node::Node;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use ahash::HashMap;
use once_cell::sync::Lazy;

/// Where a wrapper call keeps the real function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapperPath {
  // The n-th call argument is the wrapped function.
  Arg(usize),
  // The n-th call argument is a factory; the function it returns is the
  // wrapped function.
  RetOfArg(usize),
}

/// Extensible map from wrapper callee name to the path of the wrapped
/// function. New wrapper conventions are added here, not in the unwrap
/// algorithm.
#[derive(Clone, Debug)]
pub struct UnwrapTable {
  wrappers: HashMap<String, WrapperPath>,
}

impl Default for UnwrapTable {
  fn default() -> UnwrapTable {
    UnwrapTable::empty()
      .with_wrapper("createSelector", WrapperPath::Arg(0))
      .with_wrapper("createRegistrySelector", WrapperPath::RetOfArg(0))
  }
}

impl UnwrapTable {
  pub fn empty() -> UnwrapTable {
    UnwrapTable {
      wrappers: HashMap::default(),
    }
  }

  pub fn with_wrapper(mut self, name: impl Into<String>, path: WrapperPath) -> UnwrapTable {
    self.wrappers.insert(name.into(), path);
    self
  }

  pub fn lookup(&self, name: &str) -> Option<WrapperPath> {
    self.wrappers.get(name).copied()
  }
}

static DEFAULT_TABLE: Lazy<UnwrapTable> = Lazy::new(UnwrapTable::default);

/// The table of built-in wrapper conventions.
pub fn default_table() -> &'static UnwrapTable {
  &DEFAULT_TABLE
}

/// Reduces a token toward its underlying function-like node: export and
/// variable layers first, then expression layers (casts and known wrapper
/// calls) to a fixed point. Returns `None` when no function is ever reached;
/// that is a normal outcome, not an error.
pub fn unwrap_token<'a>(token: &'a Node<Stmt>, table: &UnwrapTable) -> Option<&'a Func> {
  match token.stx.as_ref() {
    Stmt::FunctionDecl(decl) => Some(decl.stx.function.stx.as_ref()),
    // Only the first declarator of a multi-declarator statement is
    // considered.
    Stmt::VarDecl(decl) => {
      let init = decl.stx.declarators.first()?.initializer.as_ref()?;
      unwrap_expr(init, table)
    }
    Stmt::ExportDefaultExpr(stmt) => unwrap_expr(&stmt.stx.expression, table),
    _ => None,
  }
}

pub fn unwrap_expr<'a>(expr: &'a Node<Expr>, table: &UnwrapTable) -> Option<&'a Func> {
  let mut current = expr;
  loop {
    match current.stx.as_ref() {
      Expr::ArrowFunc(arrow) => return Some(arrow.stx.func.stx.as_ref()),
      Expr::Func(func) => return Some(func.stx.func.stx.as_ref()),
      Expr::Cast(cast) => current = &cast.stx.expression,
      Expr::Call(call) => {
        let path = callee_name(&call.stx.callee).and_then(|name| table.lookup(name))?;
        current = follow_wrapper(call.stx.as_ref(), path, table)?;
      }
      _ => return None,
    }
  }
}

fn follow_wrapper<'a>(
  call: &'a CallExpr,
  path: WrapperPath,
  table: &UnwrapTable,
) -> Option<&'a Node<Expr>> {
  match path {
    WrapperPath::Arg(n) => Some(&call.arguments.get(n)?.stx.value),
    WrapperPath::RetOfArg(n) => {
      let factory = unwrap_expr(&call.arguments.get(n)?.stx.value, table)?;
      returned_expr(factory)
    }
  }
}

fn returned_expr(func: &Func) -> Option<&Node<Expr>> {
  match &func.body {
    FuncBody::Expression(expr) => Some(expr),
    FuncBody::Block(stmts) => stmts.iter().find_map(|stmt| match stmt.stx.as_ref() {
      Stmt::Return(ret) => ret.stx.value.as_ref(),
      _ => None,
    }),
  }
}

fn callee_name(callee: &Node<Expr>) -> Option<&str> {
  match callee.stx.as_ref() {
    Expr::Id(id) => Some(&id.stx.name),
    // `data.createSelector(...)` still matches by its final segment.
    Expr::Member(member) => Some(&member.stx.right),
    _ => None,
  }
}

/// Recovers an identifier for error messages by peeling export and variable
/// layers only (never down to the function itself).
pub fn declaration_name(token: &Node<Stmt>) -> String {
  match token.stx.as_ref() {
    Stmt::FunctionDecl(decl) => decl
      .stx
      .name
      .as_ref()
      .map(|name| name.stx.name.clone())
      .unwrap_or_else(|| "default".to_string()),
    Stmt::ClassDecl(decl) => decl
      .stx
      .name
      .as_ref()
      .map(|name| name.stx.name.clone())
      .unwrap_or_else(|| "default".to_string()),
    Stmt::VarDecl(decl) => decl
      .stx
      .declarators
      .first()
      .and_then(|declarator| match declarator.pattern.stx.pat.stx.as_ref() {
        Pat::Id(id) => Some(id.name.clone()),
        _ => None,
      })
      .unwrap_or_else(|| "(anonymous)".to_string()),
    Stmt::ExportDefaultExpr(stmt) => match stmt.stx.expression.stx.as_ref() {
      Expr::Func(func) => func
        .stx
        .name
        .as_ref()
        .map(|name| name.stx.name.clone())
        .unwrap_or_else(|| "default".to_string()),
      _ => "default".to_string(),
    },
    _ => "(anonymous)".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ast::decl::ParamDecl;
  use crate::ast::decl::VarDecl;
  use crate::ast::decl::VarDeclMode;
  use crate::ast::decl::VarDeclarator;
  use crate::ast::expr::ArrowFuncExpr;
  use crate::ast::expr::CallArg;
  use crate::ast::expr::CastExpr;
  use crate::ast::expr::IdExpr;
  use crate::ast::pat::IdPat;
  use crate::ast::pat::PatDecl;
  use crate::ast::type_expr::TypeExpr;
  use crate::ast::type_expr::TypeUnsupported;
  use crate::loc::Loc;

  fn id_expr(name: &str) -> Node<Expr> {
    Node::new(
      Loc::EMPTY,
      Expr::Id(Node::new(
        Loc::EMPTY,
        IdExpr {
          name: name.to_string(),
        },
      )),
    )
  }

  fn arrow(parameter_names: &[&str], body: Node<Expr>) -> Node<Expr> {
    let parameters = parameter_names
      .iter()
      .map(|name| {
        Node::new(
          Loc::EMPTY,
          ParamDecl {
            rest: false,
            pattern: Node::new(
              Loc::EMPTY,
              PatDecl {
                pat: Node::new(
                  Loc::EMPTY,
                  Pat::Id(IdPat {
                    name: name.to_string(),
                  }),
                ),
              },
            ),
            type_annotation: None,
            default_value: None,
          },
        )
      })
      .collect();
    Node::new(
      Loc::EMPTY,
      Expr::ArrowFunc(Node::new(
        Loc::EMPTY,
        ArrowFuncExpr {
          func: Node::new(
            Loc::EMPTY,
            Func {
              arrow: true,
              async_: false,
              generator: false,
              parameters,
              return_type: None,
              body: FuncBody::Expression(body),
            },
          ),
        },
      )),
    )
  }

  fn call(callee_name: &str, args: Vec<Node<Expr>>) -> Node<Expr> {
    Node::new(
      Loc::EMPTY,
      Expr::Call(Node::new(
        Loc::EMPTY,
        CallExpr {
          callee: id_expr(callee_name),
          arguments: args
            .into_iter()
            .map(|value| {
              Node::new(
                Loc::EMPTY,
                CallArg {
                  spread: false,
                  value,
                },
              )
            })
            .collect(),
        },
      )),
    )
  }

  fn const_decl(name: &str, initializer: Node<Expr>) -> Node<Stmt> {
    Node::new(
      Loc::EMPTY,
      Stmt::VarDecl(Node::new(
        Loc::EMPTY,
        VarDecl {
          export: true,
          mode: VarDeclMode::Const,
          declarators: vec![VarDeclarator {
            pattern: Node::new(
              Loc::EMPTY,
              PatDecl {
                pat: Node::new(
                  Loc::EMPTY,
                  Pat::Id(IdPat {
                    name: name.to_string(),
                  }),
                ),
              },
            ),
            type_annotation: None,
            initializer: Some(initializer),
          }],
        },
      )),
    )
  }

  #[test]
  fn unwraps_selector_wrapper_to_inner_arrow() {
    let token = const_decl(
      "getThing",
      call("createSelector", vec![
        arrow(&["state", "id"], id_expr("state")),
        arrow(&["state"], id_expr("state")),
      ]),
    );
    let func = unwrap_token(&token, default_table()).unwrap();
    assert_eq!(func.parameters.len(), 2);
  }

  #[test]
  fn unwraps_registry_selector_through_returned_function() {
    let token = const_decl(
      "getOther",
      call("createRegistrySelector", vec![arrow(
        &["select"],
        arrow(&["state", "id"], id_expr("state")),
      )]),
    );
    let func = unwrap_token(&token, default_table()).unwrap();
    assert_eq!(func.parameters.len(), 2);
  }

  #[test]
  fn peels_cast_layers() {
    let cast = Node::new(
      Loc::EMPTY,
      Expr::Cast(Node::new(
        Loc::EMPTY,
        CastExpr {
          expression: arrow(&["x"], id_expr("x")),
          type_expr: Node::new(
            Loc::EMPTY,
            TypeExpr::Unsupported(Node::new(Loc::EMPTY, TypeUnsupported {})),
          ),
        },
      )),
    );
    let token = const_decl("casted", cast);
    assert!(unwrap_token(&token, default_table()).is_some());
  }

  #[test]
  fn unknown_wrappers_and_non_functions_stop() {
    let token = const_decl("memoized", call("memoize", vec![arrow(&["x"], id_expr("x"))]));
    assert!(unwrap_token(&token, default_table()).is_none());

    let token = const_decl("plain", id_expr("somewhereElse"));
    assert!(unwrap_token(&token, default_table()).is_none());
  }

  #[test]
  fn declaration_name_peels_export_and_variable_layers() {
    let token = const_decl("getThing", call("createSelector", vec![]));
    assert_eq!(declaration_name(&token), "getThing");
  }
}

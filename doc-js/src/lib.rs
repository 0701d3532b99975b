use ast::Module;
use error::DocResult;
use ir::IrRecord;
use ir::NoopResolver;

pub mod ast;
pub mod comment;
pub mod error;
pub mod extract;
pub mod ir;
pub mod loc;
pub mod param;
pub mod print;
pub mod resolve;
pub mod unwrap;

/// Extracts documentation records for one parsed module using the built-in
/// wrapper table and no cross-file resolution.
pub fn extract_module(module: &Module) -> DocResult<Vec<IrRecord<'_>>> {
  extract::extract(module, &NoopResolver, unwrap::default_table())
}

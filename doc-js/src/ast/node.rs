use crate::error::DocError;
use crate::error::DocErrorType;
use crate::loc::Loc;
use ahash::HashMap;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;
use serde::Serializer;
use std::any::Any;
use std::any::TypeId;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

/// Arbitrary per-node data attached by external collaborators.
///
/// The parser uses this to attach leading comments (see
/// [`crate::comment::LeadingComments`]); downstream passes can attach their
/// own types without widening every syntax struct.
#[derive(Default)]
pub struct NodeAssocData {
  // Make Node movable across threads (e.g. rayon) by bounding value to Send + Sync too.
  map: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl NodeAssocData {
  pub fn get<T: Any>(&self) -> Option<&T> {
    let t = TypeId::of::<T>();
    self.map.get(&t).map(|v| v.downcast_ref().unwrap())
  }

  pub fn set<T: Any + Send + Sync>(&mut self, v: T) {
    let t = TypeId::of::<T>();
    self.map.insert(t, Box::from(v));
  }
}

#[derive(Drive, DriveMut)]
pub struct Node<S: Drive + DriveMut> {
  // Locations are best-effort; synthetic nodes may carry Loc::EMPTY.
  #[drive(skip)]
  pub loc: Loc,
  pub stx: Box<S>,
  #[drive(skip)]
  pub assoc: NodeAssocData,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      stx: Box::new(stx),
      assoc: NodeAssocData::default(),
    }
  }

  /// Create an error at this node's location.
  pub fn error(&self, typ: DocErrorType) -> DocError {
    DocError::new(typ, self.loc)
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

impl<S: Serialize + Drive + DriveMut> Serialize for Node<S> {
  fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    self.stx.serialize(serializer)
  }
}

#[cfg(test)]
mod tests {
  use super::NodeAssocData;

  #[test]
  fn test_node_assoc_data() {
    struct MyType(u32);
    let mut assoc = NodeAssocData::default();
    assoc.set(MyType(32));
    let v = assoc.get::<MyType>().unwrap();
    assert_eq!(v.0, 32);
  }
}

/// A location within the current source file expressed as UTF-8 byte offsets.
///
/// Locations come from the external parser. Synthetic nodes (e.g. trees built
/// by hand in tests) can use an empty location.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub const EMPTY: Loc = Loc(0, 0);
}

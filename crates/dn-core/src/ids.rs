use core::fmt;
use core::num::NonZeroU32;

/// Distinct compact arena handles for resolved-graph objects.
///
/// Junctions exist only as byproducts of endpoint clustering, so edges
/// store handles into the junction arena rather than embedded geometry
/// or back-references. Each handle kind is its own type: a `JunctionId`
/// cannot be confused with an `EdgeId` at a call site.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<...Id>` to be pointer-optimized
macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Create a handle from a 0-based arena index by storing
            /// index+1.
            pub fn from_index(index: u32) -> Self {
                // index+1 must be nonzero
                Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
            }

            /// Recover the 0-based arena index.
            pub fn index(self) -> u32 {
                self.0.get() - 1
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.index())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }
    };
}

arena_id!(
    /// Handle into the junction arena of a resolved graph.
    JunctionId
);

arena_id!(
    /// Handle into the edge list of a resolved graph.
    EdgeId
);

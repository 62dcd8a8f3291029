//! Strongly typed identifier wrappers.
//!
//! Catalogue entities and graph elements are stored in dense `Vec`s and
//! addressed by position, so every id is a plain `u32` index.  Ids stay valid
//! when the backing `Vec` reallocates, which is what lets indices hold them
//! instead of references.

use std::fmt;

/// Generate a typed index wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build an id from a `Vec` position.
            ///
            /// # Panics
            /// Panics if `index` does not fit in `u32`.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                match u32::try_from(index) {
                    Ok(raw) => $name(raw),
                    Err(_) => panic!("{} index {} exceeds u32 range", $tag, index),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $tag, self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the catalogue's stop arena.
    pub struct StopId, "stop";
}

typed_id! {
    /// Index of a bus route in the catalogue's route arena.
    pub struct RouteId, "route";
}

typed_id! {
    /// Vertex of a directed weighted graph.
    pub struct VertexId, "vertex";
}

typed_id! {
    /// Edge of a directed weighted graph; equals the edge's insertion index.
    pub struct EdgeId, "edge";
}

//! Catalogue entities.

use rustc_hash::FxHashSet;

use tc_core::{GeoPoint, StopId};

/// A named stop.  Names are unique within a catalogue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:     String,
    /// `(0, 0)` for placeholders created by a route before the stop itself
    /// was added.
    pub position: GeoPoint,
}

/// A named bus route.
///
/// `stops` is the full sequence a bus drives.  For a route that is not a
/// roundtrip it already contains the way back: `[A, B, C]` is stored as
/// `[A, B, C, B, A]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Route {
    /// Expand the listed stops into the driven sequence.
    pub(crate) fn expand(mut stops: Vec<StopId>, is_roundtrip: bool) -> Vec<StopId> {
        if !is_roundtrip && stops.len() > 1 {
            let back: Vec<StopId> = stops[..stops.len() - 1].iter().rev().copied().collect();
            stops.extend(back);
        }
        stops
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<FxHashSet<_>>().len()
    }

    /// Consecutive `(from, to)` pairs along the driven sequence.
    pub fn legs(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

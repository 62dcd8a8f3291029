//! Query results computed from the catalogue.

use std::collections::BTreeSet;

/// Aggregate statistics of one bus route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStat {
    /// Stops in the driven sequence, repeats included.
    pub stop_count:        usize,
    pub unique_stop_count: usize,
    /// Road length in metres, summed over the driven sequence.
    pub route_length:      u64,
    /// Road length over great-circle length; `1.0` when the latter is zero.
    pub curvature:         f64,
}

/// The routes serving one stop.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StopStat<'a> {
    /// Route names in lexicographic order.
    pub buses: BTreeSet<&'a str>,
}

//! # Configuration module
//!
//! ## Description
//! Construction-time capability flags and the functional-options list used to set
//! them. All five flags are immutable once [`Graph::new`][crate::Graph::new]
//! returns; nothing in the public API can flip one afterward.
use bitflags::bitflags;

bitflags! {
    /// # Capability flags
    ///
    /// ## Description
    /// The five construction-time capabilities a [`Graph`][crate::Graph] may carry.
    /// `DIRECTED_DEFAULT` records the orientation applied to new edges when no
    /// per-edge override is given; the other four gate admission of weights,
    /// parallel edges, self-loops, and per-edge directedness overrides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GraphFlags: u8 {
        const DIRECTED_DEFAULT = 0b0000_0001;
        const WEIGHTED         = 0b0000_0010;
        const MULTI_EDGES      = 0b0000_0100;
        const LOOPS            = 0b0000_1000;
        const MIXED_MODE       = 0b0001_0000;
    }
}

impl GraphFlags {
    #[inline]
    pub fn directed_default(self) -> bool {
        self.contains(GraphFlags::DIRECTED_DEFAULT)
    }

    #[inline]
    pub fn weighted(self) -> bool {
        self.contains(GraphFlags::WEIGHTED)
    }

    #[inline]
    pub fn multi_edges_allowed(self) -> bool {
        self.contains(GraphFlags::MULTI_EDGES)
    }

    #[inline]
    pub fn loops_allowed(self) -> bool {
        self.contains(GraphFlags::LOOPS)
    }

    #[inline]
    pub fn mixed_mode(self) -> bool {
        self.contains(GraphFlags::MIXED_MODE)
    }
}

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * GRAPH OPTIONS                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Graph-level construction option
///
/// ## Description
/// A single functional option applied by [`Graph::new`][crate::Graph::new] during
/// construction. Options are applied left-to-right over an initially empty
/// [`GraphFlags`] value (plus mixed-mode pre-set when constructed via
/// [`Graph::new_mixed`][crate::Graph::new_mixed]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphOption {
    /// Set the orientation used for new edges when no per-edge override is given.
    SetDefaultDirectedness(bool),
    /// Admit non-zero edge weights.
    EnableWeighted,
    /// Admit parallel edges between identical endpoints.
    EnableMultiEdges,
    /// Admit edges whose source equals their destination.
    EnableLoops,
    /// Admit per-edge directedness overrides.
    EnableMixedMode,
}

/// Fold a left-to-right option list into a [`GraphFlags`] value, starting from
/// `base`.
pub fn apply_options(base: GraphFlags, options: &[GraphOption]) -> GraphFlags {
    let mut flags = base;
    for option in options {
        match *option {
            GraphOption::SetDefaultDirectedness(true) => flags.insert(GraphFlags::DIRECTED_DEFAULT),
            GraphOption::SetDefaultDirectedness(false) => flags.remove(GraphFlags::DIRECTED_DEFAULT),
            GraphOption::EnableWeighted => flags.insert(GraphFlags::WEIGHTED),
            GraphOption::EnableMultiEdges => flags.insert(GraphFlags::MULTI_EDGES),
            GraphOption::EnableLoops => flags.insert(GraphFlags::LOOPS),
            GraphOption::EnableMixedMode => flags.insert(GraphFlags::MIXED_MODE),
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_fold_left_to_right() {
        let flags = apply_options(
            GraphFlags::empty(),
            &[
                GraphOption::SetDefaultDirectedness(true),
                GraphOption::EnableWeighted,
                GraphOption::EnableLoops,
            ],
        );
        assert!(flags.directed_default());
        assert!(flags.weighted());
        assert!(flags.loops_allowed());
        assert!(!flags.multi_edges_allowed());
        assert!(!flags.mixed_mode());
    }

    #[test]
    fn later_directedness_option_wins() {
        let flags = apply_options(
            GraphFlags::empty(),
            &[
                GraphOption::SetDefaultDirectedness(true),
                GraphOption::SetDefaultDirectedness(false),
            ],
        );
        assert!(!flags.directed_default());
    }
}

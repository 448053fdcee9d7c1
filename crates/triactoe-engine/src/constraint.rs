//! Active move constraints.

use triactoe_core::Slot;

/// The constraint pinning where the current player may move.
///
/// Nesting the micro selector inside the macro variant makes the invariant
/// "a micro selector implies a macro selector" hold by construction: there
/// is no way to express a pinned micro-block without a pinned macro-block.
///
/// # Examples
///
/// ```
/// use triactoe_core::Slot;
/// use triactoe_engine::Constraint;
///
/// let constraint = Constraint::Macro {
///     block: Slot::new(1, 2),
///     micro: Some(Slot::new(0, 0)),
/// };
/// assert_eq!(constraint.active_macro(), Some(Slot::new(1, 2)));
/// assert_eq!(constraint.active_micro(), Some(Slot::new(0, 0)));
/// assert_eq!(Constraint::Free.active_macro(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Constraint {
    /// Free choice of any unwon macro-block.
    #[default]
    Free,
    /// Pinned to one macro-block, optionally to one micro-block within it.
    Macro {
        /// The macro-block the current player must play in.
        block: Slot,
        /// The required micro-block within `block`, or `None` for free
        /// choice of any unwon micro-block inside it.
        micro: Option<Slot>,
    },
}

impl Constraint {
    /// Builds the constraint from the optional selector pair of a persisted
    /// snapshot.
    ///
    /// Returns `None` for the invalid combination of a micro selector
    /// without a macro selector.
    #[must_use]
    pub fn from_selectors(macro_block: Option<Slot>, micro: Option<Slot>) -> Option<Self> {
        match (macro_block, micro) {
            (None, Some(_)) => None,
            (None, None) => Some(Self::Free),
            (Some(block), micro) => Some(Self::Macro { block, micro }),
        }
    }

    /// Returns the pinned macro-block, if any.
    #[must_use]
    pub const fn active_macro(self) -> Option<Slot> {
        match self {
            Self::Free => None,
            Self::Macro { block, .. } => Some(block),
        }
    }

    /// Returns the pinned micro-block within the pinned macro-block, if
    /// any.
    #[must_use]
    pub const fn active_micro(self) -> Option<Slot> {
        match self {
            Self::Free | Self::Macro { micro: None, .. } => None,
            Self::Macro {
                micro: Some(micro), ..
            } => Some(micro),
        }
    }
}

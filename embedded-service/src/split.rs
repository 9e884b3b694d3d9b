//! Split keyboard topology

/// Role of this node in the keyboard topology.
///
/// Decided once at start up and fixed for the lifetime of the firmware.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplitRole {
    /// Single-piece keyboard, no split transport
    Standalone,
    /// Coordinating half of a split keyboard, talks to the host
    Central,
    /// Half of a split keyboard that reports to the central
    Peripheral,
}

impl SplitRole {
    /// Role selected by the `split` and `split-role-central` features
    pub const fn from_build() -> Self {
        if !cfg!(feature = "split") {
            Self::Standalone
        } else if cfg!(feature = "split-role-central") {
            Self::Central
        } else {
            Self::Peripheral
        }
    }

    /// Returns true for a split build that isn't the central
    pub const fn is_split_peripheral(self) -> bool {
        matches!(self, Self::Peripheral)
    }
}

impl Default for SplitRole {
    fn default() -> Self {
        Self::from_build()
    }
}

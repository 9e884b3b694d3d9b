//! Soft off: the lowest power state the firmware can enter on its own.
//!
//! Leaving soft off takes explicit user action (a wake key or a reset), so a successful request never returns to
//! the caller.
use crate::Never;

/// Soft off error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoftOffError {
    /// The power manager refused the state transition
    Rejected,
    /// Platform specific failure
    Other,
}

/// Power manager able to put the system into soft off.
pub trait SoftOff {
    /// Enter soft off.
    ///
    /// Only returns if the transition failed.
    fn soft_off(&self) -> Result<Never, SoftOffError>;
}

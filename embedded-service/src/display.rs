//! Display capability consumed by services that need to control a panel
//!
//! The display driver owns the device and any bus locking. Consumers only hold a shared reference and
//! use it to query readiness and switch the panel off.

/// A display device chosen for the board.
pub trait Display {
    /// Returns true once the driver has initialized the panel
    fn is_ready(&self) -> bool;

    /// Turn blanking on, i.e. stop driving the panel.
    ///
    /// The off command must have been written to the bus by the time this returns. Callers rely on this to
    /// sequence the command ahead of anything that suspends the bus. Transfer failures stay with the driver.
    fn blanking_on(&self);
}

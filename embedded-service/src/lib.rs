//! Embedded Services Interface Exports
//!
//! Contracts shared between keyboard behaviors and the subsystems they drive: the behavior dispatch types, the
//! split topology, and the display and power capabilities consumed by behaviors.

#![no_std]
#![warn(missing_docs)]

pub mod behavior;
pub mod display;
pub mod fmt;
pub mod power;
pub mod split;

/// Global Mutex type, ThreadModeRawMutex is used in a microcontroller context, whereas CriticalSectionRawMutex is used
/// in a standard context for unit testing.
///
/// Used because ThreadModeRawMutex is not unit test friendly
/// but CriticalSectionRawMutex would incur a significant performance impact, since it disables interrupts.
#[cfg(any(test, not(target_os = "none"), target_arch = "riscv32"))]
pub type GlobalRawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
/// Global Mutex type, ThreadModeRawMutex is used in a microcontroller context, whereas CriticalSectionRawMutex is used
/// in a standard context for unit testing.
///
/// Used because ThreadModeRawMutex is not unit test friendly
/// but CriticalSectionRawMutex would incur a significant performance impact, since it disables interrupts.
#[cfg(all(not(test), target_os = "none", not(target_arch = "riscv32")))]
pub type GlobalRawMutex = embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;

/// Uninhabited type for operations that never complete successfully by returning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

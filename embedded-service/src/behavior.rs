//! Behavior dispatch contract
//!
//! A behavior is a named action bound to a key. The keymap resolves a [`Binding`] to a behavior instance by name
//! and delivers press/release events through the [`BehaviorDriver`] callbacks. Instances are declared once at start
//! up and held in a [`Registry`] for the lifetime of the firmware.
use embassy_time::Instant;
use heapless::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Registry error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No more room for behavior instances
    Full,
    /// A behavior with this name is already registered
    DuplicateName,
    /// No behavior registered under the requested name
    NotFound,
}

/// Result reported back to the keymap after handling a binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[num_enum(error_type(name = InvalidBehaviorResult, constructor = InvalidBehaviorResult))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BehaviorResult {
    /// Event was consumed, the keymap must not look at lower layers
    Opaque = 0,
    /// Event falls through to the next active layer
    Transparent = 1,
}

/// Conversion error for [`BehaviorResult`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidBehaviorResult(pub u8);

/// Where a behavior has to run on a split keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Locality {
    /// Runs only on the central
    Central,
    /// Runs on the node whose key triggered it
    EventSource,
    /// Runs on every node
    Global,
}

/// Binding descriptor, as stored in the keymap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    /// Name of the behavior instance this binding refers to
    pub behavior_dev: &'static str,
    /// First binding parameter
    pub param1: u32,
    /// Second binding parameter
    pub param2: u32,
}

impl Binding {
    /// Binding without parameters
    pub const fn new(behavior_dev: &'static str) -> Self {
        Self {
            behavior_dev,
            param1: 0,
            param2: 0,
        }
    }
}

/// Metadata of the key event that triggered a binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BindingEvent {
    /// Active layer the binding was resolved on
    pub layer: u8,
    /// Key position
    pub position: u32,
    /// Time the key changed state
    pub timestamp: Instant,
}

/// Callbacks a behavior exposes to the keymap.
pub trait BehaviorDriver {
    /// Where this behavior runs on a split keyboard
    fn locality(&self) -> Locality;

    /// Called when a key bound to this behavior is pressed
    fn binding_pressed(&self, binding: &Binding, event: BindingEvent) -> BehaviorResult;

    /// Called when a key bound to this behavior is released
    fn binding_released(&self, binding: &Binding, event: BindingEvent) -> BehaviorResult;
}

struct Entry<'a> {
    name: &'static str,
    driver: &'a dyn BehaviorDriver,
}

/// Fixed capacity table of named behavior instances.
pub struct Registry<'a, const N: usize> {
    entries: Vec<Entry<'a>, N>,
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a behavior instance under `name`
    pub fn register(&mut self, name: &'static str, driver: &'a dyn BehaviorDriver) -> Result<(), Error> {
        if self.contains(name) {
            return Err(Error::DuplicateName);
        }

        self.entries.push(Entry { name, driver }).map_err(|_| Error::Full)
    }

    /// Look up a behavior instance by name
    pub fn get(&self, name: &str) -> Option<&'a dyn BehaviorDriver> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.driver)
    }

    /// Returns true if a behavior is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Maximum number of instances
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of registered instances
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver a press or release to the behavior named by `binding`
    pub fn invoke(&self, binding: &Binding, event: BindingEvent, pressed: bool) -> Result<BehaviorResult, Error> {
        let Some(driver) = self.get(binding.behavior_dev) else {
            crate::warn!("No behavior registered for binding {}", binding.behavior_dev);
            return Err(Error::NotFound);
        };

        Ok(if pressed {
            driver.binding_pressed(binding, event)
        } else {
            driver.binding_released(binding, event)
        })
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

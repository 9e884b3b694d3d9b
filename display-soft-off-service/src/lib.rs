//! Display soft off behavior
//!
//! Blanks the chosen display, then puts the keyboard into soft off.
//!
//! The generic soft off path suspends the bus shared with the display before the display driver gets to send
//! its own off command, which leaves OLED panels lit after shutdown. This behavior sends the off command itself,
//! while the bus is still up, and only then asks the power manager for soft off.
//!
//! On a split peripheral the sequence runs on press, matching the regular soft off behavior. On a central or a
//! non-split keyboard it runs on release.
#![no_std]

use embedded_services::behavior::{self, BehaviorDriver, BehaviorResult, Binding, BindingEvent, Locality, Registry};
use embedded_services::display::Display;
use embedded_services::power::soft_off::SoftOff;
use embedded_services::split::SplitRole;
use embedded_services::{debug, info};

/// Name the behavior is usually bound under in keymaps
pub const DEFAULT_NAME: &str = "display_soft_off";

/// Behavior configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Role of this node, fixed for the lifetime of the behavior
    pub role: SplitRole,
}

impl Config {
    /// Config for the given role
    pub const fn new(role: SplitRole) -> Self {
        Self { role }
    }
}

/// Behavior instance.
///
/// Holds no mutable state: instances are independent of each other and of how often they're invoked.
#[derive(Copy, Clone)]
pub struct DisplaySoftOff<'a> {
    config: Config,
    display: Option<&'a dyn Display>,
    power: &'a dyn SoftOff,
}

impl<'a> DisplaySoftOff<'a> {
    /// Create a behavior instance
    ///
    /// `display` is `None` when the board has no chosen display.
    pub const fn new(config: Config, display: Option<&'a dyn Display>, power: &'a dyn SoftOff) -> Self {
        Self { config, display, power }
    }

    /// Returns the configuration of this instance
    pub fn config(&self) -> Config {
        self.config
    }

    fn blank_display(&self) {
        let Some(display) = self.display else {
            return;
        };

        if display.is_ready() {
            info!("Blanking display before soft off");
            display.blanking_on();
        }
    }

    fn power_off(&self) {
        // Only comes back if the power manager failed, there is nothing left to do here
        let Err(_) = self.power.soft_off();
    }

    fn blank_and_power_off(&self) {
        self.blank_display();
        self.power_off();
    }
}

impl BehaviorDriver for DisplaySoftOff<'_> {
    fn locality(&self) -> Locality {
        Locality::Global
    }

    fn binding_pressed(&self, _binding: &Binding, _event: BindingEvent) -> BehaviorResult {
        if self.config.role.is_split_peripheral() {
            self.blank_and_power_off();
        }

        BehaviorResult::Opaque
    }

    fn binding_released(&self, _binding: &Binding, _event: BindingEvent) -> BehaviorResult {
        // Central and non-split boards, the bus is still active here
        if !self.config.role.is_split_peripheral() {
            self.blank_and_power_off();
        }

        BehaviorResult::Opaque
    }
}

/// Create `N` behavior instances sharing the same collaborators.
pub fn instances<'a, const N: usize>(
    config: Config,
    display: Option<&'a dyn Display>,
    power: &'a dyn SoftOff,
) -> [DisplaySoftOff<'a>; N] {
    core::array::from_fn(|_| DisplaySoftOff::new(config, display, power))
}

/// Register each instance under the name at the same index.
///
/// Either all instances are registered or, on error, none of them.
pub fn register_all<'a, const N: usize, const M: usize>(
    registry: &mut Registry<'a, M>,
    names: &[&'static str; N],
    instances: &'a [DisplaySoftOff<'a>; N],
) -> Result<(), behavior::Error> {
    if registry.len() + N > registry.capacity() {
        return Err(behavior::Error::Full);
    }

    for (i, &name) in names.iter().enumerate() {
        if registry.contains(name) || names.iter().skip(i + 1).any(|&other| other == name) {
            return Err(behavior::Error::DuplicateName);
        }
    }

    for (&name, instance) in names.iter().zip(instances.iter()) {
        registry.register(name, instance)?;
        debug!("Registered display soft off instance {}", name);
    }

    Ok(())
}

//! Component lifecycle driving.

/// The ordered phases a [`Lifecycle`] component moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// One-time setup.
    Init,
    /// State loading.
    Load,
    /// Output production.
    Render,
    /// Teardown.
    Unload,
}

impl Phase {
    const ALL: [Phase; 4] = [Phase::Init, Phase::Load, Phase::Render, Phase::Unload];
}

/// A component with phase hooks, all optional.
pub trait Lifecycle {
    /// Called once before anything else.
    fn on_init(&mut self) {}

    /// Called after init, before rendering.
    fn on_load(&mut self) {}

    /// Called to produce output.
    fn on_render(&mut self) {}

    /// Called last.
    fn on_unload(&mut self) {}
}

/// Drives a [`Lifecycle`] component through its phases in order.
///
/// # Example
///
/// ```rust
/// use matchkit::web::{Lifecycle, LifecycleDriver, Phase};
///
/// #[derive(Default)]
/// struct Widget {
///     loaded: bool,
/// }
///
/// impl Lifecycle for Widget {
///     fn on_load(&mut self) {
///         self.loaded = true;
///     }
/// }
///
/// let mut widget = Widget::default();
/// let mut driver = LifecycleDriver::new();
/// driver.run(&mut widget);
///
/// assert!(widget.loaded);
/// assert_eq!(driver.invoked().len(), 4);
/// ```
#[derive(Default)]
pub struct LifecycleDriver {
    invoked: Vec<Phase>,
}

impl LifecycleDriver {
    /// Create a driver with an empty phase log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every phase in order.
    pub fn run(&mut self, component: &mut impl Lifecycle) {
        self.run_until(component, Phase::Unload);
    }

    /// Run phases in order, stopping after the given phase.
    pub fn run_until(&mut self, component: &mut impl Lifecycle, last: Phase) {
        for phase in Phase::ALL {
            if phase > last {
                break;
            }
            match phase {
                Phase::Init => component.on_init(),
                Phase::Load => component.on_load(),
                Phase::Render => component.on_render(),
                Phase::Unload => component.on_unload(),
            }
            self.invoked.push(phase);
        }
    }

    /// The phases invoked so far, in order.
    #[must_use]
    pub fn invoked(&self) -> &[Phase] {
        &self.invoked
    }
}

use std::fmt;

use crate::{Easing, Speed};

/// Called once when a scroll finishes (or immediately when none was needed).
///
/// The argument is the container that was scrolled, or `None` when the elements had no
/// scrollable container.
pub type CompleteCallback<N> = Box<dyn FnOnce(Option<&N>)>;

/// Called on every animation frame with the container and the offset just applied.
pub type StepCallback<N> = Box<dyn FnMut(&N, f64)>;

/// Options for [`crate::Controller::scroll_into_view`].
///
/// `Default` is a smooth scroll with the default duration and easing and no callbacks;
/// [`ScrollIntoViewOptions::immediate`] turns animation off.
pub struct ScrollIntoViewOptions<N> {
    /// Animate the scroll. When `false` the offset is assigned in one step.
    pub smooth: bool,
    /// Animation length; `None` means [`Speed::Normal`].
    pub duration_ms: Option<u64>,
    /// Animation curve; `None` means [`Easing::default`].
    pub easing: Option<Easing>,
    pub complete: Option<CompleteCallback<N>>,
    pub step: Option<StepCallback<N>>,
}

impl<N> Default for ScrollIntoViewOptions<N> {
    fn default() -> Self {
        Self {
            smooth: true,
            duration_ms: None,
            easing: None,
            complete: None,
            step: None,
        }
    }
}

impl<N> fmt::Debug for ScrollIntoViewOptions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollIntoViewOptions")
            .field("smooth", &self.smooth)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("complete", &self.complete.as_ref().map(|_| ".."))
            .field("step", &self.step.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<N> ScrollIntoViewOptions<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// No animation: the offset is assigned at once.
    pub fn immediate() -> Self {
        Self {
            smooth: false,
            ..Self::default()
        }
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.duration_ms = Some(speed.duration_ms());
        self
    }

    /// Sets the duration from a speed name; unknown names leave the duration unchanged.
    pub fn with_speed_name(self, name: &str) -> Self {
        match Speed::from_name(name) {
            Some(speed) => self.with_speed(speed),
            None => {
                siwarn!(name, "unknown speed name, keeping duration");
                self
            }
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Sets the easing from a name; unknown names leave the easing unchanged.
    pub fn with_easing_name(self, name: &str) -> Self {
        match Easing::from_name(name) {
            Some(easing) => self.with_easing(easing),
            None => {
                siwarn!(name, "unknown easing name, keeping easing");
                self
            }
        }
    }

    pub fn on_complete(mut self, complete: impl FnOnce(Option<&N>) + 'static) -> Self {
        self.complete = Some(Box::new(complete));
        self
    }

    pub fn on_step(mut self, step: impl FnMut(&N, f64) + 'static) -> Self {
        self.step = Some(Box::new(step));
        self
    }

    pub fn resolved_duration_ms(&self) -> u64 {
        self.duration_ms.unwrap_or(Speed::NORMAL_MS)
    }

    pub fn resolved_easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }
}

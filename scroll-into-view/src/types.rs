/// The vertical extent of an element's box.
///
/// Hosts report bounding rects relative to the visual viewport; the planner re-bases them onto
/// the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The smallest rect covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn translate(&self, dy: f64) -> Rect {
        Rect {
            top: self.top + dy,
            bottom: self.bottom + dy,
        }
    }
}

/// Direction of a scroll correction along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Towards larger offsets (content moves up, the view moves down).
    Forward,
    /// Towards smaller offsets.
    Backward,
}

/// A computed scroll correction for a set of elements.
///
/// Produced by [`crate::plan_scroll_into_view`]. All offsets are in the container's scroll
/// coordinate space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPlan<N> {
    /// The scrollable ancestor the correction applies to.
    pub container: N,
    /// The container's scroll offset when the plan was made.
    pub scroll_top: f64,
    /// The container's visible height.
    pub viewport_height: f64,
    /// Union of the elements' boxes, relative to the container's top edge.
    pub bounds: Rect,
    /// The offset to scroll to, or `None` when the elements are already visible.
    pub target: Option<f64>,
}

impl<N> ScrollPlan<N> {
    pub fn needs_scroll(&self) -> bool {
        self.target.is_some()
    }

    /// Signed distance from the current offset to the target (zero when no scroll is needed).
    pub fn delta(&self) -> f64 {
        self.target.map_or(0.0, |t| t - self.scroll_top)
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        let delta = self.delta();
        if delta > 0.0 {
            Some(ScrollDirection::Forward)
        } else if delta < 0.0 {
            Some(ScrollDirection::Backward)
        } else {
            None
        }
    }
}

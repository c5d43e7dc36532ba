use std::fmt;

use scroll_into_view::{ScrollPlan, ScrollTree, clamp_scroll_top, plan_scroll_into_view};

use crate::{CompleteCallback, ScrollIntoViewOptions, StepCallback, Tween};

struct Animation<N> {
    container: N,
    tween: Tween,
    complete: Option<CompleteCallback<N>>,
    step: Option<StepCallback<N>>,
}

/// Runs scroll-into-view requests, animated or immediate, against a host tree.
///
/// The controller holds no UI objects, only the running animations. Adapters drive it by calling:
/// - `scroll_into_view` / `scroll_to` when a scroll is requested
/// - `tick(tree, now_ms)` on every frame while `is_animating()` (e.g. from
///   `requestAnimationFrame`)
/// - `on_scroll(container)` when the user scrolls a container themselves
///
/// At most one animation runs per container: a new request stops the previous one where it is,
/// without firing its completion callback.
pub struct Controller<N> {
    animations: Vec<Animation<N>>,
}

impl<N> Default for Controller<N> {
    fn default() -> Self {
        Self {
            animations: Vec::new(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Controller<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.animations.iter().map(|a| (&a.container, &a.tween)))
            .finish()
    }
}

impl<N: Clone + PartialEq> Controller<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn is_animating_container(&self, container: &N) -> bool {
        self.animations.iter().any(|a| a.container == *container)
    }

    /// The tween running on `container`, if any.
    pub fn tween_for(&self, container: &N) -> Option<&Tween> {
        self.animations
            .iter()
            .find(|a| a.container == *container)
            .map(|a| &a.tween)
    }

    /// Stops the animation on `container` at its current offset.
    ///
    /// The completion callback of a stopped animation never runs. Returns `true` if an animation
    /// was running.
    pub fn stop(&mut self, container: &N) -> bool {
        let before = self.animations.len();
        self.animations.retain(|a| a.container != *container);
        let stopped = self.animations.len() != before;
        if stopped {
            sidebug!("Controller::stop");
        }
        stopped
    }

    pub fn stop_all(&mut self) {
        if !self.animations.is_empty() {
            sidebug!(count = self.animations.len(), "Controller::stop_all");
        }
        self.animations.clear();
    }

    /// Call this when the UI reports a user-initiated scroll of `container`.
    ///
    /// This cancels the animation on that container, if any.
    pub fn on_scroll(&mut self, container: &N) {
        self.stop(container);
    }

    /// Scrolls the nearest scrollable ancestor of `elements` just enough to show them.
    ///
    /// - Empty `elements`: nothing happens and no callback runs.
    /// - No scrollable container: only the completion callback runs (with `None`).
    /// - Already visible: the offset is untouched; the completion callback runs at once.
    /// - Otherwise the container is scrolled to the plan's target, animated when
    ///   `options.smooth` is set (see [`Controller::scroll_to`]).
    ///
    /// Returns the plan that was acted on, if there was a container.
    pub fn scroll_into_view<T>(
        &mut self,
        tree: &mut T,
        elements: &[N],
        mut options: ScrollIntoViewOptions<N>,
        now_ms: u64,
    ) -> Option<ScrollPlan<N>>
    where
        T: ScrollTree<Node = N> + ?Sized,
    {
        if elements.is_empty() {
            return None;
        }

        let Some(plan) = plan_scroll_into_view(&*tree, elements) else {
            if let Some(complete) = options.complete.take() {
                complete(None);
            }
            return None;
        };

        match plan.target {
            Some(target) => self.scroll_to(tree, &plan.container, target, options, now_ms),
            None => {
                if let Some(complete) = options.complete.take() {
                    complete(Some(&plan.container));
                }
            }
        }
        Some(plan)
    }

    /// Scrolls `container` to `offset` (clamped to its scroll range).
    ///
    /// Any animation already running on `container` is stopped first. With `options.smooth`
    /// and a non-zero duration a tween is started and the completion callback runs from the
    /// `tick` that finishes it; otherwise the offset is assigned now and the callback runs
    /// before this returns.
    pub fn scroll_to<T>(
        &mut self,
        tree: &mut T,
        container: &N,
        offset: f64,
        options: ScrollIntoViewOptions<N>,
        now_ms: u64,
    ) where
        T: ScrollTree<Node = N> + ?Sized,
    {
        self.stop(container);

        let to = clamp_scroll_top(&*tree, container, offset);
        let duration_ms = options.resolved_duration_ms();

        if !options.smooth || duration_ms == 0 {
            sitrace!(to, "Controller::scroll_to: immediate");
            tree.set_scroll_top(container, to);
            if let Some(complete) = options.complete {
                complete(Some(container));
            }
            return;
        }

        let from = tree.scroll_top(container);
        let tween = Tween::new(from, to, now_ms, duration_ms, options.resolved_easing());
        sidebug!(from, to, duration_ms, easing = ?tween.easing, "Controller::scroll_to: animate");
        self.animations.push(Animation {
            container: container.clone(),
            tween,
            complete: options.complete,
            step: options.step,
        });
    }

    /// Advances every running animation to `now_ms`.
    ///
    /// Each container's offset is set to its tween sample and its step callback is invoked with
    /// the offset the host reports back. Finished animations are removed and their completion
    /// callbacks run, in start order.
    ///
    /// Returns `true` while any animation is still running.
    pub fn tick<T>(&mut self, tree: &mut T, now_ms: u64) -> bool
    where
        T: ScrollTree<Node = N> + ?Sized,
    {
        let mut finished = Vec::new();
        let mut i = 0;
        while i < self.animations.len() {
            let anim = &mut self.animations[i];
            tree.set_scroll_top(&anim.container, anim.tween.sample(now_ms));
            let applied = tree.scroll_top(&anim.container);
            if let Some(step) = anim.step.as_mut() {
                step(&anim.container, applied);
            }

            if anim.tween.is_done(now_ms) {
                finished.push(self.animations.remove(i));
            } else {
                i += 1;
            }
        }

        for anim in finished {
            sitrace!(to = anim.tween.to, "Controller::tick: finished");
            if let Some(complete) = anim.complete {
                complete(Some(&anim.container));
            }
        }

        self.is_animating()
    }
}

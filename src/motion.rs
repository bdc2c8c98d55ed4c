//! Reveal-on-view state and the style attributes that drive the CSS transitions.
//!
//! A [`RevealTrigger`] is a one-shot machine: it starts [`RevealState::Hidden`] and
//! moves to [`RevealState::Visible`] the first time its region intersects the
//! viewport. Nothing moves it back. The browser's CSS transition engine does the
//! actual interpolation; this module only decides which state an element is in and
//! how long it waits before transitioning.

use std::time::Duration;

/// Any overlap reveals. A nonzero ratio is unreachable for elements taller than
/// `1 / ratio` viewports.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// How an element reached its visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animated,
    /// No transition, the host can't observe intersections.
    Instant,
}

/// One intersection observation for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrigger {
    state: RevealState,
    motion: Option<Motion>,
    threshold: f64,
    observing: bool,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            state: RevealState::Hidden,
            motion: None,
            threshold,
            observing: true,
        }
    }

    /// Applies what the host reports about intersection observation. Without it the
    /// element is shown immediately. Returns true if this call revealed it.
    pub fn sync_host(&mut self, observer_available: bool) -> bool {
        if observer_available {
            return false;
        }
        self.degrade()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn motion(&self) -> Option<Motion> {
        self.motion
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Whether intersection events still matter. False once revealed.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feeds one observation. Returns true only for the call that revealed the element.
    pub fn observe(&mut self, entry: Intersection) -> bool {
        if !self.observing || !entry.is_intersecting {
            return false;
        }
        // a zero threshold fires on any overlap, including a zero-area edge touch
        if self.threshold > 0.0 && entry.ratio < self.threshold {
            return false;
        }
        self.reveal(Motion::Animated)
    }

    /// Reveals without waiting for the viewport, used for elements animated on mount.
    pub fn reveal_now(&mut self) -> bool {
        self.reveal(Motion::Animated)
    }

    /// Skips straight to the final state with no transition.
    pub fn degrade(&mut self) -> bool {
        self.reveal(Motion::Instant)
    }

    fn reveal(&mut self, motion: Motion) -> bool {
        self.observing = false;
        if self.state == RevealState::Visible {
            return false;
        }
        self.state = RevealState::Visible;
        self.motion = Some(motion);
        true
    }
}

/// Fixed per-child delay for siblings revealed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const HERO: Stagger = Stagger::every(Duration::from_millis(100));
    pub const SKILLS: Stagger = Stagger::every(Duration::from_millis(200));
    pub const PROJECTS: Stagger = Stagger::every(Duration::from_millis(100));

    pub const fn every(step: Duration) -> Self {
        Self {
            base: Duration::ZERO,
            step,
        }
    }

    pub const fn after(base: Duration, step: Duration) -> Self {
        Self { base, step }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let step = u32::try_from(index)
            .ok()
            .and_then(|i| self.step.checked_mul(i))
            .unwrap_or(Duration::MAX);
        self.base.saturating_add(step)
    }

    /// Start times of `count` children whose container is revealed at `revealed_at`.
    pub fn start_times(&self, revealed_at: Duration, count: usize) -> Vec<Duration> {
        (0..count)
            .map(|i| revealed_at.saturating_add(self.delay_for(i)))
            .collect()
    }
}

/// The pre-reveal pose of an element and how long it takes to leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Hero items: 60px below, 600ms.
    FadeUp,
    /// Sections and cards: 50px below, 600ms.
    Rise,
    /// Nav bar: 100px above, 500ms.
    SlideDown,
    /// Opacity only.
    Fade { duration: Duration },
}

impl Preset {
    pub fn offset_px(self) -> i32 {
        match self {
            Self::FadeUp => 60,
            Self::Rise => 50,
            Self::SlideDown => -100,
            Self::Fade { .. } => 0,
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Self::FadeUp | Self::Rise => Duration::from_millis(600),
            Self::SlideDown => Duration::from_millis(500),
            Self::Fade { duration } => duration,
        }
    }
}

/// Markup attributes for an element in a given reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub preset: Preset,
    pub delay: Duration,
}

impl RevealStyle {
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Value of the `data-reveal` attribute. The stylesheet hides `hidden` elements
    /// only while the motion layer is active, so without it content stays opaque.
    pub fn phase(state: RevealState, motion: Option<Motion>) -> &'static str {
        match (state, motion) {
            (RevealState::Hidden, _) => "hidden",
            (RevealState::Visible, Some(Motion::Instant)) => "instant",
            (RevealState::Visible, _) => "visible",
        }
    }

    pub fn inline(&self) -> String {
        format!(
            "--reveal-offset:{}px;--reveal-duration:{}ms;--reveal-delay:{}ms",
            self.preset.offset_px(),
            self.preset.duration().as_millis(),
            self.delay.as_millis()
        )
    }
}

//! Viewport-driven reveal controller.
//!
//! Holds everything the page chrome derives from raw browser events: which
//! sections have scrolled into view, whether the header should be frosted,
//! where the custom cursor sits and how it looks, and (on the coming-soon
//! page) the launch countdown. Geometry is never computed here; callers feed
//! in the already-decided boolean from their intersection observer.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::countdown::{Countdown, CountdownTarget};

/// Scroll offset past which the header gets its frosted background.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Viewports at least this wide get the custom cursor.
pub const LARGE_SCREEN_MIN_WIDTH: f64 = 1024.0;

/// Fraction of a region that must intersect before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the observed viewport by 10% top and bottom.
pub const REVEAL_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

const RING_OFFSET: f64 = 25.0;
const EXPANDED_RING_OFFSET: f64 = 50.0;
const CARET_OFFSET_X: f64 = 2.0;
const CARET_OFFSET_Y: f64 = 20.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("region `{0}` registered more than once")]
    DuplicateRegion(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
}

impl ScrollState {
    pub fn is_past_threshold(&self) -> bool {
        self.offset_y > SCROLL_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSize {
    // assume desktop until the first resize notification says otherwise
    fn default() -> Self {
        Self {
            width: LARGE_SCREEN_MIN_WIDTH,
            height: 0.0,
        }
    }
}

impl ViewportSize {
    pub fn is_large_screen(&self) -> bool {
        self.width >= LARGE_SCREEN_MIN_WIDTH
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    #[default]
    Default,
    HoveringInteractiveArea,
    HoveringText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Frosted,
}

/// What the custom cursor layer should draw, already offset so that the
/// graphic is centred on the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorGraphic {
    Ring { left: f64, top: f64 },
    Expanded { left: f64, top: f64 },
    Caret { left: f64, top: f64 },
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevealEvent {
    Scroll { offset_y: f64 },
    Pointer { x: f64, y: f64 },
    Visibility { id: String, intersecting: bool },
    Mode(InteractionMode),
    Tick { now: DateTime<Utc> },
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct ViewportRevealController {
    regions: Vec<Region>,
    pointer: PointerState,
    scroll: ScrollState,
    viewport: ViewportSize,
    mode: InteractionMode,
    countdown_target: Option<CountdownTarget>,
    countdown: Countdown,
    hide_cursor_on_small_screens: bool,
    version: u64,
    disposed: bool,
}

impl ViewportRevealController {
    pub fn new<I, S>(region_ids: I) -> Result<Self, RevealError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut controller = Self::default();
        for id in region_ids {
            let id = id.into();
            if controller.regions.iter().any(|r| r.id == id) {
                return Err(RevealError::DuplicateRegion(id));
            }
            controller.regions.push(Region {
                id,
                is_visible: false,
            });
        }
        Ok(controller)
    }

    /// Time-boxed variant: fix the countdown target relative to `started_at`
    /// and compute the initial fields.
    pub fn with_countdown(mut self, started_at: DateTime<Utc>) -> Self {
        let target = CountdownTarget::starting_at(started_at);
        self.countdown = target.remaining(started_at);
        self.countdown_target = Some(target);
        self
    }

    pub fn hide_cursor_on_small_screens(mut self, hide: bool) -> Self {
        self.hide_cursor_on_small_screens = hide;
        self
    }

    /// Apply one event. Returns whether any observable state changed.
    pub fn dispatch(&mut self, event: RevealEvent) -> bool {
        if self.disposed {
            log::trace!("dropping {event:?} delivered after dispose");
            return false;
        }
        let changed = match event {
            RevealEvent::Scroll { offset_y } => self.apply_scroll(offset_y),
            RevealEvent::Pointer { x, y } => self.apply_pointer(x, y),
            RevealEvent::Visibility { id, intersecting } => {
                self.apply_visibility(&id, intersecting)
            }
            RevealEvent::Mode(mode) => self.apply_mode(mode),
            RevealEvent::Tick { now } => self.apply_tick(now),
            RevealEvent::Resize { width, height } => self.apply_resize(width, height),
        };
        if changed {
            self.version += 1;
        }
        changed
    }

    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        self.dispatch(RevealEvent::Scroll { offset_y })
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(RevealEvent::Pointer { x, y })
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) -> bool {
        self.dispatch(RevealEvent::Mode(mode))
    }

    pub fn enter(&mut self, mode: InteractionMode) -> bool {
        self.set_interaction_mode(mode)
    }

    pub fn leave(&mut self) -> bool {
        self.set_interaction_mode(InteractionMode::Default)
    }

    pub fn observe_region_visibility(&mut self, id: &str, intersecting: bool) -> bool {
        self.dispatch(RevealEvent::Visibility {
            id: id.to_string(),
            intersecting,
        })
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.dispatch(RevealEvent::Tick { now })
    }

    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        self.dispatch(RevealEvent::Resize { width, height })
    }

    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("disposing reveal controller at version {}", self.version);
        }
        self.disposed = true;
    }

    fn apply_scroll(&mut self, offset_y: f64) -> bool {
        if self.scroll.offset_y == offset_y {
            return false;
        }
        self.scroll.offset_y = offset_y;
        true
    }

    fn apply_pointer(&mut self, x: f64, y: f64) -> bool {
        let next = PointerState { x, y };
        if self.pointer == next {
            return false;
        }
        self.pointer = next;
        true
    }

    fn apply_visibility(&mut self, id: &str, intersecting: bool) -> bool {
        // one-way latch: leaving the viewport never hides a region again
        if !intersecting {
            return false;
        }
        match self.regions.iter_mut().find(|r| r.id == id) {
            Some(region) if !region.is_visible => {
                log::debug!("revealing region {id}");
                region.is_visible = true;
                true
            }
            Some(_) => false,
            None => {
                log::debug!("ignoring visibility for unknown region {id}");
                false
            }
        }
    }

    fn apply_mode(&mut self, mode: InteractionMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    fn apply_tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(target) = self.countdown_target else {
            return false;
        };
        let next = target.remaining(now);
        if next == self.countdown {
            return false;
        }
        self.countdown = next;
        true
    }

    fn apply_resize(&mut self, width: f64, height: f64) -> bool {
        let next = ViewportSize { width, height };
        if self.viewport == next {
            return false;
        }
        self.viewport = next;
        true
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Unknown ids read as not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.regions.iter().any(|r| r.id == id && r.is_visible)
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn is_past_threshold(&self) -> bool {
        self.scroll.is_past_threshold()
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn countdown(&self) -> Option<Countdown> {
        self.countdown_target.map(|_| self.countdown)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn header_style(&self) -> HeaderStyle {
        if self.is_past_threshold() {
            HeaderStyle::Frosted
        } else {
            HeaderStyle::Transparent
        }
    }

    /// Whether the native cursor should be suppressed in favour of the
    /// custom one.
    pub fn uses_custom_cursor(&self) -> bool {
        !self.hide_cursor_on_small_screens || self.viewport.is_large_screen()
    }

    pub fn cursor(&self) -> CursorGraphic {
        if !self.uses_custom_cursor() {
            return CursorGraphic::Hidden;
        }
        let PointerState { x, y } = self.pointer;
        match self.mode {
            InteractionMode::Default => CursorGraphic::Ring {
                left: x - RING_OFFSET,
                top: y - RING_OFFSET,
            },
            InteractionMode::HoveringInteractiveArea => CursorGraphic::Expanded {
                left: x - EXPANDED_RING_OFFSET,
                top: y - EXPANDED_RING_OFFSET,
            },
            InteractionMode::HoveringText => CursorGraphic::Caret {
                left: x - CARET_OFFSET_X,
                top: y - CARET_OFFSET_Y,
            },
        }
    }
}

/// Tailwind classes for an element gated on its region's reveal latch.
pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    const SECTIONS: [&str; 5] = ["hero", "work", "about", "skills", "mentoring"];

    fn controller() -> ViewportRevealController {
        ViewportRevealController::new(SECTIONS).expect("unique ids")
    }

    fn start() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_750_000_000_000).unwrap()
    }

    #[test]
    fn test_regions_start_hidden() {
        let c = controller();
        assert_eq!(c.regions().len(), 5);
        assert!(c.regions().iter().all(|r| !r.is_visible));
        assert_eq!(c.version(), 0);
    }

    #[test]
    fn test_default_has_no_regions() {
        let mut c = ViewportRevealController::default();
        assert!(c.regions().is_empty());
        assert!(!c.observe_region_visibility("hero", true));
        assert_eq!(c.interaction_mode(), InteractionMode::Default);
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let err = ViewportRevealController::new(["hero", "work", "hero"]).unwrap_err();
        assert_eq!(err, RevealError::DuplicateRegion("hero".to_string()));
    }

    #[test]
    fn test_visibility_is_a_latch() {
        let mut c = controller();
        assert!(c.observe_region_visibility("work", true));
        assert!(!c.observe_region_visibility("work", false));
        assert!(!c.observe_region_visibility("work", true));
        assert!(c.is_visible("work"));
        assert_eq!(c.version(), 1);
    }

    #[test]
    fn test_false_first_does_not_reveal() {
        let mut c = controller();
        c.observe_region_visibility("about", false);
        c.observe_region_visibility("about", false);
        assert!(!c.is_visible("about"));
        assert_eq!(c.version(), 0);
    }

    #[test]
    fn test_unreported_regions_stay_hidden() {
        let mut c = controller();
        c.observe_region_visibility("hero", true);
        c.observe_region_visibility("skills", true);
        for id in ["work", "about", "mentoring"] {
            assert!(!c.is_visible(id), "{id} should still be hidden");
        }
    }

    #[test]
    fn test_unknown_region_ignored() {
        let mut c = controller();
        assert!(!c.observe_region_visibility("contact", true));
        assert!(!c.is_visible("contact"));
        assert_eq!(c.version(), 0);
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        let mut c = controller();
        let cases = [(0.0, false), (50.0, false), (50.5, true), (51.0, true), (-10.0, false)];
        for (offset, past) in cases {
            c.on_scroll(offset);
            assert_eq!(c.is_past_threshold(), past, "offset {offset}");
            assert_eq!(c.is_past_threshold(), offset > 50.0);
        }
    }

    #[test]
    fn test_repeated_scroll_is_idempotent() {
        let mut c = controller();
        assert!(c.on_scroll(120.0));
        let v = c.version();
        assert!(!c.on_scroll(120.0));
        assert_eq!(c.version(), v);
        assert_eq!(c.header_style(), HeaderStyle::Frosted);
        c.on_scroll(10.0);
        assert_eq!(c.header_style(), HeaderStyle::Transparent);
    }

    #[test]
    fn test_repeated_events_leave_version_alone() {
        let t0 = start();
        let mut c = controller().with_countdown(t0);

        assert!(c.dispatch(RevealEvent::Pointer { x: 40.0, y: 60.0 }));
        let v = c.version();
        assert!(!c.dispatch(RevealEvent::Pointer { x: 40.0, y: 60.0 }));
        assert_eq!(c.version(), v);

        assert!(c.dispatch(RevealEvent::Mode(InteractionMode::HoveringText)));
        let v = c.version();
        assert!(!c.dispatch(RevealEvent::Mode(InteractionMode::HoveringText)));
        assert_eq!(c.version(), v);

        assert!(c.dispatch(RevealEvent::Resize {
            width: 800.0,
            height: 600.0
        }));
        let v = c.version();
        assert!(!c.dispatch(RevealEvent::Resize {
            width: 800.0,
            height: 600.0
        }));
        assert_eq!(c.version(), v);

        // same second, same fields
        let now = t0 + TimeDelta::milliseconds(1_200);
        assert!(c.dispatch(RevealEvent::Tick { now }));
        let v = c.version();
        let now = t0 + TimeDelta::milliseconds(1_700);
        assert!(!c.dispatch(RevealEvent::Tick { now }));
        assert_eq!(c.version(), v);
    }

    #[test]
    fn test_pointer_last_write_wins() {
        let mut c = controller();
        c.on_pointer_move(10.0, 20.0);
        c.on_pointer_move(-5.0, 300.0);
        assert_eq!(c.pointer(), PointerState { x: -5.0, y: 300.0 });
    }

    #[test]
    fn test_mode_last_write_wins() {
        let mut c = controller();
        c.set_interaction_mode(InteractionMode::Default);
        c.set_interaction_mode(InteractionMode::HoveringText);
        c.set_interaction_mode(InteractionMode::HoveringInteractiveArea);
        c.set_interaction_mode(InteractionMode::Default);
        assert_eq!(c.interaction_mode(), InteractionMode::Default);

        c.enter(InteractionMode::HoveringInteractiveArea);
        c.enter(InteractionMode::HoveringText);
        assert_eq!(c.interaction_mode(), InteractionMode::HoveringText);
        c.leave();
        assert_eq!(c.interaction_mode(), InteractionMode::Default);
    }

    #[test]
    fn test_cursor_follows_mode() {
        let mut c = controller();
        c.on_pointer_move(100.0, 200.0);
        assert_eq!(
            c.cursor(),
            CursorGraphic::Ring {
                left: 75.0,
                top: 175.0
            }
        );
        c.enter(InteractionMode::HoveringInteractiveArea);
        assert_eq!(
            c.cursor(),
            CursorGraphic::Expanded {
                left: 50.0,
                top: 150.0
            }
        );
        c.enter(InteractionMode::HoveringText);
        assert_eq!(
            c.cursor(),
            CursorGraphic::Caret {
                left: 98.0,
                top: 180.0
            }
        );
    }

    #[test]
    fn test_cursor_hidden_on_small_screens_when_requested() {
        let mut c = controller().hide_cursor_on_small_screens(true);
        assert!(c.uses_custom_cursor());
        c.on_resize(800.0, 600.0);
        assert_eq!(c.cursor(), CursorGraphic::Hidden);
        c.on_resize(1024.0, 768.0);
        assert!(matches!(c.cursor(), CursorGraphic::Ring { .. }));

        let mut always = controller();
        always.on_resize(320.0, 640.0);
        assert!(always.uses_custom_cursor());
    }

    #[test]
    fn test_tick_without_countdown_is_noop() {
        let mut c = controller();
        assert!(!c.tick(start()));
        assert_eq!(c.countdown(), None);
        assert_eq!(c.version(), 0);
    }

    #[test]
    fn test_countdown_ticks() {
        let t0 = start();
        let mut c = controller().with_countdown(t0);
        assert_eq!(
            c.countdown(),
            Some(Countdown {
                days: 30,
                hours: 0,
                minutes: 0,
                seconds: 0
            })
        );
        assert!(c.tick(t0 + TimeDelta::milliseconds(1_000)));
        assert_eq!(
            c.countdown(),
            Some(Countdown {
                days: 29,
                hours: 23,
                minutes: 59,
                seconds: 59
            })
        );
    }

    #[test]
    fn test_countdown_clamps_after_target() {
        let t0 = start();
        let mut c = controller().with_countdown(t0);
        c.tick(t0 + TimeDelta::days(30) + TimeDelta::seconds(1));
        assert_eq!(c.countdown(), Some(Countdown::default()));
        let v = c.version();
        assert!(!c.tick(t0 + TimeDelta::days(45)));
        assert_eq!(c.countdown(), Some(Countdown::default()));
        assert_eq!(c.version(), v);
    }

    #[test]
    fn test_events_commute_across_types() {
        let events = [
            RevealEvent::Scroll { offset_y: 75.0 },
            RevealEvent::Pointer { x: 3.0, y: 4.0 },
            RevealEvent::Visibility {
                id: "skills".into(),
                intersecting: true,
            },
            RevealEvent::Mode(InteractionMode::HoveringText),
        ];
        let mut forward = controller();
        let mut backward = controller();
        for e in events.iter().cloned() {
            forward.dispatch(e);
        }
        for e in events.iter().rev().cloned() {
            backward.dispatch(e);
        }
        assert_eq!(forward.scroll(), backward.scroll());
        assert_eq!(forward.pointer(), backward.pointer());
        assert_eq!(forward.regions(), backward.regions());
        assert_eq!(forward.interaction_mode(), backward.interaction_mode());
    }

    #[test]
    fn test_no_mutation_after_dispose() {
        let t0 = start();
        let mut c = controller().with_countdown(t0);
        c.on_scroll(10.0);
        c.observe_region_visibility("hero", true);
        let v = c.version();
        c.dispose();
        assert!(c.is_disposed());

        assert!(!c.on_scroll(500.0));
        assert!(!c.on_pointer_move(1.0, 1.0));
        assert!(!c.set_interaction_mode(InteractionMode::HoveringText));
        assert!(!c.observe_region_visibility("work", true));
        assert!(!c.tick(t0 + TimeDelta::seconds(5)));
        assert!(!c.on_resize(100.0, 100.0));

        assert_eq!(c.version(), v);
        assert_eq!(c.scroll().offset_y, 10.0);
        assert!(!c.is_visible("work"));
        assert_eq!(c.interaction_mode(), InteractionMode::Default);
        c.dispose();
        assert_eq!(c.version(), v);
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(reveal_classes(true), "opacity-100 translate-y-0");
        assert_eq!(reveal_classes(false), "opacity-0 translate-y-8");
    }
}

use chrono::Utc;
use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_interval_fn, use_window,
    use_window_scroll, use_window_size, UseIntersectionObserverOptions, UseWindowSizeReturn,
};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    chrome::PageChrome,
    content::{Page, ThemeTokens},
    countdown::Countdown,
    reveal::{
        reveal_classes, CursorGraphic, HeaderStyle, InteractionMode, ViewportRevealController,
        REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    },
};

const TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, Default)]
pub struct RevealOptions {
    pub countdown: bool,
    pub hide_cursor_on_small_screens: bool,
}

/// Reactive wrapper around [`ViewportRevealController`] shared with the page
/// components through context.
#[derive(Clone, Copy)]
pub struct RevealHandle {
    state: RwSignal<ViewportRevealController>,
    nodes: StoredValue<Vec<(&'static str, NodeRef<html::Section>)>>,
}

/// Create the controller for the current page and subscribe it to scroll,
/// pointer, resize, intersection and (optionally) timer events. Every
/// subscription belongs to the calling component's owner and is released
/// with it.
pub fn use_reveal_controller(regions: &[&'static str], options: RevealOptions) -> RevealHandle {
    let controller = ViewportRevealController::new(regions.iter().copied())
        .unwrap_or_else(|e| {
            log::error!("couldn't register page regions: {e}");
            ViewportRevealController::default()
        })
        .hide_cursor_on_small_screens(options.hide_cursor_on_small_screens);
    let controller = if options.countdown {
        controller.with_countdown(Utc::now())
    } else {
        controller
    };
    let state = RwSignal::new(controller);

    let nodes = regions
        .iter()
        .map(|id| {
            let id = *id;
            let node_ref = NodeRef::<html::Section>::new();
            let _ = use_intersection_observer_with_options(
                node_ref,
                move |entries, _| {
                    for entry in entries {
                        let intersecting = entry.is_intersecting();
                        state.maybe_update(|c| c.observe_region_visibility(id, intersecting));
                    }
                },
                UseIntersectionObserverOptions::default()
                    .thresholds(vec![REVEAL_THRESHOLD])
                    .root_margin(REVEAL_ROOT_MARGIN),
            );
            (id, node_ref)
        })
        .collect::<Vec<_>>();

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        state.maybe_update(|c| c.on_scroll(y));
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        state.maybe_update(|c| c.on_pointer_move(x, y));
    });

    let UseWindowSizeReturn { width, height } = use_window_size();
    Effect::new(move |_| {
        let (w, h) = (width.get(), height.get());
        state.maybe_update(|c| c.on_resize(w, h));
    });

    if options.countdown {
        let timer = use_interval_fn(
            move || {
                state.maybe_update(|c| c.tick(Utc::now()));
            },
            TICK_INTERVAL_MS,
        );
        let pause = timer.pause;
        on_cleanup(move || pause());
    }

    on_cleanup(move || {
        state.try_update_untracked(|c| c.dispose());
    });

    RevealHandle {
        state,
        nodes: StoredValue::new(nodes),
    }
}

impl RevealHandle {
    /// The node ref to attach to the `<section>` observed as `id`.
    pub fn node(&self, id: &str) -> NodeRef<html::Section> {
        self.nodes
            .with_value(|nodes| nodes.iter().find(|(n, _)| *n == id).map(|(_, r)| *r))
            .unwrap_or_else(|| {
                log::warn!("no observed region named {id}");
                NodeRef::new()
            })
    }

    pub fn visible(&self, id: &'static str) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.is_visible(id)))
    }

    /// Reveal classes for elements inside region `id`.
    pub fn classes(&self, id: &'static str) -> impl Fn() -> &'static str + Copy + Send + Sync {
        let visible = self.visible(id);
        move || reveal_classes(visible.get())
    }

    pub fn header_style(&self) -> Memo<HeaderStyle> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.header_style()))
    }

    pub fn cursor(&self) -> Signal<CursorGraphic> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.cursor()))
    }

    pub fn uses_custom_cursor(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.uses_custom_cursor()))
    }

    pub fn countdown(&self) -> Memo<Option<Countdown>> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.countdown()))
    }

    pub fn enter(&self, mode: InteractionMode) {
        self.state.maybe_update(|c| c.enter(mode));
    }

    pub fn leave(&self) {
        self.state.maybe_update(|c| c.leave());
    }
}

/// Reactive wrapper around [`PageChrome`]; the theme flag is mirrored into
/// local storage in the browser.
#[derive(Clone, Copy)]
pub struct ChromeHandle {
    state: RwSignal<PageChrome>,
    page: Page,
    #[cfg(feature = "hydrate")]
    store_dark: WriteSignal<Option<bool>>,
}

pub fn use_page_chrome(page: Page) -> ChromeHandle {
    let state = RwSignal::new(PageChrome::new());

    #[cfg(feature = "hydrate")]
    let (stored_dark, store_dark, _) =
        use_local_storage::<Option<bool>, JsonSerdeWasmCodec>("dark_mode");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(dark) = stored_dark.get_untracked() {
                state.update(|c| c.set_dark_mode(dark));
            }
        },
        true,
    );

    ChromeHandle {
        state,
        page,
        #[cfg(feature = "hydrate")]
        store_dark,
    }
}

impl ChromeHandle {
    pub fn theme(&self) -> Memo<ThemeTokens> {
        let state = self.state;
        let page = self.page;
        Memo::new(move |_| ThemeTokens::resolve(page, state.with(|c| c.is_dark_mode())))
    }

    pub fn is_dark(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.is_dark_mode()))
    }

    pub fn toggle_theme(&self) {
        self.state.update(|c| c.toggle_theme());
        #[cfg(feature = "hydrate")]
        self.store_dark.set(Some(self.state.with_untracked(|c| c.is_dark_mode())));
    }

    pub fn menu_open(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.is_menu_open()))
    }

    pub fn toggle_menu(&self) {
        self.state.update(|c| c.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.state.update(|c| c.close_menu());
    }

    pub fn accordion_open(&self, index: usize) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.is_accordion_open(index)))
    }

    pub fn toggle_accordion(&self, index: usize) {
        self.state.update(|c| c.toggle_accordion(index));
    }

    pub fn testimonial(&self) -> Memo<usize> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.testimonial()))
    }

    pub fn next_testimonial(&self, len: usize) {
        self.state.update(|c| c.next_testimonial(len));
    }

    pub fn prev_testimonial(&self, len: usize) {
        self.state.update(|c| c.prev_testimonial(len));
    }
}

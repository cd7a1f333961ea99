use leptos::{either::EitherOf4, prelude::*};

use super::hooks::{ChromeHandle, RevealHandle};
use crate::reveal::{CursorGraphic, InteractionMode};

/// Pointer-following ring / caret drawn over the page.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let theme = expect_context::<ChromeHandle>().theme();
    let cursor = reveal.cursor();

    move || match cursor.get() {
        CursorGraphic::Ring { left, top } => EitherOf4::A(view! {
            <div
                class="fixed pointer-events-none z-[9999] transition-all duration-300 ease-out scale-100"
                style:left=format!("{left}px")
                style:top=format!("{top}px")
            >
                <div class=move || {
                    format!(
                        "rounded-full border-2 transition-all duration-300 flex items-center justify-center w-12 h-12 {}",
                        theme.get().ring,
                    )
                }></div>
            </div>
        }),
        CursorGraphic::Expanded { left, top } => EitherOf4::B(view! {
            <div
                class="fixed pointer-events-none z-[9999] transition-all duration-300 ease-out scale-150"
                style:left=format!("{left}px")
                style:top=format!("{top}px")
            >
                <div class=move || {
                    format!(
                        "rounded-full border-2 transition-all duration-300 flex items-center justify-center w-24 h-24 {}",
                        theme.get().ring,
                    )
                }>
                    <span class=move || {
                        format!("text-sm font-medium transition-all duration-300 {}", theme.get().logo)
                    }>"View"</span>
                </div>
            </div>
        }),
        CursorGraphic::Caret { left, top } => EitherOf4::C(view! {
            <div
                class="fixed pointer-events-none z-[9999] transition-all duration-300 ease-out"
                style:left=format!("{left}px")
                style:top=format!("{top}px")
            >
                <div class=move || {
                    format!("w-1 h-10 transition-all duration-300 {}", theme.get().caret)
                }></div>
            </div>
        }),
        CursorGraphic::Hidden => EitherOf4::D(()),
    }
}

/// Inline text that switches the cursor to the caret while hovered.
#[component]
pub fn HoverText(children: Children) -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    view! {
        <span
            on:mouseenter=move |_| reveal.enter(InteractionMode::HoveringText)
            on:mouseleave=move |_| reveal.leave()
        >
            {children()}
        </span>
    }
}

/// Block that expands the cursor into the "View" ring while hovered.
#[component]
pub fn HoverArea(classes: Signal<String>, children: Children) -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    view! {
        <div
            class=move || classes.get()
            on:mouseenter=move |_| reveal.enter(InteractionMode::HoveringInteractiveArea)
            on:mouseleave=move |_| reveal.leave()
        >
            {children()}
        </div>
    }
}

/// Tailwind class for elements that should hide the native cursor.
pub fn cursor_class(custom: bool) -> &'static str {
    if custom {
        "cursor-none"
    } else {
        "cursor-auto"
    }
}

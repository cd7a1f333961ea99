use leptos::{either::Either, prelude::*};

use super::{
    cursor::{cursor_class, HoverText},
    hooks::{ChromeHandle, RevealHandle},
};
use crate::{
    content::{SiteVariant, LINKEDIN_URL, LOCATION, LOGO},
    reveal::HeaderStyle,
};

// entries slide in one after another; spelled out so tailwind picks them up
const MENU_DELAYS: [&str; 5] = ["delay-400", "delay-500", "delay-600", "delay-700", "delay-800"];

#[component]
pub fn Nav() -> impl IntoView {
    let chrome = expect_context::<ChromeHandle>();
    let reveal = expect_context::<RevealHandle>();
    let theme = chrome.theme();
    let is_dark = chrome.is_dark();
    let menu_open = chrome.menu_open();
    let header = reveal.header_style();
    let custom = reveal.uses_custom_cursor();

    let frosted = move || header.get() == HeaderStyle::Frosted;
    let icon_button = move || {
        format!(
            "p-2 rounded-full transition-all duration-300 {} {} {}",
            cursor_class(custom.get()),
            theme.get().icon_hover,
            if frosted() { "backdrop-blur-sm" } else { "" },
        )
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 px-6 lg:px-20 p-6 flex justify-between items-center transition-all duration-500 ease-out {}",
                if frosted() { theme.get().nav_frosted } else { "bg-transparent" },
            )
        }>
            <Logo />
            <div class="flex gap-4">
                <button
                    class=icon_button
                    aria-label="Toggle theme"
                    on:click=move |_| chrome.toggle_theme()
                >
                    <span class=move || format!("w-5 h-5 {}", theme.get().theme_icon)>
                        {move || if is_dark.get() { "☾" } else { "☀" }}
                    </span>
                </button>
                <button
                    class=icon_button
                    aria-label="Toggle menu"
                    on:click=move |_| chrome.toggle_menu()
                >
                    <MenuIcon open=menu_open />
                </button>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <MenuOverlay />
        </Show>
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    let theme = expect_context::<ChromeHandle>().theme();
    view! {
        <div class=move || {
            format!(
                "text-3xl font-semibold transition-colors duration-300 logo-font {}",
                theme.get().logo,
            )
        }>{LOGO}</div>
    }
}

#[component]
fn MenuIcon(open: Memo<bool>) -> impl IntoView {
    let theme = expect_context::<ChromeHandle>().theme();
    let bar = move |extra: &'static str| {
        move || format!("{extra} transition-all duration-300 {}", theme.get().bar)
    };
    move || {
        if open.get() {
            Either::Left(view! {
                <div class="w-5 h-5 relative">
                    <div class=bar("absolute top-2 w-5 h-0.5 rotate-45")></div>
                    <div class=bar("absolute top-2 w-5 h-0.5 -rotate-45")></div>
                </div>
            })
        } else {
            Either::Right(view! {
                <div class="space-y-1">
                    <div class=bar("w-5 h-0.5")></div>
                    <div class=bar("w-5 h-0.5")></div>
                    <div class=bar("w-5 h-0.5")></div>
                </div>
            })
        }
    }
}

#[component]
fn MenuOverlay() -> impl IntoView {
    let chrome = expect_context::<ChromeHandle>();
    let reveal = expect_context::<RevealHandle>();
    let variant = expect_context::<SiteVariant>();
    let theme = chrome.theme();
    let custom = reveal.uses_custom_cursor();

    let links = variant
        .nav_links()
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            let delay = MENU_DELAYS[i % MENU_DELAYS.len()];
            view! {
                <li class="relative group">
                    <a
                        href=link.href
                        on:click=move |_| chrome.close_menu()
                        class=move || {
                            format!(
                                "block text-5xl md:text-6xl font-light hover:text-green-400 transition-all duration-500 animate-in slide-in-from-right-10 {delay} {} hover:translate-x-2.5",
                                cursor_class(custom.get()),
                            )
                        }
                    >
                        <span class="absolute -left-6 top-1/2 -translate-y-1/2 w-2 h-2 bg-green-400 rounded-full opacity-0 group-hover:opacity-100 transition-opacity duration-500"></span>
                        <HoverText>{link.label}</HoverText>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=move || {
            format!(
                "fixed inset-0 z-40 transition-all duration-500 {} {}",
                cursor_class(custom.get()),
                theme.get().menu,
            )
        }>
            <div class="h-full flex flex-col animate-in fade-in duration-500">
                <div class="px-6 lg:px-20 p-6 flex justify-between items-center duration-700 delay-100">
                    <Logo />
                    <button
                        class="p-2 rounded-full transition-colors"
                        aria-label="Close menu"
                        on:click=move |_| chrome.close_menu()
                    >
                        <div class="w-5 h-5 relative">
                            <div class=move || {
                                format!("absolute top-2 w-5 h-0.5 rotate-45 {}", theme.get().bar)
                            }></div>
                            <div class=move || {
                                format!("absolute top-2 w-5 h-0.5 -rotate-45 {}", theme.get().bar)
                            }></div>
                        </div>
                    </button>
                </div>
                <div class="flex-1 flex flex-col justify-center items-center lg:ms-60">
                    <nav>
                        <ul class="space-y-6 list-none">{links}</ul>
                    </nav>
                </div>
                <div class="p-6 flex justify-between items-end animate-in slide-in-from-bottom-4 duration-700 delay-700">
                    <div class=move || theme.get().muted>
                        <p>
                            <HoverText>{LOCATION.0}</HoverText>
                        </p>
                        <p>
                            <HoverText>{LOCATION.1}</HoverText>
                        </p>
                    </div>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || format!("transition-colors flex items-center gap-2 {}", theme.get().link)
                    >
                        <HoverText>"LinkedIn"</HoverText>
                        <span class="inline-block -rotate-45">"→"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

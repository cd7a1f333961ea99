use leptos::prelude::*;

use super::{
    cursor::{cursor_class, HoverText},
    hooks::{ChromeHandle, RevealHandle},
    nav::Logo,
};
use crate::content::{SiteVariant, CV_URL, EMAIL, LINKEDIN_URL, OWNER};

#[component]
pub fn Footer() -> impl IntoView {
    let chrome = expect_context::<ChromeHandle>();
    let custom = expect_context::<RevealHandle>().uses_custom_cursor();
    let variant = expect_context::<SiteVariant>();
    let theme = chrome.theme();
    let is_dark = chrome.is_dark();

    let link_class = move || {
        format!(
            "{} transition-colors duration-300 block {}",
            theme.get().link,
            cursor_class(custom.get()),
        )
    };
    let pitch_href = format!("#{}", variant.pitch_id());

    view! {
        <footer
            id="contact"
            class=move || {
                format!(
                    "px-6 md:px-12 lg:px-24 pt-12 lg:pt-24 pb-8 transition-colors {}",
                    if is_dark.get() {
                        "bg-neutral-900 border-t border-gray-800"
                    } else {
                        "border-t border-gray-200"
                    },
                )
            }
        >
            <div class="grid lg:grid-cols-2 gap-16 mb-16">
                <div class="lg:mb-8">
                    <Logo />
                </div>
                <div>
                    <h2 class="text-4xl md:text-5xl font-light mb-2">
                        <HoverText>"Let's talk"</HoverText>
                    </h2>
                    <a
                        href=format!("mailto:{EMAIL}")
                        target="_blank"
                        class="hover:text-gray-300 transition"
                    >
                        <div class="flex items-center gap-2 mb-12">
                            <span class="text-4xl md:text-5xl font-light">
                                <HoverText>"Drop me a line"</HoverText>
                            </span>
                            <div class=move || {
                                format!(
                                    "w-8 h-8 bg-green-400 rounded-full flex items-center justify-center transition-transform duration-300 hover:scale-110 {}",
                                    cursor_class(custom.get()),
                                )
                            }>
                                <span class="text-neutral-950 -rotate-45">"→"</span>
                            </div>
                        </div>
                    </a>
                    <div class="grid md:grid-cols-2 gap-8">
                        <div class="space-y-4">
                            <a href="/#about" class=link_class>
                                <HoverText>"About"</HoverText>
                            </a>
                            <a href="/#work" class=link_class>
                                <HoverText>"Works"</HoverText>
                            </a>
                            <a href=format!("/{pitch_href}") class=link_class>
                                <HoverText>{variant.pitch_label()}</HoverText>
                            </a>
                        </div>
                        <div class="space-y-4">
                            <a href=LINKEDIN_URL target="_blank" class=link_class>
                                <HoverText>"LinkedIn"</HoverText>
                            </a>
                            <a href=CV_URL target="_blank" class=link_class>
                                <HoverText>"See full CV"</HoverText>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <div class=move || {
                format!(
                    "text-gray-500 flex justify-between items-center text-sm pt-8 border-t transition-colors {}",
                    theme.get().border,
                )
            }>
                <p>
                    <HoverText>{format!("© {} {OWNER}", env!("BUILD_YEAR"))}</HoverText>
                </p>
                <p>
                    <HoverText>"Made with care and plenty of coffee"</HoverText>
                </p>
            </div>
        </footer>
    }
}

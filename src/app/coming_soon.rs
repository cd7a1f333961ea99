use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    cursor::{CustomCursor, HoverText},
    footer::Footer,
    hooks::{use_page_chrome, use_reveal_controller, ChromeHandle, RevealHandle, RevealOptions},
    nav::Nav,
};
#[cfg(feature = "ssr")]
use crate::{assets::load_animation, config::SiteConfig};
use crate::{
    assets::{AnimationPayload, GLOBAL_ANIMATION_CACHE},
    content::{Page, COMING_SOON_ANIMATION, COMING_SOON_BODY, EMAIL},
    countdown::Countdown,
};

#[server(input = GetUrl)]
pub async fn get_animation_server(name: String) -> Result<AnimationPayload, ServerFnError> {
    let site = SiteConfig::provided_or_env(use_context::<SiteConfig>())
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    load_animation(&site.asset_root, &name).await.map_err(|e| {
        tracing::warn!(name = %name, error = %e, "couldn't serve animation");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let chrome = use_page_chrome(Page::ComingSoon);
    let reveal = use_reveal_controller(
        &[],
        RevealOptions {
            countdown: true,
            hide_cursor_on_small_screens: true,
        },
    );
    provide_context(chrome);
    provide_context(reveal);
    let theme = chrome.theme();

    view! {
        <Title text="Coming Soon" />
        <div class=move || {
            format!("min-h-screen flex flex-col transition-colors duration-300 {}", theme.get().page)
        }>
            <CustomCursor />
            <Nav />
            <main class="flex-1 flex items-center justify-center px-6 pt-28 pb-16">
                <div class="max-w-2xl w-full text-center space-y-8">
                    <Animation />
                    <h1 class="text-4xl md:text-6xl font-light">
                        <HoverText>"Coming Soon"</HoverText>
                    </h1>
                    <CountdownDisplay />
                    <p class=move || format!("text-lg leading-relaxed {}", theme.get().muted)>
                        <HoverText>{COMING_SOON_BODY}</HoverText>
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A href="/">
                            <span class="inline-flex items-center justify-center rounded-md px-6 py-3 bg-green-500 hover:bg-green-600 text-neutral-950 transition-all duration-300 hover:scale-105">
                                "← Back to Portfolio"
                            </span>
                        </A>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class=move || {
                                format!(
                                    "inline-flex items-center justify-center rounded-md border px-6 py-3 transition-all duration-300 hover:scale-105 {}",
                                    theme.get().outline_button,
                                )
                            }
                        >
                            "Get in Touch"
                        </a>
                    </div>
                </div>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Animation() -> impl IntoView {
    let animation = Resource::new(
        || COMING_SOON_ANIMATION.to_string(),
        move |name| async move {
            if let Some(hit) = GLOBAL_ANIMATION_CACHE.get(&name) {
                return Ok(hit.clone());
            }
            let payload = get_animation_server(name.clone()).await;
            if let Ok(payload) = &payload {
                GLOBAL_ANIMATION_CACHE.insert(name, payload.clone());
            }
            payload
        },
    );

    view! {
        <div class="mx-auto w-64 h-64 md:w-80 md:h-80 flex items-center justify-center">
            <Suspense fallback=|| view! { <AnimationPlaceholder /> }>
                {move || Suspend::new(async move {
                    match animation.await {
                        Ok(payload) => Either::Left(view! {
                            <lottie-player
                                src=payload.to_json()
                                background="transparent"
                                speed="1"
                                autoplay=""
                                loop=""
                                class="w-full h-full"
                            ></lottie-player>
                        }),
                        Err(e) => {
                            log::error!("couldn't load animation: {e}");
                            Either::Right(view! { <AnimationPlaceholder /> })
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn AnimationPlaceholder() -> impl IntoView {
    view! { <div class="w-48 h-48 rounded-full bg-green-500/20 animate-pulse"></div> }
}

const COUNTDOWN_FIELDS: [(&str, fn(&Countdown) -> i64); 4] = [
    ("Days", |c| c.days),
    ("Hours", |c| c.hours),
    ("Minutes", |c| c.minutes),
    ("Seconds", |c| c.seconds),
];

#[component]
fn CountdownDisplay() -> impl IntoView {
    let countdown = expect_context::<RevealHandle>().countdown();
    let theme = expect_context::<ChromeHandle>().theme();

    view! {
        <div class="grid grid-cols-4 gap-3 md:gap-4 max-w-md mx-auto">
            {COUNTDOWN_FIELDS
                .into_iter()
                .map(|(label, pick)| {
                    view! {
                        <div class=move || format!("rounded-xl border p-4 {}", theme.get().card)>
                            <div class="text-3xl md:text-4xl font-light tabular-nums">
                                {move || {
                                    format!("{:02}", countdown.get().as_ref().map(pick).unwrap_or_default())
                                }}
                            </div>
                            <div class=move || {
                                format!("text-xs uppercase tracking-wide mt-1 {}", theme.get().muted)
                            }>{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

use leptos::{either::Either, prelude::*};

use super::{
    cursor::{cursor_class, CustomCursor, HoverArea, HoverText},
    footer::Footer,
    hooks::{use_page_chrome, use_reveal_controller, ChromeHandle, RevealHandle, RevealOptions},
    nav::Nav,
};
use crate::content::{
    skill_delay_ms, Page, Project, SiteVariant, ABOUT_PARAGRAPHS, BOOKING_URL, CV_URL, EXPERIENCE,
    FEATURED_PROJECT, HERO_BADGES, PITCH_BODY, PROJECTS, SESSION_RATE, SESSION_UNIT, SKILLS,
    TESTIMONIALS,
};

const EXPERIENCE_DELAYS: [&str; 3] = ["delay-300", "delay-400", "delay-500"];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let variant = expect_context::<SiteVariant>();
    let chrome = use_page_chrome(Page::Portfolio);
    let reveal = use_reveal_controller(&variant.regions(), RevealOptions::default());
    provide_context(chrome);
    provide_context(reveal);
    let theme = chrome.theme();

    view! {
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 cursor-none {}", theme.get().page)
        }>
            <CustomCursor />
            <Nav />
            <Hero />
            <Work />
            <About />
            <Skills />
            <Pitch />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let theme = expect_context::<ChromeHandle>().theme();
    let shown = reveal.classes("hero");

    view! {
        <section
            id="hero"
            node_ref=reveal.node("hero")
            class="min-h-screen flex flex-col justify-between pt-24 lg:pb-6 px-6 md:px-12 lg:px-24"
        >
            <div class="max-w-6xl">
                <h1 class=move || {
                    format!(
                        "text-3xl md:text-5xl lg:text-6xl font-light leading-tight transition-all duration-1000 {}",
                        shown(),
                    )
                }>
                    <HoverText>
                        "I'm Jayson, a full-stack web developer with 3 years of experience, driven by curiosity. I'm currently seeking "
                        <span class="text-green-400">"new opportunities"</span>
                        ", to showcase my expertise while actively "
                        <span class="text-green-400">"building personal projects"</span>
                        "."
                    </HoverText>
                </h1>
            </div>
            <div class="flex flex-col gap-4 mb-10 lg:mb-1">
                <div class=move || {
                    format!("flex flex-wrap gap-4 transition-all duration-1000 delay-200 {}", shown())
                }>
                    {HERO_BADGES
                        .iter()
                        .map(|badge| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors {}",
                                        theme.get().badge,
                                    )
                                }>{*badge}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!(
                        "flex justify-between items-center w-full transition-all duration-1000 delay-400 border-t border-gray-200/60 {}",
                        shown(),
                    )
                }>
                    <p class=move || format!("text-sm lg:text-lg {}", theme.get().muted)>
                        <HoverText>"Based in Albay, Philippines"</HoverText>
                    </p>
                    <a
                        href="#work"
                        class="text-green-400 hover:text-green-300 transition-all duration-300 cursor-none"
                    >
                        "See Selected Works ↓"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Work() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let theme = expect_context::<ChromeHandle>().theme();
    let shown = reveal.classes("work");

    view! {
        <section id="work" node_ref=reveal.node("work") class="px-6 md:px-12 lg:px-30 py-24">
            <div class=move || {
                format!("flex justify-between items-center mb-12 transition-all duration-1000 {}", shown())
            }>
                <h2 class="text-3xl md:text-6xl font-light">
                    <HoverText>"Selected works"</HoverText>
                </h2>
            </div>
            <ProjectCard
                project=FEATURED_PROJECT
                card_class=Signal::derive(move || {
                    format!(
                        "rounded-xl border transition-all duration-1000 delay-200 hover:scale-[1.02] overflow-hidden cursor-none mb-8 {} {}",
                        shown(),
                        theme.get().card,
                    )
                })
                image_class="w-full h-[400px] md:h-[600px] object-cover transition-transform duration-500 hover:scale-105"
            />
            <div class="grid md:grid-cols-3 gap-8">
                {PROJECTS
                    .into_iter()
                    .map(|project| {
                        view! {
                            <ProjectCard
                                project=project
                                card_class=Signal::derive(move || {
                                    format!(
                                        "rounded-xl border transition-all duration-1000 delay-300 hover:scale-[1.02] overflow-hidden cursor-none {} {}",
                                        shown(),
                                        theme.get().card,
                                    )
                                })
                                image_class="w-full h-48 object-cover transition-transform duration-500 hover:scale-105"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    card_class: Signal<String>,
    image_class: &'static str,
) -> impl IntoView {
    let theme = expect_context::<ChromeHandle>().theme();
    let body = view! {
        <div class="relative">
            {project
                .shipped
                .then(|| {
                    view! {
                        <span class="absolute top-4 left-4 z-10 rounded-md bg-green-500 px-2.5 py-0.5 text-xs font-semibold text-neutral-950">
                            "SHIPPED"
                        </span>
                    }
                })}
            <img src=project.image alt=project.title class=image_class />
        </div>
        <div class="p-6">
            <h3 class=move || format!("text-xl font-medium mb-2 {}", theme.get().logo)>
                <HoverText>{project.title}</HoverText>
            </h3>
            <p class=move || theme.get().muted>
                <HoverText>{project.summary}</HoverText>
            </p>
        </div>
    };

    view! {
        <HoverArea classes=card_class>
            {match project.href {
                Some(href) => Either::Left(view! { <a href=href class="block cursor-none">{body}</a> }),
                None => Either::Right(body),
            }}
        </HoverArea>
    }
}

#[component]
fn About() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let chrome = expect_context::<ChromeHandle>();
    let theme = chrome.theme();
    let shown = reveal.classes("about");

    let timeline = EXPERIENCE
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let open = chrome.accordion_open(i);
            let delay = EXPERIENCE_DELAYS[i % EXPERIENCE_DELAYS.len()];
            view! {
                <div class=move || {
                    format!(
                        "border-b pb-6 transition-all duration-1000 {delay} {} {}",
                        shown(),
                        theme.get().border,
                    )
                }>
                    <div class="flex justify-between items-center">
                        <div>
                            <h3 class="text-xl font-medium">
                                <HoverText>{entry.employer}</HoverText>
                            </h3>
                            <p class=move || theme.get().muted>
                                <HoverText>{entry.role}</HoverText>
                            </p>
                            <p class=move || format!("mt-4 {}", theme.get().muted)>
                                <HoverText>{entry.period}</HoverText>
                            </p>
                        </div>
                        <button
                            class="p-2 transition-all duration-300 hover:scale-110 cursor-none"
                            aria-label="Toggle details"
                            on:click=move |_| chrome.toggle_accordion(i)
                        >
                            <span class=move || {
                                format!(
                                    "inline-block h-4 w-4 leading-4 transition-transform {}",
                                    if open.get() { "rotate-45" } else { "" },
                                )
                            }>"+"</span>
                        </button>
                    </div>
                    <div class=move || {
                        format!(
                            "mt-4 text-sm text-gray-400 transition-all duration-500 {}",
                            if open.get() {
                                "opacity-100 translate-y-0 max-h-40"
                            } else {
                                "opacity-0 -translate-y-4 max-h-0 overflow-hidden pointer-events-none"
                            },
                        )
                    }>{entry.detail}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" node_ref=reveal.node("about") class="px-6 md:px-12 lg:px-30 py-24">
            <div class="grid lg:grid-cols-2 gap-16">
                <div>
                    <h2 class=move || {
                        format!("text-3xl md:text-6xl font-light mb-8 transition-all duration-1000 {}", shown())
                    }>
                        <HoverText>"About"</HoverText>
                    </h2>
                    <div class=move || {
                        format!(
                            "space-y-6 leading-relaxed transition-all duration-1000 delay-200 {} {}",
                            theme.get().muted,
                            shown(),
                        )
                    }>
                        <p>
                            <HoverText>
                                "I'm Jayson, a versatile web developer with "
                                <span class="text-green-400">"3 years of experience "</span>
                                "and a Bachelor's degree in Information Technology from "
                                <span class="text-green-400">
                                    "Computer Arts and Technological College, Inc."
                                </span>
                                " I specialize in transforming ideas into seamless, impactful web solutions that help businesses grow and connect with their audiences."
                            </HoverText>
                        </p>
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| view! { <p><HoverText>{*p}</HoverText></p> })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <div class="space-y-8 mb-12">{timeline}</div>
                    <a
                        href=CV_URL
                        target="_blank"
                        class=move || {
                            format!(
                                "inline-flex items-center rounded-md px-4 py-2 bg-green-500 hover:bg-green-600 text-neutral-950 transition-all duration-1000 delay-600 hover:scale-105 cursor-none {}",
                                shown(),
                            )
                        }
                    >
                        <span class="mr-2">"⤓"</span>
                        "Download CV"
                    </a>
                    <div class=move || format!("mt-12 transition-all duration-1000 delay-700 {}", shown())>
                        <img
                            src="/images/profile1.jpg"
                            alt="Profile photo"
                            width="400"
                            height="400"
                            class="rounded-lg transition-transform duration-500 hover:scale-105"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let theme = expect_context::<ChromeHandle>().theme();
    let custom = reveal.uses_custom_cursor();
    let shown = reveal.classes("skills");

    view! {
        <section id="skills" node_ref=reveal.node("skills") class="px-6 md:px-12 lg:px-30 py-24">
            <div class="grid lg:grid-cols-2 gap-16">
                <div>
                    <h2 class=move || {
                        format!(
                            "{} text-2xl mb-8 font-light transition-all duration-1000 {}",
                            theme.get().muted,
                            shown(),
                        )
                    }>
                        <HoverText>"What I'm known for"</HoverText>
                    </h2>
                </div>
                <div class="space-y-4">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <h3
                                    class=move || {
                                        format!(
                                            "text-4xl md:text-5xl font-light transition-all duration-200 hover:text-green-400 {} {}",
                                            cursor_class(custom.get()),
                                            shown(),
                                        )
                                    }
                                    style:transition-delay=format!("{}ms", skill_delay_ms(i))
                                >
                                    <HoverText>{*skill}</HoverText>
                                </h3>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Pitch() -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let chrome = expect_context::<ChromeHandle>();
    let variant = expect_context::<SiteVariant>();
    let theme = chrome.theme();
    let id = variant.pitch_id();
    let shown = reveal.classes(id);
    let testimonial = chrome.testimonial();

    view! {
        <section id=id node_ref=reveal.node(id) class="px-6 md:px-12 lg:px-30 py-24">
            <div class="grid lg:grid-cols-2 gap-16">
                <div>
                    <h2 class=move || {
                        format!("text-3xl md:text-6xl font-light mb-8 transition-all duration-1000 {}", shown())
                    }>
                        <HoverText>{variant.pitch_label()}</HoverText>
                    </h2>
                </div>
                <div>
                    <h3 class=move || {
                        format!("text-xl mb-6 transition-all duration-1000 delay-200 {}", shown())
                    }>
                        <HoverText>{variant.pitch_heading()}</HoverText>
                    </h3>
                    <p class=move || {
                        format!(
                            "{} mb-8 leading-relaxed transition-all duration-1000 delay-300 {}",
                            theme.get().muted,
                            shown(),
                        )
                    }>
                        <HoverText>{PITCH_BODY}</HoverText>
                    </p>
                    <div class=move || {
                        format!(
                            "flex items-center justify-between mb-8 transition-all duration-1000 delay-400 {}",
                            shown(),
                        )
                    }>
                        <div>
                            <span class="text-3xl font-light">
                                <HoverText>{SESSION_RATE}</HoverText>
                            </span>
                            <span class=move || format!("{} ml-2", theme.get().muted)>
                                <HoverText>{SESSION_UNIT}</HoverText>
                            </span>
                        </div>
                        <a
                            href=BOOKING_URL
                            target="_blank"
                            class="inline-flex items-center rounded-md px-4 py-2 bg-green-500 hover:bg-green-600 text-neutral-950 transition-all duration-300 hover:scale-105 cursor-none"
                        >
                            <span class="mr-2">"📅"</span>
                            "Book now"
                        </a>
                    </div>
                    <div class=move || format!("transition-all duration-1000 delay-500 {}", shown())>
                        <h4 class=move || format!("{} text-sm mb-4", theme.get().muted)>
                            <HoverText>{variant.testimonials_heading()}</HoverText>
                        </h4>
                        <div class=move || {
                            format!(
                                "rounded-xl border transition-all duration-300 hover:scale-[1.02] cursor-none {}",
                                theme.get().card,
                            )
                        }>
                            <div class="p-6 flex items-center justify-between gap-4">
                                <button
                                    class="transition-all duration-300 hover:scale-110 cursor-none bg-white text-neutral-950 p-4 rounded-full"
                                    aria-label="Previous testimonial"
                                    on:click=move |_| chrome.prev_testimonial(TESTIMONIALS.len())
                                >
                                    "‹"
                                </button>
                                <p class="text-gray-300 mb-0 flex-1">
                                    <HoverText>
                                        {move || TESTIMONIALS.get(testimonial.get()).copied().unwrap_or_default()}
                                    </HoverText>
                                </p>
                                <button
                                    class="transition-all duration-300 hover:scale-110 cursor-none bg-white text-neutral-950 p-4 rounded-full"
                                    aria-label="Next testimonial"
                                    on:click=move |_| chrome.next_testimonial(TESTIMONIALS.len())
                                >
                                    "›"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

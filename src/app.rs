mod coming_soon;
mod cursor;
mod footer;
mod hooks;
mod nav;
mod portfolio;

use leptos::{context::Provider, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, content::SiteVariant};
use coming_soon::ComingSoonPage;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/png" href="/jayson.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script
                    src="https://unpkg.com/@lottiefiles/lottie-player@2/dist/lottie-player.js"
                    defer
                ></script>
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = use_context::<SiteConfig>().unwrap_or_default();
    let variant = Resource::new(|| (), |_| get_site_variant_server());
    provide_context(VariantResource(variant));

    view! {
        <Title text=site.title.clone() />
        <Meta name="description" content=site.description.clone() />
        <Meta property="og:title" content=site.title.clone() />
        <Meta property="og:description" content=site.description.clone() />
        <Meta property="og:url" content=format!("{}/", site.base_url) />
        <Meta property="og:site_name" content=site.title.clone() />
        <Meta property="og:image" content=site.og_image() />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:type" content="website" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=|| view! { <VariantScope><PortfolioPage /></VariantScope> }
                />
                <Route
                    path=path!("/coming-soon")
                    view=|| view! { <VariantScope><ComingSoonPage /></VariantScope> }
                />
            </Routes>
        </Router>
    }
}

#[server(input = GetUrl)]
pub async fn get_site_variant_server() -> Result<SiteVariant, ServerFnError> {
    SiteConfig::provided_or_env(use_context::<SiteConfig>())
        .map(|site| site.variant)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[derive(Clone, Copy)]
struct VariantResource(Resource<Result<SiteVariant, ServerFnError>>);

/// Renders `children` once the server has said which variant it runs, with
/// that [`SiteVariant`] in context. The resource is resolved during SSR and
/// reused after hydration and on client-side navigation.
#[component]
fn VariantScope(children: ChildrenFn) -> impl IntoView {
    let VariantResource(variant) = expect_context::<VariantResource>();
    view! {
        <Suspense>
            {move || {
                let children = children.clone();
                Suspend::new(async move {
                    let variant = variant.await.unwrap_or_else(|e| {
                        log::warn!("couldn't fetch site variant: {e}");
                        SiteVariant::default()
                    });
                    view! { <Provider value=variant>{children()}</Provider> }
                })
            }}
        </Suspense>
    }
}

//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::sell::SellPage;
use crate::state::form::{FormFields, SubmitPhase};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the form field and submission phase contexts and renders
/// the single sell page. No router: the app has exactly one screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fields = RwSignal::new(FormFields::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    provide_context(fields);
    provide_context(phase);

    view! {
        <Stylesheet id="leptos" href="/pkg/sellcar-client.css"/>
        <Title text="중고차 빠른 판매 등록"/>
        <SellPage/>
    }
}

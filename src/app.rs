//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::toast_stack::{ToastStack, show_notice};
use crate::config::AppConfig;
use crate::net::search::{BrowserFetch, SearchClient};
use crate::pages::{achievements::AchievementsPage, favorites::FavoritesPage, search::SearchPage};
use crate::state::notice::Notifier;
use crate::state::recipe_book::RecipeBook;
use crate::state::search::SearchState;
use crate::state::storage::LocalStore;
use crate::state::toast::ToastState;
use crate::util::clock::now_ms;

/// Search client type provided through context.
pub type AppSearchClient = SearchClient<BrowserFetch>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Creates the single `RecipeBook`, search client, and view state for the
/// session and provides them as context. Stored favorites, history, and
/// achievements are loaded by an effect, which only runs in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let toasts = RwSignal::new(ToastState::default());
    let notifier = Notifier::new(move |notice| show_notice(toasts, notice));

    // The server has no localStorage, so both renders start from an empty
    // book and the browser copy is swapped in once hydration is done.
    let book = RwSignal::new(RecipeBook::in_memory(&config, now_ms));
    let search = RwSignal::new(SearchState::default());
    let client: AppSearchClient = SearchClient::new(BrowserFetch, &config, notifier.clone());

    Effect::new(move || {
        book.set(RecipeBook::open(&config, LocalStore::browser(), notifier.clone(), now_ms));
    });

    provide_context(book);
    provide_context(search);
    provide_context(toasts);
    provide_context(client);

    let favorites_label = move || format!("Favoritos ({})", book.with(|b| b.favorites().len()));
    let achievements_label = move || {
        book.with(|b| {
            let achievements = b.achievements();
            format!("Logros ({}/{})", achievements.unlocked().len(), achievements.definitions().len())
        })
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/recetapps.css"/>
        <Title text="Recetapps"/>

        <Router>
            <header class="app-header">
                <h1 class="app-header__title">"🍳 Recetapps"</h1>
                <nav class="app-header__nav">
                    <A href="/">"Buscar"</A>
                    <A href="/favorites">{favorites_label}</A>
                    <A href="/achievements">{achievements_label}</A>
                </nav>
            </header>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SearchPage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    <Route path=StaticSegment("achievements") view=AchievementsPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}

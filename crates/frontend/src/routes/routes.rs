use crate::domain::pizza::ui::details::PizzaDetailsPage;
use crate::domain::pizza::ui::list::CatalogPage;
use crate::layout::TopBar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <TopBar />
            <main class="main">
                <Routes fallback=|| view! { <p class="not-found">"Страница не найдена"</p> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/pizza/:id") view=PizzaDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}

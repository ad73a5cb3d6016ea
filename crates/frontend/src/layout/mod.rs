//! TopBar component - application top navigation bar.
//!
//! Contains:
//! - Brand link to the catalog
//! - Draft order indicator
//! - Current user name

use crate::shared::icons::icon;
use crate::system::session::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopBar() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="topbar">
            <span class="topbar__brand">
                <A href="/">"Моя пицца"</A>
            </span>

            <div class="topbar__user">
                {move || session.draft_order_id().map(|id| view! {
                    <span class="topbar__order">
                        {icon("cart")}
                        {format!("Заказ № {}", id)}
                    </span>
                })}
                <span class="topbar__username">
                    {move || session.user().map(|u| u.username).unwrap_or_else(|| "Гость".to_string())}
                </span>
            </div>
        </header>
    }
}

use crate::domain::order::api as order_api;
use crate::domain::pizza::api;
use crate::shared::icons::icon;
use crate::shared::money::price_label;
use crate::system::session::context::use_session;
use contracts::domain::pizza::Pizza;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
#[allow(non_snake_case)]
pub fn PizzaDetailsPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let (pizza, set_pizza) = signal::<Option<Pizza>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Загрузка пиццы по id из маршрута
    Effect::new(move |_| {
        let id = params.get().get("id").and_then(|v| v.parse::<i64>().ok());
        match id {
            Some(id) => {
                spawn_local(async move {
                    match api::fetch_pizza(id).await {
                        Ok(p) => {
                            set_pizza.set(Some(p));
                            set_error.set(None);
                        }
                        Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
                    }
                });
            }
            None => set_error.set(Some("Некорректный идентификатор пиццы".to_string())),
        }
    });

    let add_to_order = move |product_id: i64| {
        spawn_local(async move {
            match order_api::add_to_draft(product_id, 1).await {
                Ok(resp) => {
                    session.set_draft_order(Some(resp.order_id));
                    set_notice.set(Some(format!("Пицца добавлена в заказ № {}", resp.order_id)));
                }
                Err(e) => set_error.set(Some(format!("Ошибка добавления в заказ: {}", e))),
            }
        });
    };

    view! {
        <div class="details-page">
            <span class="link-back">
                <A href="/">
                    {icon("arrow-left")}
                    " Назад к каталогу"
                </A>
            </span>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

            {move || match pizza.get() {
                Some(p) => {
                    let product_id = p.id;
                    let add_button = if session.is_cook() {
                        view! { <></> }.into_any()
                    } else {
                        view! {
                            <button
                                class="button button--primary"
                                on:click=move |_| add_to_order(product_id)
                            >
                                "Добавить в заказ"
                            </button>
                        }
                        .into_any()
                    };
                    view! {
                        <div class="details">
                            <div class="details__picture">
                                <img src=p.image.clone() alt=p.name.clone() class="details__image" />
                            </div>
                            <div class="details__info">
                                <h2 class="details__name">{p.name.clone()}</h2>
                                <p class="details__description">{p.description.clone()}</p>
                                <p class="details__cook">{format!("Повар: {}", p.cook)}</p>
                                <p class="details__price">{price_label(p.price)}</p>
                                {add_button}
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None if error.get().is_none() => {
                    view! { <p class="loading">"⏳ Загрузка..."</p> }.into_any()
                }
                None => view! { <></> }.into_any(),
            }}
        </div>
    }
}

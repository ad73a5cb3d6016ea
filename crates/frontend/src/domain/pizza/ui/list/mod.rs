pub mod state;

use self::state::create_state;
use crate::domain::pizza::api;
use crate::shared::components::select::Select;
use crate::shared::money::price_label;
use crate::shared::request_seq::RequestSeq;
use crate::system::session::context::use_session;
use contracts::domain::pizza::{CatalogQuery, Pizza, PriceOrdering};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    let state = create_state();
    let (catalog, set_catalog) = signal::<Vec<Pizza>>(Vec::new());
    let (displayed, set_displayed) = signal::<Vec<Pizza>>(Vec::new());
    let seq = RwSignal::new(RequestSeq::default());
    let navigate = use_navigate();

    // Полная загрузка каталога: обновляет обе коллекции и id
    // заявки-черновика. Ошибки только логируются, список не трогаем.
    let load_catalog = move || {
        let ticket = seq.try_update(|s| s.issue()).unwrap_or(0);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_catalog(&CatalogQuery::default()).await {
                Ok(resp) => {
                    if !seq.try_update(|s| s.commit(ticket)).unwrap_or(false) {
                        log::debug!("Stale catalog response discarded (ticket {})", ticket);
                        return;
                    }
                    set_catalog.set(resp.pizzas.clone());
                    set_displayed.set(resp.pizzas);
                    session.set_draft_order(resp.draft_order_id);
                }
                Err(e) => log::error!("Failed to load pizzas: {}", e),
            }
        });
    };

    // Загрузка с объединёнными критериями: обновляет только
    // отображаемый список
    let load_filtered = move || {
        let query = state.get_untracked().to_query();
        let ticket = seq.try_update(|s| s.issue()).unwrap_or(0);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_catalog(&query).await {
                Ok(resp) => {
                    if !seq.try_update(|s| s.commit(ticket)).unwrap_or(false) {
                        log::debug!("Stale filter response discarded (ticket {})", ticket);
                        return;
                    }
                    set_displayed.set(resp.pizzas);
                }
                Err(e) => log::error!("Failed to filter pizzas: {}", e),
            }
        });
    };

    // Каталог загружается при монтировании и перезагружается при смене
    // роли. Memo следит только за флагом: запись draft_order_id в сессию
    // не должна перезапускать эффект.
    let is_cook = Memo::new(move |_| session.is_cook());
    Effect::new(move |_| {
        is_cook.track();
        load_catalog();
    });

    let run_search = move || {
        let s = state.get();
        if s.search.trim().is_empty() && !s.has_structured() {
            // Пустой запрос без фильтров: локальный сброс к полному
            // каталогу без обращения к серверу. Ответы в полёте
            // устаревают, чтобы не перетереть сброс.
            seq.update(|g| g.supersede());
            set_displayed.set(catalog.get());
            return;
        }
        load_filtered();
    };

    let apply_search = move |value: String| {
        state.update(|s| s.search = value);
        run_search();
    };

    let apply_ordering = move |value: String| {
        state.update(|s| s.ordering = PriceOrdering::from_param(&value));
        load_filtered();
    };

    let apply_vegetarian = move |value: String| {
        state.update(|s| {
            s.vegetarian = match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            }
        });
        load_filtered();
    };

    view! {
        <div class="catalog-page">
            <form
                class="search-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    run_search();
                }
            >
                <input
                    name="text"
                    type="text"
                    class="search-form__input"
                    placeholder="Поиск"
                    prop:value=move || state.get().search
                    on:input=move |ev| apply_search(event_target_value(&ev))
                />
                <Show when=move || !is_cook.get()>
                    <div class="search-form__filters">
                        <Select
                            value=Signal::derive(move || {
                                state.get().ordering.map(|o| o.as_param().to_string()).unwrap_or_default()
                            })
                            on_change=Callback::new(move |v: String| apply_ordering(v))
                            options=vec![
                                ("".to_string(), "Цена без фильтра".to_string()),
                                ("price".to_string(), "По возрастанию цены".to_string()),
                                ("-price".to_string(), "По убыванию цены".to_string()),
                            ]
                        />
                        <Select
                            value=Signal::derive(move || {
                                match state.get().vegetarian {
                                    Some(true) => "true",
                                    Some(false) => "false",
                                    None => "",
                                }
                                .to_string()
                            })
                            on_change=Callback::new(move |v: String| apply_vegetarian(v))
                            options=vec![
                                ("".to_string(), "Все пиццы".to_string()),
                                ("true".to_string(), "Вегетарианские".to_string()),
                                ("false".to_string(), "Не вегетарианские".to_string()),
                            ]
                        />
                    </div>
                </Show>
            </form>

            <div class="page-heading">
                <h2>
                    {move || if is_cook.get() {
                        "Информация о пиццах, которые находятся под вашей ответственностью"
                    } else {
                        "Пицца"
                    }}
                </h2>
            </div>

            <div class="catalog">
                {move || {
                    let items = displayed.get();
                    if items.is_empty() {
                        return view! {
                            <p class="catalog__empty">"Нет подходящих пицц под данные фильтры"</p>
                        }
                        .into_any();
                    }
                    items
                        .into_iter()
                        .map(|pizza| {
                            let nav = navigate.clone();
                            let pizza_id = pizza.id;
                            view! {
                                <div class="card">
                                    <div class="card__picture">
                                        <img src=pizza.image.clone() alt=pizza.name.clone() class="card__image" />
                                    </div>
                                    <div class="card__info">
                                        <p class="card__name">{pizza.name.clone()}</p>
                                        <p class="card__description">{pizza.description.clone()}</p>
                                    </div>
                                    <div class="card__footer">
                                        <button
                                            class="button button--price"
                                            on:click=move |_| nav(&format!("/pizza/{}", pizza_id), Default::default())
                                        >
                                            {price_label(pizza.price)}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

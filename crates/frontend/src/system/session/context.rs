use contracts::system::session::UserSession;
use leptos::prelude::*;

use super::storage;

/// Сессия пользователя, разделяемая через контекст. Страницы читают
/// роль и заявку-черновик отсюда; сам флаг роли страницы не меняют.
#[derive(Clone, Copy)]
pub struct SessionStore {
    user: RwSignal<Option<UserSession>>,
}

impl SessionStore {
    pub fn new(initial: Option<UserSession>) -> Self {
        Self {
            user: RwSignal::new(initial),
        }
    }

    pub fn user(&self) -> Option<UserSession> {
        self.user.get()
    }

    /// Роль текущего пользователя; для гостя всегда `false`
    pub fn is_cook(&self) -> bool {
        self.user
            .with(|user| user.as_ref().map(|u| u.is_cook).unwrap_or(false))
    }

    pub fn draft_order_id(&self) -> Option<i64> {
        self.user
            .with(|user| user.as_ref().and_then(|u| u.draft_order_id))
    }

    /// Обновить id заявки-черновика из ответа сервера.
    /// Для гостя (нет сессии) обновлять нечего.
    pub fn set_draft_order(&self, order_id: Option<i64>) {
        self.user.update(|user| {
            if let Some(u) = user {
                u.draft_order_id = order_id;
                storage::save_session(u);
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(
    /// Предустановленная сессия (для тестов и страниц-хостов);
    /// иначе восстанавливается из localStorage
    #[prop(optional)]
    initial: Option<UserSession>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = SessionStore::new(initial.or_else(storage::load_session));
    provide_context(store);

    children()
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionProvider not found in component tree")
}

use crate::domain::a001_gift::catalog::load_catalog;
use crate::domain::a001_gift::ui::details::{GiftModal, GiftModalService};
use crate::domain::a001_gift::ui::list::GiftList;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Одно модальное окно на всю страницу
    provide_context(GiftModalService::new());

    let gifts = load_catalog(&config.catalog_element_id);

    view! {
        <main class="wishlist">
            <h1 class="wishlist__title">{config.title}</h1>
            <GiftList gifts=gifts />
            <GiftModal />
        </main>
    }
}

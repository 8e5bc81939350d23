pub mod card;
pub mod presenter;

use card::GiftCard;
use contracts::domain::a001_gift::Gift;
use leptos::html::Div;
use leptos::prelude::*;

use crate::domain::a001_gift::ui::details::GiftModalService;
use crate::shared::icons::icon;

/// Шаг stagger-анимации между соседними карточками
const STAGGER_MS: u32 = 60;
/// После этого числа карточек задержка больше не растёт
const STAGGER_LIMIT: u32 = 10;

#[component]
pub fn GiftList(gifts: Vec<Gift>) -> impl IntoView {
    let modal = expect_context::<GiftModalService>();
    let grid_ref = NodeRef::<Div>::new();

    // Привязываем обработчик один раз, когда контейнер появился в DOM
    Effect::new(move |bound: Option<bool>| {
        if bound == Some(true) {
            return true;
        }
        let Some(grid) = grid_ref.get() else {
            return false;
        };
        if let Err(err) = presenter::bind_gift_cards(&grid, modal) {
            log::error!("Failed to bind gift cards: {:?}", err);
        }
        true
    });

    if gifts.is_empty() {
        return view! {
            <div class="wishlist__empty">
                {icon("gift")}
                <p>"Список подарков пока пуст"</p>
            </div>
        }
        .into_any();
    }

    let indexed: Vec<(usize, Gift)> = gifts.into_iter().enumerate().collect();

    view! {
        <div class="gift-grid" node_ref=grid_ref>
            <For
                each=move || indexed.clone()
                key=|(_, gift): &(usize, Gift)| gift.id
                children=|(i, gift): (usize, Gift)| {
                    let delay_ms = (i as u32).min(STAGGER_LIMIT) * STAGGER_MS;
                    view! { <GiftCard gift=gift delay_ms=delay_ms /> }
                }
            />
        </div>
    }
    .into_any()
}

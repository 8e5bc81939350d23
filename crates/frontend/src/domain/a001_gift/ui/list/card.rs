use contracts::domain::a001_gift::Gift;
use leptos::prelude::*;
use thaw::Card;

/// Карточка подарка.
///
/// Разметка — контракт для презентера: `div.gift-card` с атрибутами
/// `data-link`/`data-price` и потомками `.card-title`/`.card-text`.
/// У подарка без цены атрибута `data-price` нет вовсе.
#[component]
pub fn GiftCard(
    gift: Gift,
    /// Задержка анимации появления (для stagger-эффекта)
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let reserved = gift.is_reserved();
    let price = gift.price_attr();
    let note = gift.reservation_note();
    let Gift {
        title,
        description,
        link,
        image,
        ..
    } = gift;

    let class = if reserved {
        "gift-card gift-card--reserved"
    } else {
        "gift-card"
    };
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let alt = title.clone();

    view! {
        <div class=class style=style data-link=link data-price=price>
            <Card>
                {image.map(|src| view! { <img class="card-img-top" src=src alt=alt /> })}
                <h3 class="card-title">{title}</h3>
                <p class="card-text">{description}</p>
                {note.map(|note| {
                    view! {
                        <span class="badge badge--warning" title=note>
                            "Зарезервирован"
                        </span>
                    }
                })}
            </Card>
        </div>
    }
}

//! Клик по карточке подарка → модальное окно.
//!
//! Один обработчик `click` на контейнере карточек: карточки, появившиеся
//! позже, обслуживаются тем же обработчиком.

use contracts::domain::a001_gift::CardData;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

use crate::domain::a001_gift::ui::details::GiftModalService;

pub const CARD_SELECTOR: &str = ".gift-card";
pub const TITLE_SELECTOR: &str = ".card-title";
pub const DESCRIPTION_SELECTOR: &str = ".card-text";
pub const LINK_ATTR: &str = "link";
pub const PRICE_ATTR: &str = "price";

/// Подписать контейнер на клики по карточкам. Вызывается один раз после монтирования.
pub fn bind_gift_cards(container: &Element, modal: GiftModalService) -> Result<(), JsValue> {
    let scope = container.clone();
    let handler = Closure::wrap(Box::new(move |event: Event| {
        let Some(card) = clicked_card(&scope, &event) else {
            return;
        };
        let data = read_card_data(&card);
        log::debug!("Presenting gift card \"{}\"", data.title);
        modal.present(data);
    }) as Box<dyn FnMut(_)>);

    container.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Карточка, на которую пришёлся клик, если она лежит внутри `scope`
pub fn clicked_card(scope: &Element, event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(CARD_SELECTOR).ok()??;
    scope.contains(Some(card.as_ref())).then_some(card)
}

pub fn read_card_data(card: &Element) -> CardData {
    CardData::from_parts(
        child_text(card, TITLE_SELECTOR),
        child_text(card, DESCRIPTION_SELECTOR),
        data_attr(card, LINK_ATTR),
        data_attr(card, PRICE_ATTR),
    )
}

/// Текст первого потомка по селектору
pub fn child_text(card: &Element, selector: &str) -> Option<String> {
    card.query_selector(selector).ok()??.text_content()
}

/// Значение атрибута `data-{name}`
pub fn data_attr(card: &Element, name: &str) -> Option<String> {
    card.get_attribute(&format!("data-{name}"))
}

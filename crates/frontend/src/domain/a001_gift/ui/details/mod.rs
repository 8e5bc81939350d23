pub mod state;

pub use state::GiftModalService;

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// id модального окна подарка
pub const GIFT_MODAL_ID: &str = "giftModal";

/// Общее модальное окно подарка. Содержимое целиком берётся из [`GiftModalService`],
/// само окно создаётся один раз и при открытии не пересоздаётся.
#[component]
pub fn GiftModal() -> impl IntoView {
    let modal = expect_context::<GiftModalService>();
    let close = Callback::new(move |_| modal.hide());

    view! {
        <ModalFrame open=Signal::derive(move || modal.is_open()) on_close=close modal_id=GIFT_MODAL_ID>
            <div class="modal-header">
                <h2 class="modal-title">{move || modal.with_content(|c| c.title.clone())}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    attr:class="modal__close"
                    on_click=move |_| modal.hide()
                >
                    {icon("x")}
                </Button>
            </div>
            <div class="modal-body">
                <p class="description">{move || modal.with_content(|c| c.description.clone())}</p>
                <p>
                    {icon("external-link")}
                    " "
                    <a
                        class="link"
                        href=move || modal.with_content(|c| c.link.clone())
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {move || modal.with_content(|c| c.link.clone())}
                    </a>
                </p>
                <p class="price">{move || modal.with_content(|c| c.price_text())}</p>
            </div>
        </ModalFrame>
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Класс оверлея открытого окна
pub const OPEN_CLASS: &str = "modal-overlay--open";

/// Оверлей и поверхность модального окна без собственной разметки заголовка.
///
/// Разметка живёт в DOM постоянно, `open` только переключает класс видимости,
/// поэтому содержимое перезаписывается на месте.
/// Закрывается по `Escape` и по клику на оверлей, если и нажатие, и отпускание
/// кнопки мыши пришлись на сам оверлей.
#[component]
pub fn ModalFrame(
    /// Открыто ли окно
    #[prop(into)]
    open: Signal<bool>,
    /// Вызывается, когда окно нужно закрыть
    on_close: Callback<()>,
    /// id поверхности (`div.modal`)
    #[prop(optional, into)]
    modal_id: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Закрываем на следующем тике: оверлей удаляется из DOM
            // прямо во время обработки собственного клика.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class=move || {
                if open.get() {
                    format!("modal-overlay {OPEN_CLASS}")
                } else {
                    "modal-overlay".to_string()
                }
            }
            aria-hidden=move || (!open.get()).to_string()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class="modal"
                id=modal_id
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

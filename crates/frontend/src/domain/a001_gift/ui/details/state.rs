use contracts::domain::a001_gift::CardData;
use leptos::prelude::*;

/// Единственное модальное окно подарка: содержимое и видимость.
///
/// Каждый вызов [`present`](Self::present) полностью перезаписывает
/// содержимое и только потом показывает окно.
#[derive(Clone, Copy)]
pub struct GiftModalService {
    content: RwSignal<CardData>,
    is_visible: RwSignal<bool>,
}

impl GiftModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(CardData::default()),
            is_visible: RwSignal::new(false),
        }
    }

    /// Заполнить окно данными карточки и показать
    pub fn present(&self, data: CardData) {
        self.content.set(data);
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }

    pub fn with_content<R>(&self, f: impl FnOnce(&CardData) -> R) -> R {
        self.content.with(f)
    }
}

impl Default for GiftModalService {
    fn default() -> Self {
        Self::new()
    }
}

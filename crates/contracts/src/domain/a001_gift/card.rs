//! Данные, которые презентер снимает с карточки подарка в момент клика.

/// Подпись перед ценой в модальном окне
pub const PRICE_LABEL: &str = "Price";

/// Валюта, дописываемая к цене без пробела
pub const CURRENCY_SUFFIX: &str = "€";

/// Снимок одной карточки. Не кэшируется: собирается заново на каждый клик.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardData {
    pub title: String,
    pub description: String,
    pub link: String,
    pub price: String,
}

impl CardData {
    /// Отсутствующие значения превращаются в пустые строки.
    /// Заголовок и описание обрезаются, ссылка и цена берутся как есть.
    pub fn from_parts(
        title: Option<String>,
        description: Option<String>,
        link: Option<String>,
        price: Option<String>,
    ) -> Self {
        Self {
            title: title.map(|t| t.trim().to_string()).unwrap_or_default(),
            description: description.map(|d| d.trim().to_string()).unwrap_or_default(),
            link: link.unwrap_or_default(),
            price: price.unwrap_or_default(),
        }
    }

    pub fn price_text(&self) -> String {
        format_price(&self.price)
    }
}

/// `"Price: {price}€"`, пустая цена даёт `"Price: €"`
pub fn format_price(price: &str) -> String {
    format!("{}: {}{}", PRICE_LABEL, price, CURRENCY_SUFFIX)
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::CardData;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор подарка, ключ карточки в галерее
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GiftId(pub Uuid);

impl GiftId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Подарок из вишлиста.
///
/// Поля не валидируются: запись без цены или ссылки всё равно попадает
/// в галерею, а карточка просто отдаёт пустые значения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    #[serde(default = "GiftId::new_v4")]
    pub id: GiftId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Ссылка на магазин
    #[serde(default)]
    pub link: String,

    /// Цена в евро
    #[serde(default)]
    pub price: Option<f64>,

    /// URL картинки для карточки
    #[serde(default)]
    pub image: Option<String>,

    /// Кто зарезервировал подарок
    #[serde(rename = "reservedBy", default)]
    pub reserved_by: Option<String>,

    /// Комментарий к резерву
    #[serde(default)]
    pub comments: Option<String>,
}

impl Gift {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        price: Option<f64>,
    ) -> Self {
        Self {
            id: GiftId::new_v4(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            price,
            image: None,
            reserved_by: None,
            comments: None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved_by
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Подсказка к бейджу резерва: кто зарезервировал и его комментарий
    pub fn reservation_note(&self) -> Option<String> {
        if !self.is_reserved() {
            return None;
        }
        let by = self.reserved_by.as_deref().unwrap_or_default().trim();
        match self.comments.as_deref().map(str::trim) {
            Some(comment) if !comment.is_empty() => Some(format!("{by}: {comment}")),
            _ => Some(by.to_string()),
        }
    }

    /// Значение атрибута `data-price` карточки
    pub fn price_attr(&self) -> Option<String> {
        self.price.map(|p| p.to_string())
    }

    /// Данные, которые отдаст отрисованная карточка этого подарка
    pub fn card_data(&self) -> CardData {
        CardData::from_parts(
            Some(self.title.clone()),
            Some(self.description.clone()),
            Some(self.link.clone()),
            self.price_attr(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_attr() {
        let mut gift = Gift::new(
            "Coffee Mug",
            "Ceramic, 300ml",
            "https://shop.example/mug",
            Some(9.99),
        );
        assert_eq!(gift.price_attr().as_deref(), Some("9.99"));

        gift.price = Some(10.0);
        assert_eq!(gift.price_attr().as_deref(), Some("10"));

        gift.price = None;
        assert_eq!(gift.price_attr(), None);
    }

    #[test]
    fn test_is_reserved() {
        let mut gift = Gift::new("Книга", "", "", None);
        assert!(!gift.is_reserved());

        gift.reserved_by = Some("   ".to_string());
        assert!(!gift.is_reserved());

        gift.reserved_by = Some("Аноним".to_string());
        assert!(gift.is_reserved());
    }

    #[test]
    fn test_card_data_matches_rendered_card() {
        let gift = Gift::new(
            "  Coffee Mug ",
            "Ceramic, 300ml\n",
            "https://shop.example/mug",
            Some(9.99),
        );
        let data = gift.card_data();
        assert_eq!(data.title, "Coffee Mug");
        assert_eq!(data.description, "Ceramic, 300ml");
        assert_eq!(data.link, "https://shop.example/mug");
        assert_eq!(data.price_text(), "Price: 9.99€");
    }

    #[test]
    fn test_reservation_note() {
        let mut gift = Gift::new("Термос", "", "", None);
        assert_eq!(gift.reservation_note(), None);

        gift.comments = Some("Подарю на новоселье".to_string());
        assert_eq!(gift.reservation_note(), None);

        gift.reserved_by = Some(" Аноним ".to_string());
        assert_eq!(
            gift.reservation_note().as_deref(),
            Some("Аноним: Подарю на новоселье")
        );

        gift.comments = Some("  ".to_string());
        assert_eq!(gift.reservation_note().as_deref(), Some("Аноним"));
    }
}

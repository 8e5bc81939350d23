//! Разбор каталога подарков, встроенного в страницу как JSON.

use thiserror::Error;

use crate::domain::a001_gift::Gift;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Разобрать JSON-массив подарков. Пустой или пробельный текст означает пустой каталог.
pub fn parse_catalog(raw: &str) -> Result<Vec<Gift>, CatalogError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let raw = r#"[
            {
                "title": "Coffee Mug",
                "description": "Ceramic, 300ml",
                "link": "https://shop.example/mug",
                "price": 9.99,
                "image": "/static/uploads/mug.jpg"
            },
            {
                "id": "6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f",
                "title": "Настольная игра",
                "description": "Для всей семьи",
                "link": "https://shop.example/game",
                "price": 35,
                "reservedBy": "Аноним",
                "comments": "Куплю к пятнице"
            }
        ]"#;

        let gifts = parse_catalog(raw).unwrap();
        assert_eq!(gifts.len(), 2);
        assert_eq!(gifts[0].title, "Coffee Mug");
        assert_eq!(gifts[0].price, Some(9.99));
        assert_eq!(gifts[0].image.as_deref(), Some("/static/uploads/mug.jpg"));
        assert!(!gifts[0].is_reserved());

        assert_eq!(
            gifts[1].id.0.to_string(),
            "6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f"
        );
        assert_eq!(gifts[1].price_attr().as_deref(), Some("35"));
        assert!(gifts[1].is_reserved());
        assert_eq!(gifts[1].comments.as_deref(), Some("Куплю к пятнице"));
    }

    #[test]
    fn test_partial_records_are_accepted() {
        let gifts = parse_catalog(r#"[{"title": "Без цены"}]"#).unwrap();
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].price, None);
        assert_eq!(gifts[0].link, "");
        assert_eq!(gifts[0].card_data().price_text(), "Price: €");
    }

    #[test]
    fn test_ids_are_generated_when_missing() {
        let gifts = parse_catalog(r#"[{"title": "a"}, {"title": "b"}]"#).unwrap();
        assert_ne!(gifts[0].id, gifts[1].id);
    }

    #[test]
    fn test_empty_source_is_empty_catalog() {
        assert!(parse_catalog("").unwrap().is_empty());
        assert!(parse_catalog("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_catalog() {
        let err = parse_catalog("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert!(err.to_string().starts_with("catalog is not valid JSON"));
    }
}

use contracts::domain::a001_gift::Gift;
use contracts::shared::catalog::parse_catalog;

use crate::shared::dom::read_data_island;

/// Каталог подарков со страницы. Любая проблема даёт пустой список и запись в лог.
pub fn load_catalog(element_id: &str) -> Vec<Gift> {
    let Some(raw) = read_data_island(element_id) else {
        log::warn!("Gift catalog #{} not found on the page", element_id);
        return Vec::new();
    };

    match parse_catalog(&raw) {
        Ok(gifts) => {
            log::info!("Loaded {} gifts", gifts.len());
            gifts
        }
        Err(err) => {
            log::error!("Failed to load gift catalog: {}", err);
            Vec::new()
        }
    }
}

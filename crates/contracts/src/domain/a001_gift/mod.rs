pub mod aggregate;
pub mod card;

pub use aggregate::{Gift, GiftId};
pub use card::{format_price, CardData, CURRENCY_SUFFIX, PRICE_LABEL};

//! Общие типы вишлиста: агрегат подарка, данные карточки и разбор каталога.
//!
//! Крейт не зависит от DOM и собирается как под WASM, так и нативно,
//! поэтому вся логика без побочных эффектов живёт здесь.

pub mod domain;
pub mod shared;

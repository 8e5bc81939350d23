//! Чтение данных, которые страница встраивает в `<script type="application/json">`.

use web_sys::window;

/// Текст элемента с указанным id или `None`, если элемента нет
pub fn read_data_island(element_id: &str) -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
}

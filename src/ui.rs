use crate::constants::MENU_TOGGLE_ID;
use web_sys as web;

/// Swap the expanded/collapsed marker classes on the menu toggle; the
/// stylesheet animates the panel open or closed from there.
pub fn toggle_menu(document: &web::Document) {
    let Some(el) = document.get_element_by_id(MENU_TOGGLE_ID) else {
        return;
    };
    let classes = el.class_list();
    if classes.contains("expanded") {
        let _ = classes.remove_1("expanded");
        let _ = classes.add_1("collapsed");
    } else {
        let _ = classes.remove_1("collapsed");
        let _ = classes.add_1("expanded");
    }
}

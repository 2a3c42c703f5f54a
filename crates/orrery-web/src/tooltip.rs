use web_sys as web;

use crate::constants::{TOOLTIP_ID, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};

#[inline]
pub fn show_at(document: &web::Document, client_x: i32, client_y: i32, name: &str) {
    if let Some(el) = document.get_element_by_id(TOOLTIP_ID) {
        let _ = el.set_attribute(
            "style",
            &format!(
                "display:block;left:{}px;top:{}px",
                client_x + TOOLTIP_OFFSET_X,
                client_y + TOOLTIP_OFFSET_Y
            ),
        );
        el.set_text_content(Some(name));
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOOLTIP_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

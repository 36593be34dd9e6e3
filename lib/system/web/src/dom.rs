//! Element queries and style helpers.

use crate::prelude::*;

use web_sys::Document;
use web_sys::DomRect;
use web_sys::Element;
use web_sys::HtmlElement;



// ===============
// === Queries ===
// ===============

/// CSS selector matching elements whose attribute `name` equals `value`.
pub fn attribute_selector(name:&str, value:&str) -> String {
    format!("[{}=\"{}\"]",name,value)
}

/// The first element in the document matching the selector, if it has the requested type.
pub fn query_one<T:JsCast>(document:&Document, selector:&str) -> Option<T> {
    document.query_selector(selector).ok().flatten().and_then(|e| e.dyn_into().ok())
}

/// The first descendant of `element` matching the selector, if it has the requested type.
pub fn query_one_in<T:JsCast>(element:&Element, selector:&str) -> Option<T> {
    element.query_selector(selector).ok().flatten().and_then(|e| e.dyn_into().ok())
}

/// All elements in the document matching the selector and having the requested type, in
/// document order.
pub fn query_all<T:JsCast>(document:&Document, selector:&str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_)   => return Vec::new(),
    };
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(|n| n.dyn_into().ok()).collect()
}



// =============
// === Style ===
// =============

/// Show or hide the element through its inline `display` style.
pub fn set_displayed(element:&HtmlElement, displayed:bool) {
    let value = if displayed { "block" } else { "none" };
    // Setting a well-formed property on an inline style does not throw.
    let _ = element.style().set_property("display",value);
}

/// Add or remove a CSS class.
pub fn set_class(element:&Element, class:&str, enabled:bool) {
    // `DOMTokenList.toggle` throws only for empty or whitespace-containing tokens.
    let _ = element.class_list().toggle_with_force(class,enabled);
}

/// Font size of the document's root element in pixels, i.e. the size of `1rem`.
pub fn root_font_size(document:&Document) -> Option<f64> {
    let root  = document.document_element()?;
    let style = crate::window().ok()?.get_computed_style(&root).ok()??;
    let size  = style.get_property_value("font-size").ok()?;
    parse_pixels(&size)
}

/// Parse a CSS pixel length such as `16px`.
pub fn parse_pixels(value:&str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

/// Bounding rectangle of the element relative to the viewport.
pub fn bounding_rect(element:&Element) -> DomRect {
    element.get_bounding_client_rect()
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_for_attribute() {
        assert_eq!(attribute_selector("data-role","input"), "[data-role=\"input\"]");
    }

    #[test]
    fn pixels() {
        assert_eq!(parse_pixels("16px"), Some(16.0));
        assert_eq!(parse_pixels(" 12.5px "), Some(12.5));
        assert_eq!(parse_pixels("1em"), None);
    }
}

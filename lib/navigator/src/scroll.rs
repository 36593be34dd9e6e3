//! Keeping the focused item inside the scrollable results container.



// ==============
// === Bounds ===
// ==============

/// Vertical extent of an element, in CSS pixels relative to the viewport.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
#[allow(missing_docs)]
pub struct Bounds {
    pub top    : f64,
    pub bottom : f64,
}

impl Bounds {
    /// Constructor.
    pub fn new(top:f64, bottom:f64) -> Self {
        Self {top,bottom}
    }
}

/// Amount by which the container's `scrollTop` has to change so that `item` is visible.
///
/// An item closer than `margin` to the container's bottom edge scrolls the container down until
/// the margin is free again. An item above the top edge scrolls it up until the item is aligned
/// with the top edge.
pub fn scroll_delta(container:Bounds, item:Bounds, margin:f64) -> f64 {
    if item.bottom > container.bottom - margin {
        item.bottom - container.bottom + margin
    } else if item.top < container.top {
        item.top - container.top
    } else {
        0.0
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN:f64 = 48.0;

    #[test]
    fn item_in_view_does_not_scroll() {
        let container = Bounds::new(100.0,400.0);
        assert_eq!(scroll_delta(container,Bounds::new(120.0,150.0),MARGIN), 0.0);
    }

    #[test]
    fn item_near_bottom_scrolls_down() {
        let container = Bounds::new(100.0,400.0);
        assert_eq!(scroll_delta(container,Bounds::new(340.0,370.0),MARGIN), 18.0);
    }

    #[test]
    fn item_above_top_scrolls_up() {
        let container = Bounds::new(100.0,400.0);
        assert_eq!(scroll_delta(container,Bounds::new(60.0,90.0),MARGIN), -40.0);
    }
}

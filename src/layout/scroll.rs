//! Scroll-into-view decision
//!
//! When a definition is opened, the page scrolls so its card sits just
//! below the viewport top, but only if the card is not already
//! adequately visible within both the viewport and the panel bounds.
//! The decision is pure; the DOM adapter supplies the rects and applies
//! the resulting scroll.

use crate::models::VerticalRect;

/// Inputs for the scroll decision, all in viewport coordinates except
/// `scroll_y` (current document scroll offset).
#[derive(Clone, Copy, Debug)]
pub struct ScrollContext {
    /// The opened definition card
    pub card: VerticalRect,

    /// The outer side panel column
    pub panel: VerticalRect,

    /// Current document scroll offset
    pub scroll_y: f64,

    /// Viewport height
    pub viewport_height: f64,

    /// Fixed distance kept between the viewport top and the card top
    /// after scrolling
    pub top_offset: f64,
}

/// Absolute scroll position that brings the card into view, or `None`
/// when the card is already fully visible.
pub fn scroll_target(ctx: &ScrollContext) -> Option<f64> {
    let visible_top = ctx.top_offset.max(ctx.panel.top);
    let visible_bottom = ctx.viewport_height.min(ctx.panel.bottom());

    let fully_visible =
        ctx.card.top >= visible_top && ctx.card.bottom() <= visible_bottom;
    if fully_visible {
        return None;
    }

    Some(ctx.scroll_y + ctx.card.top - ctx.top_offset)
}

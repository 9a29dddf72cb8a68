//! Circular carousel engine.
//!
//! A fixed list of items is arranged around one active index. `layout`
//! holds the pure positioning math that maps an item index to its wrapped
//! visual offset and derived transform; `state` holds the single owner of
//! the active index and the debounced overlay flag.
//!
//! Timers live in the frontend component. The state owner only needs to be
//! told when a tick or a reveal fires; the `revision` counter lets it ignore
//! reveals that were scheduled for an index that is no longer active.

mod layout;
mod state;

pub use layout::{
    slide_layout, wrapped_position, SlideLayout, BASE_Z_INDEX, SCALE_STEP, SLIDE_SPACING_PX,
    VISIBLE_RADIUS,
};
pub use state::Carousel;

/// Interval between automatic advances.
pub const AUTO_ADVANCE_MS: u32 = 3000;

/// Delay between an index change and the caption overlay reveal.
pub const OVERLAY_REVEAL_MS: u32 = 300;

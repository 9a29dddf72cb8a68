//! Runtime state of the carousel component.
//!
//! The ring state itself is `common::carousel::Carousel`; this struct adds
//! the timer handles that drive it. Both handles cancel their browser timer
//! when dropped, so replacing or clearing them is how a timer is cancelled.

use std::num::NonZeroUsize;

use common::carousel::Carousel;
use gloo_timers::callback::{Interval, Timeout};

pub struct CarouselComponent {
    /// `None` when the component was given no items.
    pub carousel: Option<Carousel>,

    /// Auto-advance ticker, alive while the component is mounted.
    pub ticker: Option<Interval>,

    /// Pending overlay reveal. At most one exists at a time.
    pub reveal: Option<Timeout>,
}

impl CarouselComponent {
    pub fn new(item_count: usize) -> Self {
        Self {
            carousel: NonZeroUsize::new(item_count).map(Carousel::new),
            ticker: None,
            reveal: None,
        }
    }

    /// Drops both timers, cancelling anything still scheduled.
    pub fn release_timers(&mut self) {
        self.ticker = None;
        self.reveal = None;
    }
}

use common::model::category::{Category, CATEGORIES};
use yew::prelude::*;

/// Properties for the `CarouselComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CarouselProps {
    /// Items in ring order. Defaults to the exhibition categories.
    #[prop_or(CATEGORIES)]
    pub items: &'static [Category],
}

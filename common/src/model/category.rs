/// A single exhibition category shown in the categories carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub image_url: &'static str,
}

impl Category {
    const fn new(name: &'static str, image_url: &'static str) -> Self {
        Self { name, image_url }
    }
}

/// Categories in carousel order. Adjacent entries are adjacent on screen and
/// the last entry wraps around to the first.
pub const CATEGORIES: &[Category] = &[
    Category::new("Spices", "/categories/spices.webp"),
    Category::new("Footwear", "/categories/footwear.webp"),
    Category::new("Toys", "/categories/toys.webp"),
    Category::new("Chemical", "/categories/chemicals.webp"),
    Category::new("Hardware & Tools", "/categories/hardware.webp"),
    Category::new("Electronics & Components", "/categories/electronics.webp"),
    Category::new("Auto Parts", "/categories/auto.webp"),
    Category::new("Construction Material", "/categories/construction.webp"),
    Category::new("Agriculture & Equipment's", "/categories/agriculture.webp"),
    Category::new("Plastic & Packaging", "/categories/plastic.webp"),
    Category::new("Sports", "/categories/sports.webp"),
    Category::new("Food & Beverage", "/categories/food.webp"),
    Category::new("Pharmaceutical Products", "/categories/pharma.webp"),
    Category::new("Surgical Devices", "/categories/surgical.webp"),
    Category::new("Gifting & Stationary", "/categories/gifting.webp"),
    Category::new("Furniture", "/categories/furniture.webp"),
    Category::new("Kitchenware", "/categories/kitchenware.webp"),
    Category::new("Home Décor", "/categories/home.webp"),
];

//! Static in-memory product catalog.
//!
//! The catalog is fixed at build time: a read-only list of products with
//! nested specifications and canned reviews. There is no inventory backend;
//! stock counts are display data only.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hive_image_core::ProductId;

/// Brand constants used across the storefront and the chat assistant.
pub mod brand {
    pub const NAME: &str = "Hive Image";
    pub const NAME_UPPER: &str = "HIVE IMAGE";
    pub const SUPPORT_PHONE: &str = "+44 7469 535612";
    pub const SUPPORT_EMAIL: &str = "support@hiveimage.co.uk";
    pub const ADDRESS: &str = "56 Outram Road, London E6 1JR";
    /// WhatsApp number in international format without the leading `+`.
    pub const WHATSAPP_NUMBER: &str = "447469535612";
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Smartphones,
    Laptops,
    #[serde(rename = "Smart Home")]
    SmartHome,
    Kitchen,
    Audio,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Smartphones,
        Self::Laptops,
        Self::SmartHome,
        Self::Kitchen,
        Self::Audio,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Smartphones => write!(f, "Smartphones"),
            Self::Laptops => write!(f, "Laptops"),
            Self::SmartHome => write!(f, "Smart Home"),
            Self::Kitchen => write!(f, "Kitchen"),
            Self::Audio => write!(f, "Audio"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Smartphones" => Ok(Self::Smartphones),
            "Laptops" => Ok(Self::Laptops),
            "Smart Home" => Ok(Self::SmartHome),
            "Kitchen" => Ok(Self::Kitchen),
            "Audio" => Ok(Self::Audio),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// Technical specification record shown on the detail and comparison pages.
#[derive(Debug, Clone, Serialize)]
pub struct Specifications {
    pub dimensions: &'static str,
    pub weight: &'static str,
    pub power_consumption: &'static str,
    pub warranty: &'static str,
}

/// A canned customer review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub user: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
}

/// A purchasable catalog item.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub category: Category,
    pub price: Decimal,
    pub description: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub stock: u32,
    pub featured: bool,
    pub specs: Specifications,
    pub reviews: Vec<Review>,
}

impl Product {
    /// Whether the product is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Filter predicate for the shop listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// `None` means all categories.
    pub category: Option<Category>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub min_rating: f32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            min_price: Decimal::ZERO,
            // Default shop slider range is £0 - £2000
            max_price: Decimal::new(2_000, 0),
            min_rating: 0.0,
        }
    }
}

impl ProductFilter {
    /// Whether a product passes the filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self.category.is_none_or(|c| c == product.category);
        let matches_price = product.price >= self.min_price && product.price <= self.max_price;
        let matches_rating = product.rating >= self.min_rating;
        matches_category && matches_price && matches_rating
    }
}

/// The fixed, read-only product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products carrying the `featured` flag, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products passing the given filter, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Category list with product counts, in display order.
    /// Categories with no products are omitted.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .filter_map(|&category| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| p.category == category)
                    .count();
                (count > 0).then_some((category, count))
            })
            .collect()
    }
}

/// Shared review set attached to every catalog item.
fn mock_reviews() -> Vec<Review> {
    vec![
        Review {
            user: "Sarah J.",
            rating: 5,
            comment: "Exceeded all expectations. The build quality is exceptional.",
            date: "2 days ago",
        },
        Review {
            user: "Mark D.",
            rating: 4,
            comment: "Great performance, slightly heavier than expected but worth it.",
            date: "1 week ago",
        },
    ]
}

/// The global catalog instance.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    products: vec![
        Product {
            id: ProductId::new(1),
            name: "HivePhone Pro Max",
            category: Category::Smartphones,
            price: Decimal::new(99_900, 2),
            description: "The pinnacle of mobile engineering with a Pro-level camera system and 120Hz display.",
            image: "https://images.unsplash.com/photo-1616348436168-de43ad0db179?auto=format&fit=crop&q=80&w=800",
            rating: 4.9,
            stock: 12,
            featured: true,
            specs: Specifications {
                dimensions: "160.7 x 77.6 x 7.9 mm",
                weight: "240g",
                power_consumption: "20W Peak Charging",
                warranty: "2 Year UK Manufacturer Warranty",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(2),
            name: "HiveX Gaming Laptop",
            category: Category::Laptops,
            price: Decimal::new(149_999, 2),
            description: "NVIDIA RTX 4080 powered beast designed for extreme performance and 4K editing.",
            image: "https://images.unsplash.com/photo-1603302576837-37561b2e2302?auto=format&fit=crop&q=80&w=800",
            rating: 4.8,
            stock: 5,
            featured: true,
            specs: Specifications {
                dimensions: "357 x 252 x 19.9 mm",
                weight: "2.4kg",
                power_consumption: "240W Power Adapter",
                warranty: "3 Year Premium On-site Warranty",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(3),
            name: "HiveSound ANC Headphones",
            category: Category::Audio,
            price: Decimal::new(24_900, 2),
            description: "Immersive spatial audio with industry-leading active noise cancellation.",
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&q=80&w=800",
            rating: 4.7,
            stock: 25,
            featured: false,
            specs: Specifications {
                dimensions: "180 x 160 x 80 mm",
                weight: "320g",
                power_consumption: "USB-C Fast Charge (5W)",
                warranty: "2 Year Standard Warranty",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(4),
            name: "HiveSmart Kettle",
            category: Category::Kitchen,
            price: Decimal::new(8_999, 2),
            description: "WiFi-enabled temperature control for the perfect cup of British tea every time.",
            image: "https://images.unsplash.com/photo-1594212699903-ec8a3eea50f5?auto=format&fit=crop&q=80&w=800",
            rating: 4.6,
            stock: 40,
            featured: false,
            specs: Specifications {
                dimensions: "220 x 150 x 240 mm",
                weight: "1.2kg",
                power_consumption: "3000W Rapid Boil",
                warranty: "1 Year Full Replacement",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(5),
            name: "HiveWash Pro 9000",
            category: Category::Kitchen,
            price: Decimal::new(64_900, 2),
            description: "AI-driven washing cycles that optimize water and detergent usage automatically.",
            image: "https://images.unsplash.com/photo-1582735689369-4fe89db7114c?auto=format&fit=crop&q=80&w=800",
            rating: 4.9,
            stock: 8,
            featured: true,
            specs: Specifications {
                dimensions: "850 x 600 x 550 mm",
                weight: "72kg",
                power_consumption: "Energy Rating A+++",
                warranty: "10 Year Motor Warranty",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(6),
            name: "HiveHome Hub",
            category: Category::SmartHome,
            price: Decimal::new(12_900, 2),
            description: "Centralize your entire home automation with this sleek, touch-screen smart hub.",
            image: "https://images.unsplash.com/photo-1558002038-103792e197ed?auto=format&fit=crop&q=80&w=800",
            rating: 4.5,
            stock: 50,
            featured: false,
            specs: Specifications {
                dimensions: "200 x 135 x 15 mm",
                weight: "450g",
                power_consumption: "15W Power Delivery",
                warranty: "2 Year Tech Support included",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(7),
            name: "HiveMaster Air Fryer",
            category: Category::Kitchen,
            price: Decimal::new(17_999, 2),
            description: "Large capacity 8L basket with 12 preset functions for healthy UK favorites.",
            image: "https://images.unsplash.com/photo-1626074353765-517a681e40be?auto=format&fit=crop&q=80&w=800",
            rating: 4.8,
            stock: 15,
            featured: false,
            specs: Specifications {
                dimensions: "320 x 300 x 350 mm",
                weight: "5.8kg",
                power_consumption: "1700W Eco-Mode",
                warranty: "2 Year Parts & Labour",
            },
            reviews: mock_reviews(),
        },
        Product {
            id: ProductId::new(8),
            name: "HiveTab Ultra",
            category: Category::Laptops,
            price: Decimal::new(79_900, 2),
            description: "A tablet that performs like a laptop. Ultra-thin, OLED display, and stylus included.",
            image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=800",
            rating: 4.6,
            stock: 20,
            featured: false,
            specs: Specifications {
                dimensions: "285 x 185 x 5.5 mm",
                weight: "560g",
                power_consumption: "45W Fast Charging",
                warranty: "2 Year Manufacturer Warranty",
            },
            reviews: mock_reviews(),
        },
    ],
});

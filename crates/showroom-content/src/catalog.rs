//! Hard-coded page content.
//!
//! All items are `'static` and serialize straight into template contexts.

use serde::Serialize;

/// A product line teaser on the home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A "why choose us" card on the home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reason {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Review {
    pub name: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub text: &'static str,
}

/// A company value on the about page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A customer group on the about page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Audience {
    pub title: &'static str,
    pub desc: &'static str,
}

/// A product category on the products page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProductCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub types: &'static [&'static str],
}

/// A service offered to builders and designers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// One gallery picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
}

/// A titled group of gallery pictures.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GallerySection {
    pub category: &'static str,
    pub images: &'static [GalleryImage],
}

const SHOWROOM_PHOTO: &str = "https://images.pexels.com/photos/32046747/pexels-photo-32046747.jpeg";
const TILES_PHOTO: &str = "https://images.pexels.com/photos/4249687/pexels-photo-4249687.jpeg";
const MARBLE_PHOTO: &str =
    "https://images.unsplash.com/photo-1719107647328-dd2134da4fa7?crop=entropy&cs=srgb&fm=jpg&q=85";
const INTERIOR_PHOTO: &str =
    "https://images.unsplash.com/photo-1759178459554-c27da3a5ecc6?crop=entropy&cs=srgb&fm=jpg&q=85";
const BATHROOM_PHOTO: &str =
    "https://images.unsplash.com/photo-1764475501545-d5cc9719af1a?crop=entropy&cs=srgb&fm=jpg&q=85";
const LUXURY_BATH_PHOTO: &str =
    "https://images.unsplash.com/photo-1758548157466-7c454382035a?crop=entropy&cs=srgb&fm=jpg&q=85";
const HARDWARE_PHOTO: &str =
    "https://images.unsplash.com/photo-1607811122037-0750dc8ddebc?crop=entropy&cs=srgb&fm=jpg&q=85";

/// Hero background per page.
pub mod heroes {
    pub const HOME: &str = super::MARBLE_PHOTO;
    pub const ABOUT: &str = super::SHOWROOM_PHOTO;
    pub const PRODUCTS: &str = super::LUXURY_BATH_PHOTO;
    pub const GALLERY: &str = super::MARBLE_PHOTO;
    pub const BUILDERS: &str = super::INTERIOR_PHOTO;
    pub const CONTACT: &str = super::LUXURY_BATH_PHOTO;
}

pub const FEATURES: &[Feature] = &[
    Feature { icon: "package", title: "Tiles", desc: "Wall, Floor, Outdoor" },
    Feature { icon: "sparkles", title: "Marble & Granite", desc: "Premium Quality" },
    Feature { icon: "droplet", title: "Bathroom & Sanitary", desc: "Modern Designs" },
    Feature { icon: "wrench", title: "Hardware & Fittings", desc: "Durable Materials" },
    Feature { icon: "building", title: "Interior Design", desc: "Complete Solutions" },
];

pub const REASONS: &[Reason] = &[
    Reason {
        icon: "award",
        title: "Trusted Local Supplier",
        desc: "Years of experience serving Islampur",
    },
    Reason {
        icon: "thumbs-up",
        title: "Quality Brands",
        desc: "Only premium, certified products",
    },
    Reason {
        icon: "users",
        title: "Builder & Designer Friendly",
        desc: "Bulk orders and project support",
    },
    Reason {
        icon: "building",
        title: "On-site Guidance",
        desc: "Expert consultation available",
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Rajesh Kumar",
        rating: 5,
        text: "Excellent quality tiles and very helpful staff. Highly recommended for home renovation projects.",
    },
    Review {
        name: "Priya Sharma",
        rating: 5,
        text: "Great variety of marble and granite. Found exactly what I was looking for. Professional service!",
    },
    Review {
        name: "Amit Das",
        rating: 5,
        text: "Best hardware shop in Islampur. Good prices and genuine products. Very satisfied with my purchase.",
    },
];

pub const STORY: &[&str] = &[
    "MH ENTERPRISES is a trusted destination for tiles, marbles, hardware, and interior materials in Islampur, West Bengal. Located conveniently on NH-31 at Taranjibari, we have been serving the community with dedication and quality for years.",
    "We pride ourselves on offering a comprehensive range of products that cater to homeowners, builders, contractors, and interior designers. Whether you're renovating your home, working on a large-scale construction project, or seeking premium materials for an interior design concept, we have everything you need under one roof.",
    "Our commitment goes beyond just selling products. We believe in building long-term relationships with our customers by providing honest guidance, competitive pricing, and exceptional service. Our knowledgeable team is always ready to help you make the right choices for your projects.",
];

pub const VALUES: &[Value] = &[
    Value {
        icon: "target",
        title: "Quality First",
        desc: "We never compromise on the quality of our products",
    },
    Value {
        icon: "heart",
        title: "Customer Care",
        desc: "Your satisfaction is our top priority",
    },
    Value {
        icon: "users",
        title: "Expert Team",
        desc: "Knowledgeable staff ready to assist you",
    },
    Value {
        icon: "trending-up",
        title: "Continuous Growth",
        desc: "Always expanding our product range",
    },
];

pub const AUDIENCES: &[Audience] = &[
    Audience {
        title: "Homeowners",
        desc: "Transform your living spaces with our wide selection of tiles, marbles, and interior materials. We help you bring your vision to life with quality products and expert advice.",
    },
    Audience {
        title: "Builders & Contractors",
        desc: "We support your large-scale projects with bulk supply options, consistent stock availability, and competitive pricing. Count on us for timely delivery and quality assurance.",
    },
    Audience {
        title: "Interior Designers",
        desc: "Discover premium materials that match your creative vision. Our diverse range allows you to explore textures, colors, and finishes that elevate your design concepts.",
    },
    Audience {
        title: "Local Community",
        desc: "As a local business, we're committed to serving Islampur and nearby areas with integrity, reliability, and a personal touch that larger chains can't match.",
    },
];

pub const CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        icon: "package",
        title: "Tiles",
        subtitle: "Wall, Floor & Outdoor",
        image: TILES_PHOTO,
        description: "Explore our extensive collection of tiles including glossy, matte, and anti-skid varieties. Perfect for walls, floors, and outdoor spaces.",
        types: &[
            "Ceramic Tiles",
            "Vitrified Tiles",
            "Porcelain Tiles",
            "Wall Tiles",
            "Floor Tiles",
            "Outdoor Tiles",
        ],
    },
    ProductCategory {
        icon: "sparkles",
        title: "Marble & Granite",
        subtitle: "Premium Quality Stone",
        image: MARBLE_PHOTO,
        description: "Premium quality marble and granite in various colors and patterns. Ideal for flooring, countertops, and decorative purposes.",
        types: &[
            "White Marble",
            "Italian Marble",
            "Black Granite",
            "Polished Granite",
            "Natural Stone",
            "Imported Marble",
        ],
    },
    ProductCategory {
        icon: "droplet",
        title: "Bathroom & Sanitaryware",
        subtitle: "Modern & Stylish",
        image: BATHROOM_PHOTO,
        description: "Complete bathroom solutions including sanitaryware, fittings, and accessories from trusted brands.",
        types: &[
            "Wash Basins",
            "Commodes",
            "Faucets",
            "Shower Systems",
            "Bath Accessories",
            "Bathroom Fittings",
        ],
    },
    ProductCategory {
        icon: "wrench",
        title: "Hardware & Accessories",
        subtitle: "Durable & Reliable",
        image: HARDWARE_PHOTO,
        description: "Quality hardware products for construction and interior needs including door fittings, handles, and more.",
        types: &[
            "Door Handles",
            "Hinges",
            "Locks",
            "Cabinet Hardware",
            "Building Materials",
            "Tools & Equipment",
        ],
    },
    ProductCategory {
        icon: "building",
        title: "Interior Design Materials",
        subtitle: "Complete Solutions",
        image: INTERIOR_PHOTO,
        description: "Everything you need for interior projects including wall panels, decorative items, and finishing materials.",
        types: &[
            "Wall Panels",
            "Decorative Items",
            "Lighting Solutions",
            "Paint & Finishes",
            "Flooring Materials",
            "Ceiling Solutions",
        ],
    },
];

pub const GALLERY: &[GallerySection] = &[
    GallerySection {
        category: "Showroom Interior",
        images: &[
            GalleryImage { url: SHOWROOM_PHOTO, title: "Showroom Display" },
            GalleryImage { url: TILES_PHOTO, title: "Tile Collections" },
        ],
    },
    GallerySection {
        category: "Marble & Granite",
        images: &[
            GalleryImage { url: MARBLE_PHOTO, title: "Premium Marble" },
            GalleryImage { url: INTERIOR_PHOTO, title: "Marble Texture" },
        ],
    },
    GallerySection {
        category: "Bathroom Setups",
        images: &[
            GalleryImage { url: BATHROOM_PHOTO, title: "Modern Bathroom" },
            GalleryImage { url: LUXURY_BATH_PHOTO, title: "Luxury Bathroom" },
        ],
    },
    GallerySection {
        category: "Hardware & Fittings",
        images: &[
            GalleryImage { url: HARDWARE_PHOTO, title: "Door Hardware" },
            GalleryImage { url: TILES_PHOTO, title: "Fittings Display" },
        ],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "package",
        title: "Bulk Supply Support",
        desc: "We handle large orders efficiently with timely delivery to your project sites. Special pricing available for bulk purchases.",
    },
    Service {
        icon: "trending-up",
        title: "Consistent Stock",
        desc: "Reliable inventory management ensures you never face material shortages during critical project phases.",
    },
    Service {
        icon: "users",
        title: "Design Assistance",
        desc: "Our team provides expert guidance on material selection, helping you choose the right products for your projects.",
    },
    Service {
        icon: "check-circle",
        title: "Quality Assurance",
        desc: "All products come from trusted manufacturers with quality certifications and warranties.",
    },
];

pub const BENEFITS: &[&str] = &[
    "Competitive wholesale pricing for contractors and builders",
    "Dedicated account manager for large projects",
    "Flexible payment terms for established partners",
    "On-site delivery coordination",
    "Technical support and installation guidance",
    "Access to latest products and design trends",
];

/// Look up a gallery picture by section and position.
pub fn gallery_image(section: usize, index: usize) -> Option<GalleryImage> {
    GALLERY
        .get(section)
        .and_then(|s| s.images.get(index))
        .copied()
}

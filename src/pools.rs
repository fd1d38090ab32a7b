//! Fixed content pools the seeded generators draw from. These are product
//! copy, not configuration; they only change with a deliberate content
//! revision (which also changes every deterministic listing).

pub const DIAGNOSIS_PARTS: &[&str] = &[
    "Your idea has solid potential but needs sharper positioning.",
    "The market is crowded; differentiation will be key.",
    "Focus on a specific audience to stand out.",
    "Listing quality and visuals will make or break conversion.",
    "Consider seasonal demand and search trends.",
    "Pricing and perceived value need careful calibration.",
    "Your niche has room for a unique angle.",
];

pub const MICRO_NICHE_POOL: &[&str] = &[
    "Personalized engraved jewelry",
    "Minimalist leather accessories",
    "Vintage-style home decor",
    "Eco-friendly baby products",
    "Custom pet portraits",
    "Handmade soy candles",
    "Printable wall art",
    "Boho macrame plant hangers",
    "Resin coasters and trinkets",
    "Sticker packs for planners",
    "Custom tumblers and mugs",
    "Crochet amigurumi",
    "Wooden toy sets",
    "Linen napkins and tea towels",
    "Ceramic plant pots",
];

pub const TITLE_PREFIXES: &[&str] = &["Handmade", "Custom", "Artisan", "Personalized", "Unique"];
pub const TITLE_SUFFIXES: &[&str] =
    &["for Everyday", "Gift Idea", "Home & Living", "Collection", "Set"];

pub const TITLE_STARTS: &[&str] =
    &["Handmade", "Custom", "Artisan", "Personalized", "Unique", "Small Batch"];
pub const TITLE_MIDDLES: &[&str] = &["Gift", "Everyday", "Home", "Collection", "Set", "Piece"];
pub const TITLE_ENDS: &[&str] = &["for You", "Idea", "Living", "Gifting", "Collection", "Edition"];

pub const TAG_POOL: &[&str] = &[
    "handmade", "custom", "gift", "personalized", "etsy", "small batch",
    "artisan", "unique", "vintage", "modern", "minimalist", "boho",
    "eco friendly", "made to order", "gift idea", "home decor", "wall art",
    "ceramics", "textile", "wooden", "resin", "crochet", "macrame", "mugs", "prints",
];

// Extra short tags appended to the micro-niche pool for the analysis preview.
pub const PREVIEW_TAG_EXTRAS: &[&str] = &["handmade", "gift", "custom", "etsy", "small batch"];

pub const SENTENCES: &[&str] = &[
    "This listing is crafted with care and designed to bring a special touch to your space.",
    "Each piece is made to order, so you receive something unique rather than mass-produced.",
    "We focus on quality materials and attention to detail in every step.",
    "Perfect for gifting or for treating yourself to something that reflects your style.",
    "Our small-batch approach means we can maintain high standards.",
    "Whether you're decorating your home or looking for a meaningful present, this fits.",
    "We ship with care so your item arrives in perfect condition.",
    "If you have a custom request, feel free to reach out before ordering.",
    "Thank you for supporting small makers and choosing something made with intention.",
    "We believe in creating pieces that last and that you'll enjoy for years.",
    "Our process blends traditional techniques with a modern eye for design.",
    "Ideal for anyone who appreciates handmade quality and thoughtful details.",
    "We use sustainable or recycled materials where possible.",
    "Add a personal touch to your everyday with this one-of-a-kind piece.",
];

// Appended verbatim after the randomized body; never shuffled.
pub const HOW_TO_ORDER: &[&str] = &[
    "Choose your options (if any) and add to cart.",
    "After purchase, we'll start making your item.",
    "Ships within 3\u{2013}5 business days; tracking provided.",
    "Questions? Message us\u{2014}we're happy to help.",
];

pub const RATIONALE: &[&str] = &[
    "Title is optimized for search and states the product and benefit.",
    "Tags cover broad and long-tail keywords for discoverability.",
    "Description answers common buyer questions and builds trust.",
    "Listing positions you in a micro-niche to reduce competition.",
    "Structure follows Etsy best practices for conversion.",
];

pub const BULLET_POOL: &[&str] = &[
    "Handcrafted with attention to detail.",
    "Perfect for gifting or treating yourself.",
    "Ships carefully packaged.",
    "Made to order; allow 3\u{2013}5 days.",
    "Eco-conscious materials when possible.",
    "Small batch for quality control.",
];

pub const WHY_POOL: &[&str] = &[
    "Score reflects demand vs competition and how well your idea fits current search behavior.",
    "Breakdown is based on niche demand, competition level, price room, and market saturation.",
    "Higher demand and lower saturation improve score; strong competition and tight pricing weigh it down.",
    "Your idea's score comes from estimated search demand, competitor density, and listing-quality signals.",
];

pub const BLOCKER_POOL: &[&str] = &[
    "Title doesn't lead with high-intent keywords.",
    "Tags miss long-tail search phrases buyers use.",
    "Description lacks clear benefits and social proof.",
    "Price point may feel high without value framing.",
    "Images and listing structure not optimized for conversion.",
    "Competition in this niche is very high.",
    "Seasonal demand is low for this product type.",
];

pub const ACTION_POOL: &[&str] = &[
    "Put your best keyword in the first 3 words of the title.",
    "Add 13 relevant tags including long-tail variants.",
    "Open the description with a benefit-driven hook.",
    "Add a short 'Why buy' or guarantee line.",
    "Use bullet points for scannability.",
    "Include a clear call-to-action (e.g. Add to cart today).",
    "Test different main images; use lifestyle shots.",
    "Consider a limited-time or bundle offer.",
];

pub const KEYWORD_POOL: &[&str] = &[
    "personalized gift",
    "handmade",
    "custom order",
    "etsy bestseller",
    "unique",
    "small batch",
    "artisan",
    "long tail keyword",
    "niche specific",
    "trending search",
];

pub const LISTING_STRUCTURE: &[&str] = &[
    "Strong opening hook with primary keyword",
    "3\u{2013}5 benefit bullets",
    "Clear CTA and guarantee",
    "Shipping and policies",
    "Keywords naturally repeated",
];

pub const ANALYSIS_SUMMARY: &str =
    "Solid listing potential with room to improve title, tags, and description for better visibility and conversion.";

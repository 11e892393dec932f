/// Key under which favorites are kept in the local store.
pub const FAVORITES_KEY: &str = "aiEventsFavorites";

/// Default source file names, resolved against the configured data directory.
pub const DEFAULT_HACKATHONS_SOURCE: &str = "ml_ai_hackathons_final.csv";
pub const DEFAULT_CONFERENCES_SOURCE: &str = "ai_conferences_june_2025.csv";

/// Domain options always offered, before any data has loaded.
pub const CURATED_DOMAINS: &[&str] = &[
    "Machine Learning/AI",
    "Data Science",
    "General",
    "Healthcare",
    "Natural Language Processing",
    "Computer Vision",
    "Ethics",
    "Reinforcement Learning",
    "Finance",
    "Education",
    "Robotics",
];

/// Mode options always offered.
pub const CURATED_MODES: &[&str] = &["Online", "Offline", "Hybrid"];

/// Value that means "no filter" for domain, mode and month selections.
pub const ALL_SENTINEL: &str = "all";

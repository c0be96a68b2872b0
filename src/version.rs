pub const PRODUCT_NAME: &str = "choochoo";
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 3;
pub const VERSION_PATCH: u32 = 0;
pub const VERSION_ALIAS: &str = "Caboose";
pub const LICENSE: &str = "MIT";
pub const COPYRIGHT: &str = "Choochoo Contributors";
pub const COPYRIGHT_YEARS: &str = "2025-2026";

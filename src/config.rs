//! Site-wide constants. The page bodies are static, so everything the
//! components need to agree on lives here instead of a backend config.

/// Scroll offset in pixels past which the navigation bar switches from its
/// transparent style to the opaque one. Offsets at exactly the threshold
/// count as scrolled.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Auto-advance interval for the home page hero carousel.
pub const HERO_ROTATION_MS: u32 = 8_000;

pub const SALES_EMAIL: &str = "sales@bhrigu.tech";
pub const INFO_EMAIL: &str = "info@bhrigu.tech";
pub const PARTNERS_EMAIL: &str = "partners@bhrigu.tech";
pub const MEDIA_EMAIL: &str = "media@bhrigu.tech";
pub const SUPPORT_PHONE: &str = "+1 (555) 123-4567";

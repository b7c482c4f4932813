pub mod animated_section;
pub mod footer;
pub mod hero_section;
pub mod navbar;

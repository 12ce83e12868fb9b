pub mod anim;
pub mod card;
pub mod dashboard_view;
pub mod navbar;
pub mod theme;

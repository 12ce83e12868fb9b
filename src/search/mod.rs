pub mod engine;
pub mod highlight;
pub mod index;

pub mod engine;
pub mod particle;

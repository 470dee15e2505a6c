pub mod registry;
pub mod world;

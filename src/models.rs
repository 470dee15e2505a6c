pub mod inventory;
pub mod item;
pub mod map;
pub mod player;
pub mod room;
pub mod types;

//! Narrow façades over the shared world. Handlers reach state only through these.

mod error;
mod item;
mod map;
mod player;
mod room;

pub use item::{ContainerRef, ItemService, ItemSummary};
pub use map::MapService;
pub use player::{PlayerService, Relocation};
pub use room::RoomService;

pub use error::ServiceError;

use crate::models::inventory::ContainerError;
use crate::models::types::{ItemId, RoomId};
use thiserror::Error;

/// ServiceError represents the failures a service operation reports to its caller.
///
/// None of them are fatal. A failed operation leaves the world exactly as it found it.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("item {item} is not in {location}")]
    NotInSource { item: ItemId, location: String },

    #[error("destination refused the item: {0}")]
    Destination(#[from] ContainerError),

    #[error("room {0} does not exist")]
    RoomNotFound(RoomId),
}

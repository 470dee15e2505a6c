use crate::models::item::Item;
use crate::models::types::ItemId;
use thiserror::Error;

/// An item together with the identity it keeps while moving between containers.
pub struct ItemEntry {
    pub id: ItemId,
    pub item: Box<dyn Item>,
}

impl ItemEntry {
    pub fn new(item: Box<dyn Item>) -> Self {
        Self { id: ItemId::new(), item }
    }
}

impl core::fmt::Debug for ItemEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemEntry")
            .field("id", &self.id)
            .field("name", &self.item.display_name())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("container is full ({capacity} items)")]
    Full { capacity: usize },

    #[error("item {0} is already in this container")]
    AlreadyPresent(ItemId),
}

/// Ordered collection of items owned by a room or by the player.
///
/// Containment is exclusive: an entry is moved out with [`ItemContainer::take`] and moved in with
/// [`ItemContainer::insert`], never copied.
#[derive(Debug, Default)]
pub struct ItemContainer {
    entries: Vec<ItemEntry>,
    capacity: Option<usize>,
}

impl ItemContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Place a freshly authored item into this container.
    pub fn add(&mut self, item: Box<dyn Item>) -> Result<ItemId, ContainerError> {
        let entry = ItemEntry::new(item);
        let id = entry.id;
        self.insert(entry)?;
        Ok(id)
    }

    /// Would `insert` of this id succeed?
    pub fn check_accept(&self, id: ItemId) -> Result<(), ContainerError> {
        if self.contains(id) {
            return Err(ContainerError::AlreadyPresent(id));
        }
        match self.capacity {
            Some(capacity) if self.entries.len() >= capacity => Err(ContainerError::Full { capacity }),
            _ => Ok(()),
        }
    }

    pub fn insert(&mut self, entry: ItemEntry) -> Result<(), ContainerError> {
        self.check_accept(entry.id)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn take(&mut self, id: ItemId) -> Option<ItemEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&dyn Item> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.item.as_ref())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Box<dyn Item>> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.item)
    }

    /// First item answering to `noun` (case-insensitive alias match).
    pub fn find_by_alias(&self, noun: &str) -> Option<ItemId> {
        self.entries.iter().find(|e| e.item.answers_to(noun)).map(|e| e.id)
    }

    /// Every item answering to `noun`, in container order.
    pub fn find_all_by_alias(&self, noun: &str) -> Vec<ItemId> {
        self.entries
            .iter()
            .filter(|e| e.item.answers_to(noun))
            .map(|e| e.id)
            .collect()
    }

    /// Snapshot of the ids currently held. Iterate this, not the live container, when mutating.
    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn display_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.item.display_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

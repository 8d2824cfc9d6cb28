//! # Core Resource Store
//!
//! This module defines the generic building blocks for keeping entities in memory.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that every stored resource type must implement.
//! - [`ResourceStore`]: The generic store that owns entities keyed by id.
//! - [`FrameworkError`]: Common errors (e.g., AlreadyExists, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceStore`].
///
/// # Architecture Note
/// The store logic is written *once* against this contract. Associated types keep
/// each resource honest: a `Game` can only be patched with a `GameUpdate`, and its
/// failures are reported as its own error type.
///
/// # Provided Methods (Hooks)
/// [`Entity::on_delete`] has a default implementation that does nothing (`Ok(())`).
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity (e.g., String, u64).
    type Id: Eq + Hash + Clone + Display + Debug;

    /// The data required to patch an existing instance.
    type Update: Debug;

    /// The error type for this entity.
    ///
    /// Store-level failures are converted into it, so callers only ever see one
    /// error type per resource.
    type Error: std::error::Error + From<FrameworkError>;

    /// The key this entity is stored under. Must never change after creation.
    fn id(&self) -> &Self::Id;

    /// Called when a patch request is received.
    ///
    /// The store runs this hook on a copy, so an `Err` leaves the stored entity
    /// untouched even if the hook already changed some fields.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE ERRORS
// =============================================================================

/// Errors raised by the store itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Item not found: {0}")]
    NotFound(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a set of entities.
///
/// The store is the sole long-lived owner of every entity it holds. Readers get
/// shared borrows; the only way to change an entity is through [`replace`] or
/// [`update`], which keeps the map key and the entity's own id in sync.
///
/// [`replace`]: ResourceStore::replace
/// [`update`]: ResourceStore::update
#[derive(Debug)]
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    // Extract just the type name (e.g., "Game" instead of "game_collection::model::game::Game")
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Inserts a new entity. Fails if its id is already taken.
    pub fn insert(&mut self, item: T) -> Result<(), T::Error> {
        let entity_type = Self::entity_type();
        let id = item.id().clone();
        debug!(entity_type, %id, "Insert");

        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()).into());
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(())
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.store.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    /// Like [`get`](Self::get), but a missing id is an error.
    pub fn require(&self, id: &T::Id) -> Result<&T, T::Error> {
        match self.get(id) {
            Some(item) => Ok(item),
            None => {
                warn!(entity_type = Self::entity_type(), %id, "Not found");
                Err(FrameworkError::NotFound(id.to_string()).into())
            }
        }
    }

    /// Swaps in a whole new version of an existing entity, returning the old one.
    pub fn replace(&mut self, item: T) -> Result<T, T::Error> {
        let entity_type = Self::entity_type();
        let id = item.id().clone();
        debug!(entity_type, %id, "Replace");

        match self.store.get_mut(&id) {
            Some(slot) => {
                let previous = std::mem::replace(slot, item);
                info!(entity_type, %id, "Replaced");
                Ok(previous)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(FrameworkError::NotFound(id.to_string()).into())
            }
        }
    }

    /// Applies a patch through [`Entity::on_update`].
    ///
    /// The hook runs on a clone which is only stored once it succeeds.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<&T, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");

        let Some(slot) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        let mut draft = slot.clone();
        if let Err(e) = draft.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(e);
        }

        *slot = draft;
        info!(entity_type, %id, "Updated");
        Ok(&*slot)
    }

    /// Removes an entity, returning it to the caller.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, T::Error> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");

        let Some(item) = self.store.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()).into());
        };

        if let Err(e) = item.on_delete() {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(e);
        }

        let removed = self.store.remove(id).ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(removed)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    /// Iterates over the stored entities in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

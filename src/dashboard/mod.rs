//! Dashboard core for the menu administration screen.
//!
//! This module provides the [`Dashboard`] struct which reconciles the
//! in-memory menu list with the remote food service. It owns the list
//! store and the dialog state, and exposes one handler per user intent:
//! initial load, add, update, delete and edit selection.
//!
//! The dashboard acts as the data layer for the admin screen, offering:
//! - A single source of truth for the rendered list
//! - Backend-agnostic operation via the [`FoodBackend`] trait
//! - A uniform result contract: every handler reports success or failure
//!   to the caller and never mutates the list on a failed call
//! - A dialog state machine that rules out two open dialogs by construction

pub mod actions;

pub use actions::Action;

use std::sync::Arc;

use log::{error, info};

use crate::backend::{BackendError, CreateFoodArgs, Food, FoodBackend, UpdateFoodArgs};
use crate::store::MenuStore;

/// Errors surfaced to the presentation layer.
///
/// The presentation surfaces decide how to show these; the dashboard only
/// guarantees the store is untouched whenever a handler returns one.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("no menu item is selected for editing")]
    NoSelection,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Which modal workflow is active, if any.
///
/// A single tagged state instead of per-dialog booleans: the add and edit
/// dialogs can never be open at the same time. The edit variant carries the
/// editing selection; selecting a different row replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    AddOpen,
    EditOpen(Food),
}

/// State and intent handlers of the menu admin screen.
///
/// All handlers take `&mut self`, so mutations are serialized by the borrow
/// checker; the backend calls inside them are the only suspension points.
/// Sharing across threads would need external synchronization, which the
/// screen's single-threaded event model does not require.
pub struct Dashboard {
    backend: Arc<dyn FoodBackend>,
    store: MenuStore,
    dialog: DialogState,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn FoodBackend>) -> Self {
        Self {
            backend,
            store: MenuStore::new(),
            dialog: DialogState::Closed,
        }
    }

    /// The menu list, in render order.
    pub fn foods(&self) -> &[Food] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// The record currently selected for editing, if the edit dialog is open.
    pub fn editing(&self) -> Option<&Food> {
        match &self.dialog {
            DialogState::EditOpen(food) => Some(food),
            _ => None,
        }
    }

    /// Fetch the full menu and replace the list wholesale.
    ///
    /// Used for the initial load and for on-demand refreshes. On failure the
    /// list keeps whatever it held before the call and the error is returned.
    pub async fn load(&mut self) -> Result<usize, DashboardError> {
        let foods = match self.backend.fetch_foods().await {
            Ok(foods) => foods,
            Err(e) => {
                error!("❌ Failed to fetch menu: {e}");
                return Err(e.into());
            }
        };
        info!("✅ Fetched {} menu items from the food service", foods.len());

        let count = foods.len();
        self.store.replace_all(foods);
        Ok(count)
    }

    /// Create `draft` remotely and append the server's record to the list.
    ///
    /// Only the record the service returns (with its assigned id, created
    /// available) is appended, at the end, with the existing order untouched.
    /// The add dialog is left as-is; closing it is the dialog's own business.
    pub async fn add_food(&mut self, draft: CreateFoodArgs) -> Result<Food, DashboardError> {
        let created = match self.backend.create_food(draft).await {
            Ok(food) => food,
            Err(e) => {
                error!("❌ Failed to create menu item: {e}");
                return Err(e.into());
            }
        };
        info!("✅ Created menu item '{}' (#{})", created.name, created.id);

        self.store.append(created.clone());
        Ok(created)
    }

    /// Merge `draft` onto the editing selection and send the result as a
    /// full update of that record.
    ///
    /// Requires an active selection; without one the update has no target
    /// and is rejected with [`DashboardError::NoSelection`]. On success
    /// exactly the record whose id matches the server response is replaced
    /// in place; every other record keeps its position.
    pub async fn update_food(&mut self, draft: UpdateFoodArgs) -> Result<Food, DashboardError> {
        let selected = match &self.dialog {
            DialogState::EditOpen(food) => food.clone(),
            _ => return Err(DashboardError::NoSelection),
        };

        let merged = draft.merge_onto(&selected);
        let updated = match self.backend.update_food(selected.id, &merged).await {
            Ok(food) => food,
            Err(e) => {
                error!("❌ Failed to update menu item #{}: {e}", selected.id);
                return Err(e.into());
            }
        };
        info!("✅ Updated menu item '{}' (#{})", updated.name, updated.id);

        self.store.replace(updated.clone());
        Ok(updated)
    }

    /// Delete the item remotely, then drop it from the list.
    ///
    /// Removal is exact-match by id and keeps the order of the remaining
    /// records. A failed delete leaves the list unfiltered.
    pub async fn delete_food(&mut self, id: i64) -> Result<(), DashboardError> {
        if let Err(e) = self.backend.delete_food(id).await {
            error!("❌ Failed to delete menu item #{id}: {e}");
            return Err(e.into());
        }
        info!("✅ Deleted menu item #{id}");

        self.store.remove(id);
        Ok(())
    }

    /// Select a record for editing and open the edit dialog. Pure state
    /// transition, no network I/O; any previous selection is replaced.
    pub fn select_for_edit(&mut self, food: Food) {
        self.dialog = DialogState::EditOpen(food);
    }

    /// Open the add dialog, replacing whatever workflow was active.
    pub fn open_add_dialog(&mut self) {
        self.dialog = DialogState::AddOpen;
    }

    /// Flip the add dialog: open it when anything else is showing, close it
    /// when it is the active workflow. Dialogs never stack.
    pub fn toggle_add_dialog(&mut self) {
        self.dialog = if matches!(self.dialog, DialogState::AddOpen) {
            DialogState::Closed
        } else {
            DialogState::AddOpen
        };
    }

    /// Close whichever dialog is open. The editing selection lives inside
    /// the edit dialog state and is dropped with it.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Dispatch a presentation-surface intent to the matching handler.
    pub async fn dispatch(&mut self, action: Action) -> Result<(), DashboardError> {
        match action {
            Action::OpenAddDialog => {
                self.open_add_dialog();
                Ok(())
            }
            Action::ToggleAddDialog => {
                self.toggle_add_dialog();
                Ok(())
            }
            Action::CloseDialog => {
                self.close_dialog();
                Ok(())
            }
            Action::SubmitAdd(draft) => self.add_food(draft).await.map(|_| ()),
            Action::SubmitUpdate(draft) => self.update_food(draft).await.map(|_| ()),
            Action::Delete(id) => self.delete_food(id).await,
            Action::EditSelect(food) => {
                self.select_for_edit(food);
                Ok(())
            }
            Action::Refresh => self.load().await.map(|_| ()),
        }
    }
}

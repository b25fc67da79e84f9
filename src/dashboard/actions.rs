use crate::backend::{CreateFoodArgs, Food, UpdateFoodArgs};

/// User intents the presentation surfaces dispatch at the dashboard.
///
/// Each variant maps to one callback of the admin screen: the header's
/// "new item" trigger, the dialog submits, and the per-row edit/delete
/// buttons.
#[derive(Debug, Clone)]
pub enum Action {
    // Dialog visibility
    OpenAddDialog,
    ToggleAddDialog,
    CloseDialog,

    // Menu operations
    SubmitAdd(CreateFoodArgs),
    SubmitUpdate(UpdateFoodArgs),
    Delete(i64),
    EditSelect(Food),

    // Re-fetch the whole menu from the service
    Refresh,
}

//! In-memory store backing the rendered menu list.

use crate::backend::Food;

/// Ordered collection of menu items, keyed by server id.
///
/// The store only ever holds records confirmed by the food service: it is
/// replaced wholesale from a full fetch, and otherwise mutated by appending,
/// replacing or removing the exact record a backend call returned or
/// targeted. Ids are unique; order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    foods: Vec<Food>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh server snapshot.
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    /// Append a server-confirmed record at the end, leaving the order of
    /// everything already listed untouched.
    pub fn append(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Replace the record whose id matches `food.id`, in place. Every other
    /// record keeps its position. Returns `false` when no record matches.
    pub fn replace(&mut self, food: Food) -> bool {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest. Returns the removed record, if any.
    pub fn remove(&mut self, id: i64) -> Option<Food> {
        let index = self.foods.iter().position(|f| f.id == id)?;
        Some(self.foods.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }

    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

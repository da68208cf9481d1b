use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stock::Ingredients;

/// Dirt level at which the kitchen refuses to cook.
pub const DIRT_CEILING: i64 = 100;

/// Identifier of a kitchen instance.
///
/// Exists to tell independent kitchens apart in log output; the simulation
/// contract never depends on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KitchenId(Uuid);

impl KitchenId {
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for KitchenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KitchenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Cleaning policy: maps the current dirt level (and an optional duration in
/// abstract units) to the new dirt level.
///
/// The policy is trusted: the kitchen adopts its return value without
/// clamping, so a cleaner may legally report a negative level.
pub trait Cleaner {
    fn clean(&mut self, dirt: i64, time: Option<u32>) -> i64;
}

impl<F> Cleaner for F
where
    F: FnMut(i64, Option<u32>) -> i64,
{
    fn clean(&mut self, dirt: i64, time: Option<u32>) -> i64 {
        self(dirt, time)
    }
}

/// Supply policy: maps an expense amount to the ingredient bundle it buys.
pub trait Supplier {
    fn supply(&mut self, expense: i64) -> Ingredients;
}

impl<F> Supplier for F
where
    F: FnMut(i64) -> Ingredients,
{
    fn supply(&mut self, expense: i64) -> Ingredients {
        self(expense)
    }
}

/// Outcome of running a recipe against the current stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RecipeOutcome {
    /// The dish did not come together; the stock stays untouched.
    Failed,
    /// The dish worked; `new_stock` replaces the kitchen's stock wholesale.
    Succeeded { new_stock: Ingredients },
}

/// Recipe policy: reads the current stock and reports what is left of it.
pub trait Recipe {
    fn cook(&mut self, stock: &Ingredients) -> RecipeOutcome;
}

impl<F> Recipe for F
where
    F: FnMut(&Ingredients) -> RecipeOutcome,
{
    fn cook(&mut self, stock: &Ingredients) -> RecipeOutcome {
        self(stock)
    }
}

/// A single kitchen: dirt, stock, and budget behind four operations.
///
/// The kitchen enforces only the structural rules — the dirt ceiling gates
/// cooking, the budget gates purchasing, and every cooking attempt dirties
/// the kitchen by one. Everything domain-specific lives in the injected
/// strategies. Fallible operations report failure through their `bool`
/// return, never by panicking.
///
/// Each value is fully independent: no shared or static state, and `&mut
/// self` on the mutators rules out overlapping operations on one handle.
#[derive(Debug)]
pub struct Kitchen<C, S> {
    id: KitchenId,
    dirt: i64,
    stock: Ingredients,
    budget: i64,
    cleaner: C,
    supplier: S,
}

impl<C, S> Kitchen<C, S>
where
    C: Cleaner,
    S: Supplier,
{
    /// Open a kitchen with zero dirt, empty stock, and the given budget.
    ///
    /// The budget is taken as-is; opening in the red is the caller's
    /// prerogative.
    pub fn new(budget: i64, cleaner: C, supplier: S) -> Self {
        Self {
            id: KitchenId::new(),
            dirt: 0,
            stock: Ingredients::default(),
            budget,
            cleaner,
            supplier,
        }
    }

    pub fn id(&self) -> KitchenId {
        self.id
    }

    pub fn dirt(&self) -> i64 {
        self.dirt
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn stock(&self) -> &Ingredients {
        &self.stock
    }

    /// Human-readable snapshot of the state as of this call.
    pub fn announce(&self) -> String {
        self.to_string()
    }

    /// Run the cleaning strategy and adopt whatever dirt level it returns.
    pub fn clean(&mut self, time: Option<u32>) {
        self.dirt = self.cleaner.clean(self.dirt, time);
        tracing::debug!(kitchen = %self.id, dirt = self.dirt, "cleaned");
    }

    /// Buy ingredients.
    ///
    /// When `expense` exceeds the remaining budget the purchase is rejected
    /// outright: the supplier is not consulted and nothing changes.
    /// Otherwise the supplier's bundle is added onto the stock
    /// component-wise and the budget drops by exactly `expense`.
    pub fn purchase(&mut self, expense: i64) -> bool {
        if expense > self.budget {
            tracing::debug!(
                kitchen = %self.id,
                expense,
                budget = self.budget,
                "purchase rejected: over budget"
            );
            return false;
        }

        let bundle = self.supplier.supply(expense);
        self.stock += bundle;
        self.budget -= expense;
        tracing::debug!(kitchen = %self.id, expense, budget = self.budget, "purchased");
        true
    }

    /// Attempt a recipe.
    ///
    /// A kitchen at or past [`DIRT_CEILING`] refuses outright: the recipe is
    /// not invoked and nothing changes. Below the ceiling every attempt adds
    /// one dirt, then the outcome decides whether the stock is replaced.
    pub fn prepare<R: Recipe>(&mut self, mut recipe: R) -> bool {
        if self.dirt >= DIRT_CEILING {
            tracing::debug!(kitchen = %self.id, dirt = self.dirt, "too dirty to cook");
            return false;
        }

        self.dirt += 1;
        match recipe.cook(&self.stock) {
            RecipeOutcome::Succeeded { new_stock } => {
                self.stock = new_stock;
                tracing::debug!(kitchen = %self.id, dirt = self.dirt, "recipe succeeded");
                true
            }
            RecipeOutcome::Failed => {
                tracing::debug!(kitchen = %self.id, dirt = self.dirt, "recipe failed");
                false
            }
        }
    }
}

impl<C, S> fmt::Display for Kitchen<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dirt {}, budget {}, {} bread(s), {} fruit(s), {} sauce(s), {} vegetable(s)",
            self.dirt,
            self.budget,
            self.stock.breads,
            self.stock.fruits,
            self.stock.sauces,
            self.stock.vegetables,
        )
    }
}

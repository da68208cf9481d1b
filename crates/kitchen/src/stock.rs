use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// On-hand ingredient counts.
///
/// Counts are unsigned: neither a supplier bundle nor a recipe's leftover
/// stock can represent a negative quantity.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredients {
    pub breads: u64,
    pub fruits: u64,
    pub sauces: u64,
    pub vegetables: u64,
}

impl Ingredients {
    pub fn new(breads: u64, fruits: u64, sauces: u64, vegetables: u64) -> Self {
        Self {
            breads,
            fruits,
            sauces,
            vegetables,
        }
    }
}

impl Add for Ingredients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            breads: self.breads + rhs.breads,
            fruits: self.fruits + rhs.fruits,
            sauces: self.sauces + rhs.sauces,
            vegetables: self.vegetables + rhs.vegetables,
        }
    }
}

impl AddAssign for Ingredients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

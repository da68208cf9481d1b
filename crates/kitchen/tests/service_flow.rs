//! Cross-operation scenarios driving a kitchen through whole service runs.

use std::cell::Cell;
use std::rc::Rc;

use dojo_kitchen::{DIRT_CEILING, Ingredients, Kitchen, RecipeOutcome};

fn one_of_each_supplier() -> impl FnMut(i64) -> Ingredients {
    |_expense: i64| Ingredients::new(1, 1, 1, 1)
}

fn zeroing_cleaner() -> impl FnMut(i64, Option<u32>) -> i64 {
    |_dirt: i64, _time: Option<u32>| 0
}

#[test]
fn shopping_until_the_money_runs_short() {
    let mut kitchen = Kitchen::new(100, zeroing_cleaner(), one_of_each_supplier());

    assert!(kitchen.purchase(50));
    assert_eq!(kitchen.budget(), 50);
    assert_eq!(*kitchen.stock(), Ingredients::new(1, 1, 1, 1));

    assert!(!kitchen.purchase(100));
    assert_eq!(kitchen.budget(), 50);
    assert_eq!(*kitchen.stock(), Ingredients::new(1, 1, 1, 1));
}

#[test]
fn cooking_to_the_dirt_ceiling_and_back() {
    let mut kitchen = Kitchen::new(0, zeroing_cleaner(), one_of_each_supplier());

    let invocations = Rc::new(Cell::new(0i64));
    let seen = invocations.clone();
    let mut hopeless_recipe = move |_stock: &Ingredients| {
        seen.set(seen.get() + 1);
        RecipeOutcome::Failed
    };

    // The 100th attempt starts from dirt 99, so it still runs.
    for _ in 0..100 {
        assert!(!kitchen.prepare(&mut hopeless_recipe));
    }
    assert_eq!(kitchen.dirt(), DIRT_CEILING);
    assert_eq!(invocations.get(), 100);

    // The 101st finds the ceiling and never reaches the recipe.
    assert!(!kitchen.prepare(&mut hopeless_recipe));
    assert_eq!(invocations.get(), 100);
    assert_eq!(kitchen.dirt(), DIRT_CEILING);

    // A proper scrub reopens the kitchen.
    kitchen.clean(None);
    assert_eq!(kitchen.dirt(), 0);
    assert!(!kitchen.prepare(&mut hopeless_recipe));
    assert_eq!(invocations.get(), 101);
}

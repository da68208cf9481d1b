//! A scripted day of service against the kitchen simulator.
//!
//! The morning order note arrives rot13-scrambled and gets decoded with the
//! code cracker, then the kitchen shops, cooks through a success and a
//! failure, and scrubs down. State snapshots print between steps.
//!
//! Set `DOJO_OPENING_BUDGET` to override the opening budget.

use anyhow::Context;

use dojo_ciphers::{CodeCracker, text_cipher};
use dojo_kitchen::{Ingredients, Kitchen, RecipeOutcome};

const DEFAULT_OPENING_BUDGET: i64 = 100;

fn main() -> anyhow::Result<()> {
    dojo_observability::init();

    let budget = opening_budget()?;
    tracing::info!(budget, "opening the kitchen");

    let order = decode_order_note()?;
    tracing::info!(order = %order, "order note decoded");

    let mut kitchen = Kitchen::new(
        budget,
        // A timed scrub takes one dirt per minute; an open-ended one goes to
        // spotless.
        |dirt: i64, time: Option<u32>| match time {
            Some(minutes) => dirt - i64::from(minutes),
            None => 0,
        },
        // The grocer hands over one of each per 10 spent.
        |expense: i64| {
            let per_kind = (expense / 10).max(0) as u64;
            Ingredients::new(per_kind, per_kind, per_kind, per_kind)
        },
    );
    println!("{}", kitchen.announce());

    if kitchen.purchase(40) {
        tracing::info!("morning shop done");
    } else {
        tracing::warn!("morning shop was over budget");
    }
    println!("{}", kitchen.announce());

    // Four covered plates: bread and vegetables go out the door.
    let served = kitchen.prepare(|stock: &Ingredients| {
        if stock.breads >= 4 && stock.vegetables >= 4 {
            RecipeOutcome::Succeeded {
                new_stock: Ingredients::new(
                    stock.breads - 4,
                    stock.fruits,
                    stock.sauces,
                    stock.vegetables - 4,
                ),
            }
        } else {
            RecipeOutcome::Failed
        }
    });
    tracing::info!(served, "lunch order");
    println!("{}", kitchen.announce());

    // The fruit tart wants more fruit than the morning shop bought.
    let tart = kitchen.prepare(|stock: &Ingredients| {
        if stock.fruits >= 6 {
            RecipeOutcome::Succeeded {
                new_stock: Ingredients::new(stock.breads, stock.fruits - 6, stock.sauces, 0),
            }
        } else {
            RecipeOutcome::Failed
        }
    });
    tracing::info!(served = tart, "dessert attempt");

    kitchen.clean(Some(2));
    println!("{}", kitchen.announce());

    Ok(())
}

fn opening_budget() -> anyhow::Result<i64> {
    match std::env::var("DOJO_OPENING_BUDGET") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("DOJO_OPENING_BUDGET is not a number: {raw}")),
        Err(_) => Ok(DEFAULT_OPENING_BUDGET),
    }
}

/// Brute-force the scrambled note by trying every shift until one reads like
/// an order.
fn decode_order_note() -> anyhow::Result<String> {
    let scramble = text_cipher(|ch: char| shift_char(ch, 13).to_string());
    let note = scramble("four covered plates before noon");

    let mut cracker = CodeCracker::new(
        26,
        |text: &str, round: u32| text.chars().map(|ch| shift_char(ch, round)).collect::<String>(),
        |guess: &str| guess.contains("plates"),
    );
    cracker
        .crack(&note)
        .context("could not decode the morning order note")
}

fn shift_char(ch: char, by: u32) -> char {
    let by = (by % 26) as u8;
    match ch {
        'a'..='z' => (b'a' + (ch as u8 - b'a' + by) % 26) as char,
        'A'..='Z' => (b'A' + (ch as u8 - b'A' + by) % 26) as char,
        _ => ch,
    }
}

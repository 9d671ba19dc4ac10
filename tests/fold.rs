mod common;

use std::collections::HashMap;

use anyhow::Result;
use common::{Payment, payments};
use corral::ops;

#[test]
fn fold_left_sums_in_input_order() {
    let nums = vec![1i64, 2, 3];
    let total: i64 = ops::fold_left(&nums, |acc, n| acc + n);
    assert_eq!(total, 6);
}

#[test]
fn fold_left_of_empty_input_is_the_accumulator_zero() {
    let none: Vec<i64> = Vec::new();
    let total: i64 = ops::fold_left(&none, |acc, n| acc + n);
    assert_eq!(total, 0);

    let tags: Vec<String> = ops::fold_left(&none, |mut acc: Vec<String>, n| {
        acc.push(n.to_string());
        acc
    });
    assert!(tags.is_empty());
}

#[test]
fn fold_left_into_an_associative_accumulator() {
    let all = payments();
    let totals: HashMap<i64, i64> = ops::fold_left(&all, |mut acc: HashMap<i64, i64>, p| {
        *acc.entry(p.account_id).or_default() += p.amount;
        acc
    });
    assert_eq!(totals[&10], 325);
    assert_eq!(totals[&20], 1310);
    assert_eq!(totals[&30], 30);
}

#[test]
fn fold_left_into_a_record_accumulator() -> Result<()> {
    #[derive(Debug, Default, PartialEq)]
    struct Totals {
        count: i64,
        sum: i64,
    }

    let all = payments();
    let settled = ops::select(&all, "settled")?;
    let totals: Totals = ops::fold_left(&settled, |acc: Totals, p: &Payment| Totals {
        count: acc.count + 1,
        sum: acc.sum + p.amount,
    });
    assert_eq!(totals, Totals { count: 3, sum: 1560 });
    Ok(())
}

#[test]
fn fold_left_visits_elements_left_to_right() {
    let letters = vec!["a", "b", "c"];
    let joined: String = ops::fold_left(&letters, |mut acc: String, s| {
        acc.push_str(s);
        acc
    });
    assert_eq!(joined, "abc");
}

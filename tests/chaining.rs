mod common;

use std::collections::HashMap;

use anyhow::Result;
use common::{Payment, account, payment, payments};
use corral::{Collection, Error, IntKey, by};

#[test]
fn operations_compose_left_to_right() -> Result<()> {
    let all = Collection::new(payments());

    let total: i64 = all
        .select("settled")?
        .map("amount")?
        .fold_left(|acc, amount| acc + amount);
    assert_eq!(total, 1560);
    Ok(())
}

#[test]
fn sorting_chains_into_further_steps() -> Result<()> {
    let mut all = Collection::new(payments());
    let top_two = all.sort_reverse(IntKey("amount"))?.first_n(2);
    let ids: Vec<i64> = top_two.map("id")?.into_vec();
    assert_eq!(ids, vec![3, 5]);
    Ok(())
}

#[test]
fn join_chains_like_any_other_step() -> Result<()> {
    let mut owners = Collection::new(vec![payment(1, 1, 50, true), payment(2, 2, 60, true)]);
    let related = vec![account(1, "ops"), account(2, "billing")];

    let names: Vec<String> = owners
        .join(related)?
        .map(by(|p: &Payment| {
            p.account.as_ref().map(|a| a.name.clone()).unwrap_or_default()
        }))?
        .into_vec();
    assert_eq!(names, vec!["ops", "billing"]);
    Ok(())
}

#[test]
fn first_and_last_peek_without_consuming() {
    let all = Collection::new(payments());
    assert_eq!(all.first().map(|p| p.id), Some(1));
    assert_eq!(all.last().map(|p| p.id), Some(5));
    assert_eq!(all.len(), 5);

    let none: Collection<Payment> = Collection::default();
    assert!(none.is_empty());
    assert_eq!(none.first(), None);
    assert_eq!(none.last(), None);
}

#[test]
fn first_n_and_last_n_clamp_to_the_available_elements() {
    let all = Collection::new(payments());
    assert_eq!(all.first_n(2).len(), 2);
    assert_eq!(all.last_n(2).len(), 2);
    assert_eq!(all.first_n(100).len(), 5);
    assert_eq!(all.last_n(0).len(), 0);

    let tail: Vec<i64> = all
        .last_n(2)
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(tail, vec![4, 5]);
}

#[test]
fn group_and_index_are_available_as_methods() -> Result<()> {
    let all = Collection::new(payments());

    let grouped: HashMap<i64, Vec<Payment>> = all.group("account_id")?;
    assert_eq!(grouped[&10].len(), 2);

    let indexed: HashMap<i64, Payment> = all.index("id")?;
    assert_eq!(indexed[&3].amount, 900);
    Ok(())
}

#[test]
fn reject_and_filter_match_the_free_functions() -> Result<()> {
    let all = Collection::new(payments());
    let pending = all.reject("settled")?;
    assert_eq!(pending.len(), 2);

    let settled = all.filter("settled")?;
    assert_eq!(settled.len() + pending.len(), all.len());
    Ok(())
}

#[test]
fn selector_errors_surface_at_the_failing_step() {
    let all = Collection::new(payments());
    let err = all.select("setled").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownAttribute {
            record: "Payment".into(),
            field: "setled".into(),
        }
    );
}

#[test]
fn conversions_round_trip_through_std_collections() {
    let from_vec: Collection<Payment> = payments().into();
    let collected: Collection<Payment> = payments().into_iter().collect();
    assert_eq!(from_vec, collected);

    let borrowed_ids: Vec<i64> = (&from_vec).into_iter().map(|p| p.id).collect();
    assert_eq!(borrowed_ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(from_vec.into_vec(), payments());
}

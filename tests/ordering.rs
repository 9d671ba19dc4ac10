mod common;

use anyhow::Result;
use chrono::{DateTime, Utc};
use common::{Payment, payments};
use corral::{Error, by, ops, record};
use corral::{FloatKey, IntKey, StrKey, TimeKey};

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    id: i64,
    sensor: String,
    score: f64,
    at: DateTime<Utc>,
}

record!(Reading {
    i64: { id },
    String: { sensor },
    f64: { score },
    DateTime<Utc>: { at },
});

fn reading(id: i64, sensor: &str, score: f64, at_secs: i64) -> Reading {
    Reading {
        id,
        sensor: sensor.to_string(),
        score,
        at: DateTime::from_timestamp(at_secs, 0).expect("valid timestamp"),
    }
}

fn readings() -> Vec<Reading> {
    vec![
        reading(1, "beta", 0.7, 3_000),
        reading(2, "alpha", 2.5, 1_000),
        reading(3, "gamma", -1.0, 2_000),
    ]
}

#[test]
fn sorts_by_each_key_kind() -> Result<()> {
    let mut v = readings();

    ops::sort(&mut v, IntKey("id"))?;
    assert_eq!(v.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    ops::sort(&mut v, StrKey("sensor"))?;
    assert_eq!(
        v.iter().map(|r| r.sensor.as_str()).collect::<Vec<_>>(),
        vec!["alpha", "beta", "gamma"]
    );

    ops::sort(&mut v, FloatKey("score"))?;
    assert_eq!(v.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1, 2]);

    ops::sort(&mut v, TimeKey("at"))?;
    assert_eq!(v.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    Ok(())
}

#[test]
fn sort_and_sort_reverse_are_mutually_reverse() -> Result<()> {
    let mut ascending = payments();
    ops::sort(&mut ascending, IntKey("amount"))?;

    let mut descending = payments();
    ops::sort_reverse(&mut descending, IntKey("amount"))?;

    let mut flipped = descending.clone();
    flipped.reverse();
    assert_eq!(ascending, flipped);
    Ok(())
}

#[test]
fn transform_selectors_provide_computed_keys() -> Result<()> {
    let mut v = payments();
    // Sort by distance from 300.
    ops::sort(&mut v, by(|p: &Payment| (p.amount - 300).abs()))?;
    assert_eq!(v[0].amount, 250);
    assert_eq!(v.last().map(|p| p.amount), Some(900));
    Ok(())
}

#[test]
fn failed_resolution_leaves_the_order_untouched() {
    let mut v = payments();
    let before = v.clone();
    let err = ops::sort(&mut v, IntKey("amont")).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownAttribute {
            record: "Payment".into(),
            field: "amont".into(),
        }
    );
    assert_eq!(v, before);
}

#[test]
fn nan_scores_sort_deterministically() -> Result<()> {
    let mut v = vec![
        reading(1, "a", f64::NAN, 0),
        reading(2, "b", 1.0, 0),
        reading(3, "c", -1.0, 0),
    ];
    ops::sort(&mut v, FloatKey("score"))?;
    // Total order places NaN above all finite values.
    assert_eq!(v.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    Ok(())
}

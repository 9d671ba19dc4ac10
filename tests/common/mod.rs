//! Shared record fixtures for the integration tests.
#![allow(dead_code)]

use corral::{Keyed, record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
}

record!(Account {
    i64: { id },
    String: { name },
});

impl Keyed for Account {
    type Key = i64;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub settled: bool,
    pub account: Option<Account>,
}

record!(Payment {
    i64: { id, account_id, amount },
    bool: { settled },
    Option<Account>: { account },
});

pub fn account(id: i64, name: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
    }
}

pub fn payment(id: i64, account_id: i64, amount: i64, settled: bool) -> Payment {
    Payment {
        id,
        account_id,
        amount,
        settled,
        account: None,
    }
}

/// Five payments across three accounts, mixed settled flags.
pub fn payments() -> Vec<Payment> {
    vec![
        payment(1, 10, 250, true),
        payment(2, 10, 75, false),
        payment(3, 20, 900, true),
        payment(4, 30, 30, false),
        payment(5, 20, 410, true),
    ]
}

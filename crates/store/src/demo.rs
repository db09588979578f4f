//! Demo fixtures for development and the reset endpoints.

use rust_decimal::Decimal;

use tresor_core::teller::types::{BankAccount, User};
use tresor_shared::types::{AccountId, UserId};

fn user(id: u64, user_name: &str, first_name: &str, family_name: &str) -> User {
    User {
        id: UserId::new(id),
        user_name: user_name.to_string(),
        first_name: first_name.to_string(),
        family_name: family_name.to_string(),
        is_active: true,
    }
}

fn account(id: u64, name: &str, description: &str, cents: i64, owner: u64) -> BankAccount {
    BankAccount {
        id: AccountId::new(id),
        account_name: name.to_string(),
        description: description.to_string(),
        balance: Decimal::new(cents, 2),
        owner: UserId::new(owner),
    }
}

/// The five demo users.
#[must_use]
pub fn demo_users() -> Vec<User> {
    vec![
        user(1, "first_User", "Scott", "Summers"),
        user(2, "second_User", "Robert", "Drake"),
        user(3, "third_User", "Henry", "McCoy"),
        user(4, "fourth_User", "Warren", "Worthington"),
        user(5, "fifth_User", "Jean", "Grey"),
    ]
}

/// The ten demo accounts, owned by the demo users.
#[must_use]
pub fn demo_accounts() -> Vec<BankAccount> {
    vec![
        account(1, "Travel funds", "Funds for future travels and events.", 50_000, 1),
        account(2, "Car collection", "Money pot for car collection.", 875_000, 1),
        account(3, "Future savings", "Savings for future plans", 575_000, 1),
        account(4, "Savings account", "Funds for cool events.", 11_000, 2),
        account(5, "Book collection", "Library collection.", 23_126, 3),
        account(
            6,
            "Account no. 96",
            "Duplicate account - keep maxing bank liability limit.",
            1_000_000,
            4,
        ),
        account(
            7,
            "Account no. 97",
            "Duplicate account - keep maxing bank liability limit.",
            1_000_000,
            4,
        ),
        account(
            8,
            "Account no. 98",
            "Duplicate account - keep maxing bank liability limit.",
            1_000_000,
            4,
        ),
        account(
            9,
            "Account no. 99",
            "Duplicate account - keep maxing bank liability limit.",
            987_666,
            4,
        ),
        account(10, "Travel funds", "Funds for future travels and events.", 76_835, 5),
    ]
}

//! Transaction classifier
//!
//! Assigns a financial category to each royalty line. Rules are evaluated in
//! order and the first match wins; the last rule is a catch-all, so every
//! line gets exactly one category.

use crate::models::{Category, ClassifiedTransaction, Transaction};

/// Rights holder whose own catalogue earns label income
pub const HOUSE_RIGHTS_HOLDER: &str = "PHONOLITE";

const ADVANCE_REFUND: &str = "Advance Refund";
const LICENSE: &str = "license";
const SYNCHRO: &str = "synchro";

/// Classify a statement line by rights holder and type
pub fn classify(rights_holder: &str, kind: &str) -> Category {
    let house = rights_holder == HOUSE_RIGHTS_HOLDER;

    if kind == ADVANCE_REFUND {
        return Category::AdvanceRecovery;
    }

    let kind_lower = kind.to_lowercase();
    if kind_lower.contains(LICENSE) {
        return if house {
            Category::Licensing
        } else {
            Category::PublisherProvision
        };
    }
    if kind_lower.contains(SYNCHRO) {
        return if house {
            Category::Synchronization
        } else {
            Category::PublisherProvision
        };
    }

    if house {
        Category::DigitalMechanicals
    } else {
        Category::PublisherProvision
    }
}

/// Classify a single transaction
pub fn classify_transaction(transaction: &Transaction) -> Category {
    classify(&transaction.rights_holder, &transaction.kind)
}

/// Classify every transaction, preserving input order
pub fn classify_all(transactions: &[Transaction]) -> Vec<ClassifiedTransaction> {
    transactions
        .iter()
        .map(|txn| ClassifiedTransaction {
            transaction: txn.clone(),
            category: classify_transaction(txn),
        })
        .collect()
}

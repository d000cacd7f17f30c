//! Royalty transaction model
//!
//! One line of a royalty statement, as loaded from the operations
//! spreadsheet, and the same line once the classifier has labelled it.

use serde::Serialize;

use super::category::Category;
use super::money::Money;

/// A royalty statement line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Party entitled to the royalty ("RightsHolder" column)
    pub rights_holder: String,

    /// Statement line type ("Type" column), e.g. "Mechanical License"
    pub kind: String,

    /// Payee name ("Name" column)
    pub name: String,

    /// Line amount ("Amount" column)
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        rights_holder: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            rights_holder: rights_holder.into(),
            kind: kind.into(),
            name: name.into(),
            amount,
        }
    }
}

/// A transaction together with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category: Category,
}

impl ClassifiedTransaction {
    pub fn name(&self) -> &str {
        &self.transaction.name
    }

    pub fn kind(&self) -> &str {
        &self.transaction.kind
    }

    pub fn amount(&self) -> Money {
        self.transaction.amount
    }
}

//! Financial category model
//!
//! The closed set of labels the classifier assigns to royalty lines. The
//! labels are the ones finance books against, so they stay in Portuguese.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Financial category assigned to a royalty transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Advance refunds recovered from the rights holder
    AdvanceRecovery,
    /// Licensing income on the label's own catalogue
    Licensing,
    /// Synchronisation income on the label's own catalogue
    Synchronization,
    /// Digital mechanical income on the label's own catalogue
    DigitalMechanicals,
    /// Amounts owed onward to publishers
    PublisherProvision,
}

impl Category {
    /// Every category, in label order
    pub const ALL: [Category; 5] = [
        Category::DigitalMechanicals,
        Category::Licensing,
        Category::Synchronization,
        Category::AdvanceRecovery,
        Category::PublisherProvision,
    ];

    /// The label written to reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AdvanceRecovery => "Recuperação de Adiantamentos",
            Self::Licensing => "Direitos Autorais – Licenciamento",
            Self::Synchronization => "Direitos Autorais – Sincronização",
            Self::DigitalMechanicals => "Direitos Autorais – Fonomecânicos Digitais",
            Self::PublisherProvision => "Repasses Editora - Provisão",
        }
    }

    /// Look a category up by its report label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

// Reports order categories by label, not by declaration.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

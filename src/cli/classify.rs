//! CLI command for classifying a single statement line

use crate::models::Category;
use crate::services::classify;

/// Handle the classify command, printing the category label
pub fn handle_classify_command(rights_holder: &str, kind: &str) -> Category {
    let category = classify(rights_holder, kind);
    println!("{}", category);
    category
}

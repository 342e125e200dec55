use reedline::{ValidationResult, Validator};

use crate::lang::is_incomplete;

pub struct LangValidator;

impl Validator for LangValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if is_incomplete(line) {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}

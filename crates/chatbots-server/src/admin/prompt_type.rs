//! Prompt type selector
//!
//! The admin form only needs a list of choices for the current value;
//! what each prompt type means is decided elsewhere.

use serde::Serialize;

use chatbots::PromptType;

/// One selectable prompt type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptTypeOption {
    pub value: i32,
    pub label: String,
    pub selected: bool,
}

/// Capability that offers prompt types to choose from
pub trait PromptTypeInput: Send + Sync {
    /// Choices to show, with `current` marked as selected
    fn options(&self, current: PromptType) -> Vec<PromptTypeOption>;
}

/// Offers prompt types `1..=count`
pub struct NumberedPromptTypes {
    count: i32,
}

impl NumberedPromptTypes {
    pub fn new(count: i32) -> Self {
        Self {
            count: count.max(1),
        }
    }
}

impl PromptTypeInput for NumberedPromptTypes {
    fn options(&self, current: PromptType) -> Vec<PromptTypeOption> {
        let mut codes: Vec<i32> = (1..=self.count).collect();
        // stored values outside the configured range stay selectable
        if !codes.contains(&current.code()) {
            codes.push(current.code());
            codes.sort_unstable();
        }

        codes
            .into_iter()
            .map(|code| PromptTypeOption {
                value: code,
                label: format!("Type {}", code),
                selected: code == current.code(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_current() {
        let options = NumberedPromptTypes::new(3).options(PromptType::new(2));
        let selected: Vec<i32> = options.iter().filter(|o| o.selected).map(|o| o.value).collect();
        assert_eq!(options.len(), 3);
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn test_keeps_out_of_range_current() {
        let options = NumberedPromptTypes::new(2).options(PromptType::new(7));
        let values: Vec<i32> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1, 2, 7]);
        assert!(options[2].selected);
    }
}

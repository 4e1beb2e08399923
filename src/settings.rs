use crate::constants::TARGET_COLUMN;
use crate::criterion::Criterion;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    target_attribute: String,
    criterion: Criterion,
}

impl Settings {
    pub fn new(target_attribute: impl Into<String>, criterion: Criterion) -> Self {
        Self {
            target_attribute: target_attribute.into(),
            criterion,
        }
    }

    pub fn default() -> Self {
        Self::new(TARGET_COLUMN, Criterion::InformationGain)
    }

    pub fn set_target_attribute(&mut self, target_attribute: impl Into<String>) {
        self.target_attribute = target_attribute.into();
    }

    pub fn set_criterion(&mut self, criterion: Criterion) {
        self.criterion = criterion;
    }

    pub fn get_target_attribute(&self) -> &str {
        &self.target_attribute
    }

    pub fn get_criterion(&self) -> Criterion {
        self.criterion
    }
}

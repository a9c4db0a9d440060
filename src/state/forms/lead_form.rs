//! Lead form state and navigation

use super::field::{cycle_config, cycle_visit_timing, FormFields, LeadField, PHONE_LENGTH};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The lead-intake form: four values plus the row the cursor is on
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    pub fields: FormFields,
    pub active: LeadField,
}

impl LeadForm {
    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active == LeadField::Submit
    }

    /// Type a character into the active text row
    pub fn input_char(&mut self, c: char) {
        match self.active {
            LeadField::Name => self.fields.name.push(c),
            LeadField::Phone => {
                if self.fields.phone.chars().count() < PHONE_LENGTH {
                    self.fields.phone.push(c);
                }
            }
            _ => {}
        }
    }

    /// Remove the last character of the active text row
    pub fn backspace(&mut self) {
        match self.active {
            LeadField::Name => {
                self.fields.name.pop();
            }
            LeadField::Phone => {
                self.fields.phone.pop();
            }
            _ => {}
        }
    }

    /// Move the active choice row to its next (or previous) option
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.active {
            LeadField::Config => {
                self.fields.config = cycle_config(self.fields.config, forward);
            }
            LeadField::VisitTiming => {
                self.fields.visit_timing = cycle_visit_timing(self.fields.visit_timing, forward);
            }
            _ => {}
        }
    }

    /// Empty every field and return the cursor to the first row
    pub fn clear(&mut self) {
        self.fields.clear();
        self.active = LeadField::default();
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        LeadField::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active.index()
    }
    fn set_active_field(&mut self, index: usize) {
        self.active = LeadField::from_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{Configuration, VisitTiming};

    #[test]
    fn test_new_starts_on_name() {
        let form = LeadForm::default();
        assert_eq!(form.active, LeadField::Name);
        assert_eq!(form.fields, FormFields::default());
        assert!(!form.is_submit_row_active());
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = LeadForm::default();
        for _ in 0..form.field_count() {
            form.next_field();
        }
        assert_eq!(form.active, LeadField::Name);
    }

    #[test]
    fn test_prev_field_wraps_to_submit() {
        let mut form = LeadForm::default();
        form.prev_field();
        assert!(form.is_submit_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = LeadForm::default();
        form.set_active_field(100);
        assert_eq!(form.active, LeadField::Submit);
    }

    #[test]
    fn test_typing_into_name() {
        let mut form = LeadForm::default();
        for c in "Ravi".chars() {
            form.input_char(c);
        }
        form.backspace();
        assert_eq!(form.fields.name, "Rav");
    }

    #[test]
    fn test_phone_input_is_capped() {
        let mut form = LeadForm::default();
        form.active = LeadField::Phone;
        for c in "987654321099".chars() {
            form.input_char(c);
        }
        assert_eq!(form.fields.phone, "9876543210");
    }

    #[test]
    fn test_typing_on_choice_row_is_ignored() {
        let mut form = LeadForm::default();
        form.active = LeadField::Config;
        form.input_char('x');
        form.backspace();
        assert_eq!(form.fields, FormFields::default());
    }

    #[test]
    fn test_cycle_choice_sets_options() {
        let mut form = LeadForm::default();
        form.active = LeadField::Config;
        form.cycle_choice(true);
        form.cycle_choice(true);
        assert_eq!(form.fields.config, Some(Configuration::TwoBhk));

        form.active = LeadField::VisitTiming;
        form.cycle_choice(false);
        assert_eq!(form.fields.visit_timing, Some(VisitTiming::NextWeekend));
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut form = LeadForm::default();
        form.input_char('A');
        form.active = LeadField::Phone;
        form.clear();
        assert_eq!(form.fields, FormFields::default());
        assert_eq!(form.active, LeadField::Name);
    }
}

//! Form field value objects

use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted in the phone row
pub const PHONE_LENGTH: usize = 10;

/// Apartment configuration the lead is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Configuration {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
}

impl Configuration {
    pub const ALL: [Configuration; 2] = [Configuration::OneBhk, Configuration::TwoBhk];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
        }
    }
}

/// How soon the lead plans to visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitTiming {
    #[serde(rename = "This Weekend")]
    ThisWeekend,
    #[serde(rename = "In Week Days")]
    InWeekDays,
    #[serde(rename = "Next Weekend")]
    NextWeekend,
}

impl VisitTiming {
    pub const ALL: [VisitTiming; 3] = [
        VisitTiming::ThisWeekend,
        VisitTiming::InWeekDays,
        VisitTiming::NextWeekend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisWeekend => "This Weekend",
            Self::InWeekDays => "In Week Days",
            Self::NextWeekend => "Next Weekend",
        }
    }
}

/// Raw values entered by the user, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub config: Option<Configuration>,
    pub visit_timing: Option<VisitTiming>,
    pub phone: String,
}

impl FormFields {
    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Rows of the lead form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadField {
    #[default]
    Name,
    Config,
    VisitTiming,
    Phone,
    /// The submit button row
    Submit,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Config,
        LeadField::VisitTiming,
        LeadField::Phone,
        LeadField::Submit,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Please Enter Your Full Name",
            Self::Config => "Please Select Your Choice of Configuration",
            Self::VisitTiming => "How Soon You are Planning to Visit",
            Self::Phone => "Please Enter Your Phone No.",
            Self::Submit => "Submit",
        }
    }

    /// Returns true for rows that are edited by cycling through options
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Config | Self::VisitTiming)
    }

    /// Returns true for rows that accept typed characters
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Phone)
    }

    /// Current display value of this row
    pub fn display_value(&self, fields: &FormFields) -> String {
        match self {
            Self::Name => fields.name.clone(),
            Self::Config => fields
                .config
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            Self::VisitTiming => fields
                .visit_timing
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            Self::Phone => fields.phone.clone(),
            Self::Submit => String::new(),
        }
    }
}

/// Step to the neighbouring option, starting from the first (or last) when unset
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = options.len();
    if len == 0 {
        return current;
    }
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None if forward => 0,
        None => len - 1,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    Some(options[next])
}

pub(super) fn cycle_config(current: Option<Configuration>, forward: bool) -> Option<Configuration> {
    cycle(&Configuration::ALL, current, forward)
}

pub(super) fn cycle_visit_timing(current: Option<VisitTiming>, forward: bool) -> Option<VisitTiming> {
    cycle(&VisitTiming::ALL, current, forward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_serializes_to_label() {
        let json = serde_json::to_string(&Configuration::TwoBhk).unwrap();
        assert_eq!(json, "\"2BHK\"");
    }

    #[test]
    fn test_visit_timing_serializes_to_label() {
        for timing in VisitTiming::ALL {
            let json = serde_json::to_string(&timing).unwrap();
            assert_eq!(json, format!("\"{}\"", timing.label()));
        }
    }

    #[test]
    fn test_clear_empties_all_fields() {
        let mut fields = FormFields {
            name: "A".to_string(),
            config: Some(Configuration::OneBhk),
            visit_timing: Some(VisitTiming::NextWeekend),
            phone: "9876543210".to_string(),
        };
        assert_ne!(fields, FormFields::default());
        fields.clear();
        assert_eq!(fields, FormFields::default());
    }

    #[test]
    fn test_cycle_from_unset() {
        assert_eq!(cycle_config(None, true), Some(Configuration::OneBhk));
        assert_eq!(cycle_config(None, false), Some(Configuration::TwoBhk));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(
            cycle_visit_timing(Some(VisitTiming::NextWeekend), true),
            Some(VisitTiming::ThisWeekend)
        );
        assert_eq!(
            cycle_visit_timing(Some(VisitTiming::ThisWeekend), false),
            Some(VisitTiming::NextWeekend)
        );
    }

    #[test]
    fn test_field_index_roundtrip_and_clamp() {
        assert_eq!(LeadField::from_index(LeadField::Phone.index()), LeadField::Phone);
        assert_eq!(LeadField::from_index(100), LeadField::Submit);
    }

    #[test]
    fn test_display_value_for_unset_choice_is_empty() {
        let fields = FormFields::default();
        assert_eq!(LeadField::Config.display_value(&fields), "");
        assert!(LeadField::Config.is_choice());
        assert!(!LeadField::Config.is_text());
    }
}

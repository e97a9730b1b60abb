use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// A form field, keyed by the `name` attribute of its rendered input.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "lastName")]
    LastName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "surveyType")]
    SurveyType,
    #[strum(serialize = "message")]
    Message,
}

/// The in-memory record of the current form values. Lives for a single
/// submission attempt and is never persisted.
///
/// Presence of the required fields is checked on the raw value, not trimmed.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    #[validate(length(min = 1))]
    pub first_name: String,
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub phone: String,
    pub survey_type: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl Draft {
    /// Replace the named field, leaving every other field unchanged.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::SurveyType => self.survey_type = value,
            Field::Message => self.message = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::SurveyType => &self.survey_type,
            Field::Message => &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_update_replaces_only_the_named_field() {
        let mut draft = Draft::default();
        draft.update(Field::Email, "jane@x.com");

        assert_eq!(draft.email, "jane@x.com");
        assert_eq!(
            draft,
            Draft {
                email: "jane@x.com".to_string(),
                ..Draft::default()
            }
        );
    }

    #[test]
    fn test_updates_are_independent_across_fields() {
        let mut draft = Draft::default();
        draft.update(Field::FirstName, "Jane");
        draft.update(Field::Email, "jane@x.com");

        draft.update(Field::Phone, "+353874950977");

        assert_eq!(draft.field(Field::FirstName), "Jane");
        assert_eq!(draft.field(Field::Email), "jane@x.com");
        assert_eq!(draft.field(Field::Phone), "+353874950977");
        assert_eq!(draft.field(Field::LastName), "");
    }

    #[test]
    fn test_update_is_idempotent_per_field() {
        let mut once = Draft::default();
        once.update(Field::Message, "Hi");

        let mut twice = Draft::default();
        twice.update(Field::Message, "Hi");
        twice.update(Field::Message, "Hi");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_field_parses_every_rendered_input_name() {
        for field in Field::VARIANTS {
            let parsed = Field::from_str(field.as_ref()).expect("input name should parse");
            assert_eq!(parsed, *field);
        }

        assert_eq!(Field::from_str("firstName"), Ok(Field::FirstName));
        assert_eq!(Field::from_str("surveyType"), Ok(Field::SurveyType));
    }

    #[test]
    fn test_field_rejects_unknown_names() {
        assert!(Field::from_str("first_name").is_err());
        assert!(Field::from_str("subject").is_err());
        assert!(Field::from_str("").is_err());
    }

    #[test]
    fn test_required_fields_reject_empty_values() {
        let draft = Draft {
            first_name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: String::new(),
            ..Draft::default()
        };

        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_counts_as_filled() {
        let draft = Draft {
            first_name: " ".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
            ..Draft::default()
        };

        assert!(draft.validate().is_ok());
    }
}

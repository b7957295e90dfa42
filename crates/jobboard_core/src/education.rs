/// Minimum education level, encoded on the wire as its position (0..=4).
///
/// The registration form and the job detail view both go through this type,
/// so the code-to-label mapping has exactly one definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EducationLevel {
    #[default]
    None,
    HighSchool,
    Bachelor,
    Master,
    Doctoral,
}

/// Label shown for codes outside `0..=4`.
pub const UNKNOWN_EDUCATION_LABEL: &str = "Unknown";

impl EducationLevel {
    /// Every level in wire order.
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::None,
        EducationLevel::HighSchool,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctoral,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::None => "None",
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Doctoral => "Doctoral's Degree",
        }
    }

    /// Value used by the registration form's education selector.
    pub fn form_value(self) -> &'static str {
        match self {
            EducationLevel::None => "none",
            EducationLevel::HighSchool => "high-school",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Doctoral => "doctoral",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.form_value() == value.trim())
    }
}

/// Label for a raw `min_education` code; unknown codes render as "Unknown".
pub fn education_label(code: Option<i64>) -> &'static str {
    code.and_then(EducationLevel::from_code)
        .map_or(UNKNOWN_EDUCATION_LABEL, EducationLevel::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        let codes: Vec<u8> = EducationLevel::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_code(i64::from(level.code())), Some(level));
        }
    }

    #[test]
    fn labels_for_known_and_unknown_codes() {
        assert_eq!(education_label(Some(2)), "Bachelor's Degree");
        assert_eq!(education_label(Some(4)), "Doctoral's Degree");
        assert_eq!(education_label(Some(9)), "Unknown");
        assert_eq!(education_label(Some(-1)), "Unknown");
        assert_eq!(education_label(None), "Unknown");
    }

    #[test]
    fn form_values_round_trip_and_unknown_is_rejected() {
        assert_eq!(
            EducationLevel::from_form_value("high-school"),
            Some(EducationLevel::HighSchool)
        );
        assert_eq!(EducationLevel::from_form_value("phd"), None);
    }
}

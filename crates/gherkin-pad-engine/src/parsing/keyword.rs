use std::fmt;

/// The closed set of line keywords, in canonical order.
///
/// The order of [`Keyword::ALL`] is significant: the tokenizer tries
/// candidates in this order and the suggestion matcher reports matches in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Feature,
    Scenario,
    Given,
    When,
    Then,
    And,
    But,
}

impl Keyword {
    /// Every keyword, in canonical order.
    pub const ALL: [Keyword; 7] = [
        Keyword::Feature,
        Keyword::Scenario,
        Keyword::Given,
        Keyword::When,
        Keyword::Then,
        Keyword::And,
        Keyword::But,
    ];

    /// Keywords that introduce a step line.
    pub const STEPS: [Keyword; 5] = [
        Keyword::Given,
        Keyword::When,
        Keyword::Then,
        Keyword::And,
        Keyword::But,
    ];

    /// Canonical spelling: first letter uppercase, rest lowercase.
    /// `Feature` and `Scenario` carry their trailing colon.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Feature => "Feature:",
            Keyword::Scenario => "Scenario:",
            Keyword::Given => "Given",
            Keyword::When => "When",
            Keyword::Then => "Then",
            Keyword::And => "And",
            Keyword::But => "But",
        }
    }

    pub fn is_step(self) -> bool {
        Self::STEPS.contains(&self)
    }

    /// Strips this keyword's token from the start of `line`, ignoring ASCII
    /// case, and returns what follows it.
    pub fn strip_token(self, line: &str) -> Option<&str> {
        let token = self.as_str();
        let head = line.get(..token.len())?;
        head.eq_ignore_ascii_case(token)
            .then(|| &line[token.len()..])
    }

    /// True if the lowercase spelling of this keyword starts with the
    /// lowercase form of `prefix`.
    pub fn starts_with_ignore_case(self, prefix: &str) -> bool {
        let token = self.as_str();
        token
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_canonical_order() {
        let spelled: Vec<_> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            spelled,
            ["Feature:", "Scenario:", "Given", "When", "Then", "And", "But"]
        );
    }

    #[test]
    fn strip_token_ignores_case() {
        assert_eq!(Keyword::Given.strip_token("GIVEN a user"), Some(" a user"));
        assert_eq!(Keyword::Scenario.strip_token("scenario: x"), Some(" x"));
        assert_eq!(Keyword::Given.strip_token("Giv"), None);
        assert_eq!(Keyword::When.strip_token("Given"), None);
    }

    #[test]
    fn strip_token_handles_multibyte_lines() {
        assert_eq!(Keyword::Given.strip_token("Géven x"), None);
        assert_eq!(Keyword::And.strip_token("Añ"), None);
        // byte 5 falls inside the second "é"
        assert_eq!(Keyword::Given.strip_token("Gaéé"), None);
    }

    #[test]
    fn steps_exclude_feature_and_scenario() {
        assert!(Keyword::But.is_step());
        assert!(!Keyword::Feature.is_step());
        assert!(!Keyword::Scenario.is_step());
    }
}

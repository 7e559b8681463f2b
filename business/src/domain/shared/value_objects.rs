/// Identifier of the customer owning a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses caller-supplied input, trimming surrounding whitespace.
    /// Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_when_parsing_user_id() {
        // Act
        let user_id = UserId::parse("  customer-42 ").unwrap();

        // Assert
        assert_eq!(user_id.as_str(), "customer-42");
    }

    #[test]
    fn should_reject_blank_user_id() {
        // Act
        let parsed = (UserId::parse(""), UserId::parse("   "));

        // Assert
        assert_eq!(parsed, (None, None));
    }

    #[test]
    fn should_display_raw_identifier() {
        // Act
        let user_id = UserId::new("customer-7");

        // Assert
        assert_eq!(user_id.to_string(), "customer-7");
    }

    #[test]
    fn should_compare_user_ids_by_value() {
        // Arrange
        let from_str: UserId = "same".into();

        // Act
        let from_string: UserId = "same".to_string().into();

        // Assert
        assert_eq!(from_str, from_string);
        assert_ne!(from_str, UserId::new("other"));
    }
}

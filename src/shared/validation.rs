use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "admin123", "_ops", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Regex for public ticket identifiers
    /// Format: RPT-<unix millis>-<5 uppercase base36 characters>
    /// - Valid: "RPT-1717171717171-A1B2C"
    /// - Invalid: "RPT-abc-A1B2C", "RPT-1717171717171-a1b2c", "TKT-1-AAAAA"
    pub static ref TICKET_ID_REGEX: Regex = Regex::new(r"^RPT-\d+-[A-Z0-9]{5}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex_valid() {
        assert!(USERNAME_REGEX.is_match("john_doe"));
        assert!(USERNAME_REGEX.is_match("admin123"));
        assert!(USERNAME_REGEX.is_match("_ops"));
        assert!(USERNAME_REGEX.is_match("JohnDoe"));
    }

    #[test]
    fn test_username_regex_invalid() {
        assert!(!USERNAME_REGEX.is_match("123user")); // starts with digit
        assert!(!USERNAME_REGEX.is_match("-user")); // starts with hyphen
        assert!(!USERNAME_REGEX.is_match("user-name")); // hyphen
        assert!(!USERNAME_REGEX.is_match("user name")); // space
        assert!(!USERNAME_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_ticket_id_regex_valid() {
        assert!(TICKET_ID_REGEX.is_match("RPT-1717171717171-A1B2C"));
        assert!(TICKET_ID_REGEX.is_match("RPT-0-ZZZZZ"));
    }

    #[test]
    fn test_ticket_id_regex_invalid() {
        assert!(!TICKET_ID_REGEX.is_match("RPT-abc-A1B2C")); // non-numeric timestamp
        assert!(!TICKET_ID_REGEX.is_match("RPT-1717171717171-a1b2c")); // lowercase suffix
        assert!(!TICKET_ID_REGEX.is_match("RPT-1717171717171-A1B2")); // short suffix
        assert!(!TICKET_ID_REGEX.is_match("TKT-1717171717171-A1B2C")); // wrong prefix
        assert!(!TICKET_ID_REGEX.is_match("TEST-123")); // demo fixture id
    }
}

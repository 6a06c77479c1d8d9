//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the logging macros,
//! the test capture layer, and anything that parses JSON logs.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_GUEST_ID: &str = "guest_id";
pub const FIELD_EVENT_ID: &str = "event_id";
pub const FIELD_ROLE: &str = "role";

// Result sizes
pub const FIELD_RESULT_LEN: &str = "result_len";
pub const FIELD_CHANGED: &str = "changed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_GUEST_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_entity_fields_are_distinct() {
        assert_ne!(FIELD_GUEST_ID, FIELD_EVENT_ID);
        assert_ne!(FIELD_ERR_KIND, FIELD_ERR_CODE);
    }
}

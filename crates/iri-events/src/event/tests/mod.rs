
#[cfg(test)]
mod tests {
    use crate::event::EventErrorKind;

    #[test]
    fn test_event_error_kind_tags() {
        assert_eq!(EventErrorKind::Event.tag(), "[CEvent class]");
        assert_eq!(EventErrorKind::EventServer.tag(), "[CEventServer class]");
        assert_eq!(EventErrorKind::Timeout.tag(), "[Timeout]");
    }

    #[test]
    fn test_event_error_kind_timeout_flag() {
        assert!(!EventErrorKind::Event.is_timeout());
        assert!(!EventErrorKind::EventServer.is_timeout());
        assert!(EventErrorKind::Timeout.is_timeout());
    }

    #[test]
    fn test_event_error_kind_display() {
        assert_eq!(EventErrorKind::Event.to_string(), "event");
        assert_eq!(EventErrorKind::EventServer.to_string(), "event server");
        assert_eq!(EventErrorKind::Timeout.to_string(), "timeout");
    }
}

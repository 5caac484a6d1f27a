#[cfg(test)]
mod tests {
    use crate::properties::{Audit, AuditType};
    use crate::utils::time_utils::{from_epoch_millis, parse_service_date};

    #[test]
    fn audit_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&AuditType::DeleteUnpublish).unwrap(),
            "\"delete_unpublish\""
        );
        assert_eq!(
            serde_json::from_str::<AuditType>("\"check_out\"").unwrap(),
            AuditType::CheckOut
        );
        assert_eq!(AuditType::AdvanceWorkflow.as_str(), "advance_workflow");
    }

    #[test]
    fn audit_with_millisecond_date() {
        let json = r#"{
            "user": "wing",
            "action": "edit",
            "identifier": {"id": "1f22332a8b7ffe834c5fe91e33ecd4c7", "type": "page"},
            "date": 1473696117000
        }"#;
        let audit: Audit = serde_json::from_str(json).unwrap();
        assert_eq!(audit.user, "wing");
        assert_eq!(audit.action, AuditType::Edit);
        assert_eq!(audit.date, from_epoch_millis(1473696117000).unwrap());
    }

    #[test]
    fn audit_with_legacy_display_date() {
        let json = r#"{
            "user": "wing",
            "action": "publish",
            "identifier": {"id": "1f22332a8b7ffe834c5fe91e33ecd4c7", "type": "page"},
            "date": "Sep 12, 2016 12:01:57 PM"
        }"#;
        let audit: Audit = serde_json::from_str(json).unwrap();
        assert_eq!(
            audit.date,
            parse_service_date("Sep 12, 2016 12:01:57 PM").unwrap()
        );
    }

    #[test]
    fn legacy_display_format_parses() {
        let parsed = parse_service_date("Sep 2, 2016 1:01:57 PM").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2016-09-02T13:01:57+00:00");
    }

    #[test]
    fn rfc3339_parses() {
        assert!(parse_service_date("2016-09-12T12:01:57Z").is_some());
    }

    #[test]
    fn garbage_date_is_rejected() {
        assert!(parse_service_date("last tuesday").is_none());
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use crate::errors::Error;
    use crate::identifier::{is_hex_id, AssetPath, EntityType, Identifier};

    #[test]
    fn type_strings_round_trip() {
        for t in [
            EntityType::Page,
            EntityType::FeedBlock,
            EntityType::XsltFormat,
            EntityType::FileSystemTransport,
            EntityType::DataDefinitionContainer,
        ] {
            assert_eq!(EntityType::from_str(t.as_str()).unwrap(), t);
        }
        assert!(EntityType::from_str("no-such-type").is_err());
    }

    #[test]
    fn property_name_map() {
        assert_eq!(EntityType::FeedBlock.as_str(), "block_FEED");
        assert_eq!(EntityType::FeedBlock.property_name(), "feedBlock");
        assert_eq!(
            EntityType::StructuredDataBlock.property_name(),
            "xhtmlDataDefinitionBlock"
        );
        assert_eq!(EntityType::ScriptFormat.property_name(), "scriptFormat");
        assert_eq!(EntityType::DatabaseTransport.as_str(), "transport_db");
    }

    #[test]
    fn entity_type_serializes_to_wire_string() {
        assert_eq!(
            serde_json::to_string(&EntityType::StructuredDataBlock).unwrap(),
            "\"block_XHTML_DATADEFINITION\""
        );
        assert_eq!(
            serde_json::from_str::<EntityType>("\"transport_fs\"").unwrap(),
            EntityType::FileSystemTransport
        );
    }

    #[test]
    fn hex_id_classification() {
        assert!(is_hex_id("1f22332a8b7ffe834c5fe91e33ecd4c7"));
        assert!(!is_hex_id("1F22332A8B7FFE834C5FE91E33ECD4C7"));
        assert!(!is_hex_id("about/index"));
        assert!(!is_hex_id("1f22332a8b7ffe834c5fe91e33ecd4c"));
    }

    #[test]
    fn of_treats_hex_as_id() {
        let id = Identifier::of(
            EntityType::Page,
            "1f22332a8b7ffe834c5fe91e33ecd4c7",
            None,
        )
        .unwrap();
        assert_eq!(id.id.as_deref(), Some("1f22332a8b7ffe834c5fe91e33ecd4c7"));
        assert!(id.path.is_none());
    }

    #[test]
    fn of_requires_site_for_site_scoped_paths() {
        let err = Identifier::of(EntityType::Page, "about/index", None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let id = Identifier::of(EntityType::Page, "about/index", Some("www")).unwrap();
        let path = id.path.unwrap();
        assert_eq!(path.path, "about/index");
        assert_eq!(path.site_name.as_deref(), Some("www"));
    }

    #[test]
    fn of_allows_global_paths_without_site() {
        let id = Identifier::of(EntityType::User, "wing", None).unwrap();
        assert_eq!(id.path.unwrap().path, "wing");
    }

    #[test]
    fn reconcile_backfills_missing_fields() {
        let mut id = Identifier::from_id(EntityType::Page, "1f22332a8b7ffe834c5fe91e33ecd4c7");
        id.reconcile(
            None,
            Some("about/index"),
            Some("1f2172088b7ffe834c5fe91e9596d028"),
            Some("www"),
        );
        let path = id.path.as_ref().unwrap();
        assert_eq!(path.path, "about/index");
        assert_eq!(path.site_name.as_deref(), Some("www"));

        // Existing values are never overwritten.
        let mut id = Identifier::from_path(
            EntityType::Page,
            AssetPath::with_site_name("about/index", "www"),
        );
        id.reconcile(Some("1f22332a8b7ffe834c5fe91e33ecd4c7"), None, None, Some("other"));
        assert_eq!(id.id.as_deref(), Some("1f22332a8b7ffe834c5fe91e33ecd4c7"));
        assert_eq!(
            id.path.as_ref().unwrap().site_name.as_deref(),
            Some("www")
        );
    }

    #[test]
    fn deserializes_container_child_shape() {
        // Child entry from a container listing.
        let json = r#"{
            "id": "e3aceb867f00000118d3acfcaabcc1f4",
            "path": {"path": "DD Container/DD", "siteId": "f7a963087f0000012693e3d9932e44ba"},
            "type": "datadefinition",
            "recycled": false
        }"#;
        let child: Identifier = serde_json::from_str(json).unwrap();
        assert_eq!(child.entity_type, EntityType::DataDefinition);
        assert_eq!(child.recycled, Some(false));
        assert_eq!(child.path.unwrap().path, "DD Container/DD");
    }

    #[test]
    fn serializes_without_empty_fields() {
        let id = Identifier::from_id(EntityType::Folder, "abc");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["type"], "folder");
        assert!(json.get("path").is_none());
        assert!(json.get("recycled").is_none());
    }

    proptest! {
        #[test]
        fn hex_classification_total(s in "\\PC*") {
            // Never panics, and only 32-char lowercase hex qualifies.
            let expect = s.len() == 32
                && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
            prop_assert_eq!(is_hex_id(&s), expect);
        }
    }
}

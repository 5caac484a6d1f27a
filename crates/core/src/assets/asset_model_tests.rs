#[cfg(test)]
mod tests {
    use crate::assets::{Asset, AssetProperty};
    use crate::errors::Error;
    use crate::identifier::{EntityType, Identifier};

    fn page_asset() -> Asset {
        let identifier = Identifier::from_id(
            EntityType::Page,
            "1f22332a8b7ffe834c5fe91e33ecd4c7",
        );
        let property: AssetProperty = serde_json::from_str(
            r#"{"page":{
                "id":"1f22332a8b7ffe834c5fe91e33ecd4c7",
                "name":"index",
                "path":"about/index",
                "siteId":"1f2172088b7ffe834c5fe91e9596d028",
                "siteName":"www",
                "tags":[{"name":"news"}]}}"#,
        )
        .unwrap();
        Asset::new(identifier, property)
    }

    #[test]
    fn construction_backfills_the_identifier() {
        let asset = page_asset();
        // Addressed by id; path and site arrive with the property.
        let path = asset.identifier().path.as_ref().unwrap();
        assert_eq!(path.path, "about/index");
        assert_eq!(path.site_name.as_deref(), Some("www"));
        assert_eq!(asset.site_id(), Some("1f2172088b7ffe834c5fe91e9596d028"));
    }

    #[test]
    fn accessors_fall_back_to_the_identifier() {
        // A destination payload with no path of its own still reports the
        // path it was addressed by.
        let identifier = Identifier::of(EntityType::Message, "inbox-note", None).unwrap();
        let property: AssetProperty =
            serde_json::from_str(r#"{"message":{"id":"6e8c72538b7ffe833b19adb8d79fa0bc","subject":"hi"}}"#)
                .unwrap();
        let asset = Asset::new(identifier, property);
        assert_eq!(asset.id(), Some("6e8c72538b7ffe833b19adb8d79fa0bc"));
        assert_eq!(asset.path(), Some("inbox-note"));
        assert_eq!(asset.name(), Some("hi"));
    }

    #[test]
    fn tag_helpers_edit_the_property_in_place() {
        let mut asset = page_asset();
        assert!(asset.has_tag("news"));

        asset.add_tag("events").unwrap();
        asset.add_tag("news").unwrap(); // already present, no duplicate
        asset.add_tags(["a", " b "]).unwrap();
        let names: Vec<&str> = asset
            .property()
            .tags()
            .unwrap()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, ["news", "events", "a", "b"]);

        asset.remove_tag("events").unwrap();
        assert!(!asset.has_tag("events"));
        asset.remove_all_tags().unwrap();
        assert!(asset.property().tags().unwrap().is_empty());
    }

    #[test]
    fn tag_helpers_reject_non_tag_bearing_assets() {
        let identifier = Identifier::of(EntityType::User, "wing", None).unwrap();
        let property: AssetProperty =
            serde_json::from_str(r#"{"user":{"username":"wing"}}"#).unwrap();
        let mut asset = Asset::new(identifier, property);
        let err = asset.add_tag("news").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!asset.has_tag("news"));
    }

    #[test]
    fn replace_property_keeps_reconciling() {
        let mut asset = page_asset();
        let renamed: AssetProperty = serde_json::from_str(
            r#"{"page":{
                "id":"1f22332a8b7ffe834c5fe91e33ecd4c7",
                "name":"index-renamed",
                "path":"about/index-renamed",
                "siteName":"www"}}"#,
        )
        .unwrap();
        asset.replace_property(renamed);
        assert_eq!(asset.name(), Some("index-renamed"));
        // The identifier still addresses the asset by its original path.
        assert_eq!(
            asset.identifier().path.as_ref().unwrap().path,
            "about/index"
        );
    }
}

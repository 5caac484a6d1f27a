#[cfg(test)]
mod tests {
    use crate::assets::AssetProperty;
    use crate::identifier::EntityType;

    // Captured from a live read of a feed block.
    const FEED_BLOCK_JSON: &str = r#"{
      "feedBlock":{
        "feedURL":"http://www.upstate.edu/news/",
        "expirationFolderRecycled":false,
        "metadataSetId":"358be6af8b7ffe83164c9314f9a3c1a6",
        "metadataSetPath":"_common_assets:Block",
        "metadata":{
          "dynamicFields":[ {
            "name":"macro",
            "fieldValues":[ { "value":"" } ] } ] },
        "parentFolderId":"1f22ab188b7ffe834c5fe91eed1a064a",
        "parentFolderPath":"_cascade/blocks/feed",
        "lastModifiedDate":"Sep 12, 2016 12:01:57 PM",
        "lastModifiedBy":"wing",
        "createdDate":"Sep 12, 2016 12:01:57 PM",
        "createdBy":"wing",
        "path":"_cascade/blocks/feed/hannonhill-sandbox-wing-asset",
        "siteId":"1f2172088b7ffe834c5fe91e9596d028",
        "siteName":"cascade-admin-webapp",
        "name":"hannonhill-sandbox-wing-asset",
        "id":"1f22332a8b7ffe834c5fe91e33ecd4c7"}
    }"#;

    #[test]
    fn feed_block_read_payload() {
        let property: AssetProperty = serde_json::from_str(FEED_BLOCK_JSON).unwrap();
        assert_eq!(property.entity_type(), EntityType::FeedBlock);
        assert_eq!(property.property_name(), "feedBlock");
        assert_eq!(property.id(), Some("1f22332a8b7ffe834c5fe91e33ecd4c7"));
        assert_eq!(property.name(), Some("hannonhill-sandbox-wing-asset"));
        assert_eq!(
            property.path(),
            Some("_cascade/blocks/feed/hannonhill-sandbox-wing-asset")
        );
        assert_eq!(property.site_name(), Some("cascade-admin-webapp"));

        let AssetProperty::FeedBlock(block) = &property else {
            panic!("wrong variant");
        };
        assert_eq!(block.feed_url.as_deref(), Some("http://www.upstate.edu/news/"));
        assert_eq!(
            block.dublin.metadata_set_path.as_deref(),
            Some("_common_assets:Block")
        );
        let metadata = block.dublin.metadata.as_ref().unwrap();
        assert!(metadata.dynamic_field("macro").is_some());
    }

    #[test]
    fn feed_block_round_trips_through_edit_shape() {
        let property: AssetProperty = serde_json::from_str(FEED_BLOCK_JSON).unwrap();
        let out = serde_json::to_value(&property).unwrap();
        assert_eq!(out["feedBlock"]["feedURL"], "http://www.upstate.edu/news/");
        assert_eq!(
            out["feedBlock"]["id"],
            "1f22332a8b7ffe834c5fe91e33ecd4c7"
        );
        // Tags were absent on the read and stay an empty array on the wire.
        assert_eq!(out["feedBlock"]["tags"], serde_json::json!([]));
    }

    #[test]
    fn file_system_transport_payload() {
        // Captured from a live read of a file system transport.
        let json = r#"{
          "fileSystemTransport":{
            "directory":"about",
            "parentContainerId":"042b48d78b7ffe8339ce5d13f348500d",
            "parentContainerPath":"Transport Container",
            "path":"Transport Container/Test File",
            "siteId":"1f2172088b7ffe834c5fe91e9596d028",
            "siteName":"cascade-admin-webapp",
            "name":"Test File",
            "id":"08378e518b7ffe8339ce5d1372331a0f"}
        }"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.entity_type(), EntityType::FileSystemTransport);
        assert_eq!(property.name(), Some("Test File"));

        let AssetProperty::FileSystemTransport(transport) = &property else {
            panic!("wrong variant");
        };
        assert_eq!(transport.directory.as_deref(), Some("about"));
        assert_eq!(
            transport.contained.parent_container_path.as_deref(),
            Some("Transport Container")
        );
    }

    #[test]
    fn container_payload_with_children() {
        // Captured from a live read of a data definition container.
        let json = r#"{
          "dataDefinitionContainer":{
            "children":[ {
              "id":"e3aceb867f00000118d3acfcaabcc1f4",
              "path":{
                "path":"DD Container/DD",
                "siteId":"f7a963087f0000012693e3d9932e44ba"},
                "type":"datadefinition",
                "recycled":false } ],
            "parentContainerId":"f7a9632d7f0000012693e3d9809faca9",
            "parentContainerPath":"/",
            "path":"DD Container",
            "siteId":"f7a963087f0000012693e3d9932e44ba",
            "siteName":"SUNY Upstate",
            "name":"DD Container",
            "id":"e3a9224c7f00000118d3acfc495173e2" }
        }"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.entity_type(), EntityType::DataDefinitionContainer);

        let children = property.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].entity_type, EntityType::DataDefinition);
        assert_eq!(
            children[0].path.as_ref().unwrap().path,
            "DD Container/DD"
        );
    }

    #[test]
    fn soap_container_children_collapse_to_an_object() {
        let json = r#"{
          "metadataSetContainer":{
            "children":{ "child": {
              "id":"e3aceb867f00000118d3acfcaabcc1f4",
              "path":{"path":"MS Container/Default"},
              "type":"metadataset" } },
            "name":"MS Container",
            "id":"e3a9224c7f00000118d3acfc495173e2" }
        }"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.children().unwrap().len(), 1);
    }

    #[test]
    fn workflow_email_payload() {
        // Captured from a live read of a workflow email.
        let json = r#"{
          "workflowEmail":{
            "subject": "A new subject line",
            "body": "A new body",
            "parentContainerId": "dcee71f28b7ffea932e15180ae5fe835",
            "parentContainerPath": "test-container",
            "path": "test-container/test-email",
            "siteId": "61885ac08b7ffe8377b637e83a86cca5",
            "siteName": "_brisk",
            "name": "test-email",
            "id": "dd1cc5488b7ffea932e15180b524fa3c"}
        }"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.entity_type(), EntityType::WorkflowEmail);
        assert_eq!(property.path(), Some("test-container/test-email"));

        let AssetProperty::WorkflowEmail(email) = &property else {
            panic!("wrong variant");
        };
        assert_eq!(email.subject.as_deref(), Some("A new subject line"));
    }

    #[test]
    fn global_payloads_have_no_path_or_site() {
        let json = r#"{"user":{"username":"wing","email":"w@example.edu","enabled":true}}"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.entity_type(), EntityType::User);
        assert_eq!(property.name(), Some("wing"));
        assert_eq!(property.path(), None);
        assert_eq!(property.site_name(), None);

        let json = r#"{"group":{"groupName":"editors","users":"wing;chan;"}}"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.name(), Some("editors"));

        let json = r#"{"role":{"id":"50","name":"Site Admin","roleType":"site",
            "siteAbilities":{"bypassWorkflow":true,"accessAudits":false}}}"#;
        let property: AssetProperty = serde_json::from_str(json).unwrap();
        assert_eq!(property.entity_type(), EntityType::Role);
        assert_eq!(property.name(), Some("Site Admin"));
    }

    #[test]
    fn role_abilities_split_by_role_type() {
        let json = r#"{"role":{"id":"50","name":"Manager","roleType":"global",
            "globalAbilities":{"accessAudits":true,"broadcastMessages":true},
            "siteAbilities":null}}"#;
        let AssetProperty::Role(role) = serde_json::from_str(json).unwrap() else {
            panic!("wrong variant");
        };
        assert!(role.is_global());
        let abilities = role.global_abilities.unwrap();
        assert_eq!(abilities.access_audits, Some(true));
        assert_eq!(abilities.broadcast_messages, Some(true));
        assert!(role.site_abilities.is_none());
    }

    #[test]
    fn tags_on_folder_contained_payloads_only() {
        let mut property: AssetProperty = serde_json::from_str(
            r#"{"page":{"id":"abc","name":"index","tags":[{"name":"news"}]}}"#,
        )
        .unwrap();
        assert_eq!(property.tags().unwrap().len(), 1);
        property.tags_mut().unwrap().clear();
        assert!(property.tags().unwrap().is_empty());

        let property: AssetProperty =
            serde_json::from_str(r#"{"user":{"username":"wing"}}"#).unwrap();
        assert!(property.tags().is_none());
    }

    #[test]
    fn group_member_list_splits() {
        let json = r#"{"group":{"groupName":"editors","users":"wing;chan"}}"#;
        let AssetProperty::Group(group) = serde_json::from_str(json).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(group.member_names(), ["wing", "chan"]);
        assert!(group.has_member("chan"));
        assert!(!group.has_member("nobody"));
    }
}

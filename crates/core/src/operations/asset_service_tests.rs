#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::assets::{Asset, AssetProperty};
    use crate::errors::{Error, OperationError, Result};
    use crate::identifier::{EntityType, Identifier};
    use crate::operations::{
        AssetOperations, AssetService, AuditParameters, CopyParameters, MessageMark,
        MoveParameters, SearchInformation,
    };
    use crate::properties::{AccessRightsInformation, Audit, AuditType};

    // --- In-memory transport fake ---

    #[derive(Default)]
    struct FakeState {
        assets: HashMap<String, AssetProperty>,
        audits: Vec<Audit>,
        subscribers: Vec<Identifier>,
        edits: Vec<String>,
        published: Vec<Identifier>,
        marked: Vec<(String, MessageMark)>,
        fail_edit_with: Option<String>,
        // Applied to the stored copy on every edit, to prove callers
        // re-read instead of trusting their local property.
        server_rename_on_edit: Option<String>,
    }

    #[derive(Default, Clone)]
    struct FakeOperations {
        state: Arc<Mutex<FakeState>>,
    }

    impl FakeOperations {
        fn insert(&self, property: AssetProperty) {
            let id = property.id().expect("fixture asset needs an id").to_string();
            self.state.lock().unwrap().assets.insert(id, property);
        }

        fn edit_count(&self) -> usize {
            self.state.lock().unwrap().edits.len()
        }
    }

    #[async_trait]
    impl AssetOperations for FakeOperations {
        async fn read(&self, identifier: &Identifier) -> Result<AssetProperty> {
            let state = self.state.lock().unwrap();
            let by_id = identifier
                .id
                .as_ref()
                .and_then(|id| state.assets.get(id).cloned());
            let found = by_id.or_else(|| {
                let path = identifier.path.as_ref()?;
                state
                    .assets
                    .values()
                    .find(|p| p.path() == Some(path.path.as_str()))
                    .cloned()
            });
            found.ok_or_else(|| {
                OperationError::AssetNotFound {
                    property_name: identifier.entity_type.property_name().to_string(),
                    address: identifier.address(),
                    message: "No asset with those parameters found.".to_string(),
                }
                .into()
            })
        }

        async fn edit(&self, property: &AssetProperty) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(message) = &state.fail_edit_with {
                return Err(OperationError::EditFailed(message.clone()).into());
            }
            let id = property.id().expect("edited asset needs an id").to_string();
            state.edits.push(id.clone());
            let mut stored = property.clone();
            if let Some(new_name) = state.server_rename_on_edit.clone() {
                if let AssetProperty::Page(page) = &mut stored {
                    page.folder_contained.name = Some(new_name);
                }
            }
            state.assets.insert(id, stored);
            Ok(())
        }

        async fn create(&self, property: &AssetProperty) -> Result<String> {
            let id = "c0ffee008b7ffe834c5fe91e00000001".to_string();
            let mut stored = property.clone();
            if let AssetProperty::Page(page) = &mut stored {
                page.folder_contained.id = Some(id.clone());
            }
            self.state.lock().unwrap().assets.insert(id.clone(), stored);
            Ok(id)
        }

        async fn delete(&self, identifier: &Identifier) -> Result<()> {
            let id = identifier.id.clone().expect("delete needs an id");
            self.state.lock().unwrap().assets.remove(&id);
            Ok(())
        }

        async fn copy(
            &self,
            identifier: &Identifier,
            parameters: &CopyParameters,
        ) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            let source_id = identifier.id.as_ref().expect("copy needs an id");
            let source = state
                .assets
                .get(source_id)
                .cloned()
                .expect("copy source must exist");

            let new_id = "ababab008b7ffe834c5fe91e00000002".to_string();
            let parent_id = parameters
                .destination_container_identifier
                .id
                .clone()
                .expect("parent addressed by id");

            // Clone the source under the new name and register it as a
            // child of the parent folder, the way the server would.
            let mut copied = source;
            let new_path;
            if let AssetProperty::Page(page) = &mut copied {
                page.folder_contained.id = Some(new_id.clone());
                page.folder_contained.name = Some(parameters.new_name.clone());
                new_path = format!("about/{}", parameters.new_name);
                page.folder_contained.path = Some(new_path.clone());
            } else {
                panic!("fake only copies pages");
            }
            state.assets.insert(new_id.clone(), copied);

            let child = Identifier {
                entity_type: identifier.entity_type,
                id: Some(new_id),
                path: Some(crate::identifier::AssetPath::new(new_path)),
                recycled: Some(false),
            };
            if let Some(AssetProperty::Folder(folder)) = state.assets.get_mut(&parent_id) {
                folder.children.push(child);
            }
            Ok(())
        }

        async fn move_asset(
            &self,
            _identifier: &Identifier,
            _parameters: &MoveParameters,
        ) -> Result<()> {
            Ok(())
        }

        async fn publish(
            &self,
            identifier: &Identifier,
            _destinations: &[Identifier],
        ) -> Result<()> {
            self.state.lock().unwrap().published.push(identifier.clone());
            Ok(())
        }

        async fn unpublish(
            &self,
            _identifier: &Identifier,
            _destinations: &[Identifier],
        ) -> Result<()> {
            Ok(())
        }

        async fn list_subscribers(&self, _identifier: &Identifier) -> Result<Vec<Identifier>> {
            Ok(self.state.lock().unwrap().subscribers.clone())
        }

        async fn read_audits(&self, parameters: &AuditParameters) -> Result<Vec<Audit>> {
            let state = self.state.lock().unwrap();
            // Record name-based addressing through the returned set: only
            // entries matching the filter type come back.
            let audits = state
                .audits
                .iter()
                .filter(|a| parameters.audit_type.is_none_or(|t| a.action == t))
                .cloned()
                .collect();
            Ok(audits)
        }

        async fn read_access_rights(
            &self,
            _identifier: &Identifier,
        ) -> Result<AccessRightsInformation> {
            unimplemented!()
        }

        async fn edit_access_rights(
            &self,
            _information: &AccessRightsInformation,
            _apply_to_children: bool,
        ) -> Result<()> {
            unimplemented!()
        }

        async fn search(&self, _information: &SearchInformation) -> Result<Vec<Identifier>> {
            unimplemented!()
        }

        async fn list_sites(&self) -> Result<Vec<Identifier>> {
            unimplemented!()
        }

        async fn check_out(&self, _identifier: &Identifier) -> Result<Option<Identifier>> {
            unimplemented!()
        }

        async fn check_in(&self, _identifier: &Identifier, _comments: Option<&str>) -> Result<()> {
            unimplemented!()
        }

        async fn mark_message(&self, identifier: &Identifier, mark: MessageMark) -> Result<()> {
            let id = identifier.id.clone().expect("message addressed by id");
            self.state.lock().unwrap().marked.push((id, mark));
            Ok(())
        }
    }

    // --- Fixtures ---

    const PAGE_ID: &str = "1f22332a8b7ffe834c5fe91e33ecd4c7";
    const FOLDER_ID: &str = "3890a3f88b7ffe83164c931457a2709c";

    fn page_property(id: &str, name: &str, path: &str) -> AssetProperty {
        serde_json::from_str(&format!(
            r#"{{"page":{{"id":"{id}","name":"{name}","path":"{path}",
                "siteId":"1f2172088b7ffe834c5fe91e9596d028","siteName":"www",
                "tags":[{{"name":"news"}}]}}}}"#
        ))
        .unwrap()
    }

    fn folder_property(id: &str, path: &str) -> AssetProperty {
        serde_json::from_str(&format!(
            r#"{{"folder":{{"id":"{id}","name":"about","path":"{path}",
                "siteName":"www","children":[]}}}}"#
        ))
        .unwrap()
    }

    fn service_with_page() -> (AssetService<FakeOperations>, FakeOperations) {
        let fake = FakeOperations::default();
        fake.insert(page_property(PAGE_ID, "index", "about/index"));
        (AssetService::new(Arc::new(fake.clone())), fake)
    }

    fn audit(action: AuditType, secs: i64) -> Audit {
        serde_json::from_str(&format!(
            r#"{{"user":"wing","action":"{}",
                "identifier":{{"id":"{PAGE_ID}","type":"page"}},
                "date":{}}}"#,
            action.as_str(),
            secs * 1000
        ))
        .unwrap()
    }

    // --- get / reload ---

    #[tokio::test]
    async fn get_by_path_reconciles_the_id() {
        let (service, _fake) = service_with_page();
        let asset = service
            .get_by(EntityType::Page, "about/index", Some("www"))
            .await
            .unwrap();
        // Addressed by path; id back-filled from the property.
        assert_eq!(asset.identifier().id.as_deref(), Some(PAGE_ID));
        assert_eq!(asset.name(), Some("index"));
    }

    #[tokio::test]
    async fn get_missing_asset_is_a_not_found_error() {
        let (service, _fake) = service_with_page();
        let err = service
            .get(Identifier::from_id(
                EntityType::Page,
                "00000000000000000000000000000000",
            ))
            .await
            .unwrap_err();
        match err {
            Error::Operation(OperationError::AssetNotFound { property_name, .. }) => {
                assert_eq!(property_name, "page");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // --- edit ---

    #[tokio::test]
    async fn edit_refetches_the_property() {
        let (service, fake) = service_with_page();
        // The server amends the asset during the edit; the local copy is
        // only correct if the service re-reads.
        fake.state.lock().unwrap().server_rename_on_edit = Some("index-amended".to_string());

        let mut asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        asset.add_tag("events").unwrap();
        service.edit(&mut asset).await.unwrap();

        assert_eq!(fake.edit_count(), 1);
        assert_eq!(asset.name(), Some("index-amended"));
        assert!(asset.has_tag("events"));
    }

    #[tokio::test]
    async fn failed_edit_surfaces_the_service_message() {
        let (service, fake) = service_with_page();
        fake.state.lock().unwrap().fail_edit_with =
            Some("Unable to acquire lock on asset".to_string());

        let mut asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let err = service.edit(&mut asset).await.unwrap_err();
        assert!(err.to_string().contains("Unable to acquire lock"));
        // The failed edit must not have counted.
        assert_eq!(fake.edit_count(), 0);
    }

    // --- copy ---

    #[tokio::test]
    async fn copy_locates_the_new_child_by_name() {
        let (service, fake) = service_with_page();
        fake.insert(folder_property(FOLDER_ID, "about"));

        let page = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let folder = service
            .get(Identifier::from_id(EntityType::Folder, FOLDER_ID))
            .await
            .unwrap();

        let copy = service.copy(&page, &folder, "index-copy").await.unwrap();
        assert_eq!(copy.name(), Some("index-copy"));
        assert_eq!(copy.path(), Some("about/index-copy"));
        assert_ne!(copy.id(), page.id());
    }

    #[tokio::test]
    async fn copy_rejects_an_empty_name() {
        let (service, fake) = service_with_page();
        fake.insert(folder_property(FOLDER_ID, "about"));

        let page = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let folder = service
            .get(Identifier::from_id(EntityType::Folder, FOLDER_ID))
            .await
            .unwrap();

        let err = service.copy(&page, &folder, "  ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    // --- create / delete ---

    #[tokio::test]
    async fn create_returns_the_retrieved_asset() {
        let (service, _fake) = service_with_page();
        let property = page_property(
            "0000000000000000000000000000aaaa",
            "new-page",
            "about/new-page",
        );
        let created = service.create(property).await.unwrap();
        assert_eq!(created.id(), Some("c0ffee008b7ffe834c5fe91e00000001"));
        assert_eq!(created.name(), Some("new-page"));
    }

    #[tokio::test]
    async fn delete_removes_the_asset() {
        let (service, _fake) = service_with_page();
        let asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        service.delete(asset).await.unwrap();
        assert!(service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .is_err());
    }

    // --- audits ---

    #[tokio::test]
    async fn audits_filter_by_window_and_sort_by_date() {
        let (service, fake) = service_with_page();
        fake.state.lock().unwrap().audits = vec![
            audit(AuditType::Edit, 300),
            audit(AuditType::Edit, 100),
            audit(AuditType::Edit, 200),
            audit(AuditType::Edit, 900),
        ];

        let asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let audits = service
            .audits(
                &asset,
                Some(AuditType::Edit),
                Some(Utc.timestamp_opt(100, 0).unwrap()),
                Some(Utc.timestamp_opt(300, 0).unwrap()),
            )
            .await
            .unwrap();

        let seconds: Vec<i64> = audits.iter().map(|a| a.date.timestamp()).collect();
        assert_eq!(seconds, [100, 200, 300]);
    }

    #[tokio::test]
    async fn audits_reject_an_inverted_window() {
        let (service, _fake) = service_with_page();
        let asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let err = service
            .audits(
                &asset,
                None,
                Some(Utc.timestamp_opt(300, 0).unwrap()),
                Some(Utc.timestamp_opt(100, 0).unwrap()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn audits_filter_by_type() {
        let (service, fake) = service_with_page();
        fake.state.lock().unwrap().audits =
            vec![audit(AuditType::Edit, 100), audit(AuditType::Publish, 200)];

        let asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let audits = service
            .audits(&asset, Some(AuditType::Publish), None, None)
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].action, AuditType::Publish);
    }

    // --- publish subscribers ---

    #[tokio::test]
    async fn publish_subscribers_publishes_each_one() {
        let (service, fake) = service_with_page();
        let subscriber_a = Identifier::from_id(EntityType::Page, "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let subscriber_b =
            Identifier::from_id(EntityType::IndexBlock, "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
        fake.state.lock().unwrap().subscribers =
            vec![subscriber_a.clone(), subscriber_b.clone()];

        let asset = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        service.publish_subscribers(&asset, None).await.unwrap();

        let published = fake.state.lock().unwrap().published.clone();
        assert_eq!(published, vec![subscriber_a, subscriber_b]);
    }

    // --- messages ---

    #[tokio::test]
    async fn mark_message_requires_a_message() {
        let (service, fake) = service_with_page();
        fake.insert(
            serde_json::from_str(
                r#"{"message":{"id":"6e8c72538b7ffe833b19adb8d79fa0bc","subject":"hello"}}"#,
            )
            .unwrap(),
        );

        let message = service
            .get(Identifier::from_id(
                EntityType::Message,
                "6e8c72538b7ffe833b19adb8d79fa0bc",
            ))
            .await
            .unwrap();
        service
            .mark_message(&message, MessageMark::Unread)
            .await
            .unwrap();
        assert_eq!(
            fake.state.lock().unwrap().marked,
            vec![(
                "6e8c72538b7ffe833b19adb8d79fa0bc".to_string(),
                MessageMark::Unread
            )]
        );

        let page = service
            .get(Identifier::from_id(EntityType::Page, PAGE_ID))
            .await
            .unwrap();
        let err = service
            .mark_message(&page, MessageMark::Read)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}

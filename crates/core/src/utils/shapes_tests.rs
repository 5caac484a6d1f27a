#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::utils::shapes::normalized_list;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, deserialize_with = "normalized_list")]
        tags: Vec<Named>,
    }

    #[test]
    fn plain_array() {
        let h: Holder =
            serde_json::from_str(r#"{"tags":[{"name":"news"},{"name":"events"}]}"#).unwrap();
        assert_eq!(h.tags.len(), 2);
        assert_eq!(h.tags[0].name, "news");
    }

    #[test]
    fn wrapped_single_object() {
        let h: Holder = serde_json::from_str(r#"{"tags":{"tag":{"name":"news"}}}"#).unwrap();
        assert_eq!(h.tags, vec![Named { name: "news".into() }]);
    }

    #[test]
    fn wrapped_array() {
        let h: Holder =
            serde_json::from_str(r#"{"tags":{"tag":[{"name":"a"},{"name":"b"}]}}"#).unwrap();
        assert_eq!(h.tags.len(), 2);
    }

    #[test]
    fn wrapped_empty_object() {
        let h: Holder = serde_json::from_str(r#"{"tags":{}}"#).unwrap();
        assert!(h.tags.is_empty());
    }

    #[test]
    fn null_and_absent() {
        let h: Holder = serde_json::from_str(r#"{"tags":null}"#).unwrap();
        assert!(h.tags.is_empty());
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.tags.is_empty());
    }

    #[test]
    fn bare_single_object() {
        // Seen from renderings that collapse one-element lists without the
        // singular wrapper key.
        let h: Holder = serde_json::from_str(r#"{"tags":{"name":"news"}}"#).unwrap();
        assert_eq!(h.tags, vec![Named { name: "news".into() }]);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct AllOptional {
        value: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct OptHolder {
        #[serde(default, deserialize_with = "normalized_list")]
        values: Vec<AllOptional>,
    }

    #[test]
    fn wrapper_not_mistaken_for_all_optional_payload() {
        let h: OptHolder =
            serde_json::from_str(r#"{"values":{"fieldValue":{"value":"x"}}}"#).unwrap();
        assert_eq!(
            h.values,
            vec![AllOptional {
                value: Some("x".into())
            }]
        );
    }
}

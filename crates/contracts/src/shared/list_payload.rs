use serde::Deserialize;

/// Collection endpoints answer either with a bare array or with a
/// `{ "data": [...] }` envelope depending on whether filtering is enabled
/// server-side. The responses endpoint names its envelope key `responses`.
/// Pages deserialize into this and call [`ListPayload::into_vec`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new", alias = "responses")]
        data: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Plain(items) => items,
            ListPayload::Wrapped { data } => data,
        }
    }
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        ListPayload::Plain(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn accepts_bare_array() {
        let payload: ListPayload<Item> = serde_json::from_str(r#"[{"name":"a"},{"name":"b"}]"#).unwrap();
        assert_eq!(payload.into_vec().len(), 2);
    }

    #[test]
    fn accepts_data_envelope() {
        let payload: ListPayload<Item> =
            serde_json::from_str(r#"{"data":[{"name":"a"}],"total":1}"#).unwrap();
        assert_eq!(payload.into_vec(), vec![Item { name: "a".into() }]);
    }

    #[test]
    fn accepts_responses_envelope() {
        let payload: ListPayload<Item> =
            serde_json::from_str(r#"{"responses":[{"name":"q"}]}"#).unwrap();
        assert_eq!(payload.into_vec().len(), 1);
    }

    #[test]
    fn envelope_without_data_is_empty() {
        let payload: ListPayload<Item> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(payload.into_vec().is_empty());
    }
}

use serde::Serialize;

/// Top-level response body
#[derive(Debug, Serialize)]
pub struct Document<D> {
    pub data: D,
}

impl<D> Document<D> {
    pub fn new(data: D) -> Self {
        Self { data }
    }
}

/// `{"id": "...", "type": "...", "attributes": {...}}`
#[derive(Debug, Serialize)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: A,
}

/// A resource reference without attributes
#[derive(Debug, Serialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResourceIdentifier {
    pub fn new(id: impl ToString, kind: &'static str) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

/// Serializes as `{}`
#[derive(Debug, Serialize)]
pub struct Empty {}

/// A single search result: the resource, or `{}` when nothing matched
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MaybeResource<A> {
    Found(Resource<A>),
    Empty(Empty),
}

impl<A> From<Option<Resource<A>>> for MaybeResource<A> {
    fn from(resource: Option<Resource<A>>) -> Self {
        match resource {
            Some(resource) => MaybeResource::Found(resource),
            None => MaybeResource::Empty(Empty {}),
        }
    }
}

/// Conversion from a domain value into its API resource
pub trait ToResource {
    type Attributes: Serialize;

    const KIND: &'static str;

    fn resource_id(&self) -> String;

    fn attributes(&self) -> Self::Attributes;

    fn to_resource(&self) -> Resource<Self::Attributes> {
        Resource {
            id: self.resource_id(),
            kind: Self::KIND,
            attributes: self.attributes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Named {
        name: &'static str,
    }

    #[test]
    fn resource_shape() {
        let doc = Document::new(Resource {
            id: "7".to_string(),
            kind: "merchant",
            attributes: Named { name: "Shop" },
        });

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"data": {"id": "7", "type": "merchant", "attributes": {"name": "Shop"}}})
        );
    }

    #[test]
    fn empty_search_result_is_empty_object() {
        let doc = Document::new(MaybeResource::<Named>::from(None));

        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"data": {}}));
    }

    #[test]
    fn empty_collection_is_empty_array() {
        let doc = Document::new(Vec::<Resource<Named>>::new());

        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"data": []}));
    }

    #[test]
    fn identifier_shape() {
        let id = ResourceIdentifier::new(42, "invoice");

        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            json!({"id": "42", "type": "invoice"})
        );
    }
}

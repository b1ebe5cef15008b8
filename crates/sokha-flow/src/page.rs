use serde::{Deserialize, Serialize};

/// Server payload for the current section. Read-only once fetched; a
/// `uuid` the URL lacked triggers a canonicalizing redirect (the server
/// mints the session identifier, the URL must converge to include it).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub section_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Server-side question metadata; passed through to the renderer as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<serde_json::Value>,
    /// Free-form page metadata, likewise passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<serde_json::Value>,
}

impl PageData {
    pub fn section(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            uuid: None,
            site: None,
            questions: None,
            page: None,
        }
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        let page: PageData =
            serde_json::from_str(r#"{"sectionId": "consent", "uuid": "abc", "site": "PH-12"}"#)
                .unwrap();
        assert_eq!(page.section_id, "consent");
        assert_eq!(page.uuid.as_deref(), Some("abc"));
        assert_eq!(page.site.as_deref(), Some("PH-12"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let page: PageData = serde_json::from_str(r#"{"sectionId": "section1a"}"#).unwrap();
        assert!(page.uuid.is_none());
        assert!(page.site.is_none());
        assert!(page.questions.is_none());
    }
}

use serde::Deserialize;

/// A tag entry from the solved.ac problem response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagEntry {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default, rename = "displayNames")]
    pub display_names: Vec<DisplayName>,
}

/// A localized tag name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayName {
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Picks the label shown for a tag
///
/// Korean display name first, then English, then the raw key. A tag with none
/// of these still yields an (empty) entry so tag positions are preserved.
pub fn tag_label(tag: &TagEntry) -> String {
    display_name(tag, "ko")
        .or_else(|| display_name(tag, "en"))
        .or_else(|| tag.key.as_deref().filter(|k| !k.is_empty()))
        .unwrap_or_default()
        .to_string()
}

fn display_name<'a>(tag: &'a TagEntry, language: &str) -> Option<&'a str> {
    tag.display_names
        .iter()
        .filter(|d| d.language.as_deref() == Some(language))
        .filter_map(|d| d.name.as_deref())
        .find(|name| !name.is_empty())
}

/// A parsed locale file: nested mappings with text leaves.
///
/// Entries keep the order they had in the file, which is the order keys are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDocument {
    Text(String),
    Map(Vec<(String, LocaleDocument)>),
}

impl LocaleDocument {
    pub fn empty() -> Self {
        LocaleDocument::Map(Vec::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        LocaleDocument::Text(value.into())
    }

    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, LocaleDocument)>,
    {
        LocaleDocument::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

//! DOT attribute lists and identifier transliteration

/// Incrementally builds a DOT attribute list like `[label="app",color="red"]`.
///
/// Attributes with empty values are skipped, and a builder that ends up empty
/// renders as an empty string rather than a dangling `[]`.
#[derive(Debug, Default)]
pub struct DotAttributeBuilder {
    attributes: Vec<(String, String)>,
}

impl DotAttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.attributes.push((key.to_string(), escape_value(value)));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn build(&self) -> String {
        if self.attributes.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect();
        format!("[{}]", rendered.join(","))
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Transliterate a natural-key id into a token matching a restricted
/// identifier grammar: every non-word character becomes `_`, trailing
/// underscores are stripped.
pub fn transliterate_id(id: &str) -> String {
    let mut escaped: String = id
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    while escaped.ends_with('_') {
        escaped.pop();
    }
    escaped
}

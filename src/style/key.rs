use crate::dependency::Artifact;
use crate::error::ExportError;

/// Number of components in a fully written-out key
const KEY_PARTS: usize = 5;

const WILDCARD: char = '*';

/// A 5-component match pattern against artifact coordinates
///
/// The components are `groupId,artifactId,scope,type,version`. An empty
/// component is unconstrained. The groupId, artifactId and version components
/// may end with `*` for a prefix match; scope and type match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleKey {
    group_id: String,
    artifact_id: String,
    scope: String,
    packaging_type: String,
    version: String,
}

impl StyleKey {
    /// Parse a comma-separated key. Trailing components may be omitted;
    /// more than five components is a configuration error.
    pub fn parse(key: &str) -> Result<Self, ExportError> {
        let parts: Vec<&str> = key.split(',').map(str::trim).collect();
        if parts.len() > KEY_PARTS {
            return Err(ExportError::MalformedStyleKey {
                key: key.to_string(),
                parts: parts.len(),
            });
        }

        let part = |index: usize| parts.get(index).copied().unwrap_or("").to_string();
        Ok(Self {
            group_id: part(0),
            artifact_id: part(1),
            scope: part(2),
            packaging_type: part(3),
            version: part(4),
        })
    }

    pub fn matches(
        &self,
        group_id: &str,
        artifact_id: &str,
        scope: &str,
        packaging_type: &str,
        version: &str,
    ) -> bool {
        wildcard_match(&self.group_id, group_id)
            && wildcard_match(&self.artifact_id, artifact_id)
            && exact_match(&self.scope, scope)
            && exact_match(&self.packaging_type, packaging_type)
            && wildcard_match(&self.version, version)
    }

    /// Match against an artifact's coordinates, using its primary scope and
    /// packaging type.
    pub fn matches_artifact(&self, artifact: &Artifact) -> bool {
        self.matches(
            &artifact.group_id,
            &artifact.artifact_id,
            artifact.primary_scope(),
            artifact.primary_type(),
            &artifact.version,
        )
    }

    /// Specificity rank: a key with more non-empty components outranks one
    /// with fewer; ties are broken by component order, groupId heaviest.
    pub fn specificity(&self) -> u32 {
        let components = [
            &self.group_id,
            &self.artifact_id,
            &self.scope,
            &self.packaging_type,
            &self.version,
        ];

        let mut count = 0u32;
        let mut bits = 0u32;
        for (index, component) in components.iter().enumerate() {
            if !component.is_empty() {
                count += 1;
                bits |= 1 << (KEY_PARTS - 1 - index);
            }
        }
        (count << KEY_PARTS as u32) | bits
    }
}

fn wildcard_match(pattern: &str, value: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => value.starts_with(prefix),
        None => pattern == value,
    }
}

fn exact_match(pattern: &str, value: &str) -> bool {
    pattern.is_empty() || pattern == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_key() {
        let key = StyleKey::parse("com.example,app,test,jar,1.0.0").unwrap();
        assert!(key.matches("com.example", "app", "test", "jar", "1.0.0"));
        assert!(!key.matches("com.example", "app", "compile", "jar", "1.0.0"));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        let key = StyleKey::parse("com.example").unwrap();
        assert!(key.matches("com.example", "anything", "test", "war", "9.9"));
    }

    #[test]
    fn test_parse_rejects_too_many_components() {
        let err = StyleKey::parse("a,b,c,d,e,f").unwrap_err();
        assert!(err.to_string().contains("Malformed style key"));
    }

    #[test]
    fn test_wildcard_prefix_match() {
        let key = StyleKey::parse("com.example*,,,,1.0*").unwrap();
        assert!(key.matches("com.example.sub", "app", "compile", "jar", "1.0.3"));
        assert!(!key.matches("org.example", "app", "compile", "jar", "1.0.3"));
        assert!(!key.matches("com.example.sub", "app", "compile", "jar", "2.0"));
    }

    #[test]
    fn test_scope_has_no_wildcard() {
        let key = StyleKey::parse(",,tes*,,").unwrap();
        assert!(!key.matches("g", "a", "test", "jar", "1"));
        assert!(key.matches("g", "a", "tes*", "jar", "1"));
    }

    #[test]
    fn test_specificity_counts_components() {
        let narrow = StyleKey::parse("com.example,app,,,").unwrap();
        let wide = StyleKey::parse("com.example,,,,").unwrap();
        assert!(narrow.specificity() > wide.specificity());
    }

    #[test]
    fn test_specificity_tie_broken_by_component_order() {
        let group = StyleKey::parse("com.example,,,,").unwrap();
        let version = StyleKey::parse(",,,,1.0.0").unwrap();
        assert!(group.specificity() > version.specificity());

        let artifact = StyleKey::parse(",app,,,").unwrap();
        let scope = StyleKey::parse(",,test,,").unwrap();
        assert!(artifact.specificity() > scope.specificity());
    }
}

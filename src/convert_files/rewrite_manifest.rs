use super::RenameEntry;
use crate::error::Result;
use regex::{NoExpand, Regex};

/// Replaces each quoted old logical path in `manifest` with its new one.
///
/// Only whole string literals match: `"guide"` is rewritten, `"guide/intro"`
/// is not. Entries are applied in order.
pub fn rewrite_manifest(manifest: &str, renames: &[RenameEntry]) -> Result<String> {
    let mut manifest = manifest.to_owned();
    for entry in renames {
        let old = Regex::new(&format!("\"{}\"", regex::escape(&entry.old)))?;
        let new = format!("\"{}\"", entry.new);
        manifest = old.replace_all(&manifest, NoExpand(&new)).into_owned();
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(old: &str, new: &str) -> RenameEntry {
        RenameEntry {
            old: old.to_owned(),
            new: new.to_owned(),
        }
    }

    #[test]
    fn rewrites_every_quoted_occurrence() {
        let manifest = r#"{
  "navigation": [
    { "group": "Guide", "pages": ["guide/intro", "guide/setup"] },
    { "group": "Again", "pages": ["guide/intro"] }
  ]
}"#;
        let rewritten = rewrite_manifest(manifest, &[entry("guide/intro", "guide/start")]).unwrap();
        assert_eq!(rewritten, manifest.replace("\"guide/intro\"", "\"guide/start\""));
    }

    #[test]
    fn leaves_longer_paths_alone() {
        let manifest = r#"["guide", "guide/intro", "old-guide", "guide.md"]"#;
        let rewritten = rewrite_manifest(manifest, &[entry("guide", "handbook")]).unwrap();
        assert_eq!(rewritten, r#"["handbook", "guide/intro", "old-guide", "guide.md"]"#);
    }

    #[test]
    fn paths_are_matched_literally() {
        let manifest = r#"["v1.2/api", "v1x2/api"]"#;
        let rewritten = rewrite_manifest(manifest, &[entry("v1.2/api", "v1.2/reference")]).unwrap();
        assert_eq!(rewritten, r#"["v1.2/reference", "v1x2/api"]"#);
    }

    #[test]
    fn replacement_is_not_expanded() {
        let rewritten = rewrite_manifest(r#"["a"]"#, &[entry("a", "$0b")]).unwrap();
        assert_eq!(rewritten, r#"["$0b"]"#);
    }

    #[test]
    fn unreferenced_renames_change_nothing() {
        let manifest = "{\n  \"name\": \"docs\",\n  \"pages\": [\"index\"]\n}\n";
        let rewritten = rewrite_manifest(manifest, &[entry("other", "elsewhere")]).unwrap();
        assert_eq!(rewritten, manifest);
    }
}

//! Reading catalogs from YAML and JSON files
//!
//! Copyright (c) 2025 Valkit Team
//! Licensed under the Apache-2.0 license

use crate::catalog::MessageCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::format::Format;
use std::path::{Path, PathBuf};
use valkit_core::Validator;

/// Catalog loader
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    /// Base directory for relative paths
    base_dir: Option<PathBuf>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative catalog paths against `base_dir`
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Load one catalog file, detecting the format from its extension
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> CatalogResult<MessageCatalog> {
        let path = self.resolve_path(path.as_ref());
        let format = Format::from_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;

        log::debug!("loading {:?} catalog from {}", format, path.display());
        self.parse_str(&content, format, &path)
    }

    /// Load several catalogs and merge them in order; later files win
    pub fn load_all<I, P>(&self, paths: I) -> CatalogResult<MessageCatalog>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut merged = MessageCatalog::new();
        for path in paths {
            merged.merge(self.load_file(path)?);
        }
        Ok(merged)
    }

    /// Load catalogs and apply them to `validator` in order
    pub fn apply_files<I, P>(&self, paths: I, validator: &mut Validator) -> CatalogResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.load_all(paths)?.apply(validator);
        Ok(())
    }

    /// Parse catalog content with an explicit format.
    ///
    /// `path` is only used in errors and log output. Blank content or a YAML
    /// document holding only comments yields an empty catalog.
    pub fn parse_str(
        &self,
        content: &str,
        format: Format,
        path: &Path,
    ) -> CatalogResult<MessageCatalog> {
        if content.trim().is_empty() {
            log::warn!("catalog {} is empty", path.display());
            return Ok(MessageCatalog::new());
        }

        match format {
            Format::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| CatalogError::yaml(path, e))?;
                if value.is_null() {
                    log::warn!("catalog {} is empty", path.display());
                    return Ok(MessageCatalog::new());
                }
                serde_yaml::from_value(value).map_err(|e| CatalogError::yaml(path, e))
            }
            Format::Json => serde_json::from_str(content).map_err(|e| CatalogError::json(path, e)),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
# English messages
default_message: "Invalid value"
constraints:
  required: "{field} is required"
  min: "{field} must be at least {param}"
paths:
  items[0].name:
    constraints:
      min: "Item names need {param}+ characters"
params:
  appName: MyApp
  maxItems: 10
"#;

    #[test]
    fn test_parse_yaml() {
        let loader = CatalogLoader::new();
        let catalog = loader.parse_str(YAML, Format::Yaml, Path::new("en.yaml")).unwrap();

        assert_eq!(catalog.default_message.as_deref(), Some("Invalid value"));
        assert_eq!(catalog.constraints.len(), 2);
        assert_eq!(
            catalog.paths["items[].name"].constraints["min"],
            "Item names need {param}+ characters"
        );
        assert_eq!(catalog.params["maxItems"], serde_json::json!(10));
    }

    #[test]
    fn test_parse_json() {
        let loader = CatalogLoader::new();
        let catalog = loader
            .parse_str(
                r#"{"constraints": {"email": "{value} is not an email"}}"#,
                Format::Json,
                Path::new("en.json"),
            )
            .unwrap();
        assert_eq!(catalog.constraints["email"], "{value} is not an email");
    }

    #[test]
    fn test_empty_content() {
        let loader = CatalogLoader::new();
        let cases = [
            ("", Format::Json),
            ("  \n", Format::Yaml),
            ("# nothing yet\n", Format::Yaml),
        ];
        for (content, format) in cases {
            let catalog = loader.parse_str(content, format, Path::new("empty")).unwrap();
            assert!(catalog.is_empty());
        }
    }

    #[test]
    fn test_parse_errors_carry_path() {
        let loader = CatalogLoader::new();

        let err = loader
            .parse_str("constraints: [unclosed", Format::Yaml, Path::new("broken.yaml"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Yaml { .. }));
        assert_eq!(err.path(), Path::new("broken.yaml"));

        let err = loader
            .parse_str("{\"constraints\": 3}", Format::Json, Path::new("broken.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));

        let err = loader
            .parse_str("constraints: 3", Format::Yaml, Path::new("typed.yaml"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Yaml { .. }));
    }

    #[test]
    fn test_resolve_path() {
        let loader = CatalogLoader::with_base_dir("/etc/app/messages");
        assert_eq!(
            loader.resolve_path(Path::new("en.yaml")),
            PathBuf::from("/etc/app/messages/en.yaml")
        );
        assert_eq!(
            loader.resolve_path(Path::new("/tmp/en.yaml")),
            PathBuf::from("/tmp/en.yaml")
        );
        assert_eq!(
            CatalogLoader::new().resolve_path(Path::new("en.yaml")),
            PathBuf::from("en.yaml")
        );
    }
}

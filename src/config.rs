//! Configuration for a placeholder-replacement run.
//!
//! All run behaviour is controlled through [`UpdateConfig`], built via its
//! [`UpdateConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share one config across a whole batch and to see at a glance
//! which run produced which output.

use crate::error::FigpatchError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Configuration for a replacement run.
///
/// Built via [`UpdateConfig::builder()`] or [`UpdateConfig::default()`].
///
/// # Example
/// ```rust
/// use figpatch::UpdateConfig;
///
/// let config = UpdateConfig::builder()
///     .dry_run(true)
///     .alt_text_limit(100)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct UpdateConfig {
    /// Compute and report replacements without writing any file. Default: false.
    pub dry_run: bool,

    /// Maximum alt-text length in characters. Default: 100.
    ///
    /// The full prompt description can run to several sentences; alt text
    /// that long bloats the embed line and the caption without adding
    /// information. Truncation happens before newline/quote sanitising, so
    /// the limit counts characters of the raw trimmed description.
    pub alt_text_limit: usize,

    /// File names (exact match) excluded from processing. Default: `["README.md"]`.
    ///
    /// The ebook's README describes the project itself and never carries
    /// prompt markers that should become figures.
    pub skip: Vec<String>,

    /// Progress callback fired per processed file. Default: None.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            alt_text_limit: 100,
            skip: vec!["README.md".to_string()],
            progress_callback: None,
        }
    }
}

impl fmt::Debug for UpdateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateConfig")
            .field("dry_run", &self.dry_run)
            .field("alt_text_limit", &self.alt_text_limit)
            .field("skip", &self.skip)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn UpdateProgressCallback>"),
            )
            .finish()
    }
}

impl UpdateConfig {
    /// Create a new builder for `UpdateConfig`.
    pub fn builder() -> UpdateConfigBuilder {
        UpdateConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`UpdateConfig`].
#[derive(Debug)]
pub struct UpdateConfigBuilder {
    config: UpdateConfig,
}

impl UpdateConfigBuilder {
    pub fn dry_run(mut self, v: bool) -> Self {
        self.config.dry_run = v;
        self
    }

    pub fn alt_text_limit(mut self, n: usize) -> Self {
        self.config.alt_text_limit = n;
        self
    }

    pub fn skip(mut self, names: Vec<String>) -> Self {
        self.config.skip = names;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<UpdateConfig, FigpatchError> {
        if self.config.alt_text_limit == 0 {
            return Err(FigpatchError::InvalidConfig(
                "alt_text_limit must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = UpdateConfig::default();
        assert!(!c.dry_run);
        assert_eq!(c.alt_text_limit, 100);
        assert_eq!(c.skip, vec!["README.md".to_string()]);
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let c = UpdateConfig::builder()
            .dry_run(true)
            .alt_text_limit(40)
            .skip(vec!["README.md".into(), "OUTLINE.md".into()])
            .build()
            .expect("valid config");
        assert!(c.dry_run);
        assert_eq!(c.alt_text_limit, 40);
        assert_eq!(c.skip.len(), 2);
    }

    #[test]
    fn zero_alt_text_limit_is_rejected() {
        let err = UpdateConfig::builder().alt_text_limit(0).build();
        assert!(err.is_err());
    }

    #[test]
    fn debug_elides_callback() {
        use crate::progress::NoopProgressCallback;
        use std::sync::Arc;

        let c = UpdateConfig::builder()
            .progress_callback(Arc::new(NoopProgressCallback))
            .build()
            .unwrap();
        let dbg = format!("{:?}", c);
        assert!(dbg.contains("UpdateConfig"));
        assert!(!dbg.contains("Noop"), "callback type must not leak: {dbg}");
    }
}

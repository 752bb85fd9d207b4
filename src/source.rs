// 📦 Beneficiary Sources - where the raw JSON comes from
//
// The normalizer only sees text. A BeneficiarySource supplies that text
// (bundled file, in-memory fixture, a body some host already fetched) and
// BeneficiaryRepository glues a source to the normalizer.

use crate::entities::Beneficiary;
use crate::normalizer::normalize;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled data file read when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "data/Beneficiaries.json";

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// BeneficiarySource - supplies the raw JSON array text
pub trait BeneficiarySource: Send + Sync {
    /// Return the full JSON document
    fn fetch_json(&self) -> Result<String>;

    /// Short human-readable label for error messages
    fn describe(&self) -> String;
}

/// Reads the JSON document from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl BeneficiarySource for FileSource {
    fn fetch_json(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read beneficiary file: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read beneficiary data");
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a JSON document already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        InlineSource { text: text.into() }
    }
}

impl BeneficiarySource for InlineSource {
    fn fetch_json(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "inline document".to_string()
    }
}

// ============================================================================
// REPOSITORY
// ============================================================================

/// Loads and normalizes beneficiaries from a source
///
/// Holds no cache: every call re-reads the source.
pub struct BeneficiaryRepository<S: BeneficiarySource> {
    source: S,
}

impl<S: BeneficiarySource> BeneficiaryRepository<S> {
    pub fn new(source: S) -> Self {
        BeneficiaryRepository { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_beneficiaries(&self) -> Result<Vec<Beneficiary>> {
        let text = self.source.fetch_json()?;
        let beneficiaries = normalize(&text).with_context(|| {
            format!("Failed to normalize beneficiaries from {}", self.source.describe())
        })?;

        tracing::info!(
            source = %self.source.describe(),
            count = beneficiaries.len(),
            "loaded beneficiaries"
        );
        Ok(beneficiaries)
    }
}

// ============================================================================
// TESTS
// ============================================================================

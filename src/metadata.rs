//! Bundle metadata and its resolution
//!
//! Each field comes from the first non-empty source of: command-line flag
//! (or its environment variable), `bundleme.yaml`, interactive prompt, and
//! finally the literal [`UNKNOWN`].

use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::BundleConfig;
use crate::error::Result;

/// Placeholder for metadata nobody supplied
pub const UNKNOWN: &str = "UNKNOWN";

/// Range bundle identifiers are drawn from
pub const BUNDLE_ID_RANGE: RangeInclusive<u32> = 1_000_000..=9_999_999;

/// Immutable description of one bundling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleMetadata {
    pub package_name: String,
    pub description: String,
    pub license_ref: String,
    pub author: String,
    pub root_path: String,
    pub bundle_id: u32,
}

/// Draw a bundle identifier from the process random source
pub fn generate_bundle_id() -> u32 {
    rand::rng().random_range(BUNDLE_ID_RANGE)
}

/// The four user-facing metadata fields, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PackageName,
    Description,
    License,
    Author,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::PackageName,
        Field::Description,
        Field::License,
        Field::Author,
    ];

    /// Prompt label
    pub fn label(self) -> &'static str {
        match self {
            Field::PackageName => "Package Name",
            Field::Description => "Description",
            Field::License => "License File",
            Field::Author => "Author",
        }
    }
}

/// Partially known metadata values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataValues {
    pub package_name: Option<String>,
    pub description: Option<String>,
    pub license_ref: Option<String>,
    pub author: Option<String>,
}

impl MetadataValues {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::PackageName => self.package_name.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::License => self.license_ref.as_deref(),
            Field::Author => self.author.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::PackageName => &mut self.package_name,
            Field::Description => &mut self.description,
            Field::License => &mut self.license_ref,
            Field::Author => &mut self.author,
        }
    }

    /// Fill fields that are still missing from `other`
    #[must_use]
    pub fn or(mut self, mut other: MetadataValues) -> Self {
        for field in Field::ALL {
            let slot = self.slot(field);
            if slot.is_none() {
                *slot = other.slot(field).take();
            }
        }
        self
    }

    /// Ask `ask` for every field that is still missing
    pub fn fill_with<F>(mut self, mut ask: F) -> Result<Self>
    where
        F: FnMut(Field) -> Result<Option<String>>,
    {
        for field in Field::ALL {
            if self.get(field).is_none() {
                *self.slot(field) = ask(field)?.and_then(normalize);
            }
        }
        Ok(self)
    }

    /// Finish resolution: anything still missing becomes [`UNKNOWN`]
    pub fn into_metadata(self, root_path: impl Into<String>, bundle_id: u32) -> BundleMetadata {
        let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());
        BundleMetadata {
            package_name: or_unknown(self.package_name),
            description: or_unknown(self.description),
            license_ref: or_unknown(self.license_ref),
            author: or_unknown(self.author),
            root_path: root_path.into(),
            bundle_id,
        }
    }
}

impl From<BundleConfig> for MetadataValues {
    fn from(config: BundleConfig) -> Self {
        MetadataValues {
            package_name: config.name.and_then(normalize),
            description: config.description.and_then(normalize),
            license_ref: config.license.and_then(normalize),
            author: config.author.and_then(normalize),
        }
    }
}

/// Strip trailing line endings; an empty value counts as missing
pub fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

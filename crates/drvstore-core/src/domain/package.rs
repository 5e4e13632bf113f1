//! Driver package domain types.
//!
//! A [`DriverPackage`] describes one package staged in the operating
//! system's driver store, as reported by the enumeration tool. Records are
//! built once per parse, immutable afterwards, and passed by value between
//! the coordinator and its callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DriverVersion;

/// One entry in the driver store: a single staged driver package.
///
/// `published_name`, `driver_date`, and `version` are always present;
/// a source record missing any of them is dropped by the parser rather
/// than emitted partially populated. `provider` and `class_name` may be
/// empty, and `signer_name` is `None` for unsigned packages or records
/// that end before the signer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPackage {
    /// Store-assigned package identifier (e.g. `oem4.inf`). Never empty.
    pub published_name: String,
    /// Vendor/publisher string.
    pub provider: String,
    /// Device class label as printed by the tool (locale text).
    pub class_name: String,
    /// Driver date from the combined date-and-version field.
    pub driver_date: NaiveDate,
    /// Four-part driver version.
    pub version: DriverVersion,
    /// Signer of the package, when signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,
}

impl DriverPackage {
    /// Create a package record with the mandatory fields.
    ///
    /// `provider` and `class_name` may be empty strings; the signer starts
    /// out absent and can be attached with [`with_signer`](Self::with_signer).
    pub fn new(
        published_name: impl Into<String>,
        provider: impl Into<String>,
        class_name: impl Into<String>,
        driver_date: NaiveDate,
        version: DriverVersion,
    ) -> Self {
        Self {
            published_name: published_name.into(),
            provider: provider.into(),
            class_name: class_name.into(),
            driver_date,
            version,
            signer_name: None,
        }
    }

    /// Attach a signer name.
    #[must_use]
    pub fn with_signer(mut self, signer: impl Into<String>) -> Self {
        self.signer_name = Some(signer.into());
        self
    }
}

/// Identify packages superseded by a newer package for the same driver.
///
/// Packages are grouped by (provider, class); within each group the entry
/// with the highest (date, version) stays and the rest are returned as
/// cleanup candidates, sorted by published name for stable presentation.
/// Packages with an empty provider are never flagged: the enumeration
/// output carries no other evidence that two anonymous packages belong to
/// the same driver.
pub fn superseded_packages(packages: &[DriverPackage]) -> Vec<&DriverPackage> {
    let mut groups: HashMap<(&str, &str), Vec<&DriverPackage>> = HashMap::new();
    for package in packages {
        if package.provider.is_empty() {
            continue;
        }
        groups
            .entry((package.provider.as_str(), package.class_name.as_str()))
            .or_default()
            .push(package);
    }

    let mut superseded = Vec::new();
    for (_, mut group) in groups {
        if group.len() < 2 {
            continue;
        }
        group.sort_by_key(|package| (package.driver_date, package.version));
        group.pop(); // the newest stays installed
        superseded.extend(group);
    }

    superseded.sort_by(|a, b| a.published_name.cmp(&b.published_name));
    superseded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, provider: &str, class: &str, date: (i32, u32, u32), version: &str) -> DriverPackage {
        DriverPackage::new(
            name,
            provider,
            class,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            version.parse().unwrap(),
        )
    }

    #[test]
    fn test_superseded_keeps_newest_per_group() {
        let packages = vec![
            package("oem1.inf", "Intel", "Display adapters", (2016, 10, 3), "21.20.16.4550"),
            package("oem7.inf", "Intel", "Display adapters", (2018, 2, 14), "23.20.100.6194"),
            package("oem3.inf", "Intel", "Display adapters", (2017, 5, 1), "22.20.16.4836"),
            package("oem4.inf", "Realtek", "Sound controllers", (2017, 5, 26), "6.0.1.8186"),
        ];

        let superseded = superseded_packages(&packages);
        let names: Vec<&str> = superseded
            .iter()
            .map(|package| package.published_name.as_str())
            .collect();
        assert_eq!(names, vec!["oem1.inf", "oem3.inf"]);
    }

    #[test]
    fn test_superseded_breaks_date_ties_by_version() {
        let packages = vec![
            package("oem2.inf", "Contoso", "Printers", (2020, 1, 1), "1.0.0.0"),
            package("oem5.inf", "Contoso", "Printers", (2020, 1, 1), "1.0.0.1"),
        ];

        let superseded = superseded_packages(&packages);
        assert_eq!(superseded.len(), 1);
        assert_eq!(superseded[0].published_name, "oem2.inf");
    }

    #[test]
    fn test_superseded_ignores_anonymous_providers() {
        let packages = vec![
            package("oem1.inf", "", "Display adapters", (2016, 1, 1), "1.0.0.0"),
            package("oem2.inf", "", "Display adapters", (2018, 1, 1), "2.0.0.0"),
        ];
        assert!(superseded_packages(&packages).is_empty());
    }

    #[test]
    fn test_superseded_ignores_sole_members() {
        let packages = vec![
            package("oem1.inf", "Intel", "Display adapters", (2016, 1, 1), "1.0.0.0"),
            package("oem2.inf", "Intel", "Network adapters", (2017, 1, 1), "1.0.0.0"),
        ];
        assert!(superseded_packages(&packages).is_empty());
    }
}

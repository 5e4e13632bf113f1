//! Driver list parser implementation.
//!
//! The enumeration tool prints, per staged package, a fixed sequence of
//! `label : value` lines (published name, provider, class, date and
//! version, signer) separated by blank lines. Labels are localized, so
//! nothing here matches on label text: fields are assigned purely by
//! position within the record. A label line with an empty value carries its
//! value on the following line; any other line without a colon is banner or
//! stray text and is skipped.
//!
//! Parsing is total: a record that cannot be completed is dropped, never
//! surfaced as an error. The upstream text format has no stability contract
//! across locales or tool builds, so failures degrade per record.

use chrono::NaiveDate;
use tracing::debug;

use drvstore_core::domain::{DriverPackage, DriverVersion};
use drvstore_core::ports::DriverListParserPort;

/// Number of field slots per record: name, provider, class, date+version,
/// signer, in the order the tool prints them.
const FIELD_COUNT: usize = 5;

/// Date orderings produced by the tool across console locales. Anything
/// else is a parse failure for that record, not a guess.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y/%m/%d"];

/// Parser for the native tool's enumeration output.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumOutputParser;

impl EnumOutputParser {
    /// Create a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DriverListParserPort for EnumOutputParser {
    fn parse(&self, output: &str) -> Vec<DriverPackage> {
        let mut packages = Vec::new();
        let mut record = RecordAccumulator::default();

        let text = output.strip_prefix('\u{feff}').unwrap_or(output);
        for line in text.lines() {
            if line.trim().is_empty() {
                // Record separator; also resets after banner text.
                if let Some(package) = record.finish() {
                    packages.push(package);
                }
                continue;
            }

            if let Some((_label, raw_value)) = line.split_once(':') {
                if record.structurally_complete() {
                    // Tolerate a missing blank line between records:
                    // finalize and let this line open the next one.
                    if let Some(package) = record.finish() {
                        packages.push(package);
                    }
                }
                let value = raw_value.trim();
                if value.is_empty() {
                    // The value lives on the following line.
                    record.pending_continuation = true;
                } else {
                    record.store(value.to_string());
                }
            } else if record.pending_continuation {
                record.store(line.trim().to_string());
            } else {
                debug!(line, "skipping line outside any field");
            }
        }

        if let Some(package) = record.finish() {
            packages.push(package);
        }

        packages
    }
}

/// In-progress state for one package block.
#[derive(Debug, Default)]
struct RecordAccumulator {
    slots: [Option<String>; FIELD_COUNT],
    field_index: usize,
    pending_continuation: bool,
}

impl RecordAccumulator {
    /// Store a value in the current slot and move to the next field.
    fn store(&mut self, value: String) {
        if self.field_index < FIELD_COUNT {
            self.slots[self.field_index] = Some(value);
        }
        self.field_index += 1;
        self.pending_continuation = false;
    }

    /// All field slots have been consumed but no separator was seen yet.
    const fn structurally_complete(&self) -> bool {
        self.field_index >= FIELD_COUNT
    }

    /// Emit the record if its mandatory fields parsed; reset regardless.
    fn finish(&mut self) -> Option<DriverPackage> {
        std::mem::take(self).into_package()
    }

    fn into_package(self) -> Option<DriverPackage> {
        let [name, provider, class, date_version, signer] = self.slots;
        let published_name = name?;
        let Some(raw) = date_version else {
            debug!(
                package = %published_name,
                "dropping record without a date and version field"
            );
            return None;
        };
        let Some((driver_date, version)) = parse_date_version(&raw) else {
            debug!(
                package = %published_name,
                value = %raw,
                "dropping record with unparsable date and version"
            );
            return None;
        };

        let mut package = DriverPackage::new(
            published_name,
            provider.unwrap_or_default(),
            class.unwrap_or_default(),
            driver_date,
            version,
        );
        package.signer_name = signer;
        Some(package)
    }
}

/// Split the combined date-and-version field at its last whitespace run and
/// parse both halves.
fn parse_date_version(raw: &str) -> Option<(NaiveDate, DriverVersion)> {
    let raw = raw.trim();
    let (date_token, version_token) = raw.rsplit_once(|c: char| c.is_whitespace())?;
    let date_token = date_token.trim_end();

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_token, format).ok())?;
    let version = version_token.parse().ok()?;
    Some((date, version))
}

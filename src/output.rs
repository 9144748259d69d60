mod proc_errors;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter};

use crate::angle::Angle;

// Re-export errors
pub use proc_errors::{
    OutputError,
    OutputResult,
};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
    Toml,
    Plain,
}

/// Unit the angles of a report are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AngleUnit {
    Radians,
    Degrees,
}
impl AngleUnit {
    /// Convert a value in this unit to radians.
    pub fn to_radians(&self, value: f64) -> Angle {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    /// Convert radians to a value in this unit.
    pub fn from_radians(&self, angle: Angle) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_degrees(),
        }
    }
}

/// Plain text rendering, one line per record.
pub trait PlainText {
    fn to_plain(&self) -> String;
}

/// A single normalized angle.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NormalizedAngle {
    pub input: f64,
    pub output: f64,
}

/// Result of normalizing a batch of angles into one range.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NormalizationReport {
    pub range: String,
    pub unit: AngleUnit,
    pub entries: Vec<NormalizedAngle>,
}
impl PlainText for NormalizationReport {
    fn to_plain(&self) -> String {
        self.entries.iter()
            .map(|entry| format!("{} -> {}", entry.input, entry.output))
            .join("\n")
    }
}

/// Directional spread of a wave spectrum around its predominant heading.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpectrumReport {
    pub unit: AngleUnit,
    pub predominant_heading: f64,
    pub min_heading: f64,
    pub max_heading: f64,
}
impl PlainText for SpectrumReport {
    fn to_plain(&self) -> String {
        format!("{} -> [{}, {}]", self.predominant_heading, self.min_heading, self.max_heading)
    }
}

/// Summary of a registered range convention.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RangeSummary {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub interval: String,
}

/// All registered range conventions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RangeListing {
    pub ranges: Vec<RangeSummary>,
}
impl PlainText for RangeListing {
    fn to_plain(&self) -> String {
        self.ranges.iter()
            .map(|range| format!("{}: {}", range.name, range.interval))
            .join("\n")
    }
}

/// Render a report in the requested format.
pub fn render<T>(report: &T, format: Format) -> OutputResult<String>
where T: Serialize + PlainText
{
    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(report)?,
        Format::Json => serde_json::to_string_pretty(report)?,
        Format::Toml => toml::to_string_pretty(report)?,
        Format::Plain => report.to_plain(),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn sample_report() -> NormalizationReport {
        NormalizationReport{
            range: "unsigned".to_string(),
            unit: AngleUnit::Degrees,
            entries: vec![
                NormalizedAngle{input: -90.0, output: 270.0},
                NormalizedAngle{input: 450.0, output: 90.0},
            ],
        }
    }

    #[test]
    fn unit_conversion() {
        assert_relative_eq!(AngleUnit::Degrees.to_radians(180.0), std::f64::consts::PI);
        assert_relative_eq!(AngleUnit::Degrees.from_radians(std::f64::consts::FRAC_PI_2), 90.0);
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
    }

    #[test]
    fn json_round_trip() {
        let report = sample_report();
        let rendered = render(&report, Format::Json).unwrap();
        let parsed: NormalizationReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, report);
        assert!(rendered.contains("\"unit\": \"degrees\""));
    }

    #[test]
    fn yaml_and_toml_fields() {
        let report = sample_report();
        let yaml = render(&report, Format::Yaml).unwrap();
        assert!(yaml.contains("range: unsigned"));
        assert!(yaml.contains("output: 270.0"));

        let toml_str = render(&report, Format::Toml).unwrap();
        assert!(toml_str.contains("range = \"unsigned\""));
        assert!(toml_str.contains("[[entries]]"));
    }

    #[test]
    fn plain_lines() {
        let rendered = render(&sample_report(), Format::Plain).unwrap();
        assert_eq!(rendered, "-90 -> 270\n450 -> 90");
    }

    #[test]
    fn every_format_renders() {
        let listing = RangeListing{
            ranges: vec![RangeSummary{
                name: "symmetric".to_string(),
                lower: -std::f64::consts::PI,
                upper: std::f64::consts::PI,
                interval: "(-π, π]".to_string(),
            }],
        };
        for format in Format::iter() {
            let rendered = render(&listing, format).unwrap();
            assert!(rendered.contains("symmetric"), "{} output: {}", format, rendered);
        }
    }
}

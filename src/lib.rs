pub mod angle;
pub mod args;
pub mod geometry;
pub mod output;
mod crate_errors;

use strum::IntoEnumIterator;

use angle::{CanonicalRange, RangeChoice};

pub use crate_errors::{
    AsvError,
    AsvResult,
    err_str,
};

/// Run a parsed command.
/// Returns an `AsvResult` with the rendered report or an `Err`.
pub fn run_command(cli: args::AsvGeometryCli) -> AsvResult<String> {
    match cli.sub_command {
        args::Command::Normalize(normalize_args) => {
            let report = normalize_angles(&normalize_args)?;
            Ok(output::render(&report, normalize_args.shared_args.format)?)
        },
        args::Command::Ranges(shared_args) => {
            Ok(output::render(&list_ranges(), shared_args.format)?)
        },
        args::Command::Spectrum(spectrum_args) => {
            let report = spectrum_limits(&spectrum_args)?;
            Ok(output::render(&report, spectrum_args.shared_args.format)?)
        },
    }
}

/// Normalize every angle of a `normalize` command into the requested range.
/// With `strict` set, the first non-finite angle aborts the batch.
pub fn normalize_angles(normalize_args: &args::NormalizeCli) -> AsvResult<output::NormalizationReport> {
    let range = RangeChoice::from_name(&normalize_args.range).map_err(args::ArgError::from)?;
    let unit = args::unit_from_flag(normalize_args.degrees);

    log::info!("Normalizing {} angle(s) into the {} range ({})...",
        normalize_args.angles.len(), range.get_range_name(), unit);

    let mut entries = Vec::with_capacity(normalize_args.angles.len());
    for &input in normalize_args.angles.iter() {
        let radians = unit.to_radians(input);
        let normalized = if normalize_args.strict {
            range.try_normalize(radians)?
        } else {
            range.normalize(radians)
        };
        entries.push(output::NormalizedAngle{input, output: unit.from_radians(normalized)});
    }

    Ok(output::NormalizationReport{
        range: range.get_range_name().to_string(),
        unit,
        entries,
    })
}

/// Summaries of all registered range conventions.
pub fn list_ranges() -> output::RangeListing {
    let ranges = RangeChoice::iter()
        .map(|range| {
            let (lower, upper) = range.bounds();
            // Exactly one bound is inclusive
            let interval = if range.contains(upper) {
                format!("({}, {}]", lower, upper)
            } else {
                format!("[{}, {})", lower, upper)
            };
            output::RangeSummary{
                name: range.get_range_name().to_string(),
                lower,
                upper,
                interval,
            }
        })
        .collect();
    output::RangeListing{ranges}
}

/// Spectral heading limits of a `spectrum` command.
/// The predominant heading is normalized to [0, 2π) first, non-finite headings are rejected.
pub fn spectrum_limits(spectrum_args: &args::SpectrumCli) -> AsvResult<output::SpectrumReport> {
    let unit = args::unit_from_flag(spectrum_args.degrees);
    let heading = angle::try_normalize_unsigned(unit.to_radians(spectrum_args.heading))?;
    let (min_heading, max_heading) = angle::spectral_heading_limits(heading);

    Ok(output::SpectrumReport{
        unit,
        predominant_heading: unit.from_radians(heading),
        min_heading: unit.from_radians(min_heading),
        max_heading: unit.from_radians(max_heading),
    })
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn parse(cli: &[&str]) -> args::AsvGeometryCli {
        args::parse_cli_args_from(cli.iter().copied()).unwrap()
    }

    fn normalize_cli(cli: &[&str]) -> args::NormalizeCli {
        match parse(cli).sub_command {
            args::Command::Normalize(normalize_args) => normalize_args,
            other => panic!("Expected normalize command, got {:?}", other),
        }
    }

    #[test]
    fn normalize_radians() {
        let normalize_args = normalize_cli(&["asv_geometry", "normalize", "symmetric", "0", "4.71238898038469"]);
        let report = normalize_angles(&normalize_args).unwrap();
        assert_eq!(report.range, "symmetric");
        assert_eq!(report.unit, output::AngleUnit::Radians);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].output, 0.0);
        assert_relative_eq!(report.entries[1].output, -FRAC_PI_2);
    }

    #[test]
    fn normalize_degrees() {
        let normalize_args = normalize_cli(&["asv_geometry", "normalize", "unsigned", "-90", "720", "--degrees"]);
        let report = normalize_angles(&normalize_args).unwrap();
        assert_eq!(report.unit, output::AngleUnit::Degrees);
        assert_eq!(report.entries[0].input, -90.0);
        assert_relative_eq!(report.entries[0].output, 270.0, epsilon = 1e-9);
        assert!(report.entries[1].output.abs() < 1e-9);
    }

    #[test]
    fn non_finite_passes_through_unless_strict() {
        let normalize_args = normalize_cli(&["asv_geometry", "normalize", "symmetric", "NaN"]);
        let report = normalize_angles(&normalize_args).unwrap();
        assert!(report.entries[0].output.is_nan());

        let normalize_args = normalize_cli(&["asv_geometry", "normalize", "symmetric", "inf", "--strict"]);
        match normalize_angles(&normalize_args) {
            Err(AsvError::AngleError(angle::AngleError::InvalidArgument{..})) => {},
            other => panic!("Expected invalid argument, got {:?}", other),
        }
    }

    #[test]
    fn unknown_range_is_argument_error() {
        let normalize_args = normalize_cli(&["asv_geometry", "normalize", "sideways", "1.0"]);
        match normalize_angles(&normalize_args) {
            Err(AsvError::ArgError(args::ArgError::AngleError(_))) => {},
            other => panic!("Expected argument error, got {:?}", other),
        }
    }

    #[test]
    fn ranges_listing() {
        let listing = list_ranges();
        assert_eq!(listing.ranges.len(), 2);
        assert_eq!(listing.ranges[0].name, "symmetric");
        assert_eq!(listing.ranges[0].lower, -PI);
        assert!(listing.ranges[0].interval.starts_with('(') && listing.ranges[0].interval.ends_with(']'));
        assert_eq!(listing.ranges[1].name, "unsigned");
        assert_eq!(listing.ranges[1].upper, TAU);
        assert!(listing.ranges[1].interval.starts_with('[') && listing.ranges[1].interval.ends_with(')'));
    }

    #[test]
    fn spectrum_wraps_around_north() {
        let cli = parse(&["asv_geometry", "spectrum", "-45", "--degrees"]);
        let spectrum_args = match cli.sub_command {
            args::Command::Spectrum(spectrum_args) => spectrum_args,
            other => panic!("Expected spectrum command, got {:?}", other),
        };
        let report = spectrum_limits(&spectrum_args).unwrap();
        assert_relative_eq!(report.predominant_heading, 315.0, epsilon = 1e-9);
        assert_relative_eq!(report.min_heading, 225.0, epsilon = 1e-9);
        assert_relative_eq!(report.max_heading, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn run_command_renders_json() {
        let rendered = run_command(parse(&["asv_geometry", "ranges", "--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ranges"][1]["name"], "unsigned");
    }
}

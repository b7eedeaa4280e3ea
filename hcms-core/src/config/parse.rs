//! Minimal parser for the display configuration
//!
//! Reads the `[display]` section of a TOML-style file. Only the subset
//! needed here is supported:
//! - `key = value` pairs (string, integer, boolean)
//! - `[section]` headers; sections other than `display` are skipped
//! - Comments (`# ...`), also after a value
//!
//! Unknown keys are ignored so one file can carry settings for other
//! parts of an application.

use crate::control::{Brightness, PeakCurrent, Prescaler};

use super::types::DisplayConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Other,
}

/// Scalar on the right of `=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value<'a> {
    Str(&'a str),
    Int(u32),
    Bool(bool),
}

impl<'a> Value<'a> {
    /// Classify a raw value: `"quoted"`, `true`/`false`, or a decimal integer
    fn parse(raw: &'a str) -> Result<Self, ParseError> {
        if let Some(inner) = raw.strip_prefix('"') {
            return inner
                .strip_suffix('"')
                .map(Value::Str)
                .ok_or(ParseError::InvalidValue);
        }
        match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => raw.parse().map(Value::Int).map_err(|_| ParseError::InvalidValue),
        }
    }

    fn int(self) -> Result<u32, ParseError> {
        match self {
            Value::Int(n) => Ok(n),
            _ => Err(ParseError::InvalidValue),
        }
    }

    fn flag(self) -> Result<bool, ParseError> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(ParseError::InvalidValue),
        }
    }

    fn text(self) -> Result<&'a str, ParseError> {
        match self {
            Value::Str(s) => Ok(s),
            _ => Err(ParseError::InvalidValue),
        }
    }
}

/// Parse configuration text into a `DisplayConfig`
///
/// Keys missing from the file keep their default values.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        if section != Section::Display {
            continue;
        }

        let (key, raw) = split_entry(line)?;
        apply_value(&mut config, key, raw)?;
    }

    Ok(config)
}

/// Cut a trailing `# comment` unless the `#` sits inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    for (pos, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '#' if !quoted => return &line[..pos],
            _ => {}
        }
    }
    line
}

/// Parse a header line like `[display]`
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
        .ok_or(ParseError::InvalidSection)?;

    match name {
        "" => Err(ParseError::InvalidSection),
        "display" => Ok(Section::Display),
        _ => Ok(Section::Other),
    }
}

/// Split `key = value` into trimmed halves; both must be present
fn split_entry(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once('=') {
        Some((key, raw)) if !key.trim().is_empty() && !raw.trim().is_empty() => {
            Ok((key.trim(), raw.trim()))
        }
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply one key of the `[display]` section
///
/// Values of unknown keys are not inspected.
fn apply_value(config: &mut DisplayConfig, key: &str, raw: &str) -> Result<(), ParseError> {
    match key {
        "frame_delay_ms" => config.frame_delay_ms = Value::parse(raw)?.int()?,
        "brightness" => {
            let level = u8::try_from(Value::parse(raw)?.int()?)
                .map_err(|_| ParseError::InvalidValue)?;
            config.brightness = Brightness::try_from(level).map_err(|_| ParseError::InvalidValue)?;
        }
        "peak_current" => {
            config.peak_current = PeakCurrent::from_percent(Value::parse(raw)?.text()?)
                .ok_or(ParseError::InvalidValue)?;
        }
        "sleep" => config.sleep = Value::parse(raw)?.flag()?,
        "data_out" => {
            config.simultaneous_data_out = match Value::parse(raw)?.text()? {
                "simultaneous" => true,
                "serial" => false,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        "prescaler" => {
            config.prescaler = match Value::parse(raw)?.int()? {
                1 => Prescaler::Div1,
                8 => Prescaler::Div8,
                _ => return Err(ParseError::InvalidValue),
            };
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_section() {
        let input = r#"
            # front panel
            [display]
            frame_delay_ms = 45
            brightness = 12     # fairly bright
            peak_current = "93%"
            sleep = false
            data_out = "serial"
            prescaler = 8
        "#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.frame_delay_ms, 45);
        assert_eq!(config.brightness.level(), 12);
        assert_eq!(config.peak_current, PeakCurrent::High);
        assert!(!config.sleep);
        assert!(!config.simultaneous_data_out);
        assert_eq!(config.prescaler, Prescaler::Div8);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[display]\nbrightness = 3\n").unwrap();
        let defaults = DisplayConfig::default();
        assert_eq!(config.brightness.level(), 3);
        assert_eq!(config.frame_delay_ms, defaults.frame_delay_ms);
        assert_eq!(config.peak_current, defaults.peak_current);
    }

    #[test]
    fn test_other_sections_ignored() {
        let input = "[network]\nbrightness = 99\n[display]\nsleep = true\n[ui]\nsleep = false\n";
        let config = parse_config(input).unwrap();
        assert!(config.sleep);
        assert_eq!(config.brightness, Brightness::default());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[display]\nbrightness = 16"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nsleep = maybe"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nprescaler = 4"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[display"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[ ]"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("a = 1 # one"), "a = 1 ");
        assert_eq!(strip_comment(r#"s = "x # y""#), r#"s = "x # y""#);
        assert_eq!(strip_comment(r#"s = "x" # "y""#), r#"s = "x" "#);
        assert_eq!(strip_comment("# whole line"), "");
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::parse("42"), Ok(Value::Int(42)));
        assert_eq!(Value::parse("true"), Ok(Value::Bool(true)));
        assert_eq!(Value::parse(r#""serial""#), Ok(Value::Str("serial")));
        assert_eq!(Value::parse(r#""open"#), Err(ParseError::InvalidValue));
        assert_eq!(Value::parse("-3"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        // Quoted number where an integer is expected
        assert_eq!(
            parse_config("[display]\nframe_delay_ms = \"45\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\ndata_out = serial"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nbrightness ="),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_unknown_keys_are_not_inspected() {
        let config = parse_config("[display]\ntheme = dark-ish\n").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_comment_after_header() {
        let config = parse_config("[display] # front\nbrightness = 4\n").unwrap();
        assert_eq!(config.brightness.level(), 4);
    }
}

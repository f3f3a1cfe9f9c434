//! Command-line configuration

use std::path::PathBuf;

use crate::{CalcError, CalcResult};

pub const USAGE: &str = "Usage: mycomplex-calc [--precision N] [--json-logs] [--log-level FILTER] [FILE]";

/// Calc configuration
#[derive(Clone, Debug, PartialEq)]
pub struct CalcConfig {
    /// Digits after the decimal point; shortest round-trip form when `None`
    pub precision: Option<usize>,
    /// Emit logs as JSON lines instead of plain text
    pub json_logs: bool,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Input file; stdin when `None`
    pub input: Option<PathBuf>,
    /// Print usage and exit
    pub show_help: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            precision: None,
            json_logs: false,
            log_level: "warn".to_string(),
            input: None,
            show_help: false,
        }
    }
}

impl CalcConfig {
    /// Build from arguments, program name already stripped
    pub fn from_args<I>(args: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CalcConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--precision" | "-p" => {
                    let value = next_value(&mut args, &arg)?;
                    let digits = value.parse::<usize>().map_err(|_| {
                        CalcError::Usage(format!("invalid precision {:?}", value))
                    })?;
                    config.precision = Some(digits);
                }
                "--json-logs" => config.json_logs = true,
                "--log-level" => config.log_level = next_value(&mut args, &arg)?,
                "--help" | "-h" => config.show_help = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(CalcError::Usage(format!("unknown option {}", flag)));
                }
                path => {
                    if config.input.is_some() {
                        return Err(CalcError::Usage("more than one input file".to_string()));
                    }
                    // "-" keeps stdin
                    if path != "-" {
                        config.input = Some(PathBuf::from(path));
                    }
                }
            }
        }

        Ok(config)
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> CalcResult<String> {
    args.next().ok_or_else(|| CalcError::Usage(format!("{} needs a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = CalcConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, CalcConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_all_options() {
        let config = CalcConfig::from_args(args(&[
            "--precision",
            "3",
            "--json-logs",
            "--log-level",
            "mycomplex_core=trace",
            "values.txt",
        ]))
        .unwrap();

        assert_eq!(config.precision, Some(3));
        assert!(config.json_logs);
        assert_eq!(config.log_level, "mycomplex_core=trace");
        assert_eq!(config.input, Some(PathBuf::from("values.txt")));
    }

    #[test]
    fn test_dash_is_stdin() {
        let config = CalcConfig::from_args(args(&["-"])).unwrap();
        assert_eq!(config.input, None);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(
            CalcConfig::from_args(args(&["--precision"])),
            Err(CalcError::Usage(_))
        ));
        assert!(matches!(
            CalcConfig::from_args(args(&["--precision", "many"])),
            Err(CalcError::Usage(_))
        ));
        assert!(matches!(
            CalcConfig::from_args(args(&["--verbose"])),
            Err(CalcError::Usage(_))
        ));
        assert!(matches!(
            CalcConfig::from_args(args(&["a.txt", "b.txt"])),
            Err(CalcError::Usage(_))
        ));
    }
}

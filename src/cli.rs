use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "labsum")]
#[command(about = "Condense a copy-pasted lab report into one line per timestamp")]
#[command(version)]
pub struct CliArgs {
    /// Report file to read ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Abbreviate common terms (Lymphocyte -> Lym, Platelet -> PLT, ...)
    /// Falls back to LABSUM_ABBREVIATE when not given
    #[arg(long, short = 'a')]
    pub abbreviate: bool,

    /// Merge urine strip/sediment panel items into one line per date
    /// Falls back to LABSUM_GROUPED when not given
    #[arg(long, short = 'g')]
    pub grouped: bool,

    /// Output the result envelope as JSON (success, result, counts)
    #[arg(long)]
    pub json: bool,

    /// Write the result to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Don't print the character count summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Input path, or None for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(input) = self.input_path() {
            if !input.is_file() {
                return Err(format!("Input file not found: {}", input.display()));
            }

            // Refuse to overwrite the report we're reading
            if let Some(ref output) = self.output {
                if output == input {
                    return Err("Output path must differ from the input path".to_string());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>, output: Option<&str>) -> CliArgs {
        CliArgs {
            input: input.map(PathBuf::from),
            abbreviate: false,
            grouped: false,
            json: false,
            output: output.map(PathBuf::from),
            quiet: false,
        }
    }

    #[test]
    fn test_stdin_is_valid() {
        assert!(args(None, None).validate().is_ok());
        assert!(args(Some("-"), Some("out.txt")).validate().is_ok());
        assert!(args(Some("-"), None).input_path().is_none());
    }

    #[test]
    fn test_missing_input_fails() {
        let result = args(Some("./definitely-missing-report.txt"), None).validate();
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_output_equal_to_input_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(args(Some(path), Some(path)).validate().is_err());
        assert!(args(Some(path), None).validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let parsed = CliArgs::try_parse_from(["labsum", "-a", "--grouped", "--json", "-o", "out.txt", "report.txt"]).unwrap();
        assert!(parsed.abbreviate);
        assert!(parsed.grouped);
        assert!(parsed.json);
        assert!(!parsed.quiet);
        assert_eq!(parsed.output, Some(PathBuf::from("out.txt")));
        assert_eq!(parsed.input, Some(PathBuf::from("report.txt")));
    }
}

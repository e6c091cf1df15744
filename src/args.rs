use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One listing line per word.
    Text,

    /// One JSON object per word (JSON lines).
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "armasm", version, about = "Disassembles raw ARM instruction words")]
pub struct Args {
    /// Files holding little-endian 32-bit ARM words. Reads stdin when empty or `-`.
    pub inputs: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Bytes to skip at the start of every input, e.g. a file header.
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Log filter (tracing-subscriber EnvFilter syntax), falls back to `RUST_LOG`.
    ///
    /// Environment variable: `ARMASM_LOG`.
    #[arg(long, env = "ARMASM_LOG")]
    pub log_level: Option<String>,

    /// Write logs to a daily rolled file in this directory instead of stderr.
    ///
    /// Environment variable: `ARMASM_LOG_DIR`.
    #[arg(long, env = "ARMASM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Where the bytes of an input come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Args {
    pub fn inputs(&self) -> Vec<Input> {
        if self.inputs.is_empty() {
            return vec![Input::Stdin];
        }

        self.inputs
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_stdin_text() {
        let args = Args::try_parse_from(["armasm"]).unwrap();
        assert_eq!(args.inputs(), vec![Input::Stdin]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.skip, 0);
    }

    #[test]
    fn dash_is_stdin() {
        let args = Args::try_parse_from(["armasm", "a.bin", "-", "--format", "json"]).unwrap();
        assert_eq!(
            args.inputs(),
            vec![Input::File(PathBuf::from("a.bin")), Input::Stdin]
        );
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn skip_bytes() {
        let args = Args::try_parse_from(["armasm", "--skip", "192", "rom.gba"]).unwrap();
        assert_eq!(args.skip, 192);
        assert_eq!(args.inputs()[0].name(), "rom.gba");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["armasm", "--format", "xml"]).is_err());
    }
}

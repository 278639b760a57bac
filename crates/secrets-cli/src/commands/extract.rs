//! `extract-secrets` implementation

use std::io::Write;

use secrets_core::{extract, format_env, load_config};
use secrets_fs::{NormalizedPath, io};

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::paths;

/// Read the configuration and emit its secrets.
///
/// Lines go to `--output` when given, otherwise to `out`.
pub fn run_extract(args: &ExtractArgs, out: &mut impl Write) -> Result<()> {
    let config_path = paths::config_path(args.config.clone())?;
    let config = load_config(&config_path)?;

    let entries = extract(&config);
    tracing::debug!(path = %config_path, count = entries.len(), "extracted secrets");
    let text = format_env(&entries);

    match &args.output {
        Some(output) => io::write_text(&NormalizedPath::new(output), &text)?,
        None => {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrets_test_utils::{TestHome, sample_config};
    use serde_json::json;
    use std::fs;

    fn args(config: std::path::PathBuf, output: Option<std::path::PathBuf>) -> ExtractArgs {
        ExtractArgs {
            config: Some(config),
            output,
            verbose: false,
        }
    }

    #[test]
    fn test_extract_to_writer() {
        let home = TestHome::new();
        home.write_config(&json!({"mcpServers": {"jules": {"env": {"JULES_API_KEY": "abc123"}}}}));

        let mut buf = Vec::new();
        run_extract(&args(home.config_path(), None), &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "MCPSERVERS__JULES__ENV__JULES_API_KEY=\"abc123\"\n"
        );
    }

    #[test]
    fn test_extract_to_output_file() {
        let home = TestHome::new();
        home.write_config(&sample_config());

        let mut buf = Vec::new();
        run_extract(&args(home.config_path(), Some(home.secrets_path())), &mut buf).unwrap();

        assert!(buf.is_empty());
        let written = fs::read_to_string(home.secrets_path()).unwrap();
        assert_eq!(written.lines().count(), 12);
    }

    #[test]
    fn test_extract_missing_config_fails() {
        let home = TestHome::new();
        let mut buf = Vec::new();
        assert!(run_extract(&args(home.config_path(), None), &mut buf).is_err());
    }
}

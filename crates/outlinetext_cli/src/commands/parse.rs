//! Parse command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use outlinetext_core::ParseService;
use outlinetext_parser::ParseOptions;

use crate::cli::{Cli, ParseFormat};
use crate::utils::{load_settings, read_input};

pub fn run_parse(cli: &Cli, file: &Path, format: ParseFormat) -> Result<bool> {
    let service = ParseService::new(load_settings(cli)?);
    let content = read_input(file)?;

    let options = ParseOptions {
        source_uri: (file != Path::new("-")).then(|| file.display().to_string()),
        ..Default::default()
    };
    let result = service.parse(&content, &options).into_diagnostic()?;

    match format {
        ParseFormat::Html => println!("{}", result.html),
        ParseFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result).into_diagnostic()?
        ),
    }

    Ok(false)
}

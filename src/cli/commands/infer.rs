//! Infer command implementation

use std::io::Read;
use std::path::{Path, PathBuf};

use csv_schema_sdk::{ContentEncoding, CsvOptions, InferenceConfig, Schema, SchemaGenerator};

use crate::error::CliError;
use crate::output::{OutputFormat, format_schema, format_summary};

/// Arguments for the `infer` command
#[derive(Debug, Clone)]
pub struct InferArgs {
    /// Input file, or `-` for stdin
    pub input: String,
    /// Force gzip decoding (implied for `.gz` files)
    pub gzip: bool,
    pub delimiter: char,
    /// Extra missing-value tokens on top of the empty string
    pub null_values: Vec<String>,
    pub true_values: Vec<String>,
    pub false_values: Vec<String>,
    /// Maximum data rows analysed (0 = all)
    pub sample_size: usize,
    pub format: OutputFormat,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
}

impl InferArgs {
    fn encoding(&self) -> ContentEncoding {
        let gz_path = Path::new(&self.input)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if self.gzip || gz_path {
            ContentEncoding::Gzip
        } else {
            ContentEncoding::Identity
        }
    }

    fn inference_config(&self) -> InferenceConfig {
        let mut builder = InferenceConfig::builder().sample_size(self.sample_size);
        for token in &self.null_values {
            builder = builder.missing_value(token);
        }
        if !self.true_values.is_empty() {
            builder = builder.true_values(self.true_values.iter().cloned());
        }
        if !self.false_values.is_empty() {
            builder = builder.false_values(self.false_values.iter().cloned());
        }
        builder.build()
    }
}

/// Load input bytes from file or stdin
fn load_input(input: &str) -> Result<Vec<u8>, CliError> {
    if input == "-" {
        let mut content = Vec::new();
        std::io::stdin()
            .read_to_end(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Run inference over the input described by `args`
pub fn infer(args: &InferArgs) -> Result<Schema, CliError> {
    let csv = CsvOptions::default().with_delimiter(args.delimiter);
    csv.validate()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let body = load_input(&args.input)?;
    let generator = SchemaGenerator::new(csv, args.inference_config());
    Ok(generator.generate(&body, args.encoding())?)
}

/// Handle the `infer` command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let schema = infer(args)?;
    let rendered = format_schema(&schema, args.format)?;

    eprint!("{}", format_summary(&schema));

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &rendered)
            .map_err(|e| CliError::FileWriteError(output_path.clone(), e.to_string()))?;
        eprintln!("Schema written to: {}", output_path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

use std::{error::Error, path::PathBuf};

use clap::Args;

use fitsid::{FitsHeaderReader, FormatIdentifier, IdentifyOptions, Registry};

#[derive(Debug, Clone, Args)]
pub struct Identify {
    /// Fail on the first file whose header cannot be read.
    #[clap(long)]
    pub strict: bool,
    /// I/O mode forwarded to the identifiers.
    #[clap(long, default_value = "read")]
    pub mode: String,
    /// Only check the format with the given name.
    #[clap(long, value_name = "NAME")]
    pub format: Option<String>,
    /// Paths of the input files.
    #[clap(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,
}

impl Identify {
    pub fn exec(self) -> Result<(), Box<dyn Error>> {
        let registry = match &self.format {
            Some(name) => {
                let entry = Registry::builtin()
                    .get(name)
                    .ok_or_else(|| format!("Unknown format {:?}, see the `formats` command", name))?;
                Registry::new().with_format(entry.clone())
            }
            None => Registry::builtin().clone(),
        };
        let identifier = FormatIdentifier::new(FitsHeaderReader).with_options(IdentifyOptions {
            strict: self.strict,
        });

        for input in &self.inputs {
            let file_ref = input.to_string_lossy();
            let format = registry.identify(&identifier, &self.mode, &file_ref)?;
            println!(
                "{}: {}",
                file_ref,
                format.map(|e| e.name.as_str()).unwrap_or("unknown")
            );
        }
        Ok(())
    }
}

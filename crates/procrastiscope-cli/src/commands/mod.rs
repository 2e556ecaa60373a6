pub mod analyze;
pub mod config;

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

/// Where a command reads its JSON payload from.
#[derive(Args)]
pub struct PayloadArgs {
    /// JSON file to read; stdin when omitted or "-"
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

impl PayloadArgs {
    pub fn read(&self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?),
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

/// JSON printer honoring the pretty/compact setting.
pub struct Output {
    pretty: bool,
}

impl Output {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn print<T: Serialize>(&self, value: &T) -> Result<(), Box<dyn std::error::Error>> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{json}");
        Ok(())
    }
}

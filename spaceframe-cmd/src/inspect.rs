use std::io::Write;

use anyhow::{Context, Result};
use spaceframe::Protocol;

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

pub fn inspect<W: Write>(
    mut out: W,
    protocol: Protocol,
    data: &str,
    format: &Format,
) -> Result<()> {
    let raw = hex::decode(data.trim()).context("decoding hex input")?;
    let info = spaceframe::inspect(protocol, &raw)
        .with_context(|| format!("input is not a valid {protocol} frame"))?;

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &info).context("serializing frame info")?;
            writeln!(out).context("writing output")?;
        }
        Format::Text => writeln!(out, "{info}").context("writing output")?,
    }
    Ok(())
}

use std::io::Write;

use anyhow::{Context, Result};
use spaceframe::{Converter, EncodeParams, Protocol, TracingObserver};
use tracing::info;

pub fn convert<W: Write>(
    mut out: W,
    from: Protocol,
    to: Protocol,
    data: &str,
    params: EncodeParams,
    verbose: bool,
) -> Result<()> {
    let raw = hex::decode(data.trim()).context("decoding hex input")?;
    let converter = if verbose {
        Converter::builder()
            .params(params)
            .observer(Box::new(TracingObserver))
            .build()
    } else {
        Converter::builder().params(params).build()
    };

    let frame = converter
        .convert(from, to, &raw)
        .with_context(|| format!("input is not a valid {from} frame"))?;
    info!("converted {} byte {from} frame to {} byte {to} frame", raw.len(), frame.len());
    writeln!(out, "{}", hex::encode(frame)).context("writing output")?;
    Ok(())
}

pub fn encode<W: Write>(
    mut out: W,
    to: Protocol,
    message: &str,
    params: EncodeParams,
) -> Result<()> {
    let converter = Converter::builder().params(params).build();
    let frame = converter.encode(to, message.as_bytes());
    writeln!(out, "{}", hex::encode(frame)).context("writing output")?;
    Ok(())
}

mod convert;
mod inspect;

use std::io::{stderr, stdout};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spaceframe::aos::{AosParams, Scid, Vcid};
use spaceframe::pus::{Service, Subservice, TcParams, TmParams};
use spaceframe::spacepacket::{Apid, SpacePacketParams};
use spaceframe::{EncodeParams, Protocol};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a hex encoded frame from one format to another.
    ///
    /// The input frame is validated, its payload extracted, and then written using the
    /// output format. Header values are not carried over from the input frame; use the
    /// header options to set them. If the input and output formats are the same the
    /// data is written unchanged without being validated.
    Convert {
        /// Format of the input data; one of aos, ccsds, pus_tm, pus_tc.
        #[arg(short, long = "input-format", value_parser = parse_protocol, value_name = "format")]
        input_format: Protocol,

        /// Format to convert to; one of aos, ccsds, pus_tm, pus_tc.
        #[arg(short, long = "output-format", value_parser = parse_protocol, value_name = "format")]
        output_format: Protocol,

        /// Hex encoded input frame.
        #[arg(short, long, value_name = "hex")]
        data: String,

        /// Log decoded input frame fields.
        #[arg(short, long, action)]
        verbose: bool,

        #[command(flatten)]
        header: HeaderArgs,
    },
    /// Validate a hex encoded frame and show its header fields and payload.
    Inspect {
        /// Format of the input data; one of aos, ccsds, pus_tm, pus_tc.
        #[arg(short, long = "input-format", value_parser = parse_protocol, value_name = "format")]
        input_format: Protocol,

        /// Hex encoded input frame.
        #[arg(short, long, value_name = "hex")]
        data: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: inspect::Format,
    },
    /// Encode a text message as the payload of a new frame.
    Encode {
        /// Format of the frame to create; one of aos, ccsds, pus_tm, pus_tc.
        #[arg(short, long = "output-format", value_parser = parse_protocol, value_name = "format")]
        output_format: Protocol,

        /// Message used as the frame payload.
        #[arg(short, long)]
        message: String,

        #[command(flatten)]
        header: HeaderArgs,
    },
}

/// Header values for created frames. Unset values are zero.
#[derive(Args, Debug, Clone, Default)]
struct HeaderArgs {
    /// AOS spacecraft identifier.
    #[arg(long, default_value_t = 0)]
    scid: Scid,

    /// AOS virtual channel identifier.
    #[arg(long, default_value_t = 0)]
    vcid: Vcid,

    /// PUS service type.
    #[arg(long, default_value_t = 0)]
    service: Service,

    /// PUS service subtype.
    #[arg(long, default_value_t = 0)]
    subservice: Subservice,

    /// CCSDS packet type.
    #[arg(long, default_value_t = 0)]
    packet_type: u8,

    /// CCSDS application process identifier.
    #[arg(long, default_value_t = 0)]
    apid: Apid,

    /// CCSDS packet sequence count.
    #[arg(long, default_value_t = 0)]
    sequence_count: u16,
}

impl From<&HeaderArgs> for EncodeParams {
    fn from(args: &HeaderArgs) -> Self {
        EncodeParams {
            aos: AosParams {
                scid: args.scid,
                vcid: args.vcid,
            },
            ccsds: SpacePacketParams {
                packet_type: args.packet_type,
                apid: args.apid,
                sequence_count: args.sequence_count,
            },
            pus_tm: TmParams {
                service: args.service,
                subservice: args.subservice,
            },
            pus_tc: TcParams {
                service: args.service,
                subservice: args.subservice,
            },
        }
    }
}

fn parse_protocol(s: &str) -> Result<Protocol, String> {
    s.parse::<Protocol>().map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("SPACEFRAME_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Convert {
            input_format,
            output_format,
            data,
            verbose,
            header,
        } => convert::convert(
            stdout().lock(),
            *input_format,
            *output_format,
            data,
            header.into(),
            *verbose,
        ),
        Commands::Inspect {
            input_format,
            data,
            format,
        } => inspect::inspect(stdout().lock(), *input_format, data, format),
        Commands::Encode {
            output_format,
            message,
            header,
        } => convert::encode(stdout().lock(), *output_format, message, header.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_protocol() {
        assert_eq!(parse_protocol("pus_tc"), Ok(Protocol::PusTc));
        assert!(parse_protocol("tc").is_err());
    }

    #[test]
    fn test_header_args() {
        let cli = Cli::parse_from([
            "spaceframe",
            "encode",
            "-o",
            "pus_tm",
            "-m",
            "hi",
            "--service",
            "3",
            "--subservice",
            "25",
            "--apid",
            "7",
        ]);
        let Commands::Encode { header, .. } = cli.command else {
            panic!("expected encode command");
        };
        let params = EncodeParams::from(&header);
        assert_eq!(params.pus_tm.service, 3);
        assert_eq!(params.pus_tc.subservice, 25);
        assert_eq!(params.ccsds.apid, 7);
        assert_eq!(params.aos, AosParams::default());
    }
}

use anyhow::Context;
use clap::Parser;
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use wvcolor::{ColorChoice, ColorizeError, Colorizer, ColorizerConfig, Palette};

#[derive(Parser)]
#[command(name = "wvcolor")]
#[command(about = "Colorize WvTest-style test output for the terminal")]
#[command(version)]
struct Args {
    /// Input file (default: stdin)
    #[arg(value_name = "INPUT")]
    input_file: Option<PathBuf>,

    /// Output file (default: stderr)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Colorize output (auto-detected by default)
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    color: ColorChoice,

    /// Debug mode - show processing details
    #[arg(long)]
    debug: bool,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536", value_parser = clap::value_parser!(u64).range(1..))] // 64KB
    buffer_size: u64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("wvcolor: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let buffer_size = usize::try_from(args.buffer_size).context("buffer size too large")?;

    // Set up input
    let input: Box<dyn BufRead> = if let Some(input_path) = &args.input_file {
        let file = File::open(input_path).map_err(|source| ColorizeError::OpenInput {
            path: input_path.clone(),
            source,
        })?;
        Box::new(BufReader::with_capacity(buffer_size, file))
    } else {
        Box::new(BufReader::with_capacity(buffer_size, io::stdin()))
    };

    // Set up output; the palette follows whether the sink is a terminal
    let (mut output, is_tty): (Box<dyn Write>, bool) = if let Some(output_path) = &args.output_file
    {
        let file = File::create(output_path).map_err(|source| ColorizeError::CreateOutput {
            path: output_path.clone(),
            source,
        })?;
        let is_tty = file.is_terminal();
        (
            Box::new(io::BufWriter::with_capacity(buffer_size, file)),
            is_tty,
        )
    } else {
        let stderr = io::stderr();
        let is_tty = stderr.is_terminal();
        (
            Box::new(io::BufWriter::with_capacity(buffer_size, stderr)),
            is_tty,
        )
    };

    let palette = Palette::new(args.color.should_colorize(is_tty));
    let config = ColorizerConfig {
        debug: args.debug,
        flush_each_line: is_tty,
    };

    if args.debug {
        match &args.input_file {
            Some(path) => eprintln!("wvcolor: reading from {}", path.display()),
            None => eprintln!("wvcolor: reading from stdin"),
        }
        eprintln!(
            "wvcolor: colors {}",
            if palette.is_enabled() { "enabled" } else { "disabled" }
        );
    }

    let mut colorizer = Colorizer::new(palette, config);
    let stats = colorizer
        .process_stream(input, &mut output)
        .context("processing failed")?;

    output.flush()?;

    if args.debug {
        eprintln!("Final statistics:");
        eprintln!("  Lines read: {}", stats.lines_read);
        eprintln!("  Success: {}", stats.lines_success);
        eprintln!("  Failure: {}", stats.lines_failure);
        eprintln!("  Info: {}", stats.lines_info);
        eprintln!("  Plain: {}", stats.lines_plain);
        eprintln!("  Bytes written: {}", stats.bytes_written);
        eprintln!("  Processing time: {:?}", stats.processing_time);

        if let Some(rate) = stats.lines_per_second() {
            eprintln!("  Processing rate: {:.0} lines/second", rate);
        }
    }

    Ok(())
}

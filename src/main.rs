// Usage:
//   rhomb <width> <height> <color_hex> <output_filename>
//
// Renders an anti-aliased diamond filled with <color_hex> on a white
//   background and saves it as a 24-bit bitmap

use rhomb::{Args, Error, RenderOptions};

use std::process;

/// Logging goes to stderr, filtered by RUST_LOG, warnings only by default
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn main() {
    init_logging();

    let argv: Vec<String> = std::env::args().collect();
    let progname = argv.first().map(String::as_str).unwrap_or("rhomb");

    let args = match Args::parse(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(Error::Usage(n)) => {
            log::debug!("{} arguments given", n);
            println!("{}", rhomb::cli::usage(progname));
            process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };
    log::info!("{:?}", args);

    let opts = RenderOptions::default();
    if let Err(err) = rhomb::create_bmp(args.width, args.height, args.color, &args.filename, &opts) {
        eprintln!("error: {}: {}", args.filename.display(), err);
        process::exit(1);
    }
    println!("Image written to {}", args.filename.display());
}

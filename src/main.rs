use std::path::PathBuf;
use std::process;

use argh::FromArgs;
use log::{error, info};

use minic::DEFAULT_OUTPUT;

/// Compile a single-function C source file into x86-64 assembly.
#[derive(FromArgs)]
struct Args {
  /// path to the source file
  #[argh(positional)]
  input: PathBuf,

  /// where to write the assembly
  #[argh(option, short = 'o', default = "PathBuf::from(DEFAULT_OUTPUT)")]
  output: PathBuf,

  /// log the token listing and other debug output
  #[argh(switch, short = 'v')]
  verbose: bool,

  /// disable colorized output
  #[argh(switch)]
  no_color: bool,
}

fn main() {
  let args: Args = argh::from_env();

  if let Err(err) = loggerv::Logger::new()
    .base_level(log::Level::Info)
    .verbosity(u64::from(args.verbose))
    .colors(!args.no_color)
    .module_path(false)
    .init()
  {
    eprintln!("failed to initialise logging: {err}");
  }

  info!("Compiling {}", args.input.display());

  if let Err(err) = minic::compile_file(&args.input, &args.output) {
    if err.has_location() {
      error!("{}:{err}", args.input.display());
    } else {
      error!("{err}");
    }
    process::exit(1);
  }
}

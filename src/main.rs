use std::{fs, path::{Path, PathBuf}, process};

use clap::Parser;
use pushkin::{Stdout, execute};
use tracing::Level;

/// pushkin runs `.push` scripts: numeric variables, `+`, `-` and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print pipeline diagnostics to standard error.
    #[arg(short, long)]
    verbose: bool,

    /// The script to run. Must have a `.push` extension.
    file: PathBuf,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        // A failed write to stderr has nowhere to be reported; exit status 1 still is.
        let _ = e.print();
        process::exit(1);
    });

    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    if !has_push_extension(&args.file) {
        eprintln!("Error: File must have a .push extension");
        process::exit(1);
    }

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Error: Could not read file '{}'", args.file.display());
        process::exit(1);
    });

    if let Err(e) = execute(&source, &mut Stdout) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Whether the path names a `.push` script. A file called `.push` counts.
fn has_push_extension(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".push")
}

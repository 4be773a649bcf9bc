use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::exit,
    time::{Duration, Instant},
};

use clap::Parser;
use log::info;
use vyrn::{
    errors::errors::Error,
    render_error,
    toolchain::toolchain::{build_and_run, BuildConfig},
    translate,
};

/// Translate Vyrn scripts into C++, optionally building and running the result.
#[derive(Parser, Debug)]
#[command(name = "vyrn", version, about)]
struct Cli {
    /// Source file to translate, `-` for stdin
    input: PathBuf,

    /// Write the generated C++ here instead of stdout, also with --run
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compile the generated C++ and print the program's output
    #[arg(long)]
    run: bool,

    /// C++ compiler used with --run
    #[arg(long, default_value = "g++")]
    compiler: String,

    /// Seconds allowed for compilation and for execution, each
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Directory for build artifacts, defaults to a per-process temp directory
    #[arg(long)]
    work_dir: Option<PathBuf>,
}

fn read_source(input: &Path) -> io::Result<(String, String)> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok((source, String::from("stdin")));
    }

    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    Ok((fs::read_to_string(input)?, file_name))
}

fn fail(error: &Error, source: &str) -> ! {
    eprint!("{}", render_error(error, source));
    exit(1)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let (source, file_name) = match read_source(&cli.input) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", cli.input.display(), error);
            exit(1)
        }
    };

    let generated = match translate(&source, Some(file_name)) {
        Ok(generated) => generated,
        Err(error) => fail(&error, &source),
    };

    info!("Translated in {:?}", start.elapsed());

    if let Some(output) = &cli.output {
        if let Err(error) = fs::write(output, &generated) {
            eprintln!("Error: failed to write {}: {}", output.display(), error);
            exit(1)
        }
        info!("Wrote {}", output.display());
    }

    if cli.run {
        let mut config = BuildConfig {
            compiler: cli.compiler,
            timeout: Duration::from_secs(cli.timeout),
            ..BuildConfig::default()
        };
        if let Some(work_dir) = cli.work_dir {
            config.work_dir = work_dir;
        }

        match build_and_run(&generated, &config) {
            Ok(output) => {
                info!("Built {}", output.executable_path.display());
                print!("{}", output.stdout);
            }
            Err(error) => fail(&error, &source),
        }
    } else if cli.output.is_none() {
        print!("{}", generated);
    }

    info!("Total time: {:?}", start.elapsed());
}

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use log::{debug, info};

use crate::{errors::errors::Error, Position, MK_ERROR};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How the generated C++ is built and run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Compiler executable, looked up on `PATH`
    pub compiler: String,
    /// Flags passed before the source file
    pub flags: Vec<String>,
    /// Bound applied separately to compilation and to execution
    pub timeout: Duration,
    /// Directory owned by this build; nothing else may write to it concurrently
    pub work_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            compiler: String::from("g++"),
            flags: vec![String::from("-std=c++17"), String::from("-O0")],
            timeout: Duration::from_secs(10),
            work_dir: std::env::temp_dir().join(format!("vyrn-{}", std::process::id())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub source_path: PathBuf,
    pub executable_path: PathBuf,
}

fn io_error(error: std::io::Error) -> Error {
    MK_ERROR!(Io, Position::null(), message: error.to_string())
}

/// Reads a file a child process wrote its output to.
pub fn read_capture(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(io_error)
}

/// Runs a command to completion, killing it once `timeout` elapses.
///
/// Output goes to files rather than pipes, so a chatty child can never block
/// on a full pipe while it is being polled.
fn run_bounded(
    command: &mut Command,
    stdout: Option<&Path>,
    stderr: &Path,
    timeout: Duration,
    step: &str,
) -> Result<ExitStatus, Error> {
    command
        .stdin(Stdio::null())
        .stderr(Stdio::from(File::create(stderr).map_err(io_error)?));

    if let Some(stdout) = stdout {
        command.stdout(Stdio::from(File::create(stdout).map_err(io_error)?));
    } else {
        command.stdout(Stdio::null());
    }

    debug!("{}: {:?}", step, command);
    let mut child = command.spawn().map_err(io_error)?;
    let start = Instant::now();

    loop {
        if let Some(status) = child.try_wait().map_err(io_error)? {
            info!("{} finished in {:?}", step, start.elapsed());
            return Ok(status);
        }

        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(MK_ERROR!(
                TimedOut,
                Position::null(),
                step: step.to_string(),
                seconds: timeout.as_secs()
            ));
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Writes `source` to the work directory, compiles it and runs the binary.
///
/// # Returns
///
/// The program's captured standard output, or a toolchain error carrying the
/// compiler's or the program's standard error.
pub fn build_and_run(source: &str, config: &BuildConfig) -> Result<RunOutput, Error> {
    fs::create_dir_all(&config.work_dir).map_err(io_error)?;

    let source_path = config.work_dir.join("generated.cpp");
    let executable_path = config.work_dir.join(if cfg!(windows) {
        "generated_program.exe"
    } else {
        "generated_program"
    });
    fs::write(&source_path, source).map_err(io_error)?;

    let compiler = which::which(&config.compiler).map_err(|_| {
        MK_ERROR!(CompilerNotFound, Position::null(), compiler: config.compiler.clone())
    })?;

    let compile_errors = config.work_dir.join("compile_errors.txt");
    let status = run_bounded(
        Command::new(compiler)
            .args(&config.flags)
            .arg(&source_path)
            .arg("-o")
            .arg(&executable_path),
        None,
        &compile_errors,
        config.timeout,
        "compilation",
    )?;

    if !status.success() {
        return Err(MK_ERROR!(
            CompilationFailed,
            Position::null(),
            stderr: read_capture(&compile_errors)?
        ));
    }

    let program_output = config.work_dir.join("program_output.txt");
    let runtime_errors = config.work_dir.join("runtime_errors.txt");
    let status = run_bounded(
        &mut Command::new(&executable_path),
        Some(&program_output),
        &runtime_errors,
        config.timeout,
        "execution",
    )?;

    if !status.success() {
        return Err(MK_ERROR!(
            ExecutionFailed,
            Position::null(),
            status: status.to_string(),
            stderr: read_capture(&runtime_errors)?
        ));
    }

    Ok(RunOutput {
        stdout: read_capture(&program_output)?,
        source_path,
        executable_path,
    })
}

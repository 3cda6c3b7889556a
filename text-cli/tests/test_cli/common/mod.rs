use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;


pub use data::{
    generate_random_data, numbered_lines, BINARY_DATA, DUPLICATE_LINES, FIELD_LINES, SAMPLE_TEXT,
};

/// Type of binary to execute
#[derive(Debug, Clone)]
pub enum BinaryType {
    /// Our own binary built by cargo
    Cargo(String),
    /// System binary available in PATH
    System(String),
}

impl BinaryType {
    /// Create a new cargo binary type
    pub fn cargo(name: impl Into<String>) -> Self {
        Self::Cargo(name.into())
    }

    /// Create a new system binary type
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// Returns the path to the binary for this variant.
    ///
    /// # Panics
    ///
    /// Panics if the binary cannot be found.
    fn get_path(&self) -> PathBuf {
        match self {
            BinaryType::Cargo(name) => cargo_binary(name),
            BinaryType::System(name) => find_system_binary(name)
                .unwrap_or_else(|| panic!("Binary {name} not found in PATH")),
        }
    }
}

/// Path of a binary target of this package.
///
/// # Panics
///
/// Panics for names that are not binary targets of `text-cli`.
fn cargo_binary(name: &str) -> PathBuf {
    let path = match name {
        "cat" => env!("CARGO_BIN_EXE_cat"),
        "echo" => env!("CARGO_BIN_EXE_echo"),
        "uniq" => env!("CARGO_BIN_EXE_uniq"),
        other => panic!("'{other}' is not a binary of this package"),
    };
    PathBuf::from(path)
}

/// Find a system binary in PATH
fn find_system_binary(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    // If not found in PATH, try common locations
    let common_paths = ["/usr/bin", "/usr/local/bin", "/bin"];

    common_paths
        .iter()
        .map(|base_path| Path::new(base_path).join(name))
        .find(|full_path| full_path.is_file())
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

/// Compare the observable stdout of two command runs
///
/// # Panics
///
/// Panics if the exit status or stdout differ.
pub fn compare_outputs(output_1: &Output, output_2: &Output) {
    assert_eq!(output_1.status.success(), output_2.status.success());
    assert_eq!(output_1.stdout, output_2.stdout);
    assert!(output_1.stdout_raw == output_2.stdout_raw);
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn empty() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let fixture = Self::empty();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        }
        fixture
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Write a file whose name need not be valid UTF-8, returning its full path
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_os_file(&self, name: &OsStr, contents: &[u8]) -> PathBuf {
        let path = self.root_dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Run a cargo binary with the specified arguments
    pub async fn run_cargo(&mut self, name: &str, args: &[&str]) -> Output {
        self.run_with_stdin_raw(BinaryType::cargo(name), args, &[])
            .await
    }

    /// Run a cargo binary feeding `stdin` to it
    pub async fn run_cargo_with_stdin(&mut self, name: &str, args: &[&str], stdin: &[u8]) -> Output {
        self.run_with_stdin_raw(BinaryType::cargo(name), args, stdin)
            .await
    }

    /// Run a cargo binary with arguments that need not be valid UTF-8
    pub async fn run_cargo_os(&mut self, name: &str, args: &[&OsStr]) -> Output {
        self.run_with_stdin_raw(BinaryType::cargo(name), args, &[])
            .await
    }

    /// Run a system binary with the specified arguments if available
    pub async fn run_system(&mut self, name: &str, args: &[&str]) -> Option<Output> {
        self.run_system_with_stdin(name, args, &[]).await
    }

    /// Run a system binary feeding `stdin` to it, if available
    pub async fn run_system_with_stdin(
        &mut self,
        name: &str,
        args: &[&str],
        stdin: &[u8],
    ) -> Option<Output> {
        if find_system_binary(name).is_some() {
            Some(
                self.run_with_stdin_raw(BinaryType::system(name), args, stdin)
                    .await,
            )
        } else {
            None
        }
    }

    /// Run a binary with raw stdin bytes.
    ///
    /// Stdin is written from a separate task so that a child producing output
    /// while input is still pending cannot fill the pipes and stall.
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    pub async fn run_with_stdin_raw<S: AsRef<OsStr>>(
        &mut self,
        binary_type: BinaryType,
        args: &[S],
        stdin: &[u8],
    ) -> Output {
        let bin_path = binary_type.get_path();
        let mut child = tokio::process::Command::new(&bin_path)
            .args(args)
            .current_dir(self.root_dir.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        let writer = child.stdin.take().map(|mut pipe| {
            let stdin_bytes = stdin.to_vec();
            tokio::spawn(async move {
                if let Err(err) = pipe.write_all(&stdin_bytes).await {
                    // Some commands intentionally exit before reading stdin.
                    assert!(
                        err.kind() == std::io::ErrorKind::BrokenPipe,
                        "failed write to stdin ({} bytes): {err}",
                        stdin_bytes.len()
                    );
                }
                // Dropping the pipe sends EOF to the child process.
            })
        });

        let raw_output = child.wait_with_output().await.unwrap();
        if let Some(writer) = writer {
            writer.await.unwrap();
        }

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stdout_raw: raw_output.stdout,
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}

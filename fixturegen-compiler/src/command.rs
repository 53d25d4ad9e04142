//! External-process compiler.

use crate::compiler::{CompileReport, Compiler};
use crate::diagnostic::{Diagnostic, parse_output};
use crate::error::CompileError;
use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Placeholder replaced by the path of the generated source file.
pub const SOURCE_PLACEHOLDER: &str = "{source}";
/// Placeholder replaced by the output module path.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Arguments passed to `csc` to build a release library for any CPU.
pub const CSC_ARGS: [&str; 6] = [
    "-nologo",
    "-target:library",
    "-optimize+",
    "-platform:anycpu",
    "-out:{output}",
    "{source}",
];

/// Runs an external compiler on a temporary copy of the source.
///
/// Arguments may contain `{source}` and `{output}`; if none mentions
/// `{source}`, the source path is appended as the last argument.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    poll_interval: Duration,
}

impl CommandCompiler {
    /// Default time allowed for one compilation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
    /// Default interval between process status checks.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(25);

    /// Creates a compiler invoking `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates a compiler invoking `csc` with release library settings.
    #[must_use]
    pub fn csc() -> Self {
        Self::new("csc").args(CSC_ARGS)
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the compilation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the process polling interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Expands placeholders for one invocation.
    fn expand_args(&self, source: &Path, output: &Path) -> Vec<OsString> {
        let source_str = source.to_string_lossy();
        let output_str = output.to_string_lossy();

        let mut expanded: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                arg.replace(SOURCE_PLACEHOLDER, &source_str)
                    .replace(OUTPUT_PLACEHOLDER, &output_str)
                    .into()
            })
            .collect();

        if !self.args.iter().any(|arg| arg.contains(SOURCE_PLACEHOLDER)) {
            expanded.push(source.as_os_str().to_owned());
        }

        expanded
    }

    /// Waits for the child, killing it once the timeout expires.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, CompileError> {
        let started_at = Instant::now();

        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if started_at.elapsed() >= self.timeout {
                        kill_tree(child);
                        let _ = child.wait();
                        tracing::warn!(
                            program = %self.program,
                            timeout = ?self.timeout,
                            "compiler timed out, killed"
                        );
                        return Err(CompileError::Timeout {
                            timeout: self.timeout,
                        });
                    }
                    thread::sleep(self.poll_interval);
                }
                Err(e) => return Err(CompileError::io(PathBuf::from(&self.program), e)),
            }
        }
    }
}

impl Default for CommandCompiler {
    fn default() -> Self {
        Self::csc()
    }
}

impl Compiler for CommandCompiler {
    fn compile(&self, source: &str, output: &Path) -> Result<CompileReport, CompileError> {
        let mut source_file = tempfile::Builder::new()
            .prefix("fixturegen-")
            .suffix(".cs")
            .tempfile()
            .map_err(|e| CompileError::io(std::env::temp_dir(), e))?;
        let written = source_file
            .write_all(source.as_bytes())
            .and_then(|()| source_file.flush());
        written.map_err(|e| CompileError::io(source_file.path(), e))?;

        // stdout and stderr share one file so nothing blocks on a full pipe
        let mut log = tempfile::tempfile().map_err(|e| CompileError::io(std::env::temp_dir(), e))?;
        let stdout = clone_log(&log)?;
        let stderr = clone_log(&log)?;

        let args = self.expand_args(source_file.path(), output);
        tracing::debug!(program = %self.program, ?args, "starting compiler");

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr));
        // own process group, so a timeout also reaches wrapper-spawned compilers
        #[cfg(unix)]
        command.process_group(0);

        let mut child = command
            .spawn()
            .map_err(|source| CompileError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let status = self.wait(&mut child)?;

        let mut raw = Vec::new();
        log.seek(SeekFrom::Start(0))
            .and_then(|_| log.read_to_end(&mut raw))
            .map_err(|e| CompileError::io(std::env::temp_dir(), e))?;
        let text = String::from_utf8_lossy(&raw);

        let (errors, warnings): (Vec<Diagnostic>, Vec<Diagnostic>) =
            parse_output(&text).into_iter().partition(Diagnostic::is_error);

        if status.success() && errors.is_empty() {
            tracing::debug!(
                path = %output.display(),
                warnings = warnings.len(),
                "compilation succeeded"
            );
            return Ok(CompileReport { warnings });
        }

        let diagnostics = if errors.is_empty() {
            let trimmed = text.trim();
            let message = if trimmed.is_empty() {
                format!("{} exited with {status}", self.program)
            } else {
                trimmed.to_string()
            };
            vec![Diagnostic::error(message)]
        } else {
            errors
        };

        Err(CompileError::Failed { diagnostics })
    }
}

/// Kills the compiler and everything it spawned.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: the child leads its own process group (spawned with
        // process_group(0)), so the group id equals its pid.
        unsafe {
            libc::killpg(pgid, libc::SIGKILL);
        }
    }
    let _ = child.kill();
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    let _ = child.kill();
}

fn clone_log(log: &File) -> Result<File, CompileError> {
    log.try_clone()
        .map_err(|e| CompileError::io(std::env::temp_dir(), e))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> CommandCompiler {
        CommandCompiler::new("sh")
            .arg("-c")
            .arg(script)
            .with_poll_interval(Duration::from_millis(5))
    }

    #[test]
    fn test_expand_args_substitutes_placeholders() {
        let compiler = CommandCompiler::csc();
        let args = compiler.expand_args(Path::new("/tmp/a.cs"), Path::new("/out/A.dll"));
        assert_eq!(args.len(), 6);
        assert_eq!(args[4], OsString::from("-out:/out/A.dll"));
        assert_eq!(args[5], OsString::from("/tmp/a.cs"));
    }

    #[test]
    fn test_expand_args_appends_source() {
        let compiler = CommandCompiler::new("mcs").arg("-out:{output}");
        let args = compiler.expand_args(Path::new("/tmp/a.cs"), Path::new("/out/A.dll"));
        assert_eq!(
            args,
            vec![OsString::from("-out:/out/A.dll"), OsString::from("/tmp/a.cs")]
        );
    }

    #[test]
    fn test_successful_compilation_copies_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("A.dll");
        let compiler = shell("cat {source} > {output}");

        let report = compiler.compile("namespace A;\n", &output).unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "namespace A;\n");
    }

    #[test]
    fn test_warnings_are_reported_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = shell("echo 'a.cs(1,1): warning CS0169: unused field'");

        let report = compiler.compile("", &dir.path().join("A.dll")).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code.as_deref(), Some("CS0169"));
    }

    #[test]
    fn test_warning_mentioning_error_does_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let compiler =
            shell("echo \"a.cs(3,5): warning CS0618: 'Old' is obsolete: error prone API\"; exit 0");

        let report = compiler.compile("", &dir.path().join("A.dll")).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code.as_deref(), Some("CS0618"));
    }

    #[test]
    fn test_errors_fail_compilation() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = shell(
            "echo 'a.cs(4,9): error CS0246: missing Type1005' >&2; \
             echo 'a.cs(1,1): warning CS0169: unused'; exit 1",
        );

        let err = compiler.compile("", &dir.path().join("A.dll")).unwrap_err();
        match err {
            CompileError::Failed { diagnostics } => {
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].code.as_deref(), Some("CS0246"));
                assert_eq!(diagnostics[0].message, "missing Type1005");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failure_without_diagnostics_uses_output() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = shell("echo 'segfault in backend'; exit 3");

        let err = compiler.compile("", &dir.path().join("A.dll")).unwrap_err();
        match err {
            CompileError::Failed { diagnostics } => {
                assert_eq!(diagnostics, vec![Diagnostic::error("segfault in backend")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_timeout_kills_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = shell("sleep 5").with_timeout(Duration::from_millis(100));

        let started = Instant::now();
        let err = compiler.compile("", &dir.path().join("A.dll")).unwrap_err();
        assert!(matches!(err, CompileError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    /// Live (non-zombie) process check via procfs.
    #[cfg(target_os = "linux")]
    fn is_running(pid: u32) -> bool {
        std::fs::read_to_string(format!("/proc/{pid}/stat"))
            .is_ok_and(|stat| !stat.contains(") Z "))
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_timeout_kills_spawned_processes() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("A.dll");
        // the grandchild pid lands in the output file
        let compiler = shell("sleep 30 & echo $! > {output}; wait")
            .with_timeout(Duration::from_millis(200));

        let err = compiler.compile("", &pid_file).unwrap_err();
        assert!(matches!(err, CompileError::Timeout { .. }));

        let pid: u32 = std::fs::read_to_string(&pid_file)
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        let deadline = Instant::now() + Duration::from_secs(2);
        while is_running(pid) {
            assert!(Instant::now() < deadline, "grandchild {pid} survived the timeout");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = CommandCompiler::new("fixturegen-no-such-compiler");
        let err = compiler.compile("", &dir.path().join("A.dll")).unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }
}

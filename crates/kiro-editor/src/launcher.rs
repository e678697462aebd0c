//! Launching the editor at a source location.
//!
//! The command is built separately from spawning it so the argument vector
//! can be inspected without starting a process. Spawning is fire-and-forget:
//! stdio is detached and the child handle is dropped without waiting.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::platform::PlatformFamily;

/// Extension of workspace files preferred over the bare solution directory.
const WORKSPACE_EXTENSION: &str = "code-workspace";

/// macOS launcher used to start application bundles.
const MACOS_OPEN: &str = "open";

/// Normalized parameters of an open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// File to jump to; `None` opens the workspace only.
    pub file: Option<PathBuf>,
    /// One-based line, at least 1.
    pub line: u32,
    /// Column, at least 0.
    pub column: u32,
    /// Solution whose directory becomes the workspace.
    pub solution: PathBuf,
}

impl LaunchRequest {
    /// Build a request, clamping `line` to 1 and `column` to 0 from below.
    ///
    /// An empty `file` path is treated as no file.
    pub fn new(file: Option<&Path>, line: i32, column: i32, solution: &Path) -> Self {
        Self {
            file: file
                .filter(|f| !f.as_os_str().is_empty())
                .map(Path::to_path_buf),
            line: line.max(1).unsigned_abs(),
            column: column.max(0).unsigned_abs(),
            solution: solution.to_path_buf(),
        }
    }

    /// The `<file>:<line>:<column>` argument passed after `-g`.
    pub fn goto_target(&self) -> Option<OsString> {
        let file = self.file.as_ref()?;
        let mut target = file.as_os_str().to_os_string();
        target.push(format!(":{}:{}", self.line, self.column));
        Some(target)
    }
}

/// Program and arguments for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);
        cmd
    }
}

/// A started editor process.
#[derive(Debug, Clone)]
pub struct LaunchedProcess {
    pub pid: u32,
    pub command: CommandSpec,
}

/// Pick the workspace to open for `solution`.
///
/// This is the solution's directory, unless that directory holds exactly one
/// `*.code-workspace` file, in which case that file is used.
pub fn resolve_workspace(solution: &Path) -> PathBuf {
    let directory = match solution.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => return solution.to_path_buf(),
    };

    find_workspace_file(&directory).unwrap_or(directory)
}

fn find_workspace_file(directory: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(directory).ok()?;
    let mut workspaces = entries.flatten().map(|e| e.path()).filter(|path| {
        path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == WORKSPACE_EXTENSION)
    });

    let first = workspaces.next()?;
    match workspaces.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Build the command that opens `request` in the installation at `installation`.
pub fn build_command(
    family: PlatformFamily,
    installation: &Path,
    request: &LaunchRequest,
) -> CommandSpec {
    let mut editor_args: Vec<OsString> = vec![resolve_workspace(&request.solution).into()];
    if let Some(target) = request.goto_target() {
        editor_args.push("-g".into());
        editor_args.push(target);
    }

    match family {
        PlatformFamily::Windows | PlatformFamily::Linux => CommandSpec {
            program: installation.to_path_buf(),
            args: editor_args,
        },
        PlatformFamily::MacOs => {
            let mut args: Vec<OsString> = vec!["-n".into(), installation.into(), "--args".into()];
            args.extend(editor_args);
            CommandSpec {
                program: PathBuf::from(MACOS_OPEN),
                args,
            }
        }
    }
}

/// Build and spawn the editor command.
///
/// Success means the process started; whether the editor then shows the
/// requested location is not observed.
pub fn launch(
    family: PlatformFamily,
    installation: &Path,
    request: &LaunchRequest,
) -> Result<LaunchedProcess> {
    let command = build_command(family, installation, request);
    tracing::debug!(
        program = %command.program.display(),
        args = ?command.args,
        "launching editor"
    );

    let child = command
        .to_command()
        .spawn()
        .map_err(|source| Error::Launch {
            program: command.program.clone(),
            source,
        })?;
    let pid = child.id();

    // The child runs independently; stdio is null so dropping the handle is safe.
    drop(child);

    Ok(LaunchedProcess { pid, command })
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_request_clamps_line_and_column() {
        let req = LaunchRequest::new(Some(Path::new("a.cs")), -5, -10, Path::new("/p/x.sln"));
        assert_eq!(req.line, 1);
        assert_eq!(req.column, 0);

        let req = LaunchRequest::new(Some(Path::new("a.cs")), 0, 0, Path::new("/p/x.sln"));
        assert_eq!(req.line, 1);
        assert_eq!(req.column, 0);
    }

    #[test]
    fn test_request_keeps_valid_position() {
        let req = LaunchRequest::new(Some(Path::new("a.cs")), 42, 7, Path::new("/p/x.sln"));
        assert_eq!((req.line, req.column), (42, 7));
        assert_eq!(req.goto_target(), Some(OsString::from("a.cs:42:7")));
    }

    #[test]
    fn test_empty_file_means_no_file() {
        let req = LaunchRequest::new(Some(Path::new("")), 3, 1, Path::new("/p/x.sln"));
        assert_eq!(req.file, None);
        assert_eq!(req.goto_target(), None);
    }

    #[test]
    fn test_linux_command_with_file() {
        let req = LaunchRequest::new(
            Some(Path::new("/proj/Assets/Player.cs")),
            12,
            4,
            Path::new("/nonexistent/proj/Game.sln"),
        );
        let spec = build_command(PlatformFamily::Linux, Path::new("/opt/Kiro/kiro"), &req);

        assert_eq!(spec.program, PathBuf::from("/opt/Kiro/kiro"));
        assert_eq!(
            spec.args,
            os(&["/nonexistent/proj", "-g", "/proj/Assets/Player.cs:12:4"])
        );
    }

    #[test]
    fn test_windows_command_without_file() {
        let req = LaunchRequest::new(None, 1, 0, Path::new("/nonexistent/proj/Game.sln"));
        let spec = build_command(PlatformFamily::Windows, Path::new("C:/Kiro/Kiro.exe"), &req);

        assert_eq!(spec.program, PathBuf::from("C:/Kiro/Kiro.exe"));
        assert_eq!(spec.args, os(&["/nonexistent/proj"]));
    }

    #[test]
    fn test_macos_command_goes_through_open() {
        let req = LaunchRequest::new(
            Some(Path::new("test.cs")),
            1,
            0,
            Path::new("/nonexistent/proj/Game.sln"),
        );
        let spec = build_command(PlatformFamily::MacOs, Path::new("/Applications/Kiro.app"), &req);

        assert_eq!(spec.program, PathBuf::from("open"));
        assert_eq!(
            spec.args,
            os(&[
                "-n",
                "/Applications/Kiro.app",
                "--args",
                "/nonexistent/proj",
                "-g",
                "test.cs:1:0"
            ])
        );
    }

    #[test]
    fn test_negative_position_builds_same_command() {
        let exe = Path::new("/opt/Kiro/kiro");
        let sln = Path::new("/nonexistent/Invalid.sln");
        let clamped = LaunchRequest::new(Some(Path::new("test.cs")), -5, -3, sln);
        let plain = LaunchRequest::new(Some(Path::new("test.cs")), 1, 0, sln);

        assert_eq!(
            build_command(PlatformFamily::Linux, exe, &clamped),
            build_command(PlatformFamily::Linux, exe, &plain)
        );
    }

    #[test]
    fn test_workspace_file_preferred() {
        let temp = TempDir::new().unwrap();
        let workspace = temp.path().join("Game.code-workspace");
        fs::write(&workspace, "{}").unwrap();

        assert_eq!(resolve_workspace(&temp.path().join("Game.sln")), workspace);
    }

    #[test]
    fn test_ambiguous_workspace_files_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("A.code-workspace"), "{}").unwrap();
        fs::write(temp.path().join("B.code-workspace"), "{}").unwrap();

        assert_eq!(
            resolve_workspace(&temp.path().join("Game.sln")),
            temp.path().to_path_buf()
        );
    }

    #[test]
    fn test_bare_solution_name_uses_current_directory() {
        assert_eq!(resolve_workspace(Path::new("Game.sln")), PathBuf::from("."));
    }

    #[test]
    fn test_launch_missing_program_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("kiro");
        let req = LaunchRequest::new(None, 1, 0, &temp.path().join("Game.sln"));

        let err = launch(PlatformFamily::Linux, &missing, &req).unwrap_err();

        assert!(matches!(err, Error::Launch { .. }));
        assert!(err.to_string().contains("Kiro"));
    }
}

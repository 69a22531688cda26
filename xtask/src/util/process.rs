//! Running external tools to completion.

use std::io;
use std::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {}", describe_code(*.code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by a signal)".to_string(),
    }
}

impl ProcessError {
    /// Exit status the xtask itself should report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessError::Exit {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Run `cmd` with inherited stdio and wait for it. A non-zero exit is an error.
pub fn run_checked(cmd: &mut Command) -> Result<(), ProcessError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let status = cmd.status().map_err(|source| ProcessError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(ProcessError::Exit {
            program,
            code: status.code(),
        });
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        run_checked(&mut Command::new("true")).unwrap();
    }

    #[test]
    fn test_exit_status_is_kept() {
        let err = run_checked(Command::new("sh").args(["-c", "exit 7"])).unwrap_err();
        assert!(matches!(err, ProcessError::Exit { code: Some(7), .. }));
        assert_eq!(err.exit_code(), 7);
        assert_eq!(err.to_string(), "`sh` exited with status 7");
    }

    #[test]
    fn test_killed_by_signal() {
        let err = run_checked(Command::new("sh").args(["-c", "kill -9 $$"])).unwrap_err();
        assert!(matches!(err, ProcessError::Exit { code: None, .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "`sh` exited with no status (terminated by a signal)");
    }

    #[test]
    fn test_missing_program() {
        let err = run_checked(&mut Command::new("/nonexistent/qemu-system-x86_64")).unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}

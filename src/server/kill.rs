use std::io;
use std::process::{Child, Command};

/// Tree-termination strategy, selected once for the host platform. The serve
/// command fans out into descendants (npm spawns node, node spawns the dev
/// server), and on Windows terminating only the top-level handle leaves the
/// rest of the tree orphaned.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TreeKill {
    /// `taskkill /F /T` addressed by pid, reaping the whole tree.
    Taskkill,
    /// Direct kill of the child handle.
    Direct,
}

impl TreeKill {
    pub fn select() -> Self {
        if cfg!(windows) {
            TreeKill::Taskkill
        } else {
            TreeKill::Direct
        }
    }

    /// Terminate the tree rooted at `child` and reap it. A child that
    /// already exited on its own is not an error.
    pub fn terminate(self, child: &mut Child) -> io::Result<()> {
        match self {
            TreeKill::Taskkill => {
                Command::new("taskkill")
                    .args(["/F", "/T", "/PID", &child.id().to_string()])
                    .output()?;
            }
            TreeKill::Direct => {
                if let Err(err) = child.kill() {
                    if err.kind() != io::ErrorKind::InvalidInput {
                        return Err(err);
                    }
                }
            }
        }
        child.wait()?;
        Ok(())
    }
}

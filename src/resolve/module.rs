//! Node module resolution through a helper process.
//!
//! Resolution follows Node's own algorithm, so the lookup runs inside a Node
//! helper. The exchange is strictly two messages plus a teardown:
//!
//! ```text
//! -> {"c":"rs","a":"<module>"}
//! <- {"c":"r","s":true,"r":"<path>"} | {"c":"r","s":false}
//! -> {"c":"e"}
//! ```

use super::channel::Channel;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// How long a helper gets to answer before the attempt is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The teardown message is a courtesy; the helper is killed right after.
const TEARDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// Default helper program, run with `node -e`.
const RESOLVER_SCRIPT: &str = r#"
let pending = Buffer.alloc(0);
function send(message) {
  const body = Buffer.from(JSON.stringify(message), 'utf8');
  process.stdout.write('Content-Length: ' + body.length + '\r\n\r\n');
  process.stdout.write(body);
}
process.stdin.on('data', (chunk) => {
  pending = Buffer.concat([pending, chunk]);
  for (;;) {
    const end = pending.indexOf('\r\n\r\n');
    if (end < 0) return;
    const header = /content-length:\s*(\d+)/i.exec(pending.slice(0, end).toString('ascii'));
    if (!header) process.exit(1);
    const start = end + 4;
    const length = parseInt(header[1], 10);
    if (pending.length < start + length) return;
    const message = JSON.parse(pending.slice(start, start + length).toString('utf8'));
    pending = pending.slice(start + length);
    if (message.c === 'rs') {
      try {
        send({ c: 'r', s: true, r: require.resolve(message.a) });
      } catch (e) {
        send({ c: 'r', s: false });
      }
    } else if (message.c === 'e') {
      process.exit(0);
    }
  }
});
"#;

/// Distinct failure modes of a resolution attempt.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("cannot start resolution helper: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("resolution helper protocol error: {0}")]
    Ipc(String),

    #[error("cannot find module '{0}'")]
    NotFound(String),
}

#[derive(Serialize)]
struct ResolveRequest<'a> {
    c: &'static str,
    a: &'a str,
}

#[derive(Serialize)]
struct Teardown {
    c: &'static str,
}

#[derive(Deserialize)]
struct ResolveReply {
    c: String,
    s: bool,
    #[serde(default)]
    r: Option<String>,
}

/// The program started to answer resolution requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl HelperCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `node -e <built-in resolver script>`.
    pub fn node() -> Self {
        Self::new("node").arg("-e").arg(RESOLVER_SCRIPT)
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Default for HelperCommand {
    fn default() -> Self {
        Self::node()
    }
}

/// Resolves module names the way Node's `require.resolve` does.
///
/// ```no_run
/// use lsp_wire::resolve::ModuleResolver;
///
/// # async fn run() -> Result<(), lsp_wire::resolve::ResolveError> {
/// let path = ModuleResolver::new()
///     .with_working_directory("/work/project")
///     .resolve("typescript")
///     .await?;
/// println!("{}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ModuleResolver {
    helper: HelperCommand,
    node_path: Option<PathBuf>,
    working_directory: Option<PathBuf>,
    timeout: Duration,
}

impl Default for ModuleResolver {
    fn default() -> Self {
        Self {
            helper: HelperCommand::default(),
            node_path: None,
            working_directory: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ModuleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_helper(mut self, helper: HelperCommand) -> Self {
        self.helper = helper;
        self
    }

    /// Exported to the helper as `NODE_PATH`.
    pub fn with_node_path(mut self, node_path: impl Into<PathBuf>) -> Self {
        self.node_path = Some(node_path.into());
        self
    }

    pub fn with_working_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(directory.into());
        self
    }

    /// Upper bound on the request/reply exchange with the helper.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve `module` to a file path.
    ///
    /// Each call starts a fresh helper, which is killed once the exchange is
    /// over or the future is dropped.
    pub async fn resolve(&self, module: &str) -> Result<PathBuf, ResolveError> {
        let mut command = Command::new(&self.helper.program);
        command
            .args(&self.helper.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        if let Some(node_path) = &self.node_path {
            command.env("NODE_PATH", node_path);
        }
        if let Some(directory) = &self.working_directory {
            command.current_dir(directory);
        }

        log::debug!("resolving module {} with {:?}", module, self.helper.program);
        let mut child = command.spawn().map_err(ResolveError::Spawn)?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ResolveError::Ipc("helper stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ResolveError::Ipc("helper stdout unavailable".to_string()))?;
        let mut channel = Channel::new(stdout, stdin);

        let outcome = match tokio::time::timeout(self.timeout, exchange(&mut channel, module)).await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(ResolveError::Ipc(format!(
                "helper did not answer within {:?}",
                self.timeout
            ))),
        };

        match tokio::time::timeout(TEARDOWN_TIMEOUT, channel.send(&Teardown { c: "e" })).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::trace!("resolution helper teardown failed: {}", e),
            Err(_) => log::trace!("resolution helper teardown timed out"),
        }
        drop(channel);
        if let Err(e) = child.kill().await {
            log::trace!("resolution helper already gone: {}", e);
        }

        outcome
    }
}

async fn exchange<R, W>(channel: &mut Channel<R, W>, module: &str) -> Result<PathBuf, ResolveError>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    channel.send(&ResolveRequest { c: "rs", a: module }).await?;
    let reply: ResolveReply = channel.receive().await?;

    if reply.c != "r" {
        return Err(ResolveError::Ipc(format!(
            "unexpected reply kind '{}'",
            reply.c
        )));
    }
    if !reply.s {
        return Err(ResolveError::NotFound(module.to_string()));
    }
    reply
        .r
        .map(PathBuf::from)
        .ok_or_else(|| ResolveError::Ipc("successful reply without a path".to_string()))
}

/// Root of globally installed Node modules, as reported by npm.
///
/// `None` when npm is missing or reports nothing.
pub async fn resolve_global_node_path() -> Option<PathBuf> {
    let npm = if cfg!(windows) { "npm.cmd" } else { "npm" };
    let output = match Command::new(npm)
        .args(["config", "get", "prefix"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            log::debug!("cannot run {}: {}", npm, e);
            return None;
        }
    };
    if !output.status.success() {
        log::debug!("{} config get prefix exited with {}", npm, output.status);
        return None;
    }

    let prefix = String::from_utf8_lossy(&output.stdout).trim().to_string();
    global_modules_dir(&prefix)
}

fn global_modules_dir(prefix: &str) -> Option<PathBuf> {
    if prefix.is_empty() {
        return None;
    }
    let prefix = Path::new(prefix);
    Some(if cfg!(windows) {
        prefix.join("node_modules")
    } else {
        prefix.join("lib").join("node_modules")
    })
}

use std::ffi::OsString;
use std::fmt;

/// Container runtime used for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeChoice {
    Podman,
    Docker,
    /// Taken verbatim from `CONTAINER_RUNTIME`.
    Override(String),
}

impl RuntimeChoice {
    /// Auto-detected runtimes, most preferred first.
    pub const PROBE_ORDER: [RuntimeChoice; 2] = [RuntimeChoice::Podman, RuntimeChoice::Docker];

    /// Executable name (or path, for overrides) to invoke.
    pub fn program(&self) -> &str {
        match self {
            RuntimeChoice::Podman => "podman",
            RuntimeChoice::Docker => "docker",
            RuntimeChoice::Override(program) => program,
        }
    }
}

impl fmt::Display for RuntimeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A fully assembled runtime call: `program` followed by discrete `args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl RuntimeCommand {
    pub fn new(runtime: &RuntimeChoice) -> Self {
        Self {
            program: runtime.program().to_string(),
            args: Vec::new(),
        }
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

    /// Shell-quoted rendering for logs. Never executed.
    pub fn display(&self) -> String {
        let words: Vec<String> = std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect();
        shell_words::join(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_names() {
        assert_eq!(RuntimeChoice::Podman.program(), "podman");
        assert_eq!(RuntimeChoice::Docker.to_string(), "docker");
        assert_eq!(
            RuntimeChoice::Override("/opt/bin/nerdctl".into()).program(),
            "/opt/bin/nerdctl"
        );
    }

    #[test]
    fn podman_is_probed_first() {
        assert_eq!(RuntimeChoice::PROBE_ORDER[0], RuntimeChoice::Podman);
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = RuntimeCommand::new(&RuntimeChoice::Docker)
            .arg("logs")
            .args(["--since", "10 minutes ago"])
            .arg("musicbot2-lavalink");
        assert_eq!(
            cmd.display(),
            "docker logs --since '10 minutes ago' musicbot2-lavalink"
        );
    }
}

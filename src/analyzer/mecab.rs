//! Long-lived MeCab process adapter.
//!
//! The analyzer is an explicit service object, constructed once by the
//! host and reused for its lifetime: the child process is spawned lazily
//! on first use, and each call is one line written to its stdin plus one
//! blocking line read from its stdout. There is no global singleton, no
//! timeout and no retry; if the binary cannot be started the call fails
//! with [`YomiganaError::AnalyzerUnavailable`] and it is up to the caller
//! to decide what to do.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::MorphAnalyzer;
use crate::analysis::token::MorphToken;
use crate::error::{Result, YomiganaError};

lazy_static! {
    /// One output node: `surface[reading]`, reading possibly empty. The
    /// greedy surface group lets brackets appear inside the surface.
    static ref NODE_PATTERN: Regex = Regex::new(r"^(.+)\[(.*)\]$").unwrap();
}

/// Configuration for the MeCab child process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MecabConfig {
    /// The analyzer binary to run.
    pub command: PathBuf,

    /// Output-format arguments. The defaults make MeCab emit
    /// space-separated `surface[reading]` nodes, one sentence per line,
    /// with empty readings for unknown words.
    pub args: Vec<String>,

    /// Optional dictionary directory, passed as `-d`.
    pub dictionary_dir: Option<PathBuf>,
}

impl Default for MecabConfig {
    fn default() -> Self {
        MecabConfig {
            command: PathBuf::from("mecab"),
            args: vec![
                "--node-format=%m[%f[7]] ".to_string(),
                "--eos-format=\n".to_string(),
                "--unk-format=%m[] ".to_string(),
            ],
            dictionary_dir: None,
        }
    }
}

impl MecabConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut contents = String::new();
        File::open(path.as_ref())?.read_to_string(&mut contents)?;
        let config: MecabConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

struct MecabProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

/// A long-lived handle to an external MeCab-compatible process.
///
/// Not safe for concurrent in-flight calls: one outstanding request at a
/// time, which `&mut self` on [`MorphAnalyzer::analyze`] enforces.
pub struct MecabAnalyzer {
    config: MecabConfig,
    process: Option<MecabProcess>,
}

impl MecabAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MecabConfig::default())
    }

    /// Create an analyzer with an explicit configuration.
    pub fn with_config(config: MecabConfig) -> Self {
        MecabAnalyzer {
            config,
            process: None,
        }
    }

    fn ensure_open(&mut self) -> Result<&mut MecabProcess> {
        if self.process.is_none() {
            self.process = Some(self.spawn()?);
        }
        match self.process.as_mut() {
            Some(process) => Ok(process),
            None => Err(YomiganaError::analyzer_unavailable(
                "analyzer process not initialized",
            )),
        }
    }

    fn spawn(&self) -> Result<MecabProcess> {
        let mut command = Command::new(&self.config.command);
        command.args(&self.config.args);
        if let Some(dir) = &self.config.dictionary_dir {
            command.arg("-d").arg(dir);
        }
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        debug!("spawning analyzer process: {command:?}");
        let mut child = command.spawn().map_err(|e| {
            YomiganaError::analyzer_unavailable(format!(
                "failed to start {}: {e}",
                self.config.command.display()
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| YomiganaError::analyzer_unavailable("analyzer stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| YomiganaError::analyzer_unavailable("analyzer stdout not captured"))?;

        Ok(MecabProcess {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Default for MecabAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphAnalyzer for MecabAnalyzer {
    fn analyze(&mut self, text: &str) -> Result<Vec<MorphToken>> {
        let process = self.ensure_open()?;

        process.stdin.write_all(text.as_bytes())?;
        process.stdin.write_all(b"\n")?;
        process.stdin.flush()?;

        let mut line = String::new();
        process.stdout.read_line(&mut line)?;
        let line = line.trim_end_matches(['\r', '\n']);
        debug!("analyzer output: {line}");

        parse_nodes(line)
    }

    fn name(&self) -> &'static str {
        "mecab"
    }
}

impl Drop for MecabAnalyzer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.child.kill();
            let _ = process.child.wait();
        }
    }
}

/// Parse one analyzer output line into tokens.
///
/// Nodes are space-separated; the node format leaves a trailing separator,
/// so empty fields are skipped. A node that does not parse as
/// `surface[reading]` is reported with its text, never silently turned
/// into an empty annotation.
pub fn parse_nodes(line: &str) -> Result<Vec<MorphToken>> {
    let mut tokens = Vec::new();
    for node in line.split(' ') {
        if node.is_empty() {
            continue;
        }
        let caps = NODE_PATTERN
            .captures(node)
            .ok_or_else(|| YomiganaError::malformed_node(node))?;
        tokens.push(MorphToken::new(&caps[1], &caps[2]));
    }
    Ok(tokens)
}

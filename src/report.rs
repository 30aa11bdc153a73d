//! Diagnostics and progress sink passed explicitly into every pipeline stage.
//!
//! Components never log through a global logger. They hand [`Diagnostic`]s and
//! [`Progress`] ticks to a [`Reporter`]; the binary uses [`ConsoleReporter`]
//! (tracing + in-place terminal progress), tests use [`MemoryReporter`].

use std::fmt;
use std::io::{self, Write};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A blob was copied into staging
    Staged,
    /// The source tree was absent; nothing was staged
    SourceMissing,
    /// A staging entry with the same basename already existed
    FileCollision,
    /// A manifest record was copied to its destination
    Resolved,
    /// No staged blob for a record's hash
    SourceBlobMissing,
    /// An I/O error during a copy
    CopyFailure,
    /// A file or directory was removed during cleanup
    Deleted,
    /// Cleanup stopped early
    CleanupFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn info(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            kind,
            message: message.into(),
        }
    }

    pub fn warn(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            kind,
            message: message.into(),
        }
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            kind,
            message: message.into(),
        }
    }
}

/// Pipeline phase a progress tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stage,
    Resolve,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Stage => write!(f, "stage"),
            Phase::Resolve => write!(f, "resolve"),
        }
    }
}

/// A counted-loop progress tick (`current` is 1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub phase: Phase,
    pub current: usize,
    pub total: usize,
    /// Short description of the item just processed
    pub detail: String,
}

pub trait Reporter {
    fn diagnostic(&mut self, diagnostic: Diagnostic);

    fn progress(&mut self, progress: Progress);

    /// A newline-terminated status line between phases
    fn status(&mut self, line: &str);
}

/// Forwards diagnostics to `tracing` and draws progress on a terminal writer.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    /// True while the last thing written was an unterminated `\r` progress line
    in_progress_line: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            in_progress_line: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn end_progress_line(&mut self) {
        if self.in_progress_line {
            let _ = writeln!(self.out);
            self.in_progress_line = false;
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Info => tracing::info!(kind = ?diagnostic.kind, "{}", diagnostic.message),
            Level::Warn => tracing::warn!(kind = ?diagnostic.kind, "{}", diagnostic.message),
            Level::Error => tracing::error!(kind = ?diagnostic.kind, "{}", diagnostic.message),
        }
    }

    fn progress(&mut self, progress: Progress) {
        // Terminal output is best-effort; a closed stdout must not abort a run.
        let _ = match progress.phase {
            Phase::Stage => write!(
                self.out,
                "\rCopying {}/{} files into staging.",
                progress.current, progress.total
            ),
            Phase::Resolve => write!(
                self.out,
                "\r[{}/{}] File copied: {}",
                progress.current, progress.total, progress.detail
            ),
        };
        let _ = self.out.flush();
        self.in_progress_line = true;
    }

    fn status(&mut self, line: &str) {
        self.end_progress_line();
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }
}

/// Captures everything in memory for assertions.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub diagnostics: Vec<Diagnostic>,
    pub progress: Vec<Progress>,
    pub status_lines: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.level == level)
    }
}

impl Reporter for MemoryReporter {
    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn progress(&mut self, progress: Progress) {
        self.progress.push(progress);
    }

    fn status(&mut self, line: &str) {
        self.status_lines.push(line.to_string());
    }
}

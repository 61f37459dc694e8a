//! Executes commands against a list of integers

use std::fmt;

use tracing::{debug, info, warn};

use super::{Command, ScriptError, SortOrder};
use crate::ForwardList;

/// Interpreter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Record a snapshot of the list after every step
    pub trace_steps: bool,

    /// Abort on the first failing line (otherwise log and continue)
    pub stop_on_error: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            trace_steps: false,
            stop_on_error: true,
        }
    }
}

impl ScriptOptions {
    /// Enable or disable per-step snapshots
    pub fn with_trace_steps(self, trace_steps: bool) -> Self {
        Self {
            trace_steps,
            ..self
        }
    }

    /// Continue past failing lines
    pub fn keep_going(self) -> Self {
        Self {
            stop_on_error: false,
            ..self
        }
    }
}

/// Result of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Structural change with nothing to report
    Done,
    /// Value removed by a pop (`None` on an empty list)
    Popped(Option<i64>),
    /// Number of elements removed
    Removed(usize),
    /// Index of the first match
    Found(Option<usize>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("ok"),
            Outcome::Popped(Some(value)) => write!(f, "popped {}", value),
            Outcome::Popped(None) => f.write_str("popped nothing"),
            Outcome::Removed(count) => write!(f, "removed {}", count),
            Outcome::Found(Some(index)) => write!(f, "found at {}", index),
            Outcome::Found(None) => f.write_str("not found"),
        }
    }
}

/// Record of one executed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based line number (position in the op list for inline ops)
    pub line: usize,
    /// Command that ran
    pub command: Command,
    /// What it did
    pub outcome: Outcome,
    /// List contents afterwards, when step tracing is on
    pub snapshot: Option<Vec<i64>>,
}

/// Summary of a script run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Successful steps in execution order
    pub steps: Vec<StepReport>,
    /// Failed lines (only when continuing past errors)
    pub failures: Vec<ScriptError>,
}

/// Drives a [`ForwardList<i64>`] with [`Command`]s
#[derive(Debug)]
pub struct Interpreter {
    list: ForwardList<i64>,
    options: ScriptOptions,
}

impl Interpreter {
    /// Start from `list`
    pub fn new(list: ForwardList<i64>, options: ScriptOptions) -> Self {
        Self { list, options }
    }

    /// Current list
    pub fn list(&self) -> &ForwardList<i64> {
        &self.list
    }

    /// Consume the interpreter, yielding the list
    pub fn into_list(self) -> ForwardList<i64> {
        self.list
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome, ScriptError> {
        let list = &mut self.list;
        let outcome = match command {
            Command::PushFront(value) => {
                list.push_front(value);
                Outcome::Done
            }
            Command::PushBack(value) => {
                list.push_back(value);
                Outcome::Done
            }
            Command::PopFront => Outcome::Popped(list.pop_front()),
            Command::PopBack => Outcome::Popped(list.pop_back()),
            Command::Insert { index, value } => {
                let position = list.cursor_at(index)?;
                list.insert(position, value);
                Outcome::Done
            }
            Command::InsertN {
                index,
                count,
                value,
            } => {
                let position = list.cursor_at(index)?;
                list.insert_n(position, count, value);
                Outcome::Done
            }
            Command::Erase { index } => {
                let position = list.cursor_at(index)?;
                let before = list.len();
                list.erase(position);
                Outcome::Removed(before - list.len())
            }
            Command::EraseRange { from, to } => {
                let first = list.cursor_at(from)?;
                let last = list.cursor_at(to)?;
                let before = list.len();
                list.erase_range(first, last);
                Outcome::Removed(before - list.len())
            }
            Command::Clear => {
                let before = list.len();
                list.clear();
                Outcome::Removed(before)
            }
            Command::Reverse => {
                list.reverse();
                Outcome::Done
            }
            Command::Unique => Outcome::Removed(list.unique()),
            Command::Remove(value) => Outcome::Removed(list.remove(&value)),
            Command::RemoveGreater(bound) => Outcome::Removed(list.remove_if(|v| *v > bound)),
            Command::RemoveLess(bound) => Outcome::Removed(list.remove_if(|v| *v < bound)),
            Command::Find(value) => {
                let found = list.find(&value);
                Outcome::Found((!found.is_end()).then(|| list.distance(list.begin(), found)))
            }
            Command::Sort(SortOrder::Ascending) => {
                list.sort();
                Outcome::Done
            }
            Command::Sort(SortOrder::Descending) => {
                list.sort_by(|a, b| b.cmp(a));
                Outcome::Done
            }
        };

        debug!(%command, %outcome, len = self.list.len(), "executed");
        Ok(outcome)
    }

    /// Parse and execute a sequence of lines
    ///
    /// `#` starts a comment; blank lines are skipped. Line numbers in
    /// errors and reports are 1-based.
    pub fn run_lines<'a, I>(&mut self, lines: I) -> Result<ScriptReport, ScriptError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = ScriptReport::default();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line = idx + 1;
            let text = raw.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            let result = text
                .parse::<Command>()
                .and_then(|command| self.execute(command).map(|outcome| (command, outcome)));

            match result {
                Ok((command, outcome)) => {
                    let snapshot = self
                        .options
                        .trace_steps
                        .then(|| self.list.iter().copied().collect());
                    report.steps.push(StepReport {
                        line,
                        command,
                        outcome,
                        snapshot,
                    });
                }
                Err(err) if self.options.stop_on_error => return Err(err.at_line(line)),
                Err(err) => {
                    warn!(line, error = %err, "skipping failed command");
                    report.failures.push(err.at_line(line));
                }
            }
        }

        info!(
            steps = report.steps.len(),
            failures = report.failures.len(),
            len = self.list.len(),
            "script finished"
        );
        Ok(report)
    }

    /// Parse and execute a whole script text
    pub fn run_script(&mut self, script: &str) -> Result<ScriptReport, ScriptError> {
        self.run_lines(script.lines())
    }
}

//! Textual command language for driving a list
//!
//! One command per line, keyword first, arguments separated by
//! whitespace:
//!
//! ```text
//! push_back 5
//! insert 2 7        # insert 7 before index 2
//! erase_range 0 3
//! sort desc
//! ```
//!
//! Indices count from `begin()`; an index equal to the length names `end()`.

mod interpreter;

pub use interpreter::{Interpreter, Outcome, ScriptOptions, ScriptReport, StepReport};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ListError;

/// Largest `count` an `insert_n` command may request
pub const MAX_INSERT_COUNT: usize = 1 << 20;

/// Errors from parsing or executing commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Blank input where a command was expected
    #[error("empty command")]
    Empty,

    /// Keyword not recognised
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Wrong number of arguments
    #[error("'{command}' expects {expected} argument(s), got {found}")]
    Arity {
        /// Command keyword
        command: &'static str,
        /// Arguments the command takes
        expected: usize,
        /// Arguments supplied
        found: usize,
    },

    /// Argument is not a valid integer
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Sort order other than `asc`/`desc`
    #[error("invalid sort order '{0}' (expected asc or desc)")]
    InvalidOrder(String),

    /// Range with its start after its end
    #[error("invalid range {from}..{to}")]
    InvalidRange {
        /// Start index
        from: usize,
        /// End index
        to: usize,
    },

    /// `insert_n` asked for more copies than [`MAX_INSERT_COUNT`]
    #[error("count {count} exceeds the limit of {max}")]
    CountTooLarge {
        /// Requested copies
        count: usize,
        /// Allowed maximum
        max: usize,
    },

    /// Cursor lookup failed
    #[error(transparent)]
    List(#[from] ListError),

    /// Error annotated with its script line
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number
        line: usize,
        /// Underlying error
        source: Box<ScriptError>,
    },
}

impl ScriptError {
    /// Attach a 1-based line number
    pub fn at_line(self, line: usize) -> Self {
        ScriptError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Direction for `sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl FromStr for SortOrder {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ScriptError::InvalidOrder(s.to_string())),
        }
    }
}

/// One list operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prepend a value
    PushFront(i64),
    /// Append a value
    PushBack(i64),
    /// Remove the first element
    PopFront,
    /// Remove the last element
    PopBack,
    /// Insert `value` before `index`
    Insert {
        /// Position
        index: usize,
        /// Value to insert
        value: i64,
    },
    /// Insert `count` copies of `value` before `index`
    InsertN {
        /// Position
        index: usize,
        /// Number of copies
        count: usize,
        /// Value to insert
        value: i64,
    },
    /// Erase the element at `index`
    Erase {
        /// Position
        index: usize,
    },
    /// Erase `[from, to)`
    EraseRange {
        /// First index erased
        from: usize,
        /// First index kept
        to: usize,
    },
    /// Remove everything
    Clear,
    /// Reverse in place
    Reverse,
    /// Collapse adjacent duplicates
    Unique,
    /// Remove every element equal to the value
    Remove(i64),
    /// Remove every element greater than the value
    RemoveGreater(i64),
    /// Remove every element less than the value
    RemoveLess(i64),
    /// Report the index of the first element equal to the value
    Find(i64),
    /// Stable sort
    Sort(SortOrder),
}

impl Command {
    /// Keyword as written in scripts
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::PushFront(_) => "push_front",
            Command::PushBack(_) => "push_back",
            Command::PopFront => "pop_front",
            Command::PopBack => "pop_back",
            Command::Insert { .. } => "insert",
            Command::InsertN { .. } => "insert_n",
            Command::Erase { .. } => "erase",
            Command::EraseRange { .. } => "erase_range",
            Command::Clear => "clear",
            Command::Reverse => "reverse",
            Command::Unique => "unique",
            Command::Remove(_) => "remove",
            Command::RemoveGreater(_) => "remove_gt",
            Command::RemoveLess(_) => "remove_lt",
            Command::Find(_) => "find",
            Command::Sort(_) => "sort",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Command::PushFront(v)
            | Command::PushBack(v)
            | Command::Remove(v)
            | Command::RemoveGreater(v)
            | Command::RemoveLess(v)
            | Command::Find(v) => write!(f, "{} {}", keyword, v),
            Command::Insert { index, value } => write!(f, "{} {} {}", keyword, index, value),
            Command::InsertN {
                index,
                count,
                value,
            } => write!(f, "{} {} {} {}", keyword, index, count, value),
            Command::Erase { index } => write!(f, "{} {}", keyword, index),
            Command::EraseRange { from, to } => write!(f, "{} {} {}", keyword, from, to),
            Command::Sort(SortOrder::Ascending) => write!(f, "{} asc", keyword),
            Command::Sort(SortOrder::Descending) => write!(f, "{} desc", keyword),
            Command::PopFront
            | Command::PopBack
            | Command::Clear
            | Command::Reverse
            | Command::Unique => f.write_str(keyword),
        }
    }
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(ScriptError::Empty)?.to_ascii_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "push_front" => Command::PushFront(number(arity("push_front", &args, 1)?[0])?),
            "push_back" => Command::PushBack(number(arity("push_back", &args, 1)?[0])?),
            "pop_front" => {
                arity("pop_front", &args, 0)?;
                Command::PopFront
            }
            "pop_back" => {
                arity("pop_back", &args, 0)?;
                Command::PopBack
            }
            "insert" => {
                let args = arity("insert", &args, 2)?;
                Command::Insert {
                    index: number(args[0])?,
                    value: number(args[1])?,
                }
            }
            "insert_n" => {
                let args = arity("insert_n", &args, 3)?;
                let count: usize = number(args[1])?;
                if count > MAX_INSERT_COUNT {
                    return Err(ScriptError::CountTooLarge {
                        count,
                        max: MAX_INSERT_COUNT,
                    });
                }
                Command::InsertN {
                    index: number(args[0])?,
                    count,
                    value: number(args[2])?,
                }
            }
            "erase" => Command::Erase {
                index: number(arity("erase", &args, 1)?[0])?,
            },
            "erase_range" => {
                let args = arity("erase_range", &args, 2)?;
                let (from, to): (usize, usize) = (number(args[0])?, number(args[1])?);
                if from > to {
                    return Err(ScriptError::InvalidRange { from, to });
                }
                Command::EraseRange { from, to }
            }
            "clear" => {
                arity("clear", &args, 0)?;
                Command::Clear
            }
            "reverse" => {
                arity("reverse", &args, 0)?;
                Command::Reverse
            }
            "unique" => {
                arity("unique", &args, 0)?;
                Command::Unique
            }
            "remove" => Command::Remove(number(arity("remove", &args, 1)?[0])?),
            "remove_gt" => Command::RemoveGreater(number(arity("remove_gt", &args, 1)?[0])?),
            "remove_lt" => Command::RemoveLess(number(arity("remove_lt", &args, 1)?[0])?),
            "find" => Command::Find(number(arity("find", &args, 1)?[0])?),
            "sort" => match args.as_slice() {
                [] => Command::Sort(SortOrder::Ascending),
                [order] => Command::Sort(order.parse()?),
                _ => {
                    return Err(ScriptError::Arity {
                        command: "sort",
                        expected: 1,
                        found: args.len(),
                    })
                }
            },
            _ => return Err(ScriptError::UnknownCommand(keyword)),
        };
        Ok(command)
    }
}

fn arity<'a, 'b>(
    command: &'static str,
    args: &'b [&'a str],
    expected: usize,
) -> Result<&'b [&'a str], ScriptError> {
    if args.len() != expected {
        return Err(ScriptError::Arity {
            command,
            expected,
            found: args.len(),
        });
    }
    Ok(args)
}

fn number<N: FromStr>(token: &str) -> Result<N, ScriptError> {
    token
        .parse()
        .map_err(|_| ScriptError::InvalidNumber(token.to_string()))
}

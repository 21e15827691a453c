// SPDX-License-Identifier: MIT

//! Session scripts — one command per line.
//!
//! | Command             | Action                                   |
//! |---------------------|------------------------------------------|
//! | `type <text>`       | User types at the caret                  |
//! | `caret <n>`         | Move the caret to char index `n`         |
//! | `blur`              | Editor loses focus                       |
//! | `click <button>`    | Toolbar button click                     |
//! | `tab <code\|name>`  | Category tab click                       |
//! | `search [query]`    | Set the search text (empty → default tab)|
//! | `pick <name>`       | Click the emoji with that key            |
//! | `outside`           | Click outside the palette                |
//! | `show`              | Print the palette and the document       |
//! | `doc`               | Print the document                       |
//! | `json`              | Print the document as insert ops         |
//! | `load <json>`       | Replace the document with insert ops     |
//!
//! Blank lines and lines starting with `#` are skipped.

use thiserror::Error;

use emoji_catalog::{Category, ParseCategoryError};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Caret(usize),
    Blur,
    Click(String),
    Tab(Category),
    Search(String),
    Pick(String),
    Outside,
    Show,
    Doc,
    Json,
    Load(String),
}

/// Why a line didn't parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank line or comment.
    #[error("nothing to run")]
    Skip,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0}: missing argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    BadCategory(#[from] ParseCategoryError),
    #[error("caret: not an index: {0}")]
    BadIndex(String),
}

/// Parse one script line.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Err(ParseError::Skip);
    }

    // Split into command and argument. `type` keeps its argument verbatim
    // (minus the one separating space) so leading spaces can be typed.
    let (cmd, raw_arg) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let arg = raw_arg.trim();

    match cmd {
        "type" => {
            if raw_arg.is_empty() {
                Err(ParseError::MissingArgument("type"))
            } else {
                Ok(Command::Type(raw_arg.to_string()))
            }
        }
        "caret" => arg
            .parse()
            .map(Command::Caret)
            .map_err(|_| ParseError::BadIndex(arg.to_string())),
        "blur" => Ok(Command::Blur),
        "click" => required("click", arg).map(|a| Command::Click(a.to_string())),
        "tab" => required("tab", arg)?
            .parse()
            .map(Command::Tab)
            .map_err(ParseError::BadCategory),
        "search" => Ok(Command::Search(arg.to_string())),
        "pick" => required("pick", arg).map(|a| Command::Pick(a.to_string())),
        "outside" => Ok(Command::Outside),
        "show" => Ok(Command::Show),
        "doc" => Ok(Command::Doc),
        "json" => Ok(Command::Json),
        "load" => required("load", arg).map(|a| Command::Load(a.to_string())),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn required<'a>(cmd: &'static str, arg: &'a str) -> Result<&'a str, ParseError> {
    if arg.is_empty() {
        Err(ParseError::MissingArgument(cmd))
    } else {
        Ok(arg)
    }
}

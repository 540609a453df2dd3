// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display, Formatter};
use itertools::Itertools;

/// A parsed source document: every command line, with comments and blank
/// lines already dropped.
#[derive(Debug)]
pub struct Program {
    pub filename: String,
    pub lines: Vec<Line>,
}

/// A command line together with its 1-based position in the source.
#[derive(Debug)]
pub struct Line {
    pub lineno: usize,
    pub command: Command,
}

/// One tokenized line: the keyword and the raw argument, if any.
///
/// The argument is the part after the first separator, with any further
/// separators replaced by commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub keyword: String,
    pub argument: Option<String>,
}

impl Command {
    pub fn new(keyword: impl Into<String>, argument: Option<&str>) -> Self {
        Command { keyword: keyword.into(), argument: argument.map(Into::into) }
    }
}

/// A target position and orientation.  Fields are kept as written in the
/// source, they are never interpreted as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pose {
    pub x: String,
    pub y: String,
    pub z: String,
    pub q1: String,
    pub q2: String,
    pub q3: String,
}

impl Pose {
    pub const FIELDS: usize = 6;

    /// Split a move argument into its six fields.
    ///
    /// Returns the number of non-empty fields found if there are not
    /// exactly six of them.
    pub fn from_argument(arg: &str) -> Result<Pose, usize> {
        let fields = arg.split(',').map(str::trim).collect_vec();
        let found = fields.iter().filter(|f| !f.is_empty()).count();
        if fields.len() != Self::FIELDS || found != Self::FIELDS {
            return Err(found);
        }
        let (x, y, z, q1, q2, q3) = fields.into_iter().map(String::from)
                                          .collect_tuple().expect("six fields");
        Ok(Pose { x, y, z, q1, q2, q3 })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.command)?;
        }
        Ok(())
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.argument {
            Some(arg) => write!(f, "{}/{}", self.keyword, arg),
            None => write!(f, "{}", self.keyword),
        }
    }
}

impl Display for Pose {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "p[{}, {}, {}, {}, {}, {}]", self.x, self.y, self.z, self.q1, self.q2, self.q3)
    }
}

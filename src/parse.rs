// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use itertools::Itertools;
use pest_derive::Parser;
use pest::{Parser, Span, error::{Error, ErrorVariant, LineColLocation}, iterators::Pair};

use crate::ast::*;

#[derive(Parser)]
#[grammar = "gcode.pest"]
pub struct GcodeParser;

pub type ParseResult<T> = Result<T, Error<Rule>>;

fn make_command(pair: Pair<Rule>) -> Option<Command> {
    let mut inner = pair.into_inner();
    let keyword = inner.next().expect("keyword").as_str().trim();
    // lines like "/500" carry no command at all
    if keyword.is_empty() {
        return None;
    }
    let argument = inner.map(|seg| seg.as_str()).join(",");
    Some(Command {
        keyword: keyword.into(),
        argument: if argument.is_empty() { None } else { Some(argument) },
    })
}

/// Tokenize a single source line.
///
/// Returns `None` for blank lines and comments.  The keyword is not checked
/// against any vocabulary.
pub fn parse_line(raw: &str) -> ParseResult<Option<Command>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }
    for pair in GcodeParser::parse(Rule::line, line)? {
        match pair.as_rule() {
            Rule::command => return Ok(make_command(pair)),
            Rule::comment | Rule::EOI => (),
            _ => unreachable!()
        }
    }
    Ok(None)
}

/// Parse a whole document, keeping the line number of each command.
///
/// Errors are positioned within the whole document, not the single line.
pub fn parse(filename: &str, input: &str) -> ParseResult<Program> {
    let mut prog = Program { filename: filename.into(), lines: vec![] };
    let mut offset = 0;
    for (n, raw) in input.split_inclusive('\n').enumerate() {
        let text = raw.trim_end_matches(&['\n', '\r'][..]);
        let parsed = parse_line(text).map_err(|e| {
            let span = Span::new(input, offset, offset + text.len()).expect("line span");
            let message = e.variant.message().into_owned();
            Error::new_from_span(ErrorVariant::CustomError { message }, span).with_path(filename)
        })?;
        if let Some(command) = parsed {
            prog.lines.push(Line { lineno: n + 1, command });
        }
        offset += raw.len();
    }
    Ok(prog)
}

/// The 1-based line an error was reported on.
pub fn error_line(err: &Error<Rule>) -> usize {
    match err.line_col {
        LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _) => line,
    }
}

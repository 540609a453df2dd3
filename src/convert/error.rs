// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt;

use crate::ast::Pose;

/// A failure while translating one document.
///
/// `lineno` is 1-based; it is 0 for errors that are not tied to a line.
/// `unit` is empty for errors that concern the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateError {
    pub unit: String,
    pub lineno: usize,
    pub errtype: ErrType,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.unit.as_str(), self.lineno) {
            ("", _) => write!(f, "Error: ")?,
            (unit, 0) => write!(f, "Error in {}: ", unit)?,
            (unit, n) => write!(f, "Error in {} line {}: ", unit, n)?,
        }
        match &self.errtype {
            ErrType::MalformedMove(n) =>
                write!(f, "move needs {} pose fields, found {}", Pose::FIELDS, n),
            ErrType::MissingModuleName =>
                write!(f, "no usable module name given or found in the source"),
            ErrType::Syntax(s) =>
                write!(f, "{}", s),
        }
    }
}

impl std::error::Error for TranslateError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrType {
    /// A move whose argument does not have exactly six fields; carries the
    /// number of fields found.
    MalformedMove(usize),
    MissingModuleName,
    Syntax(String),
}

/// All failures of a translation run, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchError {
    pub errors: Vec<TranslateError>,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}

impl From<TranslateError> for BatchError {
    fn from(err: TranslateError) -> Self {
        BatchError { errors: vec![err] }
    }
}

// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

mod error;
mod options;
mod path;

use log::{debug, info, warn};

use crate::parse::{error_line, parse, parse_line};
use crate::rapid::{Generator, Statement};
use crate::util::{is_ident, sanitize_ident, strip_extension};

pub use self::error::*;
pub use self::options::*;
pub use self::path::PathBuilder;

/// One input document and the name it was loaded under.
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    pub source: String,
    pub name: String,
}

impl TranslationUnit {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        TranslationUnit { name: name.into(), source: source.into() }
    }
}

/// The finished module text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub module_name: String,
    pub text: String,
}

impl Translation {
    /// Suggested file name for storing the module.
    pub fn file_name(&self) -> String {
        format!("{}.mod", self.module_name)
    }
}

/// Accumulates the text of one module.
///
/// The module header is written once, before the first other statement;
/// the footer is written by `finish`.
#[derive(Debug)]
pub struct ModuleBuffer {
    name: String,
    text: String,
    header_emitted: bool,
}

impl ModuleBuffer {
    pub fn new(name: impl Into<String>) -> Self {
        ModuleBuffer { name: name.into(), text: String::new(), header_emitted: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a statement.  A module header always carries the buffer's
    /// own name and is written at most once.
    pub fn push(&mut self, gen: &Generator, stmt: &Statement) {
        match stmt {
            Statement::ModuleHeader(_) => self.open(gen),
            _ => {
                self.open(gen);
                self.text.push_str(&gen.render(stmt));
            }
        }
    }

    pub fn extend<'a>(&mut self, gen: &Generator, stmts: impl IntoIterator<Item=&'a Statement>) {
        for stmt in stmts {
            self.push(gen, stmt);
        }
    }

    pub fn finish(mut self, gen: &Generator) -> Translation {
        self.open(gen);
        self.text.push_str(&gen.render(&Statement::ModuleFooter));
        Translation { module_name: self.name, text: self.text }
    }

    fn open(&mut self, gen: &Generator) {
        if !self.header_emitted {
            self.text.push_str(&gen.module_header(&self.name));
            self.header_emitted = true;
        }
    }
}

/// Translates an ordered list of documents into one RAPID module with one
/// procedure per document.
///
/// Documents are processed strictly in the given order; procedure names are
/// numbered by position.
#[derive(Debug, Default)]
pub struct Translator {
    options: Options,
    gen: Generator,
}

impl Translator {
    pub fn new(options: Options) -> Self {
        let gen = Generator::new(options.motion.clone());
        Translator { options, gen }
    }

    pub fn generator(&self) -> &Generator {
        &self.gen
    }

    /// Determine the module name for a run over `units`.
    ///
    /// After sanitizing, the name has to start with a letter.
    pub fn module_name(&self, units: &[TranslationUnit]) -> Result<String, TranslateError> {
        let (name, unit) = match &self.options.naming {
            ModuleNaming::Given(name) => (Some(sanitize_ident(name)), String::new()),
            ModuleNaming::FromSource { marker } => match units.first() {
                Some(first) => (find_marker(&first.source, marker), first.name.clone()),
                None => (None, String::new()),
            },
        };
        match name {
            Some(name) if is_ident(&name) => Ok(name),
            _ => Err(TranslateError { unit, lineno: 0, errtype: ErrType::MissingModuleName }),
        }
    }

    /// Procedure name for the unit at (0-based) position `index`.
    pub fn proc_name(&self, index: usize, unit: &TranslationUnit) -> String {
        format!("{}_{}", sanitize_ident(strip_extension(&unit.name)), index + 1)
    }

    /// Translate a single document into a complete procedure.
    pub fn translate_unit(&self, index: usize, unit: &TranslationUnit)
                          -> Result<Vec<Statement>, TranslateError> {
        let prog = parse(&unit.name, &unit.source).map_err(|e| TranslateError {
            unit: unit.name.clone(),
            lineno: error_line(&e),
            errtype: ErrType::Syntax(e.variant.message().into_owned()),
        })?;
        let mut builder = PathBuilder::new();
        for line in &prog.lines {
            builder.feed(&line.command).map_err(|errtype| TranslateError {
                unit: unit.name.clone(),
                lineno: line.lineno,
                errtype,
            })?;
        }

        let name = self.proc_name(index, unit);
        let body = builder.finish();
        info!("translated {} into Path_{} ({} statements)", unit.name, name, body.len());

        let mut stmts = Vec::with_capacity(body.len() + 2);
        stmts.push(Statement::ProcHeader(name));
        stmts.extend(body);
        stmts.push(Statement::ProcFooter);
        Ok(stmts)
    }

    /// Translate all documents.
    ///
    /// Every document is tried; if any fail, all their errors are returned
    /// and no module text is produced.
    pub fn translate(&self, units: &[TranslationUnit]) -> Result<Translation, BatchError> {
        let name = self.module_name(units)?;
        debug!("module name is {}", name);

        let mut buf = ModuleBuffer::new(name);
        let mut errors = vec![];
        for (i, unit) in units.iter().enumerate() {
            match self.translate_unit(i, unit) {
                Ok(stmts) => buf.extend(&self.gen, &stmts),
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        }
        if !errors.is_empty() {
            return Err(BatchError { errors });
        }
        Ok(buf.finish(&self.gen))
    }
}

fn find_marker(source: &str, marker: &str) -> Option<String> {
    source.lines()
          .filter_map(|raw| parse_line(raw).ok().flatten())
          .find(|cmd| cmd.keyword == marker)
          .and_then(|cmd| cmd.argument)
          .map(|arg| sanitize_ident(&arg))
}

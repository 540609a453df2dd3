// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use strum_macros::EnumString;

use crate::rapid::MotionSettings;

/// Keywords with a meaning for the translator.
///
/// Matching is exact and case-sensitive; everything else is passed through
/// as a remark.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString)]
pub enum Keyword {
    /// Next move is a joint move.
    #[strum(serialize = "RAPID")]
    Rapid,
    #[strum(serialize = "GOTO")]
    Goto,
    #[strum(serialize = "FEDRAT")]
    Fedrat,
}

/// How the next move is executed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveMode {
    Joint,
    Linear,
}

impl Default for MoveMode {
    fn default() -> Self { MoveMode::Linear }
}

/// Where the module name comes from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ModuleNaming {
    /// A name chosen once for the whole run.
    Given(String),
    /// The argument of the first `marker` command in the first document,
    /// e.g. `PARTNO/Cell_1`.
    FromSource { marker: String },
}

impl ModuleNaming {
    pub const DEFAULT_MARKER: &'static str = "PARTNO";
}

impl Default for ModuleNaming {
    fn default() -> Self {
        ModuleNaming::FromSource { marker: Self::DEFAULT_MARKER.into() }
    }
}

/// Configuration of a translation run.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub naming: ModuleNaming,
    pub motion: MotionSettings,
}

impl Options {
    pub fn with_module_name(name: impl Into<String>) -> Self {
        Options { naming: ModuleNaming::Given(name.into()), ..Default::default() }
    }
}

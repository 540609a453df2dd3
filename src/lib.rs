// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! A translator from line-oriented cutter-location G-code (`GOTO/x,y,z,...`
//! style) into ABB RAPID modules that drive the path with force control.
//!
//! Linear moves are grouped into `FCPressLStart` / `FCPressL` /
//! `FCPressEnd` blocks; a `RAPID` command turns the next move into a single
//! `MoveJ`.  Every input document becomes one procedure of the module.
//!
//! ## Basic usage
//!
//! Hand the documents, in the order their procedures should appear, to a
//! `convert::Translator`:
//!
//! ```rust
//! use gcode2rapid::convert::{Options, Translator, TranslationUnit};
//!
//! let units = vec![TranslationUnit::new("part.cl", "RAPID\nGOTO/1,2,3,0,0,0\n")];
//! let module = Translator::new(Options::with_module_name("Cell")).translate(&units).unwrap();
//!
//! assert_eq!(module.file_name(), "Cell.mod");
//! assert!(module.text.contains("MoveJ p[1, 2, 3, 0, 0, 0], v1000, z10, tool0;"));
//! ```
//!
//! Single lines can be tokenized with `parse::parse_line`, and statements
//! rendered on their own with `rapid::Generator`.

pub mod ast;
pub mod parse;
pub mod rapid;
pub mod convert;

// internal helpers
pub(crate) mod util;

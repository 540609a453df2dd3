// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::str::FromStr;
use log::debug;

use crate::ast::{Command, Pose};
use crate::rapid::Statement;
use super::error::ErrType;
use super::options::{Keyword, MoveMode};

/// Groups the moves of one document into force-controlled press blocks.
///
/// Consecutive linear moves form one block, bracketed by `PressStart` and
/// `PressEnd`.  A `RAPID` command closes the current block and makes the
/// following move (only that one) a joint move.  Inside an open block,
/// everything that is not a move or `RAPID` is dropped.
#[derive(Debug, Default)]
pub struct PathBuilder {
    mode: MoveMode,
    open: bool,
    // moves of the currently open block
    pending: Vec<Statement>,
    // the close statement reuses this even if the closing line has no pose
    last_pose: Option<Pose>,
    out: Vec<Statement>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Moves of the open block so far.
    pub fn pending(&self) -> &[Statement] {
        &self.pending
    }

    pub fn last_pose(&self) -> Option<&Pose> {
        self.last_pose.as_ref()
    }

    /// Statements produced so far.
    pub fn statements(&self) -> &[Statement] {
        &self.out
    }

    pub fn feed(&mut self, cmd: &Command) -> Result<(), ErrType> {
        match Keyword::from_str(&cmd.keyword) {
            Ok(Keyword::Rapid) => {
                self.mode = MoveMode::Joint;
                self.close();
            }
            Ok(Keyword::Goto) => {
                let arg = cmd.argument.as_deref().unwrap_or("");
                let pose = Pose::from_argument(arg).map_err(ErrType::MalformedMove)?;
                self.last_pose = Some(pose.clone());
                match self.mode {
                    MoveMode::Joint => {
                        self.out.push(Statement::JointMove(pose));
                        self.mode = MoveMode::Linear;
                    }
                    MoveMode::Linear => {
                        if !self.open {
                            debug!("opening press block at {}", pose);
                            self.out.push(Statement::PressStart(pose.clone()));
                            self.open = true;
                        }
                        let stmt = Statement::PressMove(pose);
                        self.pending.push(stmt.clone());
                        self.out.push(stmt);
                    }
                }
            }
            _ if self.open => {
                debug!("dropping {} inside press block", cmd.keyword);
            }
            Ok(Keyword::Fedrat) => {
                self.out.push(Statement::Directive(cmd.keyword.clone(), cmd.argument.clone()));
            }
            Err(_) => {
                self.out.push(Statement::Remark(cmd.keyword.clone(), cmd.argument.clone()));
            }
        }
        Ok(())
    }

    /// Close any open block and return all statements.
    pub fn finish(mut self) -> Vec<Statement> {
        self.close();
        self.out
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        if let Some(pose) = &self.last_pose {
            debug!("closing press block after {} moves", self.pending.len());
            self.out.push(Statement::PressEnd(pose.clone()));
        }
        self.pending.clear();
        self.open = false;
    }
}

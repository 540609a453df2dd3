// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Statements of the RAPID target language and their textual form.

use crate::ast::Pose;

/// A single statement of the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    ModuleHeader(String),
    ProcHeader(String),
    JointMove(Pose),        // MoveJ
    PressStart(Pose),       // FCPressLStart
    PressMove(Pose),        // FCPressL
    PressEnd(Pose),         // FCPressEnd
    Directive(String, Option<String>),
    Remark(String, Option<String>),
    ProcFooter,
    ModuleFooter,
}

impl Statement {
    pub fn is_press(&self) -> bool {
        matches!(self, Statement::PressStart(_) | Statement::PressMove(_) | Statement::PressEnd(_))
    }
}

/// The fixed arguments that every move instruction carries besides its
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSettings {
    /// Speed data, e.g. `v1000`.
    pub speed: String,
    /// Zone data, e.g. `z10`.
    pub zone: String,
    pub tool: String,
    /// Work object of the force sensor.
    pub workobject: String,
    /// Direction of the pressing force.
    pub force_direction: [f64; 3],
    pub force: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        MotionSettings {
            speed: "v1000".into(),
            zone: "z10".into(),
            tool: "tool0".into(),
            workobject: "force_sensor_object".into(),
            force_direction: [0., 0., -10.],
            force: 10.,
        }
    }
}

/// Renders statements into lines of RAPID text.
///
/// Every rendered statement is a complete line including its trailing
/// newline; headers and footers of blocks add a blank separator line.
/// Remarks start in the first column, instructions are indented.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    settings: MotionSettings,
}

impl Generator {
    pub fn new(settings: MotionSettings) -> Self {
        Generator { settings }
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    pub fn render(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::ModuleHeader(name) => self.module_header(name),
            Statement::ProcHeader(name) => self.proc_header(name),
            Statement::JointMove(pose) => self.joint_move(pose),
            Statement::PressStart(pose) => self.press_start(pose),
            Statement::PressMove(pose) => self.press_move(pose),
            Statement::PressEnd(pose) => self.press_end(pose),
            Statement::Directive(kw, value) => self.directive(kw, value.as_deref()),
            Statement::Remark(kw, value) => self.remark(kw, value.as_deref()),
            Statement::ProcFooter => self.proc_footer(),
            Statement::ModuleFooter => self.module_footer(),
        }
    }

    pub fn module_header(&self, name: &str) -> String {
        format!("MODULE {}\n\n", name)
    }

    pub fn proc_header(&self, name: &str) -> String {
        format!("PROC Path_{}()\n", name)
    }

    pub fn joint_move(&self, pose: &Pose) -> String {
        let s = &self.settings;
        format!("  MoveJ {}, {}, {}, {};\n", pose, s.speed, s.zone, s.tool)
    }

    pub fn press_start(&self, pose: &Pose) -> String {
        self.press("FCPressLStart", pose)
    }

    pub fn press_move(&self, pose: &Pose) -> String {
        self.press("FCPressL", pose)
    }

    pub fn press_end(&self, pose: &Pose) -> String {
        self.press("FCPressEnd", pose)
    }

    pub fn directive(&self, keyword: &str, value: Option<&str>) -> String {
        match value {
            Some(v) => format!("  {}: {}\n", keyword, v),
            None => format!("  {}:\n", keyword),
        }
    }

    pub fn remark(&self, keyword: &str, value: Option<&str>) -> String {
        match value {
            Some(v) => format!("! {}: {}\n", keyword, v),
            None => format!("! {}\n", keyword),
        }
    }

    pub fn proc_footer(&self) -> String {
        "ENDPROC\n\n".into()
    }

    pub fn module_footer(&self) -> String {
        "ENDMODULE\n".into()
    }

    fn press(&self, instr: &str, pose: &Pose) -> String {
        let s = &self.settings;
        let [dx, dy, dz] = s.force_direction;
        format!("  {} {}, {}, {}, {}, [{}, {}, {}], {}, {};\n",
                instr, pose, s.speed, s.zone, s.workobject, dx, dy, dz, s.force, s.tool)
    }
}

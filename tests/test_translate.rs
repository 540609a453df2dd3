use pretty_assertions::assert_eq;

use gcode2rapid::convert::*;

const PRESS: &str = "v1000, z10, force_sensor_object, [0, 0, -10], 10, tool0;";

fn translate(units: &[(&str, &str)]) -> Result<Translation, BatchError> {
    let units = units.iter().map(|(name, src)| TranslationUnit::new(*name, *src)).collect::<Vec<_>>();
    Translator::new(Options::with_module_name("Cell")).translate(&units)
}

fn text(units: &[(&str, &str)]) -> String {
    translate(units).unwrap().text
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_single_linear_move() {
    assert_eq!(text(&[("a.cl", "GOTO/1,2,3,0,0,0\n")]), format!("\
MODULE Cell

PROC Path_a_1()
  FCPressLStart p[1, 2, 3, 0, 0, 0], {p}
  FCPressL p[1, 2, 3, 0, 0, 0], {p}
  FCPressEnd p[1, 2, 3, 0, 0, 0], {p}
ENDPROC

ENDMODULE
", p = PRESS));
}

#[test]
fn test_joint_move() {
    let out = text(&[("a", "RAPID\nGOTO/1,2,3,0,0,0")]);
    assert_eq!(count(&out, "MoveJ p[1, 2, 3, 0, 0, 0], v1000, z10, tool0;"), 1);
    assert_eq!(count(&out, "FCPress"), 0);
}

#[test]
fn test_rapid_closes_block() {
    let out = text(&[("a", "GOTO/1,2,3,0,0,0\nRAPID\nGOTO/4,5,6,0,0,0\n")]);
    assert_eq!(out, format!("\
MODULE Cell

PROC Path_a_1()
  FCPressLStart p[1, 2, 3, 0, 0, 0], {p}
  FCPressL p[1, 2, 3, 0, 0, 0], {p}
  FCPressEnd p[1, 2, 3, 0, 0, 0], {p}
  MoveJ p[4, 5, 6, 0, 0, 0], v1000, z10, tool0;
ENDPROC

ENDMODULE
", p = PRESS));
}

#[test]
fn test_joint_mode_single_shot() {
    let out = text(&[("a", "RAPID\nGOTO/1,2,3,0,0,0\nGOTO/4,5,6,0,0,0\nGOTO/7,8,9,0,0,0")]);
    assert_eq!(count(&out, "MoveJ"), 1);
    assert_eq!(count(&out, "  FCPressLStart p[4, 5, 6, 0, 0, 0]"), 1);
    assert_eq!(count(&out, "  FCPressL p["), 2);
    assert_eq!(count(&out, "  FCPressEnd p[7, 8, 9, 0, 0, 0]"), 1);
}

#[test]
fn test_comment_and_feed() {
    let out = text(&[("a", "; comment\nFEDRAT/500\n")]);
    assert_eq!(out, "MODULE Cell\n\nPROC Path_a_1()\n  FEDRAT: 500\nENDPROC\n\nENDMODULE\n");
}

#[test]
fn test_remarks_and_suppression() {
    let src = "\
PARTNO/bracket
SPINDL/1200/CLW
GOTO/1,2,3,0,0,0
FEDRAT/200
COOLNT/ON
GOTO/2,2,3,0,0,0
RAPID
FEDRAT/900
END
";
    let out = text(&[("a", src)]);
    assert_eq!(out, format!("\
MODULE Cell

PROC Path_a_1()
! PARTNO: bracket
! SPINDL: 1200,CLW
  FCPressLStart p[1, 2, 3, 0, 0, 0], {p}
  FCPressL p[1, 2, 3, 0, 0, 0], {p}
  FCPressL p[2, 2, 3, 0, 0, 0], {p}
  FCPressEnd p[2, 2, 3, 0, 0, 0], {p}
  FEDRAT: 900
! END
ENDPROC

ENDMODULE
", p = PRESS));
}

#[test]
fn test_block_closure() {
    for src in &[
        "GOTO/1,2,3,0,0,0",
        "GOTO/1,2,3,0,0,0\nRAPID\nRAPID\nGOTO/1,2,3,0,0,0\nGOTO/1,2,3,0,0,0",
        "RAPID\nGOTO/1,2,3,0,0,0\nRAPID",
        "FEDRAT/1\nGOTO/1,2,3,0,0,0\nX\nRAPID\nGOTO/1,2,3,0,0,0\nGOTO/1,2,3,0,0,0\nRAPID\nGOTO/1,2,3,0,0,0",
        "",
    ] {
        let out = text(&[("a", src)]);
        assert_eq!(count(&out, "FCPressLStart"), count(&out, "FCPressEnd"), "{}", src);
    }
}

#[test]
fn test_duplicate_names() {
    let out = text(&[("A", "GOTO/1,2,3,0,0,0"), ("A", "RAPID\nGOTO/1,2,3,0,0,0")]);
    assert_eq!(count(&out, "PROC Path_A_1()"), 1);
    assert_eq!(count(&out, "PROC Path_A_2()"), 1);
    assert_eq!(count(&out, "MODULE Cell"), 1);
    assert_eq!(count(&out, "ENDMODULE"), 1);
    assert_eq!(count(&out, "ENDPROC"), 2);
    assert!(out.ends_with("ENDPROC\n\nENDMODULE\n"));
}

#[test]
fn test_proc_names() {
    let out = text(&[("part one.cl", ""), ("part-2.v1.cl", ""), ("noext", "")]);
    assert!(out.contains("PROC Path_part_one_1()"));
    assert!(out.contains("PROC Path_part_2_v1_2()"));
    assert!(out.contains("PROC Path_noext_3()"));
}

#[test]
fn test_empty_unit() {
    assert_eq!(text(&[("empty", "; nothing here\n\n")]),
               "MODULE Cell\n\nPROC Path_empty_1()\nENDPROC\n\nENDMODULE\n");
}

#[test]
fn test_no_units() {
    assert_eq!(text(&[]), "MODULE Cell\n\nENDMODULE\n");
}

#[test]
fn test_crlf_input() {
    let out = text(&[("a", "RAPID\r\nGOTO/1,2,3,0,0,0\r\n")]);
    assert!(out.contains("  MoveJ p[1, 2, 3, 0, 0, 0], v1000, z10, tool0;\n"));
}

#[test]
fn test_malformed_move() {
    let err = translate(&[
        ("good", "GOTO/1,2,3,0,0,0"),
        ("bad1", "; header\nGOTO/1,2,3"),
        ("bad2", "RAPID\nGOTO/1,2,3,4,5,6\nGOTO"),
    ]).unwrap_err();
    assert_eq!(err.errors, vec![
        TranslateError { unit: "bad1".into(), lineno: 2, errtype: ErrType::MalformedMove(3) },
        TranslateError { unit: "bad2".into(), lineno: 3, errtype: ErrType::MalformedMove(0) },
    ]);
    assert_eq!(err.to_string(), "\
Error in bad1 line 2: move needs 6 pose fields, found 3
Error in bad2 line 3: move needs 6 pose fields, found 0");
}

#[test]
fn test_single_unit() {
    let translator = Translator::default();
    let unit = TranslationUnit::new("a.cl", "GOTO/1,2,,0,0,0");
    let err = translator.translate_unit(4, &unit).unwrap_err();
    assert_eq!(err.lineno, 1);
    assert_eq!(err.errtype, ErrType::MalformedMove(5));

    let unit = TranslationUnit::new("a.cl", "FEDRAT/10");
    let stmts = translator.translate_unit(4, &unit).unwrap();
    assert_eq!(translator.generator().render(&stmts[0]), "PROC Path_a_5()\n");
    assert_eq!(stmts.len(), 3);
}

#[test]
fn test_module_name_from_source() {
    let units = vec![
        TranslationUnit::new("a.cl", "; setup\nPARTNO/ Bracket 7 \nGOTO/1,2,3,0,0,0"),
        TranslationUnit::new("b.cl", "PARTNO/Other"),
    ];
    let module = Translator::default().translate(&units).unwrap();
    assert_eq!(module.module_name, "Bracket_7");
    assert_eq!(module.file_name(), "Bracket_7.mod");
    assert!(module.text.starts_with("MODULE Bracket_7\n\n"));

    let options = Options {
        naming: ModuleNaming::FromSource { marker: "CELL".into() },
        ..Default::default()
    };
    let units = vec![TranslationUnit::new("a.cl", "CELL/Press1\nPARTNO/x")];
    assert_eq!(Translator::new(options).translate(&units).unwrap().module_name, "Press1");
}

#[test]
fn test_missing_module_name() {
    fn missing(options: Options, units: &[TranslationUnit]) {
        let err = Translator::new(options).translate(units).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].errtype, ErrType::MissingModuleName);
    }
    let units = vec![
        TranslationUnit::new("a.cl", "GOTO/1,2,3"),
        TranslationUnit::new("b.cl", "PARTNO/late"),
    ];
    // fails before any unit is looked at, so the malformed move is not reported
    missing(Options::default(), &units);
    missing(Options::with_module_name("  "), &units);
    missing(Options::default(), &[]);
    missing(Options::default(), &[TranslationUnit::new("a.cl", "PARTNO")]);

    // names that are no identifier on their own
    missing(Options::with_module_name("__"), &units);
    missing(Options::with_module_name("7 cell"), &units);
    missing(Options::default(), &[TranslationUnit::new("a.cl", "PARTNO/7-bracket")]);
    missing(Options::default(), &[TranslationUnit::new("a.cl", "PARTNO/_")]);

    let err = Translator::new(Options::with_module_name("")).translate(&units).unwrap_err();
    assert_eq!(err.to_string(), "Error: no usable module name given or found in the source");
}

#[test]
fn test_motion_settings() {
    let mut options = Options::with_module_name("M");
    options.motion.speed = "v50".into();
    options.motion.tool = "tPress".into();
    options.motion.force = 40.;
    let units = vec![TranslationUnit::new("a", "GOTO/1,2,3,0,0,0\nRAPID\nGOTO/1,2,3,0,0,0")];
    let out = Translator::new(options).translate(&units).unwrap().text;
    assert!(out.contains("  FCPressL p[1, 2, 3, 0, 0, 0], v50, z10, force_sensor_object, [0, 0, -10], 40, tPress;\n"));
    assert!(out.contains("  MoveJ p[1, 2, 3, 0, 0, 0], v50, z10, tPress;\n"));
}

#[test]
fn test_module_buffer() {
    let translator = Translator::default();
    let gen = translator.generator();
    let mut buf = ModuleBuffer::new("Cell");
    buf.push(gen, &gcode2rapid::rapid::Statement::ModuleHeader("Other".into()));
    buf.push(gen, &gcode2rapid::rapid::Statement::ProcFooter);
    buf.push(gen, &gcode2rapid::rapid::Statement::ModuleHeader("Cell".into()));
    assert_eq!(buf.text(), "MODULE Cell\n\nENDPROC\n\n");
    let module = buf.finish(gen);
    // the header always names the module the text is stored as
    assert_eq!(module.text, "MODULE Cell\n\nENDPROC\n\nENDMODULE\n");
    assert_eq!(module.file_name(), "Cell.mod");
}

use super::*;
use crate::mach::Function;

#[test]
fn test_literals_fill_data_space() {
    let p = Program::compile("b 65 # 258 * 2 b 7").unwrap();
    assert_eq!(p.data().as_bytes(), &[65, 2, 1, 0, 0, 0, 0, 7]);
}

#[test]
fn test_label_binds_data_length() {
    let p = Program::compile("b 1 b 2 v x b 3").unwrap();
    assert_eq!(p.functions().get(b'x'), Some(Function::Label(2)));
}

#[test]
fn test_define_binds_text_after_name() {
    let p = Program::compile(": f 1 ;").unwrap();
    assert_eq!(p.functions().get(b'f'), Some(Function::Call(3)));
    let p = Program::compile(":f").unwrap();
    assert_eq!(p.functions().get(b'f'), Some(Function::Call(2)));
}

#[test]
fn test_name_skips_newlines() {
    let p = Program::compile(":\n\n  f ;").unwrap();
    assert_eq!(p.functions().get(b'f'), Some(Function::Call(6)));
}

#[test]
fn test_start_address() {
    let p = Program::compile("b 1 ^ Q").unwrap();
    assert_eq!(p.start(), Some(5));
}

#[test]
fn test_start_address_last_wins() {
    let p = Program::compile("^ ^ Q").unwrap();
    assert_eq!(p.start(), Some(3));
}

#[test]
fn test_no_start_address() {
    let p = Program::compile("b 1 Q").unwrap();
    assert_eq!(p.start(), None);
    let e = Runtime::new(p).err().unwrap();
    assert_code(&e, ErrorCode::NoStartAddress);
}

#[test]
fn test_comment_links_past_close() {
    let p = Program::compile("(a)Q").unwrap();
    assert_eq!(p.link().target(1).unwrap(), 3);
}

#[test]
fn test_comment_hides_delimiters() {
    let p = Program::compile("( [ { } ) ^ ( ] ) Q").unwrap();
    assert_eq!(p.link().len(), 2);
}

#[test]
fn test_comment_hides_undefined_bytes() {
    Program::compile("(xyz: not code) ^ Q").unwrap();
}

#[test]
fn test_comment_does_not_nest() {
    let e = compile_err("( ( ) ) ^ Q");
    assert_code(&e, ErrorCode::UndefinedInstruction);
    assert_eq!(e.offending_byte(), Some(b')'));
}

#[test]
fn test_conditional_links_forward() {
    let p = Program::compile("^ 1 [ 2 ] Q").unwrap();
    assert_eq!(p.link().target(5).unwrap(), 9);
}

#[test]
fn test_loop_links_backward() {
    let p = Program::compile("^ { 1 } Q").unwrap();
    assert_eq!(p.link().target(7).unwrap(), 3);
}

#[test]
fn test_unclosed_conditional() {
    let e = compile_err("^ [ Q");
    assert_code(&e, ErrorCode::UnmatchedDelimiter);
    assert_eq!(e.address(), Some(2));
    assert_eq!(e.excerpt(), Some("after \"^ [\""));
}

#[test]
fn test_close_without_open() {
    let e = compile_err("^ ] Q");
    assert_code(&e, ErrorCode::UnmatchedDelimiter);
    assert_eq!(e.address(), Some(2));
    assert_code(&compile_err("^ } Q"), ErrorCode::UnmatchedDelimiter);
}

#[test]
fn test_crossed_delimiters() {
    assert_code(&compile_err("^ [ { ] } Q"), ErrorCode::UnmatchedDelimiter);
    assert_code(&compile_err("^ [ } Q"), ErrorCode::UnmatchedDelimiter);
}

#[test]
fn test_unterminated_comment() {
    let e = compile_err("^ Q ( no end");
    assert_code(&e, ErrorCode::UnmatchedDelimiter);
    assert_eq!(e.address(), Some(4));
}

#[test]
fn test_undefined_instruction() {
    let e = compile_err("^ 1 x Q");
    assert_code(&e, ErrorCode::UndefinedInstruction);
    assert_eq!(e.address(), Some(4));
    assert_eq!(e.offending_byte(), Some(b'x'));
    assert_eq!(
        e.to_string(),
        "UNDEFINED INSTRUCTION AT 4 ('x'); after \"^ 1 x\""
    );
}

#[test]
fn test_name_used_before_definition() {
    let e = compile_err("^ f Q : f ;");
    assert_code(&e, ErrorCode::UndefinedInstruction);
    assert_eq!(e.offending_byte(), Some(b'f'));
    Program::compile(": f ; ^ f Q").unwrap();
}

#[test]
fn test_run_time_bytes_are_skipped() {
    let p = Program::compile("^ W G Q + ~ < @ ! s ; 0123456789").unwrap();
    assert!(p.data().is_empty());
    assert!(p.link().is_empty());
}

#[test]
fn test_literal_byte_out_of_range() {
    let e = compile_err("b 256");
    assert_code(&e, ErrorCode::Overflow);
    assert_eq!(e.address(), Some(0));
    assert_eq!(e.excerpt(), Some("after \"b\""));
}

#[test]
fn test_literal_word_out_of_range() {
    assert_code(&compile_err("# 4294967296"), ErrorCode::Overflow);
    let p = Program::compile("# 4294967295").unwrap();
    assert_eq!(p.data().as_bytes(), &[255, 255, 255, 255]);
}

#[test]
fn test_missing_operand() {
    assert_code(&compile_err("b"), ErrorCode::MissingOperand);
    assert_code(&compile_err(": "), ErrorCode::MissingOperand);
    assert_code(&compile_err("v"), ErrorCode::MissingOperand);
    let e = compile_err("* x");
    assert_code(&e, ErrorCode::MissingOperand);
    assert_eq!(e.offending_byte(), Some(b'x'));
}

#[test]
fn test_tabs_and_carriage_returns() {
    let p = Program::compile("b\t1\r\n^\tQ\r\n").unwrap();
    assert_eq!(p.data().as_bytes(), &[1]);
}

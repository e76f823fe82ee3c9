mod common;
use common::*;

#[test]
fn test_write_one_byte() {
    let o = exec("b 65 ^ 0 1 W Q", b"");
    assert_eq!(o.code, 0);
    assert_eq!(o.output, b"A");
    assert_eq!(o.diag, "writing address 0, count 1\n");
}

#[test]
fn test_each_write_is_reported() {
    let o = exec("b 104 b 105 ^ 0 2 W 1 1 W Q", b"");
    assert_eq!(o.output, b"hii");
    assert_eq!(
        o.diag,
        "writing address 0, count 2\nwriting address 1, count 1\n"
    );
}

#[test]
fn test_echo() {
    let o = exec("* 1 ^ G 0 s 0 1 W Q", b"A");
    assert_eq!(o.code, 0);
    assert_eq!(o.output, b"A");
}

#[test]
fn test_echo_end_of_input() {
    let o = exec("* 1 ^ G 0 s 0 1 W Q", b"");
    assert_eq!(o.output, &[255]);
}

#[test]
fn test_countdown() {
    let o = exec("v c # 51 ^ { c 1 W c @ 4294967295 + c ! 48 c @ < } Q", b"");
    assert_eq!(o.code, 0);
    assert_eq!(o.output, b"321");
}

#[test]
fn test_comment_changes_nothing() {
    let plain = exec("b 65 ^ 0 1 W Q", b"");
    let commented = exec("b 65 ( [ { ] v x ) ^ ( } ) 0 1 W Q", b"");
    assert_eq!(plain.output, commented.output);
    assert_eq!(commented.code, 0);
}

#[test]
fn test_subroutine_writes() {
    let o = exec("v n # 72 : p n 1 W ; ^ p n @ 1 + n s p Q", b"");
    assert_eq!(o.output, b"HI");
}

#[test]
fn test_copy_input_until_end() {
    let o = exec(
        "v c * 4 ^ G c ! { c 1 W G c ! c @ 1 + } Q",
        b"abc",
    );
    assert_eq!(o.output, b"abc");
}

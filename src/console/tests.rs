use super::line::{ASCII_BACKSPACE, ASCII_DEL, Event, LineAssembler, LineState};

const TERM1: u8 = b'\n';
const TERM2: u8 = b'\r';

fn feed<const LINE: usize, const ARGS: usize>(
    asm: &mut LineAssembler<LINE, ARGS>,
    bytes: &[u8],
) -> Event {
    let mut last = Event::Ignored;
    for &byte in bytes {
        last = asm.accept(byte, TERM1, TERM2);
    }
    last
}

#[test]
fn starts_idle_and_empty() {
    let asm: LineAssembler<16, 4> = LineAssembler::new();
    assert_eq!(asm.state(), LineState::Idle);
    assert!(asm.is_empty());
    assert_eq!(asm.arg_count(), 0);
    assert_eq!(asm.arg(0), None);
}

#[test]
fn accumulates_until_terminator() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    assert_eq!(feed(&mut asm, b"set"), Event::Stored);
    assert_eq!(asm.state(), LineState::Accumulating);
    assert_eq!(asm.len(), 3);

    assert_eq!(asm.accept(TERM1, TERM1, TERM2), Event::Ready);
    assert_eq!(asm.state(), LineState::Ready);
}

#[test]
fn secondary_terminator_and_nul_also_complete() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    feed(&mut asm, b"x");
    assert_eq!(asm.accept(TERM2, TERM1, TERM2), Event::Ready);

    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    feed(&mut asm, b"x");
    assert_eq!(asm.accept(0x00, TERM1, TERM2), Event::Ready);
}

#[test]
fn terminator_on_empty_buffer_is_a_no_op() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    assert_eq!(asm.accept(TERM1, TERM1, TERM2), Event::Empty);
    assert_eq!(asm.state(), LineState::Idle);
    assert!(asm.is_empty());
}

#[test]
fn tokenize_splits_on_delimiter() {
    let mut asm: LineAssembler<32, 4> = LineAssembler::new();
    feed(&mut asm, b"set speed 42\n");
    asm.tokenize(b' ');

    assert_eq!(asm.arg_count(), 3);
    assert_eq!(asm.arg(0), Some("set"));
    assert_eq!(asm.arg(1), Some("speed"));
    assert_eq!(asm.arg(2), Some("42"));
    assert_eq!(asm.arg(3), None);
}

#[test]
fn consecutive_delimiters_yield_empty_arguments() {
    let mut asm: LineAssembler<32, 4> = LineAssembler::new();
    feed(&mut asm, b"cmd  x\n");
    asm.tokenize(b' ');

    assert_eq!(asm.arg_count(), 3);
    assert_eq!(asm.arg(0), Some("cmd"));
    assert_eq!(asm.arg(1), Some(""));
    assert_eq!(asm.arg(2), Some("x"));
}

#[test]
fn trailing_delimiter_yields_trailing_empty_argument() {
    let mut asm: LineAssembler<32, 4> = LineAssembler::new();
    feed(&mut asm, b"cmd \n");
    asm.tokenize(b' ');

    assert_eq!(asm.arg_count(), 2);
    assert_eq!(asm.arg(0), Some("cmd"));
    assert_eq!(asm.arg(1), Some(""));
}

#[test]
fn arguments_beyond_capacity_are_dropped() {
    let mut asm: LineAssembler<32, 2> = LineAssembler::new();
    feed(&mut asm, b"a b c d\n");
    asm.tokenize(b' ');

    assert_eq!(asm.arg_count(), 2);
    assert_eq!(asm.arg(0), Some("a"));
    assert_eq!(asm.arg(1), Some("b"));
    assert_eq!(asm.arg(2), None);
}

#[test]
fn backspace_erases_most_recent_byte() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    feed(&mut asm, b"cmd");
    assert_eq!(asm.accept(ASCII_BACKSPACE, TERM1, TERM2), Event::Erased);
    assert_eq!(feed(&mut asm, b"2\n"), Event::Ready);
    asm.tokenize(b' ');

    assert_eq!(asm.arg(0), Some("cm2"));
}

#[test]
fn delete_behaves_like_backspace() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    feed(&mut asm, b"ab");
    assert_eq!(asm.accept(ASCII_DEL, TERM1, TERM2), Event::Erased);
    assert_eq!(asm.len(), 1);
}

#[test]
fn backspace_on_empty_buffer_is_ignored() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    assert_eq!(asm.accept(ASCII_BACKSPACE, TERM1, TERM2), Event::Ignored);
    assert_eq!(asm.state(), LineState::Idle);
}

#[test]
fn erasing_every_byte_returns_to_idle() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    feed(&mut asm, b"a");
    assert_eq!(asm.accept(ASCII_BACKSPACE, TERM1, TERM2), Event::Erased);
    assert_eq!(asm.state(), LineState::Idle);
    // Terminator now counts as an empty line, not a dispatchable one.
    assert_eq!(asm.accept(TERM1, TERM1, TERM2), Event::Empty);
}

#[test]
fn overflow_reported_once_buffer_is_full() {
    let mut asm: LineAssembler<4, 2> = LineAssembler::new();
    assert_eq!(feed(&mut asm, b"abcd"), Event::Stored);
    assert_eq!(asm.len(), 4);

    // Even a terminator needs its slot; a full buffer cannot complete.
    assert_eq!(asm.accept(b'e', TERM1, TERM2), Event::Overflow);
    assert_eq!(asm.accept(TERM1, TERM1, TERM2), Event::Overflow);
    assert_eq!(asm.len(), 4);
}

#[test]
fn line_of_capacity_minus_one_still_completes() {
    let mut asm: LineAssembler<4, 2> = LineAssembler::new();
    feed(&mut asm, b"abc");
    assert_eq!(asm.accept(TERM1, TERM1, TERM2), Event::Ready);
    asm.tokenize(b' ');
    assert_eq!(asm.arg(0), Some("abc"));
}

#[test]
fn reset_is_idempotent_and_invalidates_arguments() {
    let mut asm: LineAssembler<32, 4> = LineAssembler::new();
    feed(&mut asm, b"set speed 42\n");
    asm.tokenize(b' ');
    assert_eq!(asm.arg_count(), 3);

    asm.reset();
    assert_eq!(asm.state(), LineState::Idle);
    assert_eq!(asm.len(), 0);
    assert_eq!(asm.arg_count(), 0);
    assert_eq!(asm.arg_bytes(0), None);

    asm.reset();
    assert_eq!(asm.state(), LineState::Idle);
    assert_eq!(asm.arg_count(), 0);
}

#[test]
fn assembler_is_reusable_after_reset() {
    let mut asm: LineAssembler<32, 4> = LineAssembler::new();
    feed(&mut asm, b"first\n");
    asm.tokenize(b' ');
    asm.reset();

    feed(&mut asm, b"second one\n");
    asm.tokenize(b' ');
    assert_eq!(asm.arg_count(), 2);
    assert_eq!(asm.arg(0), Some("second"));
    assert_eq!(asm.arg(1), Some("one"));
}

#[test]
fn non_utf8_argument_reads_as_bytes_only() {
    let mut asm: LineAssembler<16, 4> = LineAssembler::new();
    asm.accept(0xFF, TERM1, TERM2);
    asm.accept(0xFE, TERM1, TERM2);
    asm.accept(TERM1, TERM1, TERM2);
    asm.tokenize(b' ');

    assert_eq!(asm.arg(0), None);
    assert_eq!(asm.arg_bytes(0), Some(&[0xFF, 0xFE][..]));
}

#[test]
fn cursor_never_exceeds_capacity() {
    let mut asm: LineAssembler<8, 4> = LineAssembler::new();
    for byte in 0u8..=255 {
        // Skip terminators so the line never completes.
        if byte == TERM1 || byte == TERM2 || byte == 0 {
            continue;
        }
        asm.accept(byte, TERM1, TERM2);
        assert!(asm.len() <= 8);
    }
}

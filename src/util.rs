// all lengths in this crate are counted in unicode scalar values

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

// byte offset of the `n`th char, or the end of the string
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

// split after the first `n` chars: `s` keeps the head, the tail is returned
pub(crate) fn split_off_chars(s: &mut String, n: usize) -> String {
    let idx = byte_offset(s, n);
    s.split_off(idx)
}

#[test]
fn test_split_multibyte() {
    let mut s = String::from("こんにちは");
    assert_eq!(char_len(&s), 5);
    assert_eq!(byte_offset(&s, 2), "こん".len());
    assert_eq!(byte_offset(&s, 10), s.len());

    let tail = split_off_chars(&mut s, 2);
    assert_eq!(s, "こん");
    assert_eq!(tail, "にちは");
}

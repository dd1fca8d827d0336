use ripple_core::sim::loader::parse_hex;

#[test]
fn words_become_little_endian_bytes() {
    let image = parse_hex("00000013\nFFF00093\n").unwrap();
    assert_eq!(image, vec![0x13, 0x00, 0x00, 0x00, 0x93, 0x00, 0xF0, 0xFF]);
}

#[test]
fn comments_blanks_and_prefixes_are_tolerated() {
    let text = "# boot stub\n\n0x00000013  // nop\n  00000073\n";
    let image = parse_hex(text).unwrap();
    assert_eq!(image.len(), 8);
    assert_eq!(&image[4..], &0x0000_0073u32.to_le_bytes());
}

#[test]
fn short_words_are_rejected() {
    let err = parse_hex("13\n").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn non_hex_digits_are_rejected() {
    assert!(parse_hex("0000001g\n").is_err());
}

#[test]
fn empty_images_are_rejected() {
    assert!(parse_hex("# nothing here\n").is_err());
}

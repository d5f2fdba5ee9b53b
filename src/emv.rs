/// Encodes one EMV TLV field: 2-char tag, zero-padded 2-digit decimal
/// length, then the value. The length counts codepoints, matching every
/// other limit in the payload format.
///
/// Preconditions: `tag` is exactly 2 characters and `value` fits in a
/// 2-digit length. No realistic field here comes close to 99 characters,
/// but the bound is still guarded.
pub fn encode_field(tag: &str, value: &str) -> String {
    let len = value.chars().count();
    debug_assert_eq!(tag.chars().count(), 2, "EMV tag must be 2 characters");
    debug_assert!(len <= 99, "EMV value must fit a 2-digit length");
    format!("{tag}{len:02}{value}")
}

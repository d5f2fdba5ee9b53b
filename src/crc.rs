/// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, MSB-first,
/// no reflection, no final XOR. This is the checksum the Banco Central
/// payload standard mandates for the trailing field.
///
/// Each character contributes the low 8 bits of its codepoint. The payload
/// alphabet is restricted ASCII, so nothing is lost; for accented BMP input
/// this still reproduces the reference arithmetic bit for bit.
pub fn crc16(input: &str) -> u16 {
    const POLYNOMIAL: u16 = 0x1021;

    let mut crc: u16 = 0xFFFF;
    for c in input.chars() {
        crc ^= (((c as u32) & 0xFF) as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// The checksum as it appears on the wire: 4 uppercase hex digits.
pub fn crc16_hex(input: &str) -> String {
    format!("{:04X}", crc16(input))
}

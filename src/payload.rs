use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::crc::crc16_hex;
use crate::emv::encode_field;
use crate::error::PixError;
use crate::instruction::PaymentInstruction;
use crate::normalize::{MAX_CITY_LEN, MAX_NAME_LEN, normalize_field};

const MAX_KEY_LEN: usize = 77;
const MAX_DESCRIPTION_LEN: usize = 72;
const MAX_TXID_LEN: usize = 25;
const MAX_AMOUNT: Decimal = dec!(999999999.99);

// Top-level EMV tags, in payload order.
const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_MERCHANT_ACCOUNT: &str = "26";
const TAG_MERCHANT_CATEGORY: &str = "52";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
const TAG_MERCHANT_NAME: &str = "59";
const TAG_MERCHANT_CITY: &str = "60";
const TAG_ADDITIONAL_DATA: &str = "62";

// Tags nested inside the merchant-account (26) and additional-data (62)
// templates.
const TAG_GUI: &str = "00";
const TAG_KEY: &str = "01";
const TAG_DESCRIPTION: &str = "02";
const TAG_TXID: &str = "05";

const PAYLOAD_FORMAT_INDICATOR: &str = "01";
const PIX_GUI: &str = "BR.GOV.BCB.PIX";
const MERCHANT_CATEGORY_CODE: &str = "0000";
const CURRENCY_BRL: &str = "986";
const COUNTRY_BR: &str = "BR";

/// Tag 63 with its declared length of 4; the checksum input ends with this
/// header and the 4 hex digits follow it on the wire.
const CRC_FIELD_HEADER: &str = "6304";

/// Everything the caller gets back from a successful encode. `qr_code` is
/// the same string as `payload`; a QR renderer consumes it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixPayload {
    pub payload: String,
    pub qr_code: String,
    pub info: PayloadSummary,
}

/// Normalized view of what was encoded. Derived from the inputs, not
/// parsed back out of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSummary {
    pub key: String,
    pub recipient_name: String,
    pub recipient_city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
}

fn validate_key(key: &str) -> Result<(), PixError> {
    if key.trim().is_empty() || key.chars().count() > MAX_KEY_LEN {
        return Err(PixError::EmptyOrInvalidKey);
    }
    Ok(())
}

fn format_amount(amount: Decimal) -> Result<String, PixError> {
    if amount <= Decimal::ZERO || amount > MAX_AMOUNT {
        return Err(PixError::InvalidAmount);
    }
    Ok(format!("{:.2}", amount.round_dp(2)))
}

fn truncate(value: &str, max_len: usize) -> String {
    // By codepoint, never by byte; a multibyte description must not be cut
    // mid-character.
    value.chars().take(max_len).collect()
}

/// Assembles the complete "copia e cola" payload for one instruction.
///
/// Fails on the first violated precondition: empty or over-long key, name
/// or city that normalizes to nothing, or an amount outside
/// `(0, 999999999.99]`. Field order is fixed by the standard and part of
/// the wire contract.
pub fn encode(instruction: &PaymentInstruction) -> Result<PixPayload, PixError> {
    validate_key(&instruction.key)?;
    let recipient_name = normalize_field(&instruction.recipient_name, MAX_NAME_LEN)
        .ok_or(PixError::InvalidRecipientName)?;
    let recipient_city = normalize_field(&instruction.recipient_city, MAX_CITY_LEN)
        .ok_or(PixError::InvalidRecipientCity)?;

    // Tag 26 wraps the scheme identifier, the raw key and, when present,
    // the free-form description.
    let mut merchant_account = encode_field(TAG_GUI, PIX_GUI);
    merchant_account.push_str(&encode_field(TAG_KEY, &instruction.key));
    if let Some(description) = &instruction.description {
        let description = truncate(description, MAX_DESCRIPTION_LEN);
        merchant_account.push_str(&encode_field(TAG_DESCRIPTION, &description));
    }

    let formatted_amount = match instruction.amount {
        Some(amount) => Some(format_amount(amount)?),
        None => None,
    };

    let mut payload = String::new();
    payload.push_str(&encode_field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR));
    payload.push_str(&encode_field(TAG_MERCHANT_ACCOUNT, &merchant_account));
    payload.push_str(&encode_field(TAG_MERCHANT_CATEGORY, MERCHANT_CATEGORY_CODE));
    payload.push_str(&encode_field(TAG_CURRENCY, CURRENCY_BRL));
    if let Some(amount) = &formatted_amount {
        payload.push_str(&encode_field(TAG_AMOUNT, amount));
    }
    payload.push_str(&encode_field(TAG_COUNTRY, COUNTRY_BR));
    payload.push_str(&encode_field(TAG_MERCHANT_NAME, &recipient_name));
    payload.push_str(&encode_field(TAG_MERCHANT_CITY, &recipient_city));
    if let Some(txid) = &instruction.txid {
        let txid_field = encode_field(TAG_TXID, &truncate(txid, MAX_TXID_LEN));
        payload.push_str(&encode_field(TAG_ADDITIONAL_DATA, &txid_field));
    }
    payload.push_str(CRC_FIELD_HEADER);

    let crc = crc16_hex(&payload);
    payload.push_str(&crc);

    Ok(PixPayload {
        qr_code: payload.clone(),
        payload,
        info: PayloadSummary {
            key: instruction.key.clone(),
            recipient_name,
            recipient_city,
            amount: formatted_amount,
            txid: instruction.txid.clone(),
        },
    })
}

/// Classifies an arbitrary string as a well-formed payload or not. Never
/// errors and never panics; anything malformed is simply `false`.
pub fn validate_payload(payload: &str) -> bool {
    if payload.chars().count() < 50 {
        return false;
    }
    if !payload.starts_with("000201") {
        return false;
    }
    // The trailing checksum is 4 ASCII hex digits, so byte length and
    // character length agree for the tail. Refuse to split inside a
    // multibyte character.
    if !payload.is_char_boundary(payload.len() - 4) {
        return false;
    }
    let (body, declared) = payload.split_at(payload.len() - 4);
    if !declared
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    {
        return false;
    }
    declared == crc16_hex(body)
}

use rust_decimal::Decimal;
use serde::Deserialize;

/// One payment instruction, as supplied by the caller. Consumed by
/// [`crate::payload::encode`]; nothing is retained between calls.
///
/// The key is an arbitrary account alias (CPF, CNPJ, email, phone number
/// or random key) and is carried into the payload raw. Name and city are
/// normalized before encoding; amount, txid and description are optional.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentInstruction {
    pub key: String,
    #[serde(rename = "name")]
    pub recipient_name: String,
    #[serde(rename = "city")]
    pub recipient_city: String,
    pub amount: Option<Decimal>,
    pub txid: Option<String>,
    pub description: Option<String>,
}

impl PaymentInstruction {
    pub fn new(
        key: impl Into<String>,
        recipient_name: impl Into<String>,
        recipient_city: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            recipient_name: recipient_name.into(),
            recipient_city: recipient_city.into(),
            amount: None,
            txid: None,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_instruction_deserialization() {
        let csv = "key, name, city, amount, txid, description\n\
                   12345678900, FULANO TEC, MARILIA, 49.90, PEDIDO123, Produto XYZ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: PaymentInstruction = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize instruction");
        assert_eq!(result.key, "12345678900");
        assert_eq!(result.recipient_name, "FULANO TEC");
        assert_eq!(result.recipient_city, "MARILIA");
        assert_eq!(result.amount, Some(dec!(49.90)));
        assert_eq!(result.txid, Some("PEDIDO123".to_string()));
        assert_eq!(result.description, Some("Produto XYZ".to_string()));
    }

    #[test]
    fn test_optional_fields_absent() {
        // Donation mode: no amount, no txid, no description.
        let csv = "key, name, city, amount, txid, description\n\
                   contato@fulano.com.br, ONG EXEMPLO, RIO DE JANEIRO, , , ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: PaymentInstruction = iter.next().unwrap().unwrap();
        assert_eq!(result.key, "contato@fulano.com.br");
        assert_eq!(result.amount, None);
        assert_eq!(result.txid, None);
        assert_eq!(result.description, None);
    }

    #[test]
    fn test_new_has_no_optionals() {
        let instruction = PaymentInstruction::new("12345678900", "FULANO TEC", "MARILIA");
        assert_eq!(instruction.amount, None);
        assert_eq!(instruction.txid, None);
        assert_eq!(instruction.description, None);
    }
}

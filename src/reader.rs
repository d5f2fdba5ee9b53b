use std::io::Read;

use crate::error::PixError;
use crate::instruction::PaymentInstruction;

/// Streams payment instructions out of a CSV source, one `Result` per row
/// so a bad row doesn't end the batch.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn instructions(self) -> impl Iterator<Item = Result<PaymentInstruction, PixError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PixError::from))
    }
}

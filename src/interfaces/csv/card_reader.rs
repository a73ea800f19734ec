use crate::domain::card::Card;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads cards from a CSV source with a `token,holder,expiration,brand`
/// header.
///
/// Wraps `csv::Reader`, trimming whitespace around every field.
pub struct CardReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CardReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes cards; a malformed row yields an error without
    /// ending the stream.
    pub fn cards(self) -> impl Iterator<Item = Result<Card>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

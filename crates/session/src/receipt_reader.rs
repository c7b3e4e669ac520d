//! Seam to the external text-recognition service.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiptReadError {
    #[error("receipt image is empty")]
    EmptyImage,

    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Turns a receipt image into raw text, one candidate product per line.
pub trait ReceiptReader {
    fn read_text(&self, image: &[u8]) -> Result<String, ReceiptReadError>;
}

impl<R: ReceiptReader + ?Sized> ReceiptReader for &R {
    fn read_text(&self, image: &[u8]) -> Result<String, ReceiptReadError> {
        (**self).read_text(image)
    }
}

/// Reader for input that is already text (pre-extracted receipts, tests).
#[derive(Debug, Copy, Clone, Default)]
pub struct PlainTextReader;

impl ReceiptReader for PlainTextReader {
    fn read_text(&self, image: &[u8]) -> Result<String, ReceiptReadError> {
        if image.is_empty() {
            return Err(ReceiptReadError::EmptyImage);
        }
        String::from_utf8(image.to_vec())
            .map_err(|e| ReceiptReadError::Recognition(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_reader_passes_utf8_through() {
        let text = PlainTextReader.read_text("Jajka\nMasło".as_bytes()).unwrap();
        assert_eq!(text, "Jajka\nMasło");
    }

    #[test]
    fn plain_text_reader_rejects_empty_and_binary_input() {
        assert_eq!(PlainTextReader.read_text(&[]), Err(ReceiptReadError::EmptyImage));
        assert!(matches!(
            PlainTextReader.read_text(&[0xff, 0xfe, 0x00]),
            Err(ReceiptReadError::Recognition(_))
        ));
    }
}

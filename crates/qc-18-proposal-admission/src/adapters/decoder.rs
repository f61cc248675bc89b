//! Bincode transaction codec
//!
//! Implements the TransactionDecoder port. Proposers encode with
//! [`encode_transaction`] so both sides agree on the options used.

use crate::domain::{DecodeError, Transaction};
use crate::ports::TransactionDecoder;
use bincode::Options;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().reject_trailing_bytes()
}

/// Encode a transaction the way [`BincodeTxDecoder`] expects it
pub fn encode_transaction(tx: &Transaction) -> Result<Vec<u8>, bincode::Error> {
    codec().serialize(tx)
}

/// Bincode decoder with a hard size limit
#[derive(Clone, Debug)]
pub struct BincodeTxDecoder {
    max_tx_bytes: usize,
}

impl BincodeTxDecoder {
    pub fn new(max_tx_bytes: usize) -> Self {
        Self { max_tx_bytes }
    }
}

impl TransactionDecoder for BincodeTxDecoder {
    fn decode(&self, raw: &[u8]) -> Result<Transaction, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }
        if raw.len() > self.max_tx_bytes {
            return Err(DecodeError::TooLarge {
                size: raw.len(),
                limit: self.max_tx_bytes,
            });
        }

        codec()
            .with_limit(self.max_tx_bytes as u64)
            .deserialize(raw)
            .map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Message, EXECUTION_PAYLOAD_TYPE_URL};

    fn sample_tx() -> Transaction {
        Transaction::new(vec![
            Message::new(EXECUTION_PAYLOAD_TYPE_URL, vec![1, 2, 3]),
            Message::new("/qc.bank.v1.MsgSend", vec![]),
        ])
    }

    #[test]
    fn test_decode_encoded_transaction() {
        let decoder = BincodeTxDecoder::new(1024);
        let raw = encode_transaction(&sample_tx()).unwrap();

        let tx = decoder.decode(&raw).unwrap();
        assert_eq!(tx.msgs().len(), 2);
        assert_eq!(tx.msgs()[0].type_url(), EXECUTION_PAYLOAD_TYPE_URL);
        assert_eq!(tx.msgs()[1].type_url(), "/qc.bank.v1.MsgSend");
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let decoder = BincodeTxDecoder::new(1024);
        assert_eq!(decoder.decode(&[]), Err(DecodeError::Empty));
    }

    #[test]
    fn test_oversized_bytes_rejected() {
        let decoder = BincodeTxDecoder::new(4);
        assert_eq!(
            decoder.decode(&[0u8; 5]),
            Err(DecodeError::TooLarge { size: 5, limit: 4 })
        );
    }

    #[test]
    fn test_garbage_and_trailing_bytes_rejected() {
        let decoder = BincodeTxDecoder::new(1024);
        assert!(matches!(
            decoder.decode(&[0xff, 0xff, 0xff]),
            Err(DecodeError::Malformed(_))
        ));

        let mut raw = encode_transaction(&sample_tx()).unwrap();
        raw.push(0);
        assert!(matches!(decoder.decode(&raw), Err(DecodeError::Malformed(_))));
    }
}

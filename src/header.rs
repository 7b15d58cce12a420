//! Module implementing the primary header of a FITS file
//!
//! A header basically consists of a list a 80 long characters CARDS
//! closed by an `END` card. Only the keyword/value cards are kept, in the
//! order they appear in the file.
use std::io::Read;

use indexmap::IndexMap;
use serde::Serialize;

use crate::card::{parse_card, Keyword, Parsed, Value, CARD_SIZE};
use crate::error::Error;

pub fn consume_next_card<R: Read>(
    reader: &mut R,
    buf: &mut [u8; CARD_SIZE],
    bytes_read: &mut usize,
) -> Result<(), Error> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::UnreadableFile(format!(
            "no END card found after {} bytes, a fits header must be a sequence of 80 bytes cards",
            *bytes_read
        )),
        std::io::ErrorKind::InvalidData | std::io::ErrorKind::InvalidInput => {
            Error::UnreadableFile(e.to_string())
        }
        _ => e.into(),
    })?;
    *bytes_read += CARD_SIZE;

    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Header {
    cards: IndexMap<Keyword, Value>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the primary header of a FITS file
    ///
    /// The reader is left just after the `END` card, the data unit is
    /// never touched.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let mut num_bytes_read = 0;
        let mut card_80_bytes_buf = [0; CARD_SIZE];

        /* The primary header must start with SIMPLE */
        consume_next_card(reader, &mut card_80_bytes_buf, &mut num_bytes_read)?;
        let mut header = Header::new();
        match parse_card(&card_80_bytes_buf) {
            Ok(Parsed::Card(card)) if card.kw == "SIMPLE" => {
                header.cards.insert(card.kw, card.v);
            }
            _ => {
                return Err(Error::UnreadableFile(
                    "first card is not SIMPLE, not a fits primary header".to_owned(),
                ))
            }
        }

        loop {
            consume_next_card(reader, &mut card_80_bytes_buf, &mut num_bytes_read)?;
            match parse_card(&card_80_bytes_buf)? {
                Parsed::Card(card) => {
                    // first occurence wins
                    header.cards.entry(card.kw).or_insert(card.v);
                }
                Parsed::Commentary => (),
                Parsed::End => break,
            }
        }

        log::trace!(
            "parsed {} cards in a {} bytes header",
            header.len(),
            num_bytes_read
        );
        Ok(header)
    }

    /// Get the value of a specific card
    /// # Params
    /// * `key` - The keyword of a card, case sensitive
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cards.get(key)
    }

    pub fn insert<K: Into<Keyword>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.cards.insert(key.into(), value.into())
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Header
where
    K: Into<Keyword>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cards: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Header;
    use crate::card::{card_bytes, Value};
    use crate::error::Error;

    use std::io::Cursor;

    /// Serialize cards into a primary header padded to a 2880 bytes block
    pub(crate) fn fits_bytes(cards: &[(&str, &str)]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&card_bytes("SIMPLE", "                   T"));
        buf.extend_from_slice(&card_bytes("BITPIX", "                 -32"));
        buf.extend_from_slice(&card_bytes("NAXIS", "                   0"));
        for (kw, v) in cards {
            buf.extend_from_slice(&card_bytes(kw, v));
        }
        buf.extend_from_slice(&card_bytes("END", ""));
        let padded = buf.len().div_ceil(2880) * 2880;
        buf.resize(padded, b' ');
        buf
    }

    #[test]
    fn test_parse_primary_header() {
        let buf = fits_bytes(&[
            ("TELESCOP", "'NASA IRTF'"),
            ("GRAT", "'LowRes15 '"),
            ("", ""),
            ("NAXIS1", "564"),
            ("GRAT", "'ShortXD'"),
        ]);
        let header = Header::parse(&mut Cursor::new(&buf[..])).unwrap();

        assert_eq!(
            header.keywords().collect::<Vec<_>>(),
            vec!["SIMPLE", "BITPIX", "NAXIS", "TELESCOP", "GRAT", "NAXIS1"]
        );
        assert_eq!(header.get("GRAT"), Some(&Value::String("LowRes15 ".to_owned())));
        assert_eq!(header.get("NAXIS1"), Some(&Value::Integer(564)));
        assert_eq!(header.get("telescop"), None);
    }

    #[test]
    fn test_not_a_fits_file() {
        let buf = b"This is a plain text file, definitely not a fits one".repeat(4);
        let err = Header::parse(&mut Cursor::new(&buf[..])).unwrap_err();
        assert!(matches!(err, Error::UnreadableFile(_)));
    }

    #[test]
    fn test_missing_end() {
        let mut buf = fits_bytes(&[("TELESCOP", "'NASA IRTF'")]);
        // cut the END card and the padding
        buf.truncate(80 * 4);
        let err = Header::parse(&mut Cursor::new(&buf[..])).unwrap_err();
        assert!(matches!(err, Error::UnreadableFile(_)));
    }

    #[test]
    fn test_from_iter_keeps_order() {
        let header: Header = [("YUNITS", "ergs s-1 cm-2 A-1"), ("XUNITS", "Microns")]
            .into_iter()
            .collect();
        assert_eq!(header.keywords().collect::<Vec<_>>(), vec!["YUNITS", "XUNITS"]);
        assert_eq!(header.len(), 2);
    }
}

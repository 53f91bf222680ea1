//! Stream-style input: whitespace-delimited decimal tokens read from any
//! [`BufRead`].

use std::io::{self, BufRead};

use crate::error::Error;
use crate::BigInt;

fn fill<R: BufRead>(reader: &mut R) -> io::Result<&[u8]> {
    loop {
        match reader.fill_buf() {
            Ok(_) => break,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    reader.fill_buf()
}

/// Reads the next whitespace-delimited token, or `None` at end of input.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    loop {
        let buf = fill(reader)?;
        if buf.is_empty() {
            return Ok(None);
        }
        let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let exhausted = skip == buf.len();
        reader.consume(skip);
        if !exhausted {
            break;
        }
    }

    let mut token = Vec::new();
    loop {
        let buf = fill(reader)?;
        if buf.is_empty() {
            break;
        }
        let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&buf[..take]);
        let finished = take < buf.len();
        reader.consume(take);
        if finished {
            break;
        }
    }

    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Reads and parses the next integer token, or `None` at end of input.
pub fn read_big_int<R: BufRead>(reader: &mut R) -> Result<Option<BigInt>, Error> {
    match read_token(reader)? {
        Some(token) => Ok(Some(token.parse()?)),
        None => Ok(None),
    }
}

impl BigInt {
    /// Reads one integer token; running out of input is an error.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<BigInt, Error> {
        read_big_int(reader)?.ok_or(Error::UnexpectedEof)
    }
}

/// Iterator over the integer tokens of a reader.
pub struct Tokens<R> {
    reader: R,
}

pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens { reader }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<BigInt, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        read_big_int(&mut self.reader).transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use super::*;
    use crate::error::ParseBigIntError;

    #[test]
    fn test_read_tokens() {
        let mut input = Cursor::new("  12\t-340282366920938463463374607431768211456\n\n-0 ");
        assert_eq!(read_big_int(&mut input).unwrap(), Some(BigInt::from(12_i64)));
        assert_eq!(
            read_big_int(&mut input).unwrap().map(|v| v.to_string()),
            Some("-340282366920938463463374607431768211456".to_string())
        );
        assert_eq!(read_big_int(&mut input).unwrap(), Some(BigInt::zero()));
        assert_eq!(read_big_int(&mut input).unwrap(), None);
    }

    #[test]
    fn test_token_split_across_buffers() {
        let text = "98765432109876543210 7";
        let mut input = BufReader::with_capacity(3, text.as_bytes());
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("98765432109876543210"));
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("7"));
        assert_eq!(read_token(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_from_errors() {
        let mut empty = Cursor::new("   \n");
        assert!(matches!(BigInt::read_from(&mut empty), Err(Error::UnexpectedEof)));

        let mut bad = Cursor::new("12x 5");
        assert!(matches!(
            BigInt::read_from(&mut bad),
            Err(Error::Parse(ParseBigIntError::InvalidDigit { digit: 'x', position: 2 }))
        ));
        assert_eq!(BigInt::read_from(&mut bad).unwrap(), BigInt::from(5_i64));

        let mut binary = Cursor::new(vec![0xff_u8, 0xfe]);
        assert!(matches!(BigInt::read_from(&mut binary), Err(Error::Io(_))));
    }

    #[test]
    fn test_tokens_iterator() {
        let values: Vec<BigInt> = tokens(Cursor::new("1 -2 3"))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            values,
            vec![BigInt::from(1_i64), BigInt::from(-2_i64), BigInt::from(3_i64)]
        );
    }
}

// ===============================
// src/collect.rs
// ===============================
//
// Input collector for the daily sales figures:
// - prompt on stdout, read one line from the given reader
// - split on comma, trim tokens, parse as i64
// - on invalid input, explain what failed and re-prompt
//
// Negative and zero figures pass validation on purpose: zero-sale days are
// real, and sign policy belongs to the sheet owner, not this client.
//
use std::io::{self, ErrorKind};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::{SalesRecord, ROW_WIDTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("exactly 6 values required, you provided {0}")]
    WrongCount(usize),
}

/// Validates one line of comma-separated text into a sales row.
///
/// Conversion is checked before the count, so the first malformed token is
/// what gets reported even when the count is also wrong.
pub fn parse_line(line: &str) -> Result<SalesRecord, ValidationError> {
    let mut values = Vec::with_capacity(ROW_WIDTH);
    for token in line.split(',') {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => return Err(ValidationError::NotANumber(token.to_string())),
        }
    }
    let cells: [i64; ROW_WIDTH] = values
        .try_into()
        .map_err(|v: Vec<i64>| ValidationError::WrongCount(v.len()))?;
    Ok(SalesRecord(cells))
}

/// Prompt loop: keeps asking until one line validates. Only EOF on the
/// reader ends the loop without a record.
pub async fn collect_sales<R>(input: &mut R) -> io::Result<SalesRecord>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = String::new();
    loop {
        println!("\nPlease enter sales data from the last market day.");
        println!("Data should be six numbers, separated by commas.");
        println!("Example: 10,20,30,40,50,60\n");

        buf.clear();
        if input.read_line(&mut buf).await? == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed while waiting for sales data",
            ));
        }

        match parse_line(buf.trim_end()) {
            Ok(record) => {
                println!("Data is valid.");
                return Ok(record);
            }
            Err(e) => println!("Invalid data: {e}, please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[test]
    fn six_integers_parse_in_order() {
        let rec = parse_line("10,20,30,40,50,60").unwrap();
        assert_eq!(rec.as_row(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn whitespace_around_tokens_is_tolerated() {
        let rec = parse_line(" 1, 2 ,3,4,5 ,6").unwrap();
        assert_eq!(rec.as_row(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn negative_and_zero_values_pass() {
        let rec = parse_line("0,-5,3,0,-1,2").unwrap();
        assert_eq!(rec.as_row(), &[0, -5, 3, 0, -1, 2]);
    }

    #[test]
    fn wrong_counts_are_rejected() {
        assert_eq!(parse_line("1"), Err(ValidationError::WrongCount(1)));
        assert_eq!(parse_line("1,2,3,4,5"), Err(ValidationError::WrongCount(5)));
        assert_eq!(parse_line("1,2,3,4,5,6,7"), Err(ValidationError::WrongCount(7)));
    }

    #[test]
    fn empty_line_fails_on_conversion_first() {
        // "".split(',') yields one empty token, and conversion runs first
        assert_eq!(parse_line(""), Err(ValidationError::NotANumber(String::new())));
    }

    #[test]
    fn non_integer_token_is_rejected() {
        assert_eq!(
            parse_line("10,20,thirty,40,50,60"),
            Err(ValidationError::NotANumber("thirty".to_string()))
        );
    }

    #[test]
    fn bad_token_reported_even_when_count_is_wrong() {
        assert_eq!(
            parse_line("1,x"),
            Err(ValidationError::NotANumber("x".to_string()))
        );
    }

    #[tokio::test]
    async fn reprompts_until_a_line_validates() {
        let mut input = BufReader::new(&b"1,2\nten,20\n10,20,30,40,50,60\n"[..]);
        let rec = collect_sales(&mut input).await.unwrap();
        assert_eq!(rec.as_row(), &[10, 20, 30, 40, 50, 60]);
    }

    #[tokio::test]
    async fn eof_is_an_error_not_a_hang() {
        let mut input = BufReader::new(&b"1,2,3\n"[..]);
        let err = collect_sales(&mut input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}

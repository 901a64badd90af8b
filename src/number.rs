// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Values of number literals in the syntax recognized by
//! [NumberLiteral](../syntax/struct.NumberLiteral.html).

use num::{BigInt, Num, ToPrimitive};

#[derive(Debug, Clone, PartialEq)]
pub enum NumberValue {
    Integer(BigInt),
    Real(f64),
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            NumberValue::Integer(n) => f.write_fmt(format_args!("{}", n)),
            NumberValue::Real(x) => f.write_fmt(format_args!("{}", x)),
        }
    }
}

// Returns the radix and the digits after the radix prefix.
fn split_radix(s: &str) -> (u32, &str) {
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (2, rest)
    } else if s.len() > 1
        && s.starts_with('0')
        && s[1..].starts_with(|c: char| c.is_ascii_digit())
    {
        (8, &s[1..])
    } else {
        (10, s)
    }
}

/// Decode a number literal: optional sign, `0x`/`0b`/`0` radix
/// prefix, digits, optional fraction and optional decimal exponent
/// (scaling by powers of ten whatever the radix). Literals without
/// fraction and exponent are integers.
pub fn parse_number(text: &[u8]) -> Option<NumberValue> {
    let s = std::str::from_utf8(text).ok()?;
    let (is_neg, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, body) = split_radix(s);

    // hex digits include e and E
    let (mantissa, exponent) = match body.find(|c: char| radix != 16 && (c == 'e' || c == 'E')) {
        Some(i) => (&body[..i], Some(body[i + 1..].parse::<i32>().ok()?)),
        None => (body, None),
    };
    let (int_part, frac) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    if int_part.is_empty() {
        return None
    }

    if frac.is_none() && exponent.is_none() {
        let n = BigInt::from_str_radix(int_part, radix).ok()?;
        return Some(NumberValue::Integer(if is_neg { -n } else { n }))
    }

    let x = if radix == 10 {
        body.parse::<f64>().ok()?
    } else {
        let frac = frac.unwrap_or("");
        let digits = format!("{}{}", int_part, frac);
        let m = BigInt::from_str_radix(&digits, radix).ok()?.to_f64()?;
        let scale = f64::from(radix).powi(i32::try_from(frac.len()).ok()?);
        m / scale * 10f64.powi(exponent.unwrap_or(0))
    };
    Some(NumberValue::Real(if is_neg { -x } else { x }))
}

use std::error::Error;
use std::fmt;

/// A match pattern with one optional constraint per octet. A `Some(value)`
/// position requires the octet at that position to equal `value`, a `None`
/// position matches any octet.
pub type OctetMask = [Option<u8>; 4];

/// Returned when a dotted-decimal address token cannot be parsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseAddrError;

impl fmt::Display for ParseAddrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed IPv4 address")
    }
}

impl Error for ParseAddrError {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Ipv4Addr {
    pub bytes: [u8; 4],
}

impl Ipv4Addr {
    pub const BROADCAST: Ipv4Addr = Ipv4Addr { bytes: [255, 255, 255, 255] };
    pub const LOOPBACK: Ipv4Addr = Ipv4Addr { bytes: [127, 0, 0, 1] };
    pub const NULL: Ipv4Addr = Ipv4Addr { bytes: [0, 0, 0, 0] };

    /// Parses the leading dotted-decimal address of `string`.
    ///
    /// Leading whitespace is skipped. Each internal dot must be followed
    /// immediately by a digit, so a trailing dot or whitespace inside the
    /// address fails. Anything after the fourth octet is ignored, so
    /// `"192.168.1.1 foo"` parses as `192.168.1.1`.
    pub fn parse_prefix(string: &str) -> Result<Self, ParseAddrError> {
        let text = string.trim_start().as_bytes();
        let mut bytes = [0; 4];
        let mut pos = 0;

        for i in 0..4 {
            let start = pos;
            let mut value: u16 = 0;
            while pos < text.len() && text[pos].is_ascii_digit() {
                value = value * 10 + (text[pos] - b'0') as u16;
                if value > 255 {
                    return Err(ParseAddrError);
                }
                pos += 1;
            }
            if pos == start {
                return Err(ParseAddrError);
            }
            bytes[i] = value as u8;

            if i < 3 {
                if pos >= text.len() || text[pos] != b'.' {
                    return Err(ParseAddrError);
                }
                pos += 1;
                // The dot only separates octets, it does not end one
                if pos >= text.len() || !text[pos].is_ascii_digit() {
                    return Err(ParseAddrError);
                }
            }
        }

        Ok(Ipv4Addr { bytes })
    }

    /// True if every constrained position of `mask` equals the octet at
    /// that position.
    pub fn matches(&self, mask: &OctetMask) -> bool {
        self.bytes
            .iter()
            .zip(mask.iter())
            .all(|(octet, wanted)| match *wanted {
                Some(value) => *octet == value,
                None => true,
            })
    }

    /// True if any of the four octets equals `value`.
    pub fn contains_octet(&self, value: u8) -> bool {
        self.bytes.iter().any(|octet| *octet == value)
    }
}

impl fmt::Display for Ipv4Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]
        )
    }
}

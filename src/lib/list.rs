use std::io::{self, BufRead, Write};

use ip::Ipv4Addr;

pub type IpList = Vec<Ipv4Addr>;

/// Reads one address per line, in input order. A line that does not start
/// with a valid address is skipped and reading continues at the next line.
pub fn read_ips<R: BufRead>(input: R) -> io::Result<IpList> {
    let mut ips = Vec::new();

    for line in input.lines() {
        if let Ok(ip) = Ipv4Addr::parse_prefix(&line?) {
            ips.push(ip);
        }
    }

    Ok(ips)
}

/// Sorts in place into descending order, first octet most significant.
pub fn sort_reverse_lexicographic(ips: &mut [Ipv4Addr]) {
    ips.sort_by(|a, b| b.cmp(a));
}

/// Writes each address on its own line in dotted-decimal form.
pub fn write_ips<W: Write>(mut output: W, ips: &[Ipv4Addr]) -> io::Result<()> {
    for ip in ips {
        writeln!(output, "{}", ip)?;
    }

    Ok(())
}

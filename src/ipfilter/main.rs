extern crate anyhow;
extern crate arg_parser;
extern crate ipfilter;

use std::io;

use anyhow::{bail, Context, Result};
use arg_parser::ArgParser;
use ipfilter::{read_ips, sort_reverse_lexicographic, write_ips, Filter, Ipv4Addr};

static MAN_PAGE: &'static str = /* @MANSTART{ipfilter} */ r#"
NAME
    ipfilter - sort and filter IPv4 addresses read from standard input

SYNOPSIS
    ipfilter [-h | --help]

DESCRIPTION
    Reads one IPv4 address per line from standard input. Lines that do not
    start with a valid dotted-decimal address are skipped. The remaining
    addresses are printed in descending order, followed by the addresses
    whose first octet is 1, the addresses whose first two octets are 46.70,
    and the addresses with 46 in any octet.

OPTIONS
    -h
    --help
        Print this manual page.
"#; /* @MANEND */

fn main() -> Result<()> {
    let mut parser = ArgParser::new(1).add_flag(&["h", "help"]);
    parser.parse(std::env::args());

    if parser.found("help") {
        println!("{}", MAN_PAGE);
        return Ok(());
    }

    if !parser.args.is_empty() {
        bail!("Unexpected argument \"{}\"", parser.args[0]);
    }

    let stdin = io::stdin();
    let mut ips =
        read_ips(stdin.lock()).context("Failed to read addresses from standard input")?;
    sort_reverse_lexicographic(&mut ips);

    let filter = Filter::new(&ips);
    let first_octet_1 = filter.by_mask(&[Some(1), None, None, None]);
    let first_octets_46_70 = filter.by_mask(&[Some(46), Some(70), None, None]);
    let any_octet_46 = filter.by_octet_value(46);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let reports: [&[Ipv4Addr]; 4] = [&ips, &first_octet_1, &first_octets_46_70, &any_octet_46];
    for report in reports.iter() {
        write_ips(&mut output, report).context("Failed to write addresses to standard output")?;
    }

    Ok(())
}

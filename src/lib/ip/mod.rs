pub use self::addr::{Ipv4Addr, OctetMask, ParseAddrError};

mod addr;

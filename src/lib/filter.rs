use ip::{Ipv4Addr, OctetMask};

/// Filtering queries over a borrowed address list. The list is not copied;
/// it must outlive the filter.
pub struct Filter<'a> {
    ips: &'a [Ipv4Addr],
}

impl<'a> Filter<'a> {
    pub fn new(ips: &'a [Ipv4Addr]) -> Self {
        Filter { ips }
    }

    /// Addresses whose octets equal every constrained position of `mask`,
    /// in list order. An all-`None` mask keeps everything.
    pub fn by_mask(&self, mask: &OctetMask) -> Vec<Ipv4Addr> {
        self.select(|ip| ip.matches(mask))
    }

    /// Addresses with any octet equal to `value`, in list order.
    pub fn by_octet_value(&self, value: u8) -> Vec<Ipv4Addr> {
        self.select(|ip| ip.contains_octet(value))
    }

    fn select<P: Fn(&Ipv4Addr) -> bool>(&self, predicate: P) -> Vec<Ipv4Addr> {
        self.ips.iter().filter(|ip| predicate(ip)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;
    use ip::Ipv4Addr;

    fn sample() -> Vec<Ipv4Addr> {
        vec![
            Ipv4Addr { bytes: [192, 168, 1, 1] },
            Ipv4Addr { bytes: [10, 0, 0, 1] },
            Ipv4Addr { bytes: [255, 255, 255, 255] },
        ]
    }

    #[test]
    fn by_mask_unconstrained_keeps_order() {
        let ips = sample();
        let filter = Filter::new(&ips);

        assert_eq!(ips, filter.by_mask(&[None, None, None, None]));
    }

    #[test]
    fn by_mask_exact() {
        let ips = vec![
            Ipv4Addr { bytes: [192, 168, 1, 1] },
            Ipv4Addr { bytes: [10, 0, 0, 1] },
        ];
        let filter = Filter::new(&ips);

        assert_eq!(
            vec![Ipv4Addr { bytes: [192, 168, 1, 1] }],
            filter.by_mask(&[Some(192), Some(168), Some(1), Some(1)])
        );
    }

    #[test]
    fn by_mask_partial() {
        let ips = vec![
            Ipv4Addr { bytes: [46, 70, 1, 1] },
            Ipv4Addr { bytes: [46, 10, 1, 1] },
            Ipv4Addr { bytes: [46, 70, 2, 2] },
        ];
        let filter = Filter::new(&ips);

        assert_eq!(
            vec![
                Ipv4Addr { bytes: [46, 70, 1, 1] },
                Ipv4Addr { bytes: [46, 70, 2, 2] },
            ],
            filter.by_mask(&[Some(46), Some(70), None, None])
        );
    }

    #[test]
    fn by_mask_no_match() {
        let ips = sample();
        let filter = Filter::new(&ips);

        assert!(filter.by_mask(&[Some(1), None, None, None]).is_empty());
    }

    #[test]
    fn by_octet_value_test() {
        let ips = sample();
        let filter = Filter::new(&ips);

        assert_eq!(
            vec![
                Ipv4Addr { bytes: [192, 168, 1, 1] },
                Ipv4Addr { bytes: [10, 0, 0, 1] },
            ],
            filter.by_octet_value(1)
        );
        assert!(filter.by_octet_value(99).is_empty());
    }
}

// Postcode areas excluded from collection service
//
// Checked independently of the route table. A prefix listed here is
// unserviceable even if a route rule exists for it.

pub const RESTRICTED_PREFIXES: &[&str] = &[
    // Devon and Cornwall
    "EX", "PL", "TQ", "TR",
    // Scottish Highlands and Islands
    "HS", "IV", "KW", "PA", "ZE",
    // Crown Dependencies
    "GY", "IM", "JE",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::routes::PREFIX_ROUTES;

    #[test]
    fn test_no_restricted_prefix_has_a_route() {
        for prefix in RESTRICTED_PREFIXES {
            assert!(
                !PREFIX_ROUTES.iter().any(|r| r.prefix == *prefix),
                "{} is both restricted and routed",
                prefix
            );
        }
    }
}

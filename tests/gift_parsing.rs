use giftbot::parse_gift_line;
use proptest::prelude::*;

// Property: parse_gift_line should never panic for arbitrary input
proptest! {
    #[test]
    fn prop_parse_gift_line_no_panic(s in "(?s).*") {
        let _ = parse_gift_line(&s);
    }
}

proptest! {
    #[test]
    fn prop_name_url_round_trips(
        name in "[a-zA-Z0-9]{1,20}",
        url in "[a-zA-Z0-9:/.]{1,30}",
    ) {
        let parsed = parse_gift_line(&format!("{name} | {url}"));
        prop_assert_eq!(parsed, Some((name, url)));
    }
}

proptest! {
    #[test]
    fn prop_input_without_separator_is_rejected(s in "[^|]*") {
        prop_assert_eq!(parse_gift_line(&s), None);
    }
}

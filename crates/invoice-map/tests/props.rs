//! Property tests for alias resolution and date parsing.

use chrono::NaiveDate;
use invoice_map::{DateFormat, FieldMapper, parse_date};
use invoice_model::RawExtraction;
use proptest::prelude::*;

const INVOICE_NUMBER_ALIASES: [&str; 5] =
    ["invoice_number", "invoice_no", "inv_no", "number", "invoice#"];

proptest! {
    /// Any recognized alias, under any casing and padding, populates the
    /// field identically to the canonical key itself.
    #[test]
    fn recognized_alias_matches_like_canonical_key(
        alias_idx in 0usize..INVOICE_NUMBER_ALIASES.len(),
        flips in prop::collection::vec(any::<bool>(), 16),
        left_pad in 0usize..4,
        right_pad in 0usize..4,
    ) {
        let alias = INVOICE_NUMBER_ALIASES[alias_idx];
        let mutated: String = alias
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if flips.get(i).copied().unwrap_or(false) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect();
        let key = format!("{}{}{}", " ".repeat(left_pad), mutated, " ".repeat(right_pad));

        let mapper = FieldMapper::default();
        let via_alias = mapper.map(&RawExtraction::from_fields([
            (key.as_str(), "INV-77"),
            ("total", "10"),
        ]));
        let via_canonical = mapper.map(&RawExtraction::from_fields([
            ("invoice_number", "INV-77"),
            ("total", "10"),
        ]));

        prop_assert_eq!(via_alias.invoice.invoice_number.as_deref(), Some("INV-77"));
        prop_assert_eq!(via_alias.invoice, via_canonical.invoice);
    }

    /// Parsing a rendered date and re-rendering in the matched format is the
    /// identity, for every supported format.
    #[test]
    fn date_parse_render_round_trip(
        year in 1990i32..2035,
        month in 1u32..=12,
        day in 1u32..=28,
        format_idx in 0usize..DateFormat::ALL.len(),
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid ymd");
        let format = DateFormat::ALL[format_idx];
        let rendered = format.render(date);

        let (parsed, matched) = parse_date(&rendered).expect("rendered date parses");
        prop_assert_eq!(parsed, date);
        prop_assert_eq!(matched, format);
        prop_assert_eq!(matched.render(parsed), rendered);
    }
}

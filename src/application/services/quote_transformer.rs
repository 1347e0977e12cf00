//! # Quote Transformer
//!
//! Turns an [`ExternalQuote`] into a localized [`TransformedQuote`].
//!
//! [`transform`] is a pure function: the reference data arrives as a
//! precomputed `code -> local name` map, so it can be exercised without any
//! store.

use crate::domain::entities::{CurrencyLine, ExternalQuote, TransformedQuote, UPDATE_TIME_FORMAT};
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;

/// Builds the localized report.
///
/// - `update_time` is `time.updated_iso` normalized to UTC, or the current
///   instant if it does not parse.
/// - Each line's `local_name` comes from `reference`, falling back to the
///   source line's description.
/// - Lines are sorted ascending by code, one per `bpi` entry.
#[must_use]
pub fn transform(quote: &ExternalQuote, reference: &HashMap<String, String>) -> TransformedQuote {
    let mut currencies: Vec<CurrencyLine> = quote
        .bpi
        .iter()
        .map(|(code, line)| CurrencyLine {
            code: code.clone(),
            local_name: reference
                .get(code)
                .cloned()
                .unwrap_or_else(|| line.description.clone()),
            rate_text: line.rate_text.clone(),
        })
        .collect();
    currencies.sort_by(|a, b| a.code.cmp(&b.code));

    TransformedQuote {
        update_time: format_update_time(&quote.time.updated_iso),
        currencies,
    }
}

/// Renders an ISO-8601 offset timestamp as UTC in [`UPDATE_TIME_FORMAT`].
///
/// Unparseable input yields the current UTC time.
#[must_use]
pub fn format_update_time(iso: &str) -> String {
    let instant = parse_offset_datetime(iso)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    instant.format(UPDATE_TIME_FORMAT).to_string()
}

fn parse_offset_datetime(iso: &str) -> Option<DateTime<FixedOffset>> {
    let iso = iso.trim();
    DateTime::parse_from_rfc3339(iso)
        .or_else(|_| DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::{QuoteLine, QuoteTime};
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn quote_with(codes: &[&str], iso: &str) -> ExternalQuote {
        ExternalQuote {
            time: QuoteTime {
                updated_iso: iso.to_string(),
                ..Default::default()
            },
            chart_name: "Bitcoin".to_string(),
            bpi: codes
                .iter()
                .map(|code| {
                    (
                        code.to_string(),
                        QuoteLine::new(*code, "", "1.0", format!("{code} description"), Decimal::ONE),
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn utc_input_passes_through() {
        let out = transform(&quote_with(&["USD"], "2018-03-22T23:30:00+00:00"), &HashMap::new());
        assert_eq!(out.update_time, "2018/03/22 23:30:00");
    }

    #[test]
    fn offset_input_is_normalized_to_utc() {
        assert_eq!(format_update_time("2022-08-03T21:25:00+01:00"), "2022/08/03 20:25:00");
        assert_eq!(format_update_time("2022-08-04T04:25:00+0800"), "2022/08/03 20:25:00");
    }

    #[test]
    fn unparseable_input_uses_now() {
        let before = Utc::now();
        let formatted = format_update_time("not a date");
        let parsed = NaiveDateTime::parse_from_str(&formatted, UPDATE_TIME_FORMAT)
            .unwrap()
            .and_utc();
        // formatting drops sub-second precision
        assert!(parsed.timestamp() >= before.timestamp());
        assert!(parsed <= Utc::now());
    }

    #[test]
    fn reference_names_are_used() {
        let reference = HashMap::from([
            ("USD".to_string(), "美元".to_string()),
            ("EUR".to_string(), "歐元".to_string()),
        ]);
        let out = transform(&quote_with(&["USD", "EUR", "GBP"], ""), &reference);

        assert_eq!(out.currencies[0].code, "EUR");
        assert_eq!(out.currencies[0].local_name, "歐元");
        assert_eq!(out.currencies[2].local_name, "美元");
    }

    #[test]
    fn missing_reference_falls_back_to_description() {
        let out = transform(&quote_with(&["GBP"], ""), &HashMap::new());
        assert_eq!(out.currencies[0].local_name, "GBP description");
    }

    #[test]
    fn rate_text_is_copied() {
        let mut quote = quote_with(&["USD"], "");
        quote.bpi.get_mut("USD").unwrap().rate_text = "23,342.0112".to_string();
        let out = transform(&quote, &HashMap::new());
        assert_eq!(out.currencies[0].rate_text, "23,342.0112");
    }

    #[test]
    fn empty_quote_gives_empty_report() {
        let out = transform(&quote_with(&[], "2018-03-22T23:30:00+00:00"), &HashMap::new());
        assert!(out.currencies.is_empty());
    }

    proptest! {
        #[test]
        fn output_matches_input_and_is_sorted(
            codes in proptest::collection::btree_set("[A-Z]{3}", 0..12),
            known in proptest::collection::vec(any::<bool>(), 12),
        ) {
            let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
            let reference: HashMap<String, String> = codes
                .iter()
                .zip(known.iter())
                .filter(|(_, k)| **k)
                .map(|(c, _)| (c.to_string(), format!("local {c}")))
                .collect();

            let quote = quote_with(&codes, "2018-03-22T23:30:00+00:00");
            let out = transform(&quote, &reference);

            prop_assert_eq!(out.currencies.len(), quote.currency_count());
            prop_assert!(out.is_sorted_by_code());
            for line in &out.currencies {
                let expected = reference
                    .get(&line.code)
                    .cloned()
                    .unwrap_or_else(|| format!("{} description", line.code));
                prop_assert_eq!(&line.local_name, &expected);
            }
        }
    }
}

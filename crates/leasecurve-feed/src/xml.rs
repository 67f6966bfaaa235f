//! Parser for the publisher's yearly XML document.
//!
//! The document is an Atom feed of OData entries; each `<entry>` holds an
//! `<m:properties>` block with a `NEW_DATE` element and one `BC_*` element
//! per tenor. Namespace prefixes vary, so elements are matched by local
//! name. A tenor element that is missing, self-closed (`m:null="true"`), or
//! whose text does not parse as a number leaves that tenor absent.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use leasecurve_core::{Date, Tenor, TenorCurve};

use crate::error::{FeedResult, FetchError};
use crate::source::YearObservations;

/// Parses a full feed document into date-keyed observations.
///
/// Entries without a parsable `NEW_DATE` are skipped. Later entries for the
/// same date overwrite earlier ones, matching the cache's per-date upsert.
pub(crate) fn parse_feed(xml: &str) -> FeedResult<YearObservations> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut observations = YearObservations::new();
    let mut in_entry = false;
    let mut current_field: Option<Vec<u8>> = None;
    let mut entry_date: Option<Date> = None;
    let mut entry_curve = TenorCurve::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"entry" {
                    in_entry = true;
                    entry_date = None;
                    entry_curve = TenorCurve::new();
                } else if in_entry {
                    current_field = Some(e.local_name().as_ref().to_vec());
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(field), Ok(text)) = (current_field.as_deref(), t.unescape()) {
                    record_field(field, text.trim(), &mut entry_date, &mut entry_curve);
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"entry" {
                    in_entry = false;
                    match entry_date.take() {
                        Some(date) => {
                            observations.insert(date, std::mem::take(&mut entry_curve));
                        }
                        None => debug!("skipping feed entry without a parsable date"),
                    }
                }
                current_field = None;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(FetchError::malformed(e.to_string())),
        }
    }

    Ok(observations)
}

/// Applies one element's text to the entry being built.
fn record_field(field: &[u8], text: &str, date: &mut Option<Date>, curve: &mut TenorCurve) {
    if field == b"NEW_DATE" {
        // Dates arrive as timestamps ("2024-01-02T00:00:00"); only the
        // calendar-date prefix is meaningful.
        if let Some(prefix) = text.get(..10) {
            *date = Date::parse(prefix).ok();
        }
        return;
    }

    // Exact local-name match keeps decorative fields like
    // BC_30YEARDISPLAY out of the curve.
    if let Some(tenor) = Tenor::ALL.iter().copied().find(|t| t.xml_field().as_bytes() == field) {
        if let Ok(rate) = text.parse::<f64>() {
            curve.insert(tenor, rate);
        }
    }
}

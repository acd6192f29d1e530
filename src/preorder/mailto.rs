use urlencoding::encode;

use super::record::PreorderRecord;
use crate::config;

pub fn subject(record: &PreorderRecord) -> String {
    format!("Pre-ordine uova — confezione {} (x{})", record.pack, record.qty)
}

pub fn body(record: &PreorderRecord) -> String {
    let note = if record.note.is_empty() { "-" } else { &record.note };
    format!(
        "Nome: {}\nContatto: {}\nConfezione: {}\nQuantità: {}\nNote: {}\n\n(Inviato dal sito)",
        record.name, record.contact, record.pack, record.qty, note
    )
}

/// Fallback link that opens the visitor's mail client with the order filled in.
pub fn mailto_href(record: &PreorderRecord) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config::ORDER_EMAIL,
        encode(&subject(record)),
        encode(&body(record))
    )
}

pub fn confirmation(record: &PreorderRecord) -> String {
    format!(
        "Perfetto {}. Hai scelto {} confezione/e da {}. Ti ricontatteremo su: {}.",
        record.name, record.qty, record.pack, record.contact
    )
}

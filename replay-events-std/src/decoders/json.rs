//! Newline-delimited JSON entry decoder.
//!
//! Reads the serialized form of an entry stream: one JSON object per record,
//! as produced by serializing [`Entry`] values. This lets hosts replay a
//! stream that an external capture decoder has already written out, without
//! decoding the binary capture again.

use replay_events_core::{Decoder, Entry, Tagged};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Decodes a stream of JSON records separated by whitespace or newlines.
///
/// Record order in the input is the order of the returned entries. A record
/// that fails to parse aborts decoding; the `serde_json` error reports its
/// line and column.
pub struct JsonLinesDecoder<E = Entry>(PhantomData<fn() -> E>);

impl<E> JsonLinesDecoder<E> {
    /// Create a decoder.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for JsonLinesDecoder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for JsonLinesDecoder<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for JsonLinesDecoder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonLinesDecoder")
    }
}

impl<E> Decoder for JsonLinesDecoder<E>
where
    E: Tagged + DeserializeOwned,
{
    type Entry = E;
    type Error = serde_json::Error;

    fn decode(&self, raw: &[u8]) -> Result<Vec<E>, serde_json::Error> {
        serde_json::Deserializer::from_slice(raw)
            .into_iter::<E>()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_events_core::EntryKind;

    #[test]
    fn test_decode_lines_in_order() {
        let raw = br#"{"type":"chat","time":1,"slot":0,"key":"glhf"}
{"type":"DotaCombatlogDamage","time":2,"attackername":"npc_dota_hero_axe","value":42}

{"type":"DotaCombatlogSomethingNew","time":3}
"#;
        let entries = JsonLinesDecoder::<Entry>::new().decode(raw).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].is(EntryKind::Chat));
        assert_eq!(entries[0].key.as_deref(), Some("glhf"));
        assert_eq!(entries[1].kind(), Some(EntryKind::Damage));
        assert_eq!(entries[1].value, Some(42));
        assert_eq!(entries[2].kind(), None);
    }

    #[test]
    fn test_decode_empty_input() {
        let entries = JsonLinesDecoder::<Entry>::new().decode(b"").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let raw = b"{\"type\":\"chat\",\"time\":1}\n{\"type\":\"pings\",\"time\":x}\n";
        let err = JsonLinesDecoder::<Entry>::new().decode(raw).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_serialized_entries_decode_back() {
        let mut ward = Entry::new(EntryKind::Obs, 120.0);
        ward.x = Some(140);
        ward.y = Some(96);
        let raw = format!("{}\n", serde_json::to_string(&ward).unwrap());

        let entries = JsonLinesDecoder::<Entry>::new().decode(raw.as_bytes()).unwrap();
        assert_eq!(entries, vec![ward]);
    }
}

use std::fmt;

use crate::core::constants::sii;

/// One entry of a live stream list.
///
/// A record keeps the payload exactly as it appeared between the quotes of
/// its `stream_data[<index>]` line, so a surviving stream is written back
/// byte for byte. The six fields are split out of that payload for
/// reporting and checking only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    index: usize,
    url: String,
    name: String,
    genre: String,
    language: String,
    bitrate: String,
    flag: String,
    raw_payload: String,
}

impl StreamRecord {
    /// Build a record from the declared index and the quoted payload.
    ///
    /// Returns `None` unless the payload splits into exactly six
    /// `|`-separated fields.
    ///
    /// # Examples
    /// ```
    /// use streamsup::core::types::StreamRecord;
    ///
    /// let record = StreamRecord::from_payload(
    ///     3,
    ///     "http://radio.example/live|Example FM|Pop|EN|128|0",
    /// )
    /// .unwrap();
    /// assert_eq!(record.index(), 3);
    /// assert_eq!(record.name(), "Example FM");
    ///
    /// assert!(StreamRecord::from_payload(4, "http://radio.example|Short|Pop|EN|128").is_none());
    /// ```
    pub fn from_payload(index: usize, payload: &str) -> Option<Self> {
        let fields: Vec<&str> = payload.split(sii::FIELD_SEPARATOR).collect();
        let [url, name, genre, language, bitrate, flag] = fields.as_slice() else {
            return None;
        };

        Some(Self {
            index,
            url: (*url).to_string(),
            name: (*name).to_string(),
            genre: (*genre).to_string(),
            language: (*language).to_string(),
            bitrate: (*bitrate).to_string(),
            flag: (*flag).to_string(),
            raw_payload: payload.to_string(),
        })
    }

    /// Index declared in the source file
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn bitrate(&self) -> &str {
        &self.bitrate
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The payload as read from the file, never rebuilt from the fields
    pub fn raw_payload(&self) -> &str {
        &self.raw_payload
    }
}

impl fmt::Display for StreamRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.index, self.name, self.url)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_from_payload__six_fields() {
        let record =
            StreamRecord::from_payload(7, "https://a.example/stream|Radio A|Rock|DE|320|1").unwrap();

        assert_eq!(record.index(), 7);
        assert_eq!(record.url(), "https://a.example/stream");
        assert_eq!(record.name(), "Radio A");
        assert_eq!(record.genre(), "Rock");
        assert_eq!(record.language(), "DE");
        assert_eq!(record.bitrate(), "320");
        assert_eq!(record.flag(), "1");
        assert_eq!(
            record.raw_payload(),
            "https://a.example/stream|Radio A|Rock|DE|320|1"
        );
    }

    #[test]
    fn test_from_payload__wrong_field_count() {
        assert!(StreamRecord::from_payload(0, "a|b|c|d|e").is_none());
        assert!(StreamRecord::from_payload(0, "a|b|c|d|e|f|g").is_none());
        assert!(StreamRecord::from_payload(0, "").is_none());
    }

    #[test]
    fn test_from_payload__empty_fields_are_kept() {
        let record = StreamRecord::from_payload(1, "|||||").unwrap();

        assert_eq!(record.url(), "");
        assert_eq!(record.raw_payload(), "|||||");
    }

    #[test]
    fn test_from_payload__url_is_not_validated() {
        let record = StreamRecord::from_payload(2, "not a url|Name|Genre|EN|64|0").unwrap();

        assert_eq!(record.url(), "not a url");
    }

    #[test]
    fn test_display() {
        let record = StreamRecord::from_payload(12, "http://x.example|X Radio|Jazz|FR|96|0").unwrap();

        assert_eq!(record.to_string(), "[12] X Radio - http://x.example");
    }
}

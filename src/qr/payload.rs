//! Payload shaping applied to the input text before encoding.

/// How the input text is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadKind {
    /// Encode the text exactly as typed
    #[default]
    Text,
    /// Treat the text as a URL, adding `http://` when no scheme is present
    Url,
}

/// Text ready to be handed to the QR encoder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    data: String,
}

impl Payload {
    /// Build a payload from user input according to `kind`
    pub fn new(kind: PayloadKind, input: &str) -> Self {
        match kind {
            PayloadKind::Text => Self::text(input),
            PayloadKind::Url => Self::url(input),
        }
    }

    /// Verbatim text payload
    pub fn text(input: &str) -> Self {
        Self {
            data: input.to_string(),
        }
    }

    /// URL payload
    pub fn url(input: &str) -> Self {
        let data = if input.starts_with("http") {
            input.to_string()
        } else {
            format!("http://{}", input)
        };
        Self { data }
    }

    /// The string that will be encoded
    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload_is_verbatim() {
        assert_eq!(Payload::text("hello world").as_str(), "hello world");
        assert_eq!(Payload::new(PayloadKind::Text, "  x ").as_str(), "  x ");
    }

    #[test]
    fn test_url_payload_adds_scheme() {
        assert_eq!(Payload::url("example.com").as_str(), "http://example.com");
    }

    #[test]
    fn test_url_payload_keeps_existing_scheme() {
        assert_eq!(
            Payload::url("https://example.com").as_str(),
            "https://example.com"
        );
        assert_eq!(Payload::url("http://a.b").as_str(), "http://a.b");
    }
}

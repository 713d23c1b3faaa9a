//! SOAP 1.1 envelope helper

use crate::xml::{Element, ToXml};

/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP envelope wrapping a header object and a body object
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<H, B> {
    /// Header content
    pub header: Option<H>,
    /// Body content
    pub body: B,
}

/// Wrap header and body content in an envelope
pub fn create_envelope<H, B>(header_content: H, body_content: B) -> Envelope<H, B> {
    Envelope {
        header: Some(header_content),
        body: body_content,
    }
}

impl<H: ToXml, B: ToXml> Envelope<H, B> {
    /// Build the annotated tree: `Envelope`, `Header` and `Body` carry
    /// `envelope_prefix`, the header and body content trees carry
    /// `content_prefix` down to their leaves.
    pub fn to_namespaced_xml(&self, envelope_prefix: &str, content_prefix: &str) -> Element {
        let mut header = Element::new("Header").prefixed(envelope_prefix);
        if let Some(ref content) = self.header {
            header = header.with_child(content.to_xml().with_namespace_prefix(content_prefix));
        }

        let body = Element::new("Body")
            .prefixed(envelope_prefix)
            .with_child(self.body.to_xml().with_namespace_prefix(content_prefix));

        Element::new("Envelope")
            .prefixed(envelope_prefix)
            .with_child(header)
            .with_child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl ToXml for Ping {
        fn to_xml(&self) -> Element {
            Element::new("Ping").with_child(Element::text("Value", "1"))
        }
    }

    #[test]
    fn test_envelope_prefixes() {
        let envelope = create_envelope(Ping, Ping);
        let tree = envelope.to_namespaced_xml("soap", "v1");

        assert_eq!(tree.qualified_name(), "soap:Envelope");
        assert_eq!(tree.children[0].qualified_name(), "soap:Header");
        assert_eq!(tree.children[1].qualified_name(), "soap:Body");
        assert_eq!(tree.children[1].children[0].qualified_name(), "v1:Ping");
        assert_eq!(
            tree.children[1].children[0].children[0].qualified_name(),
            "v1:Value"
        );
    }

    #[test]
    fn test_envelope_without_header() {
        let envelope: Envelope<Ping, Ping> = Envelope {
            header: None,
            body: Ping,
        };
        let xml = envelope
            .to_namespaced_xml("soap", "v1")
            .export(&[("soap", SOAP_ENVELOPE_NS)])
            .unwrap();

        assert!(xml.contains("<soap:Header/>"));
        assert!(xml.contains("<v1:Ping>"));
    }
}

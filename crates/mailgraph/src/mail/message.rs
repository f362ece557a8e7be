//! Outbound message model.

use super::attachment::FileAttachment;

/// Body content type for an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// HTML body, rendered by the recipient's mail client.
    Html,
    /// Plain text body.
    Text,
}

impl BodyType {
    /// Returns the wire name Graph expects in the `contentType` field.
    #[must_use]
    pub const fn as_graph_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Text => "Text",
        }
    }
}

/// An email message to send through the Graph `sendMail` action.
///
/// Recipient addresses are validated when the message is sent, so the
/// builder methods stay infallible and chain freely.
#[derive(Debug, Clone)]
pub struct Message {
    /// Subject line.
    pub subject: String,
    /// Body content.
    pub body: String,
    /// Body content type.
    pub body_type: BodyType,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// CC addresses.
    pub cc: Vec<String>,
    /// Reply-To addresses.
    pub reply_to: Vec<String>,
    /// File attachments.
    pub attachments: Vec<FileAttachment>,
    /// Whether Graph keeps a copy in the sender's Sent Items folder.
    pub save_to_sent_items: bool,
}

impl Message {
    /// Creates a message with an HTML body.
    #[must_use]
    pub fn new(subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: html_body.into(),
            body_type: BodyType::Html,
            to: Vec::new(),
            cc: Vec::new(),
            reply_to: Vec::new(),
            attachments: Vec::new(),
            save_to_sent_items: true,
        }
    }

    /// Creates a message with a plain text body.
    #[must_use]
    pub fn text(subject: impl Into<String>, body: impl Into<String>) -> Self {
        let mut message = Self::new(subject, body);
        message.body_type = BodyType::Text;
        message
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, recipient: impl Into<String>) -> Self {
        self.cc.push(recipient.into());
        self
    }

    /// Adds a Reply-To address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Adds a file attachment.
    #[must_use]
    pub fn attach(mut self, attachment: FileAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Sets whether Graph keeps a copy in Sent Items (defaults to `true`).
    #[must_use]
    pub const fn save_to_sent_items(mut self, save: bool) -> Self {
        self.save_to_sent_items = save;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let message = Message::new("Subject", "<p>Body</p>");
        assert_eq!(message.subject, "Subject");
        assert_eq!(message.body_type, BodyType::Html);
        assert!(message.to.is_empty());
        assert!(message.attachments.is_empty());
        assert!(message.save_to_sent_items);
    }

    #[test]
    fn test_builder_chaining() {
        let message = Message::new("Report", "<p>Hi</p>")
            .to("a@example.com")
            .to("b@example.com")
            .cc("c@example.com")
            .reply_to("noreply@example.com")
            .save_to_sent_items(false);
        assert_eq!(message.to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(message.cc, vec!["c@example.com"]);
        assert_eq!(message.reply_to, vec!["noreply@example.com"]);
        assert!(!message.save_to_sent_items);
    }

    #[test]
    fn test_text_body() {
        let message = Message::text("Ping", "hello");
        assert_eq!(message.body_type, BodyType::Text);
        assert_eq!(message.body_type.as_graph_str(), "Text");
    }

    #[test]
    fn test_html_wire_name() {
        assert_eq!(BodyType::Html.as_graph_str(), "HTML");
    }
}

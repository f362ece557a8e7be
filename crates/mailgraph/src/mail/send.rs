//! Sending mail through the Graph `sendMail` action.

use super::address::Address;
use super::message::Message;
use super::payload::{ItemBody, MessagePayload, Recipient, SendMailRequest};
use crate::client::GraphClient;
use crate::error::{Error, Result};
use tracing::info;

impl GraphClient {
    /// Sends a message from the configured sender mailbox.
    ///
    /// Graph accepts the message with `202 Accepted`; delivery happens
    /// asynchronously on the service side.
    ///
    /// # Errors
    ///
    /// Returns an error if the message has no recipients, an address fails
    /// validation, token acquisition fails, or Graph rejects the request.
    pub async fn send_mail(&self, message: &Message) -> Result<()> {
        let sender = self.sender().as_str().to_string();
        self.send_mail_as(&sender, message).await
    }

    /// Sends a message from an explicit sender mailbox.
    ///
    /// The app registration needs `Mail.Send` application permission for
    /// the target mailbox.
    ///
    /// # Errors
    ///
    /// Same as [`GraphClient::send_mail`], plus an invalid sender address.
    pub async fn send_mail_as(&self, sender: &str, message: &Message) -> Result<()> {
        let sender = Address::new(sender)?;
        let payload = build_payload(message)?;

        let status = self
            .post_json(&format!("users/{sender}/sendMail"), &payload)
            .await?;
        info!(
            %sender,
            to = message.to.len(),
            cc = message.cc.len(),
            attachments = message.attachments.len(),
            %status,
            "mail accepted"
        );
        Ok(())
    }
}

/// Builds the `sendMail` envelope, validating every address.
fn build_payload(message: &Message) -> Result<SendMailRequest> {
    if message.to.is_empty() {
        return Err(Error::NoRecipients);
    }

    Ok(SendMailRequest {
        message: MessagePayload {
            subject: message.subject.clone(),
            body: ItemBody {
                content_type: message.body_type.as_graph_str(),
                content: message.body.clone(),
            },
            to_recipients: recipients(&message.to)?,
            cc_recipients: recipients(&message.cc)?,
            reply_to: recipients(&message.reply_to)?,
            attachments: message.attachments.clone(),
        },
        save_to_sent_items: message.save_to_sent_items,
    })
}

/// Validates a list of raw addresses into recipient wrappers.
fn recipients(addresses: &[String]) -> Result<Vec<Recipient>> {
    addresses
        .iter()
        .map(|addr| Ok(Recipient::new(&Address::new(addr.as_str())?)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mail::attachment::FileAttachment;

    #[test]
    fn test_payload_matches_graph_wire_format() {
        let message = Message::new("Monthly report", "<p>See attached.</p>")
            .to("a@example.com")
            .cc("b@example.com")
            .reply_to("c@example.com")
            .attach(FileAttachment::from_bytes("r.pdf", "application/pdf", b"PDF"));

        let payload = build_payload(&message).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": {
                    "subject": "Monthly report",
                    "body": {
                        "contentType": "HTML",
                        "content": "<p>See attached.</p>"
                    },
                    "toRecipients": [
                        { "emailAddress": { "address": "a@example.com" } }
                    ],
                    "ccRecipients": [
                        { "emailAddress": { "address": "b@example.com" } }
                    ],
                    "replyTo": [
                        { "emailAddress": { "address": "c@example.com" } }
                    ],
                    "attachments": [
                        {
                            "@odata.type": "#microsoft.graph.fileAttachment",
                            "name": "r.pdf",
                            "contentType": "application/pdf",
                            "contentBytes": "UERG"
                        }
                    ]
                },
                "saveToSentItems": true
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted_when_empty() {
        let message = Message::new("Subject", "<p>Body</p>").to("a@example.com");
        let payload = build_payload(&message).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        let inner = &value["message"];
        assert!(inner.get("ccRecipients").is_none());
        assert!(inner.get("replyTo").is_none());
        assert!(inner.get("attachments").is_none());
        assert_eq!(value["saveToSentItems"], true);
    }

    #[test]
    fn test_multiple_recipients_preserve_order() {
        let message = Message::new("S", "B")
            .to("first@example.com")
            .to("second@example.com");
        let payload = build_payload(&message).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        let to = value["message"]["toRecipients"].as_array().unwrap();
        assert_eq!(to.len(), 2);
        assert_eq!(to[0]["emailAddress"]["address"], "first@example.com");
        assert_eq!(to[1]["emailAddress"]["address"], "second@example.com");
    }

    #[test]
    fn test_text_body_content_type() {
        let message = Message::text("Ping", "hello").to("a@example.com");
        let payload = build_payload(&message).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["message"]["body"]["contentType"], "Text");
    }

    #[test]
    fn test_no_recipients_rejected() {
        let message = Message::new("Subject", "Body");
        assert!(matches!(build_payload(&message), Err(Error::NoRecipients)));
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        let message = Message::new("Subject", "Body").to("not-an-address");
        assert!(matches!(
            build_payload(&message),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_save_to_sent_items_flag() {
        let message = Message::new("S", "B")
            .to("a@example.com")
            .save_to_sent_items(false);
        let payload = build_payload(&message).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["saveToSentItems"], false);
    }
}

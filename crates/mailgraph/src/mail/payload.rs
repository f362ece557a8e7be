//! Wire format for the Graph `sendMail` action.

use super::address::Address;
use super::attachment::FileAttachment;
use serde::Serialize;

/// Request envelope posted to `/users/{sender}/sendMail`.
#[derive(Debug, Serialize)]
pub(crate) struct SendMailRequest {
    /// The message resource.
    pub message: MessagePayload,
    /// Whether Graph keeps a copy in Sent Items.
    #[serde(rename = "saveToSentItems")]
    pub save_to_sent_items: bool,
}

/// The `message` resource inside a send request.
///
/// CC, Reply-To, and attachment lists are omitted from the JSON when empty
/// rather than sent as empty arrays.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessagePayload {
    /// Subject line.
    pub subject: String,
    /// Body content and type.
    pub body: ItemBody,
    /// Primary recipients.
    pub to_recipients: Vec<Recipient>,
    /// CC recipients, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc_recipients: Vec<Recipient>,
    /// Reply-To addresses, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<Recipient>,
    /// File attachments, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileAttachment>,
}

/// Message body with its content type.
#[derive(Debug, Serialize)]
pub(crate) struct ItemBody {
    /// `HTML` or `Text`.
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
    /// The body itself.
    pub content: String,
}

/// A single recipient wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct Recipient {
    /// The wrapped address.
    #[serde(rename = "emailAddress")]
    pub email_address: EmailAddress,
}

impl Recipient {
    /// Wraps a validated address in the Graph recipient shape.
    pub fn new(address: &Address) -> Self {
        Self {
            email_address: EmailAddress {
                address: address.as_str().to_string(),
            },
        }
    }
}

/// The `emailAddress` object inside a recipient.
#[derive(Debug, Serialize)]
pub(crate) struct EmailAddress {
    /// SMTP address.
    pub address: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_shape() {
        let address = Address::new("user@example.com").unwrap();
        let value = serde_json::to_value(Recipient::new(&address)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "emailAddress": { "address": "user@example.com" } })
        );
    }

    #[test]
    fn test_item_body_field_names() {
        let body = ItemBody {
            content_type: "HTML",
            content: "<p>Hi</p>".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contentType"], "HTML");
        assert_eq!(value["content"], "<p>Hi</p>");
    }
}

//! Directory user and contact models.

use serde::Deserialize;

/// A user record returned by the Graph directory.
///
/// Every field is optional; Graph omits properties the caller did not
/// `$select` or that are simply unset on the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    /// Object id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, usually "First Last".
    #[serde(default)]
    pub display_name: Option<String>,
    /// Given (first) name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Surname (last name).
    #[serde(default)]
    pub surname: Option<String>,
    /// Primary SMTP address.
    #[serde(default)]
    pub mail: Option<String>,
    /// User principal name (sign-in address).
    #[serde(default)]
    pub user_principal_name: Option<String>,
    /// Employee identifier assigned by HR.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl DirectoryUser {
    /// Returns the best human-readable label for the user.
    ///
    /// Prefers the display name, then "given surname", then the sign-in or
    /// mail address.
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = &self.display_name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }

        let given = self.given_name.as_deref().unwrap_or_default();
        let surname = self.surname.as_deref().unwrap_or_default();
        let full = format!("{given} {surname}");
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }

        self.user_principal_name
            .clone()
            .or_else(|| self.mail.clone())
            .unwrap_or_else(|| "(unknown)".to_string())
    }
}

/// A trimmed directory record for mail merge and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Given (first) name (may be empty).
    pub given_name: String,
    /// Surname (may be empty).
    pub surname: String,
    /// Email address (may be empty when the user has no mailbox).
    pub email: String,
    /// Employee identifier the record was looked up by.
    pub employee_id: String,
}

impl Contact {
    /// Creates a contact from a directory user.
    #[must_use]
    pub fn from_user(user: &DirectoryUser, employee_id: impl Into<String>) -> Self {
        Self {
            given_name: user.given_name.clone().unwrap_or_default(),
            surname: user.surname.clone().unwrap_or_default(),
            email: user.mail.clone().unwrap_or_default(),
            employee_id: employee_id.into(),
        }
    }

    /// Returns a display string for the contact.
    ///
    /// If a name is present, returns "Name <email>", otherwise just the
    /// email address.
    #[must_use]
    pub fn display(&self) -> String {
        let name = format!("{} {}", self.given_name, self.surname);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else if self.email.is_empty() {
            name.to_string()
        } else {
            format!("{name} <{}>", self.email)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> DirectoryUser {
        serde_json::from_str(
            r#"{
                "id": "5e3c7a90-1f1d-4f3a-9be0-3f8e2f6f21aa",
                "displayName": "Avery Chen",
                "givenName": "Avery",
                "surname": "Chen",
                "mail": "avery.chen@contoso.com",
                "userPrincipalName": "avery.chen@contoso.com",
                "employeeId": "E10443"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_user_deserializes_graph_field_names() {
        let user = sample_user();
        assert_eq!(user.display_name.as_deref(), Some("Avery Chen"));
        assert_eq!(user.given_name.as_deref(), Some("Avery"));
        assert_eq!(user.surname.as_deref(), Some("Chen"));
        assert_eq!(user.mail.as_deref(), Some("avery.chen@contoso.com"));
        assert_eq!(user.employee_id.as_deref(), Some("E10443"));
    }

    #[test]
    fn test_user_missing_fields_deserialize_as_none() {
        let user: DirectoryUser =
            serde_json::from_str(r#"{"displayName": "Avery Chen"}"#).unwrap();
        assert!(user.mail.is_none());
        assert!(user.employee_id.is_none());
    }

    #[test]
    fn test_label_prefers_display_name() {
        let user = sample_user();
        assert_eq!(user.label(), "Avery Chen");
    }

    #[test]
    fn test_label_falls_back_to_name_parts() {
        let user: DirectoryUser =
            serde_json::from_str(r#"{"givenName": "Avery", "surname": "Chen"}"#).unwrap();
        assert_eq!(user.label(), "Avery Chen");
    }

    #[test]
    fn test_label_falls_back_to_upn() {
        let user: DirectoryUser =
            serde_json::from_str(r#"{"userPrincipalName": "a.chen@contoso.com"}"#).unwrap();
        assert_eq!(user.label(), "a.chen@contoso.com");
    }

    #[test]
    fn test_contact_from_user() {
        let contact = Contact::from_user(&sample_user(), "E10443");
        assert_eq!(contact.given_name, "Avery");
        assert_eq!(contact.surname, "Chen");
        assert_eq!(contact.email, "avery.chen@contoso.com");
        assert_eq!(contact.employee_id, "E10443");
    }

    #[test]
    fn test_contact_display_with_name() {
        let contact = Contact::from_user(&sample_user(), "E10443");
        assert_eq!(contact.display(), "Avery Chen <avery.chen@contoso.com>");
    }

    #[test]
    fn test_contact_display_without_name() {
        let user: DirectoryUser =
            serde_json::from_str(r#"{"mail": "x@contoso.com"}"#).unwrap();
        let contact = Contact::from_user(&user, "E1");
        assert_eq!(contact.display(), "x@contoso.com");
    }
}

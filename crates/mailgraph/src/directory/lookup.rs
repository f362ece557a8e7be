//! Directory lookups by employee id or name.
//!
//! Every lookup expects exactly one match: zero matches and multiple
//! matches are both errors, so a caller can never mail the wrong person
//! because a query was ambiguous.

use super::model::{Contact, DirectoryUser};
use crate::client::GraphClient;
use crate::error::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Properties requested from the directory on every lookup.
const USER_SELECT: &str = "id,displayName,givenName,surname,mail,userPrincipalName,employeeId";

/// Collection envelope for directory queries, `{"value": [...]}`.
#[derive(Debug, Deserialize)]
struct UserList {
    value: Vec<DirectoryUser>,
}

impl GraphClient {
    /// Finds the single user with the given employee id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] when nothing matches and
    /// [`Error::AmbiguousUser`] when more than one user carries the id.
    pub async fn find_user_by_employee_id(&self, employee_id: &str) -> Result<DirectoryUser> {
        let filter = format!("employeeId eq '{}'", escape_odata(employee_id));
        self.find_single_user(&filter, employee_id).await
    }

    /// Finds the single user matching a "First Last" name.
    ///
    /// The filter matches either the display name prefix or the given
    /// name/surname pair; middle tokens are ignored. A single-word name
    /// matches display name or given name prefixes.
    ///
    /// # Errors
    ///
    /// Same exact-match semantics as
    /// [`GraphClient::find_user_by_employee_id`].
    pub async fn find_user_by_name(&self, name: &str) -> Result<DirectoryUser> {
        if name.trim().is_empty() {
            return Err(Error::UserNotFound(name.to_string()));
        }
        let filter = name_filter(name);
        self.find_single_user(&filter, name).await
    }

    /// Finds a user's email address by employee id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEmail`] when the user exists but has no
    /// mailbox, in addition to the lookup errors.
    pub async fn email_by_employee_id(&self, employee_id: &str) -> Result<String> {
        let user = self.find_user_by_employee_id(employee_id).await?;
        required_mail(user, employee_id)
    }

    /// Finds a user's first name by employee id.
    ///
    /// Returns `None` when the matched account has no given name set.
    ///
    /// # Errors
    ///
    /// Same as [`GraphClient::find_user_by_employee_id`].
    pub async fn given_name_by_employee_id(&self, employee_id: &str) -> Result<Option<String>> {
        let user = self.find_user_by_employee_id(employee_id).await?;
        Ok(user.given_name)
    }

    /// Fetches a trimmed contact record by employee id.
    ///
    /// # Errors
    ///
    /// Same as [`GraphClient::find_user_by_employee_id`].
    pub async fn contact_by_employee_id(&self, employee_id: &str) -> Result<Contact> {
        let user = self.find_user_by_employee_id(employee_id).await?;
        Ok(Contact::from_user(&user, employee_id))
    }

    /// Runs a filtered user query and selects the single match.
    async fn find_single_user(&self, filter: &str, query: &str) -> Result<DirectoryUser> {
        let list: UserList = self
            .get_json("users", &[("$filter", filter), ("$select", USER_SELECT)])
            .await?;
        debug!(query, matches = list.value.len(), "directory lookup");
        select_single(list.value, query)
    }
}

/// Reduces a query's matches to exactly one user.
///
/// Zero matches and multiple matches are both errors; the ambiguous case
/// carries every candidate's label.
fn select_single(mut users: Vec<DirectoryUser>, query: &str) -> Result<DirectoryUser> {
    match users.len() {
        1 => Ok(users.remove(0)),
        0 => Err(Error::UserNotFound(query.to_string())),
        _ => Err(Error::AmbiguousUser {
            query: query.to_string(),
            candidates: users.iter().map(DirectoryUser::label).collect(),
        }),
    }
}

/// Extracts a user's mail address, erroring when the account has none.
fn required_mail(user: DirectoryUser, employee_id: &str) -> Result<String> {
    user.mail
        .ok_or_else(|| Error::MissingEmail(employee_id.to_string()))
}

/// Escapes single quotes for OData string literals.
fn escape_odata(value: &str) -> String {
    value.replace('\'', "''")
}

/// Builds the `$filter` expression for a name search.
fn name_filter(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let first = escape_odata(tokens.first().copied().unwrap_or_default());
    let last = escape_odata(tokens.last().copied().unwrap_or_default());

    if tokens.len() < 2 {
        format!("startswith(displayName,'{first}') or startswith(givenName,'{first}')")
    } else {
        format!(
            "startswith(displayName,'{first} {last}') or (startswith(givenName,'{first}') and startswith(surname,'{last}'))"
        )
    }
}

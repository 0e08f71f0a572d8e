//! The credentials delivery email.
//!
//! One message is rendered per issuance and handed to an external
//! mail-delivery collaborator. The recipient link encodes the environment,
//! username and secret as fragment parameters appended to a fixed
//! credentials URL, so the secret never appears in a query string.

use std::fmt::Write as _;

/// Immutable credentials-email template.
///
/// Built explicitly once at component initialization from deployment
/// configuration and passed by reference to the render site; there is no
/// process-wide template state.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    environment: String,
    from_address: String,
    mint_host: String,
    credentials_url: String,
}

impl EmailTemplate {
    /// Build the template from deployment configuration.
    pub fn new(
        environment: impl Into<String>,
        from_address: impl Into<String>,
        mint_host: impl Into<String>,
        credentials_url: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            from_address: from_address.into(),
            mint_host: mint_host.into(),
            credentials_url: credentials_url.into(),
        }
    }

    /// The link the recipient follows to retrieve or roll credentials.
    pub fn credentials_link(&self, username: &str, secret: &str) -> String {
        format!(
            "{}#?env={}&username={}&secret={}",
            self.credentials_url, self.environment, username, secret
        )
    }

    /// Render the full message for one issuance.
    pub fn render(&self, username: &str, email_address: &str, secret: &str) -> String {
        let mut message = String::new();

        // Headers.
        let _ = write!(
            message,
            "From: Mint Registration <{}>\r\n\
             To: {}\r\n\
             Subject: Credentials for {}@{}\r\n\
             Content-Type: text/plain; charset=UTF-8\r\n\
             \r\n",
            self.from_address, email_address, username, self.mint_host
        );

        // Body.
        let _ = write!(
            message,
            "Hi {}!\n\
             \n\
             Please click on the link below to retrieve your credentials for\n\
             {}:\n\
             \n\
             {}\n\
             \n\
             Keep this link safe and secure as this is your only way to retrieve or\n\
             roll your credentials in the future.\n",
            username,
            self.mint_host,
            self.credentials_link(username, secret)
        );

        message
    }
}

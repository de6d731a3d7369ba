//! WhatsApp contact link.

use crate::catalog::brand;

/// Pre-filled first message for the WhatsApp contact button.
fn default_message() -> String {
    format!(
        "Hello {}! I'm interested in your premium electronics and appliances. \
         Could you please provide more information?",
        brand::NAME
    )
}

/// Build the `wa.me` link with the pre-filled, URL-encoded message.
#[must_use]
pub fn contact_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        brand::WHATSAPP_NUMBER,
        urlencoding::encode(&default_message())
    )
}

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::MessagingChannel;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct WhatsAppChannel {
    number: String,
}

impl WhatsAppChannel {
    pub fn new(number: String) -> Self {
        Self { number }
    }

    pub fn chat_url(&self) -> String {
        format!("https://wa.me/{}", self.number)
    }
}

impl MessagingChannel for WhatsAppChannel {
    fn deep_link(&self, text: &str) -> String {
        let encoded = utf8_percent_encode(text, COMPONENT);
        format!("{}?text={encoded}", self.chat_url())
    }
}

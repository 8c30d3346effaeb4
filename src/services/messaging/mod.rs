pub mod whatsapp;

/// Where finished booking text is handed off. Dispatch is fire-and-forget:
/// the channel only builds the link the user opens.
pub trait MessagingChannel: Send + Sync {
    fn deep_link(&self, text: &str) -> String;
}

// Presenter — renders message sequences for the console
//
// Owns the display contract: an empty sequence renders as
// "No messages found." and each message as a From/To header plus a content
// line, separated by a dashed rule. Pure string building; printing happens
// in the menu loop.

use courier_core::Message;

const SEPARATOR: &str = "-------------------------";

pub fn render_messages(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "No messages found.\n".to_string();
    }

    let mut out = String::new();
    for message in messages {
        out.push_str(&format!(
            "From: {} -> To: {}\n",
            message.sender, message.recipient
        ));
        out.push_str(&format!("Content: {}\n", message.content));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

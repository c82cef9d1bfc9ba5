//! HTML rendition of an outgoing message.
//!
//! The plain-text body is sent verbatim; this module only produces the
//! decorated HTML alternative. Subject and body come straight from the
//! request, so both are escaped before interpolation.

/// Escapes the characters that carry meaning in HTML.
pub fn escape_html(input: &str) -> String {
  let mut escaped = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Builds the HTML body: escaped subject as heading, escaped message with
/// newlines turned into `<br>`, fixed footer.
pub fn render_html_body(subject: &str, message: &str) -> String {
  let subject = escape_html(subject);
  let message = escape_html(message).replace('\n', "<br>");

  format!(
    "<div style=\"font-family: Arial, sans-serif; padding: 20px;\">\
       <h2 style=\"color: #333;\">{}</h2>\
       <p style=\"color: #666; line-height: 1.6;\">{}</p>\
       <hr style=\"border: none; border-top: 1px solid #eee; margin: 20px 0;\">\
       <p style=\"color: #999; font-size: 12px;\">Sent via Email Sender App</p>\
     </div>",
    subject, message
  )
}

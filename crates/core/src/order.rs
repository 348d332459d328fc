//! WhatsApp checkout handoff: order summaries and deep links.
//!
//! Everything here is a pure function of its inputs; checkout hands the
//! generated text to an external messaging link and no state changes hands.

use rust_decimal::Decimal;

use crate::types::{CartItem, Product};

/// Render a multi-line order summary for the given cart contents.
///
/// Lists each item's name, quantity, unit price, and line subtotal, followed
/// by the grand total and a confirmation request.
#[must_use]
pub fn order_message(items: &[CartItem], total: Decimal) -> String {
    let mut message = String::from("*\u{1f6cd}\u{fe0f} Order Summary*\n\n");

    for item in items {
        message.push_str(&format!(
            "\u{1f4e6} {}\n   Qty: {} x ${:.2} = ${:.2}\n\n",
            item.product.name,
            item.quantity,
            item.product.price,
            item.line_price(),
        ));
    }

    message.push_str(&format!(
        "*Total: ${total:.2}*\n\nPlease confirm this order. Thank you!"
    ));

    message
}

/// Render a single-product inquiry message.
#[must_use]
pub fn product_inquiry(product: &Product) -> String {
    let description = if product.description.is_empty() {
        String::new()
    } else {
        format!("\u{1f4dd} {}\n", product.description)
    };

    format!(
        "Hi! I'm interested in this product:\n\n\u{1f4e6} *{}*\n\u{1f4b0} Price: ${:.2}\n{}\nPlease let me know more details!",
        product.name, product.price, description,
    )
}

/// Build a `wa.me` deep link that opens a chat with `phone` pre-populated
/// with `message` (percent-encoded into the `text` query parameter).
#[must_use]
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}

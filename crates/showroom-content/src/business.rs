//! Business identity and the outbound links built from it.

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Serialize;

/// Fixed business details shown in the navigation, footer and contact page.
#[derive(Debug, Clone, Serialize)]
pub struct Business {
    /// Display name
    pub name: &'static str,
    /// Monogram used as the logo mark
    pub monogram: &'static str,
    /// Line under the name in the navigation bar
    pub tagline: &'static str,
    /// One-sentence description used in the footer and meta description
    pub summary: &'static str,
    /// Phone number in E.164 form
    pub phone: &'static str,
    /// Phone number formatted for display
    pub phone_display: &'static str,
    /// Postal address, one entry per line
    pub address: [&'static str; 2],
    /// Short opening hours for the footer
    pub hours_short: &'static str,
    /// Opening hours for the contact page, one entry per line
    pub hours: [&'static str; 2],
    /// Google Maps place link
    pub map_url: &'static str,
    /// Google Maps embed link
    pub map_embed_url: &'static str,
    pub facebook_url: &'static str,
    pub instagram_url: &'static str,
    /// Prefilled chat message for generic inquiries
    pub inquiry_message: &'static str,
    /// Prefilled chat message for builder partnerships
    pub partnership_message: &'static str,
}

pub const BUSINESS: Business = Business {
    name: "MH ENTERPRISES",
    monogram: "MH",
    tagline: "Premium Tiles & Interiors",
    summary: "Your trusted destination for premium tiles, marbles, hardware, and interior materials in Islampur.",
    phone: "+918617895132",
    phone_display: "+91 86178 95132",
    address: ["Taranjibari, Islampur NH-31", "Islampur, West Bengal 733202"],
    hours_short: "Mon-Sat: 9 AM - 8 PM",
    hours: ["Monday - Saturday: 9:00 AM - 8:00 PM", "Sunday: Closed"],
    map_url: "https://www.google.com/maps/place/MH+ENTERPRISES/@26.2429159,88.1626201,17z",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3568.1234567890123!2d88.1626201!3d26.2429159!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x39e5037491a22b99%3A0xa10a30967aba8bf6!2sMH%20ENTERPRISES!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin",
    facebook_url: "https://facebook.com",
    instagram_url: "https://instagram.com",
    inquiry_message: "Hello! I would like to inquire about your products.",
    partnership_message:
        "Hello! I am a builder/designer interested in partnership with MH ENTERPRISES.",
};

impl Business {
    /// Chat deep link carrying the generic inquiry message.
    pub fn whatsapp_url(&self) -> String {
        whatsapp_url(self.phone, self.inquiry_message)
    }

    /// Chat deep link asking about one product category.
    pub fn category_inquiry_url(&self, category: &str) -> String {
        let message = format!("Hello! I would like to inquire about {}.", category);
        whatsapp_url(self.phone, &message)
    }

    /// Chat deep link carrying the partnership message.
    pub fn partnership_url(&self) -> String {
        whatsapp_url(self.phone, self.partnership_message)
    }

    pub fn tel_url(&self) -> String {
        tel_url(self.phone)
    }
}

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern is valid"));

/// Build a `wa.me` deep link for a phone number and a prefilled message.
///
/// Everything but the digits is stripped from the phone number.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits = NON_DIGIT.replace_all(phone, "");
    format!("https://wa.me/{}?text={}", digits, encode_component(message))
}

/// Build a `tel:` link.
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Bytes `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

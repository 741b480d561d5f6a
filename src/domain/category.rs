//! Entity category type
//!
//! Categories form an open set: the well-known variants cover the labels
//! emitted by the built-in pattern detectors and typical statistical
//! recognizers, while [`EntityCategory::Custom`] carries anything a
//! pluggable detector invents. Parsing never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a detected entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityCategory {
    /// Person names, including titles
    Person,
    /// Countries, cities, states
    Gpe,
    /// Companies, agencies, institutions
    Org,
    /// Non-GPE locations (mountain ranges, bodies of water)
    Loc,
    /// Buildings, airports, highways, bridges
    Fac,
    /// Absolute or relative dates and periods
    Date,
    /// Times smaller than a day
    Time,
    /// Nationalities, religious and political groups
    Norp,
    /// Named documents made into laws
    Law,
    /// Named events (hurricanes, battles, sports events)
    Event,
    /// Named languages
    Language,
    /// Products and objects
    Product,
    /// Titles of books, songs, etc.
    WorkOfArt,
    /// Email addresses
    Email,
    /// Telephone numbers
    PhoneNumber,
    /// International Bank Account Numbers
    Iban,
    /// US Social Security Numbers
    Ssn,
    /// Payment card numbers
    CreditCard,
    /// US bank routing numbers
    RoutingNumber,
    /// IP addresses
    IpAddress,
    /// Web URLs
    Url,
    /// Miscellaneous entities (some recognizers fold IBANs and
    /// other identifiers into this)
    Misc,
    /// Any category contributed by a pluggable detector
    Custom(String),
}

impl EntityCategory {
    /// The label text written into redacted output, without delimiters
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Gpe => "GPE",
            Self::Org => "ORG",
            Self::Loc => "LOC",
            Self::Fac => "FAC",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Norp => "NORP",
            Self::Law => "LAW",
            Self::Event => "EVENT",
            Self::Language => "LANGUAGE",
            Self::Product => "PRODUCT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Email => "EMAIL",
            Self::PhoneNumber => "PHONE_NUMBER",
            Self::Iban => "IBAN",
            Self::Ssn => "SSN",
            Self::CreditCard => "CREDIT_CARD",
            Self::RoutingNumber => "ROUTING_NUMBER",
            Self::IpAddress => "IP_ADDRESS",
            Self::Url => "URL",
            Self::Misc => "MISC",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntityCategory {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => Self::Person,
            "GPE" => Self::Gpe,
            "ORG" => Self::Org,
            "LOC" => Self::Loc,
            "FAC" => Self::Fac,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "NORP" => Self::Norp,
            "LAW" => Self::Law,
            "EVENT" => Self::Event,
            "LANGUAGE" => Self::Language,
            "PRODUCT" => Self::Product,
            "WORK_OF_ART" => Self::WorkOfArt,
            "EMAIL" => Self::Email,
            "PHONE_NUMBER" | "PHONE" => Self::PhoneNumber,
            "IBAN" => Self::Iban,
            "SSN" => Self::Ssn,
            "CREDIT_CARD" => Self::CreditCard,
            "ROUTING_NUMBER" => Self::RoutingNumber,
            "IP_ADDRESS" => Self::IpAddress,
            "URL" => Self::Url,
            "MISC" => Self::Misc,
            _ => Self::Custom(s.to_string()),
        }
    }
}

impl From<String> for EntityCategory {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EntityCategory> for String {
    fn from(category: EntityCategory) -> Self {
        category.as_str().to_string()
    }
}

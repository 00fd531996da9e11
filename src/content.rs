//! Page copy, loaded from `static/content.json`.

use serde::Deserialize;
use thiserror::Error;

const CONTENT_JSON: &str = include_str!("../static/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid page content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub hero: Hero,
    pub about: TextBlock,
    pub benefits: Benefits,
    pub mockup: Mockup,
    pub cta: CallToAction,
    pub legal: Vec<LegalDocument>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub background: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TextBlock {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Benefits {
    pub title: String,
    pub cards: Vec<BenefitCard>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BenefitCard {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Mockup {
    pub title: String,
    pub image: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CallToAction {
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LegalDocument {
    pub id: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Content bundled into the binary.
pub fn load() -> Result<SiteContent, ContentError> {
    SiteContent::parse(CONTENT_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LEGAL_DRIVER_CLUB, LEGAL_PASSENGER_CLUB, LEGAL_TERMS};

    #[test]
    fn bundled_content_parses() {
        let content = load().unwrap();
        assert_eq!(content.brand, "OXI Mobilidade");
        assert_eq!(content.benefits.cards.len(), 10);
        assert_eq!(content.benefits.cards[0].title, "Tarifas mais baixas");
    }

    #[test]
    fn every_legal_link_has_a_document() {
        let content = load().unwrap();
        for id in [LEGAL_TERMS, LEGAL_DRIVER_CLUB, LEGAL_PASSENGER_CLUB] {
            let doc = content.legal.iter().find(|doc| doc.id == id).unwrap();
            assert!(!doc.paragraphs.is_empty(), "{} has no text", id);
        }
    }

    #[test]
    fn unknown_document_is_none() {
        let content = load().unwrap();
        assert!(content.legal.iter().all(|doc| doc.id != "privacidade"));
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = SiteContent::parse("{\"brand\": 1}").unwrap_err();
        assert!(err.to_string().starts_with("invalid page content"));
    }
}

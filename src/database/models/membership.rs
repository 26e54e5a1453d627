//! Membership tiers and their wire shape.
//!
//! Tiers are stored flat, one column per language per attribute, and are
//! reshaped into language-keyed objects at read time. The language mapping is
//! an explicit struct rather than dynamic column-name construction, so adding
//! a language is a compile-checked change.

use serde::Serialize;
use sqlx::FromRow;

/// A membership tier row exactly as stored. Seeded out-of-band (see
/// `schema.sql`); this service never writes the table.
#[derive(Debug, Clone, FromRow)]
pub struct MembershipTierRow {
    pub id: i32,
    pub tier: String,
    pub name_en: String,
    pub name_ar: String,
    pub name_de: String,
    pub name_tr: String,
    pub description_en: String,
    pub description_ar: String,
    pub description_de: String,
    pub description_tr: String,
    pub benefits_en: Option<String>,
    pub benefits_ar: Option<String>,
    pub benefits_de: Option<String>,
    pub benefits_tr: Option<String>,
    pub price: i32,
    pub discount_percentage: i32,
    pub validity: i32,
    pub color: String,
    pub is_popular: bool,
}

/// One value per supported site language.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
    pub de: T,
    pub tr: T,
}

/// A membership tier in the wire shape the frontend consumes: localized
/// attributes nested under language keys, benefits exploded into lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTier {
    pub id: i32,
    pub tier: String,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub benefits: Localized<Vec<String>>,
    pub price: i32,
    pub discount_percentage: i32,
    pub validity: i32,
    pub color: String,
    pub is_popular: bool,
}

impl From<MembershipTierRow> for MembershipTier {
    fn from(row: MembershipTierRow) -> Self {
        Self {
            id: row.id,
            tier: row.tier,
            name: Localized {
                en: row.name_en,
                ar: row.name_ar,
                de: row.name_de,
                tr: row.name_tr,
            },
            description: Localized {
                en: row.description_en,
                ar: row.description_ar,
                de: row.description_de,
                tr: row.description_tr,
            },
            benefits: Localized {
                en: split_benefits(row.benefits_en),
                ar: split_benefits(row.benefits_ar),
                de: split_benefits(row.benefits_de),
                tr: split_benefits(row.benefits_tr),
            },
            price: row.price,
            discount_percentage: row.discount_percentage,
            validity: row.validity,
            color: row.color,
            is_popular: row.is_popular,
        }
    }
}

/// Benefits are stored as a single pipe-separated string per language.
/// NULL means the tier has no benefit list in that language.
fn split_benefits(raw: Option<String>) -> Vec<String> {
    match raw {
        Some(joined) => joined.split('|').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

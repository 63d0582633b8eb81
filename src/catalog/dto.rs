use serde::{Deserialize, Serialize};

use crate::store::{Query, SortDirection, SortKey};

pub const SETUPS_LIMIT: usize = 50;
pub const MENUS_LIMIT: usize = 100;
pub const TESTIMONIALS_LIMIT: usize = 50;
pub const GALLERY_LIMIT: usize = 100;
pub const PACKAGES_LIMIT: usize = 10;
pub const FAQS_LIMIT: usize = 50;

// Unknown stored fields are dropped on read: none of these types deny them.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSetup {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub best_for: String,
    pub guest_range: String,
    pub occasion: Vec<String>,
    pub style: String,
    pub format: String,
    pub menu_highlights: Vec<String>,
    #[serde(default)]
    pub molecular_tag: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Cocktail,
    Mocktail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DrinkType,
    pub flavor_profile: Vec<String>,
    #[serde(default)]
    pub spirit_base: Option<String>,
    pub description: String,
    pub ingredients: Vec<String>,
    pub garnish: String,
    #[serde(default)]
    pub molecular: bool,
    #[serde(default)]
    pub molecular_technique: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub signature: bool,
}

fn default_rating() -> u8 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub event_type: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Wedding,
    Corporate,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: GalleryCategory,
    pub image_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Good,
    Better,
    Best,
    Ultra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub tier: PackageTier,
    pub tagline: String,
    pub description: String,
    pub inclusions: Vec<String>,
    pub best_for: String,
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Booking,
    Service,
    Logistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    #[serde(default)]
    pub order: i32,
}

// --- filters ---

/// Empty text filters impose no constraint. Anything else is matched as given.
fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct SetupFilter {
    pub occasion: Option<String>,
    pub style: Option<String>,
    pub featured: Option<bool>,
}

impl SetupFilter {
    pub fn to_query(&self) -> Query {
        let mut q = Query::new(SETUPS_LIMIT);
        if let Some(occasion) = present(&self.occasion) {
            q = q.contains("occasion", occasion);
        }
        if let Some(style) = present(&self.style) {
            q = q.eq("style", style);
        }
        if let Some(featured) = self.featured {
            q = q.eq("featured", featured);
        }
        q
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub flavor: Option<String>,
    pub molecular: Option<bool>,
}

impl MenuFilter {
    pub fn to_query(&self) -> Query {
        let mut q = Query::new(MENUS_LIMIT);
        if let Some(kind) = present(&self.kind) {
            q = q.eq("type", kind);
        }
        if let Some(flavor) = present(&self.flavor) {
            q = q.contains("flavor_profile", flavor);
        }
        if let Some(molecular) = self.molecular {
            q = q.eq("molecular", molecular);
        }
        q
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TestimonialFilter {
    pub featured: Option<bool>,
}

impl TestimonialFilter {
    pub fn to_query(&self) -> Query {
        let mut q = Query::new(TESTIMONIALS_LIMIT);
        if let Some(featured) = self.featured {
            q = q.eq("featured", featured);
        }
        q
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl GalleryFilter {
    pub fn to_query(&self) -> Query {
        let mut q = Query::new(GALLERY_LIMIT);
        if let Some(category) = present(&self.category) {
            q = q.eq("category", category);
        }
        if let Some(featured) = self.featured {
            q = q.eq("featured", featured);
        }
        q
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FaqFilter {
    pub category: Option<String>,
}

impl FaqFilter {
    pub fn to_query(&self) -> Query {
        let mut q = Query::new(FAQS_LIMIT).sort(SortKey::Numeric("order"), SortDirection::Asc);
        if let Some(category) = present(&self.category) {
            q = q.eq("category", category);
        }
        q
    }
}

pub fn packages_query() -> Query {
    Query::new(PACKAGES_LIMIT)
}

pub fn setup_by_slug_query(slug: &str) -> Query {
    Query::new(1).eq("slug", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Predicate;
    use serde_json::json;

    #[test]
    fn unknown_fields_are_dropped_and_defaults_applied() {
        let doc = json!({
            "id": "9",
            "name": "Guest",
            "event_type": "Wedding",
            "quote": "Lovely",
            "internal_notes": "do not show",
            "_id": "507f1f77bcf86cd799439011"
        });
        let t: Testimonial = serde_json::from_value(doc).unwrap();
        assert_eq!(t.rating, 5);
        assert!(!t.featured);

        let out = serde_json::to_value(&t).unwrap();
        assert!(out.get("internal_notes").is_none());
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn drink_type_serializes_as_type() {
        let doc = json!({
            "id": "1", "name": "Test", "type": "mocktail", "flavor_profile": [],
            "description": "d", "ingredients": [], "garnish": "g"
        });
        let d: Drink = serde_json::from_value(doc).unwrap();
        assert_eq!(d.kind, DrinkType::Mocktail);
        let out = serde_json::to_value(&d).unwrap();
        assert_eq!(out["type"], "mocktail");
        assert_eq!(out["molecular"], false);
    }

    #[test]
    fn empty_filters_are_ignored() {
        let f = SetupFilter {
            occasion: Some(String::new()),
            style: Some(String::new()),
            featured: None,
        };
        assert!(f.to_query().predicates.is_empty());
        assert_eq!(f.to_query().limit, SETUPS_LIMIT);
    }

    #[test]
    fn whitespace_filters_match_verbatim() {
        let f = SetupFilter {
            occasion: Some(" ".into()),
            style: Some(" Royal ".into()),
            featured: None,
        };
        assert_eq!(
            f.to_query().predicates,
            vec![
                Predicate::Contains { field: "occasion", value: " ".into() },
                Predicate::Eq { field: "style", value: json!(" Royal ") },
            ]
        );
    }

    #[test]
    fn menu_filter_builds_all_predicates() {
        let f = MenuFilter {
            kind: Some("mocktail".into()),
            flavor: Some("citrus".into()),
            molecular: Some(true),
        };
        let q = f.to_query();
        assert_eq!(
            q.predicates,
            vec![
                Predicate::Eq { field: "type", value: json!("mocktail") },
                Predicate::Contains { field: "flavor_profile", value: "citrus".into() },
                Predicate::Eq { field: "molecular", value: json!(true) },
            ]
        );
    }

    #[test]
    fn faq_query_sorts_by_order() {
        let q = FaqFilter::default().to_query();
        let sort = q.sort.expect("faqs are sorted");
        assert_eq!(sort.key, SortKey::Numeric("order"));
        assert_eq!(sort.direction, SortDirection::Asc);
    }
}

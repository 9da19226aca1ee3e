use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public website built for a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub subdomain: String,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Website {
    /// Creates an unpublished website.
    pub fn new(
        id: impl Into<String>,
        restaurant_id: impl Into<String>,
        name: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            name: name.into(),
            subdomain: subdomain.into(),
            published: false,
            theme: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One page of a website, holding an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsitePage {
    pub id: String,
    pub website_id: String,
    pub title: String,
    pub slug: String,
    /// Position in the site navigation, starting at 0.
    pub position: u32,
    #[serde(default)]
    pub sections: Vec<WebsiteSection>,
    pub published: bool,
}

impl WebsitePage {
    /// Creates an empty, unpublished page.
    pub fn new(
        id: impl Into<String>,
        website_id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            website_id: website_id.into(),
            title: title.into(),
            slug: slug.into(),
            position: 0,
            sections: Vec::new(),
            published: false,
        }
    }

    /// Sets the navigation position.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Appends a section.
    pub fn with_section(mut self, section: WebsiteSection) -> Self {
        self.sections.push(section);
        self
    }
}

/// Layout of a hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroVariant {
    /// Text on the left, image on the right.
    ImageRight,
    /// Text over a full-bleed background image.
    BackgroundImage,
}

impl HeroVariant {
    /// Returns the wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroVariant::ImageRight => "image_right",
            HeroVariant::BackgroundImage => "background_image",
        }
    }
}

/// A building block of a website page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WebsiteSection {
    #[serde(rename_all = "camelCase")]
    Hero {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        variant: HeroVariant,
    },
    MenuSection {
        title: String,
        #[serde(default)]
        categories: Vec<MenuCategory>,
    },
}

impl WebsiteSection {
    /// Returns the section title.
    pub fn title(&self) -> &str {
        match self {
            WebsiteSection::Hero { title, .. } | WebsiteSection::MenuSection { title, .. } => {
                title
            }
        }
    }
}

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_cents: u64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_section_wire_format() {
        let section = WebsiteSection::Hero {
            title: "Welcome".to_string(),
            subtitle: None,
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
            variant: HeroVariant::ImageRight,
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "hero");
        assert_eq!(json["imageUrl"], "https://cdn.example.com/a.jpg");
        assert_eq!(json["variant"], "image_right");
        assert!(json.get("subtitle").is_none());
    }

    #[test]
    fn test_menu_section_defaults() {
        let json = r#"{"type":"menu_section","title":"Mains"}"#;
        let section: WebsiteSection = serde_json::from_str(json).unwrap();
        assert_eq!(
            section,
            WebsiteSection::MenuSection {
                title: "Mains".to_string(),
                categories: vec![],
            }
        );
        assert_eq!(section.title(), "Mains");
    }

    #[test]
    fn test_menu_item_available_by_default() {
        let json = r#"{"name":"Margherita","priceCents":1200}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.available);
        assert_eq!(item.price_cents, 1200);
    }

    #[test]
    fn test_page_uses_camel_case() {
        let page = WebsitePage::new("p1", "w1", "Home", "home").with_position(2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["websiteId"], "w1");
        assert_eq!(json["position"], 2);
    }

    #[test]
    fn test_hero_variant_as_str_matches_serde() {
        for variant in [HeroVariant::ImageRight, HeroVariant::BackgroundImage] {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, variant.as_str());
        }
    }
}

use chrono::{DateTime, Utc};

use crate::record::Record;

/// Default gradient token applied when a category record carries none.
pub const DEFAULT_COLOR: &str = "from-blue-400 to-blue-600";

/// Enumerated icon tag on a category. The content-management side
/// writes free-form strings; anything unrecognized falls back to
/// `Sparkles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Sparkles,
    Flame,
}

impl CategoryIcon {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "flame" => CategoryIcon::Flame,
            _ => CategoryIcon::Sparkles,
        }
    }

    /// Glyph rendered in the category header.
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Sparkles => "\u{2728}",
            CategoryIcon::Flame => "\u{1f525}",
        }
    }
}

/// A product category, created and edited out-of-band. Read-only here.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub icon: CategoryIcon,
    pub color: String,
    pub image: String,
    pub order: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn from_record(rec: &Record) -> Self {
        Category {
            id: rec.id.clone(),
            name: rec.str("name").unwrap_or_default().to_string(),
            slug: rec.str("slug").map(str::to_string),
            description: rec.str("description").unwrap_or_default().to_string(),
            icon: CategoryIcon::from_tag(rec.str("icon").unwrap_or("sparkles")),
            color: rec
                .str("color")
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_COLOR)
                .to_string(),
            image: rec.str("image").unwrap_or_default().to_string(),
            order: rec.num("order").unwrap_or(0.0) as i64,
            created_at: rec.timestamp("createdAt"),
        }
    }
}

/// A product listing. The `category` field joins to `Category.name` by
/// string equality; a category rename silently orphans its products.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Display price as shown on the product card.
    pub price: Option<String>,
    pub offer_price: Option<f64>,
    pub original_price: Option<f64>,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub features: Vec<String>,
    pub category: String,
    pub popular: bool,
    pub order: i64,
}

impl Product {
    pub fn from_record(rec: &Record) -> Self {
        Product {
            id: rec.id.clone(),
            name: rec.str("name").unwrap_or_default().to_string(),
            description: rec.str("description").map(str::to_string),
            price: rec.display_str("price"),
            offer_price: rec.num("offerPrice"),
            original_price: rec.num("originalPrice"),
            rating: rec.num("rating").unwrap_or(0.0),
            images: rec.str_list("images").to_vec(),
            video_url: rec.str("videoUrl").map(str::to_string),
            features: rec.str_list("features").to_vec(),
            category: rec.str("category").unwrap_or_default().to_string(),
            popular: rec.bool("popular"),
            order: rec.num("order").unwrap_or(0.0) as i64,
        }
    }

    /// First gallery image, for card thumbnails.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the media toggle offers a video at all.
    pub fn has_video(&self) -> bool {
        self.video_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }

    /// Rating clamped to whole stars for the star row.
    pub fn full_stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }
}

/// Case-insensitive substring filter over product names. An empty or
/// whitespace-only query returns everything unfiltered.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Sort categories newest-first by creation time. The sort is stable,
/// so ties keep the store-returned order; records without a timestamp
/// sort last.
pub fn sort_newest_first(categories: &mut [Category]) {
    categories.sort_by(|a, b| match (b.created_at, a.created_at) {
        (Some(tb), Some(ta)) => tb.cmp(&ta),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use chrono::TimeZone;

    fn product(name: &str) -> Product {
        Product::from_record(
            &Record::new(name).with("name", Value::Str(name.to_string())),
        )
    }

    #[test]
    fn icon_tag_parsing_falls_back() {
        assert_eq!(CategoryIcon::from_tag("flame"), CategoryIcon::Flame);
        assert_eq!(CategoryIcon::from_tag("FLAME"), CategoryIcon::Flame);
        assert_eq!(CategoryIcon::from_tag("sparkles"), CategoryIcon::Sparkles);
        assert_eq!(CategoryIcon::from_tag("rocket"), CategoryIcon::Sparkles);
        assert_eq!(CategoryIcon::from_tag(""), CategoryIcon::Sparkles);
    }

    #[test]
    fn category_decode_applies_defaults() {
        let cat = Category::from_record(&Record::new("c1"));
        assert_eq!(cat.id, "c1");
        assert_eq!(cat.name, "");
        assert_eq!(cat.color, DEFAULT_COLOR);
        assert_eq!(cat.icon, CategoryIcon::Sparkles);
        assert_eq!(cat.order, 0);
        assert!(cat.created_at.is_none());
    }

    #[test]
    fn product_decode_applies_defaults() {
        let p = Product::from_record(&Record::new("p1"));
        assert_eq!(p.rating, 0.0);
        assert!(p.images.is_empty());
        assert!(p.features.is_empty());
        assert!(!p.popular);
        assert!(!p.has_video());
        assert!(p.cover_image().is_none());
    }

    #[test]
    fn blank_video_url_is_no_video() {
        let p = Product::from_record(
            &Record::new("p1").with("videoUrl", Value::Str("   ".into())),
        );
        assert!(!p.has_video());

        let p = Product::from_record(
            &Record::new("p1").with("videoUrl", Value::Str("https://cdn/v.mp4".into())),
        );
        assert!(p.has_video());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let products = vec![product("Sparkler Gold"), product("Fountain Red")];
        let hits = filter_by_name(&products, "gold");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sparkler Gold");

        assert_eq!(filter_by_name(&products, "").len(), 2);
        assert_eq!(filter_by_name(&products, "  ").len(), 2);
        assert!(filter_by_name(&products, "rocket").is_empty());
    }

    #[test]
    fn categories_sort_newest_first() {
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut cats = vec![
            Category::from_record(&Record::new("a").with("createdAt", Value::Timestamp(t1))),
            Category::from_record(&Record::new("b").with("createdAt", Value::Timestamp(t2))),
            Category::from_record(&Record::new("c")),
        ];
        sort_newest_first(&mut cats);
        let ids: Vec<_> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn full_stars_clamps() {
        let mut p = product("x");
        p.rating = 4.6;
        assert_eq!(p.full_stars(), 4);
        p.rating = 7.0;
        assert_eq!(p.full_stars(), 5);
        p.rating = -1.0;
        assert_eq!(p.full_stars(), 0);
    }
}

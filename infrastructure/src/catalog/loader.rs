//! Catalog normalization and the JSON file loader
//!
//! Loading is the one place record-level problems may surface: inverted
//! ranges, missing figures, empty image lists, duplicate ids and unknown
//! statuses are all rejected here so the engine only ever queries valid
//! records.

use crate::catalog::records::{RawAgent, RawCatalog, RawProperty};
use silfira_application::{CatalogSource, CatalogSourceError};
use silfira_domain::{
    Agent, AgentDirectory, AgentId, Catalog, DomainError, Figure, Property, PropertyId,
    PropertyStatus,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Loads a catalog from a JSON file.
pub struct JsonCatalogLoader {
    path: PathBuf,
}

impl JsonCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonCatalogLoader {
    fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let text = std::fs::read_to_string(&self.path)?;
        let raw: RawCatalog =
            serde_json::from_str(&text).map_err(|e| CatalogSourceError::Parse(e.to_string()))?;

        let catalog = build_catalog(raw)?;
        info!(
            path = %self.path.display(),
            properties = catalog.len(),
            agents = catalog.agents().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Normalize a raw catalog into the domain model.
pub(crate) fn build_catalog(raw: RawCatalog) -> Result<Catalog, CatalogSourceError> {
    let properties = raw
        .properties
        .into_iter()
        .map(convert_property)
        .collect::<Result<Vec<_>, _>>()?;
    let agents = raw.agents.into_iter().map(convert_agent).collect();

    Ok(Catalog::new(properties, AgentDirectory::new(agents))?)
}

/// Resolve a duck-typed quoted attribute into an explicit [`Figure`].
///
/// A complete min/max pair wins and any standalone scalar next to it is
/// discarded; legacy files carry scalars that disagree with the pair, and
/// the pair's min is the single source of truth for the anchor. Without a
/// complete pair the scalar (or a lone bound) becomes a point; a record
/// quoting nothing at all is rejected.
fn quoted_figure<T>(
    scalar: Option<T>,
    min: Option<T>,
    max: Option<T>,
    id: &str,
    field: &'static str,
) -> Result<Figure<T>, CatalogSourceError>
where
    T: Copy + PartialOrd + ToString,
{
    match (min, max) {
        (Some(min), Some(max)) => {
            if scalar.is_some() {
                debug!(id, field, "discarding legacy scalar next to min/max pair");
            }
            Figure::range(min, max).map_err(|source| CatalogSourceError::InvalidRecord {
                id: id.to_string(),
                source,
            })
        }
        (lone_min, lone_max) => scalar
            .or(lone_min)
            .or(lone_max)
            .map(Figure::point)
            .ok_or(CatalogSourceError::MissingField {
                id: id.to_string(),
                field,
            }),
    }
}

/// Merge the cover image and gallery into one ordered, non-empty list.
///
/// Legacy files pad galleries with empty strings; those are dropped, and the
/// cover (when present) leads the list.
fn merge_images(cover: String, gallery: Vec<String>, id: &str) -> Result<Vec<String>, CatalogSourceError> {
    let mut images = Vec::with_capacity(gallery.len() + 1);
    if !cover.trim().is_empty() {
        images.push(cover);
    }
    for entry in gallery {
        if !entry.trim().is_empty() && !images.contains(&entry) {
            images.push(entry);
        }
    }

    if images.is_empty() {
        return Err(CatalogSourceError::InvalidRecord {
            id: id.to_string(),
            source: DomainError::NoImages(id.to_string()),
        });
    }
    Ok(images)
}

fn convert_property(raw: RawProperty) -> Result<Property, CatalogSourceError> {
    let status: PropertyStatus =
        raw.status
            .parse()
            .map_err(|source| CatalogSourceError::InvalidRecord {
                id: raw.id.clone(),
                source,
            })?;

    let price = quoted_figure(raw.price, raw.price_min, raw.price_max, &raw.id, "price")?;
    let bedrooms = quoted_figure(
        raw.bedrooms,
        raw.bedrooms_min,
        raw.bedrooms_max,
        &raw.id,
        "bedrooms",
    )?;
    let area = quoted_figure(raw.area, raw.area_min, raw.area_max, &raw.id, "area")?;
    let images = merge_images(raw.image, raw.images, &raw.id)?;

    Ok(Property {
        id: PropertyId::new(raw.id),
        title: raw.title,
        kind: raw.kind,
        status,
        price,
        bedrooms,
        bathrooms: raw.bathrooms,
        area,
        location: raw.location,
        images,
        description: raw.description,
        features: raw.features,
        agent_id: AgentId::new(raw.agent),
        featured: raw.featured,
        brochure: raw.brochure_url,
    })
}

fn convert_agent(raw: RawAgent) -> Agent {
    Agent {
        id: AgentId::new(raw.id),
        name: raw.name,
        title: raw.title,
        photo: raw.image,
        email: raw.email,
        phone: raw.phone,
        bio: raw.bio,
        specialties: raw.specialties,
        listings: raw.listings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(id: &str, extra: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "title": "Listing {id}",
                "type": "Apartment",
                "status": "for-sale",
                "location": "Sargasan, Gandhinagar",
                "bathrooms": 3,
                "bedrooms": 3,
                "area": 2295,
                "image": "cover.png",
                "images": [],
                "agent": "agent1",
                "featured": false
                {extra}
            }}"#
        )
    }

    fn load(properties: &str, agents: &str) -> Result<Catalog, CatalogSourceError> {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "properties": [{properties}], "agents": [{agents}] }}"#
        )
        .unwrap();
        JsonCatalogLoader::new(file.path()).load()
    }

    #[test]
    fn test_scalar_becomes_point() {
        let catalog = load(&record("1", r#", "price": 9180000"#), "").unwrap();
        let property = catalog.get(&PropertyId::new("1")).unwrap();
        assert_eq!(property.price, Figure::point(9_180_000));
        assert!(!property.price.is_range());
    }

    #[test]
    fn test_pair_wins_over_divergent_scalar() {
        // The Atmos shape: scalar 14_080_000 disagrees with min 11_040_000
        let extra = r#", "price": 14080000, "priceMin": 11040000, "priceMax": 14160000"#;
        let catalog = load(&record("2", extra), "").unwrap();
        let property = catalog.get(&PropertyId::new("2")).unwrap();

        assert!(property.price.is_range());
        assert_eq!(property.price.anchor(), 11_040_000);
    }

    #[test]
    fn test_lone_bound_becomes_point() {
        // "Only ONE" quotes priceMax with no priceMin; the scalar wins
        let extra = r#", "price": 9180000, "priceMax": 9180000"#;
        let catalog = load(&record("1", extra), "").unwrap();
        assert_eq!(
            catalog.get(&PropertyId::new("1")).unwrap().price,
            Figure::point(9_180_000)
        );
    }

    #[test]
    fn test_inverted_range_rejected_at_load() {
        let extra = r#", "priceMin": 14160000, "priceMax": 11040000"#;
        let err = load(&record("2", extra), "").unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::InvalidRecord { id, source: DomainError::InvalidRange { .. } } if id == "2"
        ));
    }

    #[test]
    fn test_missing_figure_rejected() {
        let body = r#"{
            "id": "9", "title": "No price", "type": "Apartment",
            "status": "for-sale", "location": "Raysan", "bathrooms": 2,
            "bedrooms": 2, "area": 1500, "image": "x.png", "agent": "agent1"
        }"#;
        let err = load(body, "").unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::MissingField { field: "price", .. }
        ));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let body = record("1", r#", "price": 1"#).replace("for-sale", "sold");
        let err = load(&body, "").unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::InvalidRecord { source: DomainError::UnknownStatus(_), .. }
        ));
    }

    #[test]
    fn test_empty_gallery_entries_dropped() {
        let body = record("1", r#", "price": 1"#)
            .replace(r#""images": []"#, r#""images": ["", "gallery.png", ""]"#);
        let catalog = load(&body, "").unwrap();
        let property = catalog.get(&PropertyId::new("1")).unwrap();

        assert_eq!(property.images, vec!["cover.png", "gallery.png"]);
        assert_eq!(property.cover_image(), "cover.png");
    }

    #[test]
    fn test_record_without_any_image_rejected() {
        let body = record("1", r#", "price": 1"#)
            .replace(r#""image": "cover.png""#, r#""image": """#);
        let err = load(&body, "").unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::InvalidRecord { source: DomainError::NoImages(_), .. }
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let one = record("1", r#", "price": 1"#);
        let err = load(&format!("{one}, {one}"), "").unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::Domain(DomainError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_agents_come_along() {
        let agents = r#"{
            "id": "agent1", "name": "Rohan Darji", "title": "Founder & CEO",
            "email": "listings@silfira.example", "phone": "+91 9712345802",
            "specialties": ["Luxury Properties"], "listings": 57
        }"#;
        let catalog = load(&record("1", r#", "price": 1"#), agents).unwrap();

        let agent = catalog.agents().get(&AgentId::new("agent1")).unwrap();
        assert_eq!(agent.name, "Rohan Darji");
        assert_eq!(agent.listings, 57);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = JsonCatalogLoader::new("/nonexistent/catalog.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io(_)));
    }
}

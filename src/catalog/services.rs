use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::defaults;
use super::dto::{
    packages_query, setup_by_slug_query, BarSetup, Drink, Faq, FaqFilter, GalleryFilter,
    GalleryItem, MenuFilter, Package, SetupFilter, Testimonial, TestimonialFilter,
};
use crate::error::ApiError;
use crate::store::{Collection, DocumentStore, Query};

/// Decodes stored documents into `T`, skipping any that do not fit.
fn decode_all<T: DeserializeOwned>(collection: Collection, docs: Vec<Value>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| match serde_json::from_value::<T>(doc) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(collection = collection.name(), error = %e, "skipping undecodable document");
                None
            }
        })
        .collect()
}

/// Runs `query`; an empty result is replaced by the full built-in dataset,
/// whatever filters were asked for.
async fn find_or_default<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
    query: &Query,
    fallback: fn() -> Vec<T>,
) -> Result<Vec<T>, ApiError> {
    let docs = store.find(collection, query).await?;
    let items = decode_all(collection, docs);
    if items.is_empty() {
        debug!(collection = collection.name(), "no stored records, serving defaults");
        return Ok(fallback());
    }
    Ok(items)
}

pub async fn list_setups(store: &dyn DocumentStore, filter: &SetupFilter) -> Result<Vec<BarSetup>, ApiError> {
    find_or_default(store, Collection::Setups, &filter.to_query(), defaults::setups).await
}

pub async fn get_setup(store: &dyn DocumentStore, slug: &str) -> Result<BarSetup, ApiError> {
    let stored = store
        .find_one(Collection::Setups, &setup_by_slug_query(slug))
        .await?
        .and_then(|doc| decode_all::<BarSetup>(Collection::Setups, vec![doc]).pop());
    if let Some(setup) = stored {
        return Ok(setup);
    }
    defaults::setups()
        .into_iter()
        .find(|s| s.slug == slug)
        .ok_or_else(|| ApiError::NotFound("Setup not found".into()))
}

pub async fn list_drinks(store: &dyn DocumentStore, filter: &MenuFilter) -> Result<Vec<Drink>, ApiError> {
    find_or_default(store, Collection::Menus, &filter.to_query(), defaults::drinks).await
}

pub async fn list_testimonials(
    store: &dyn DocumentStore,
    filter: &TestimonialFilter,
) -> Result<Vec<Testimonial>, ApiError> {
    find_or_default(store, Collection::Testimonials, &filter.to_query(), defaults::testimonials).await
}

pub async fn list_gallery(store: &dyn DocumentStore, filter: &GalleryFilter) -> Result<Vec<GalleryItem>, ApiError> {
    find_or_default(store, Collection::Gallery, &filter.to_query(), defaults::gallery).await
}

pub async fn list_packages(store: &dyn DocumentStore) -> Result<Vec<Package>, ApiError> {
    find_or_default(store, Collection::Packages, &packages_query(), defaults::packages).await
}

pub async fn list_faqs(store: &dyn DocumentStore, filter: &FaqFilter) -> Result<Vec<Faq>, ApiError> {
    find_or_default(store, Collection::Faqs, &filter.to_query(), defaults::faqs).await
}

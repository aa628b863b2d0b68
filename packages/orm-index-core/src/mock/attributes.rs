//! Dispatch of an attribute container to the per-kind synthesizers.

use super::basic::mock_basic;
use super::element_collection::mock_element_collection;
use super::embedded::{mock_embedded, mock_embedded_id};
use super::id::mock_id;
use super::many_to_many::mock_many_to_many;
use super::many_to_one::mock_many_to_one;
use super::natural_id::mock_natural_id;
use super::one_to_many::mock_one_to_many;
use super::one_to_one::mock_one_to_one;
use super::transient::mock_transient;
use super::version::mock_version;
use super::MockContext;
use crate::error::Result;
use crate::model::Attributes;

/// Mocks every attribute of `attributes`, group by group.
///
/// Groups run in a fixed order: ids, transients, versions, basics, element
/// collections, embeddeds, many-to-manys, many-to-ones, one-to-manys,
/// one-to-ones, natural id, embedded id. Resolved access types are written
/// back onto the descriptors.
pub fn mock_attributes(ctx: &mut MockContext<'_>, attributes: &mut Attributes) -> Result<()> {
    for id in attributes.ids.iter_mut() {
        mock_id(ctx, id)?;
    }
    for transient in attributes.transients.iter() {
        mock_transient(ctx, transient)?;
    }
    for version in attributes.versions.iter_mut() {
        mock_version(ctx, version)?;
    }
    for basic in attributes.basics.iter_mut() {
        mock_basic(ctx, basic)?;
    }
    for collection in attributes.element_collections.iter_mut() {
        mock_element_collection(ctx, collection)?;
    }
    for embedded in attributes.embeddeds.iter_mut() {
        mock_embedded(ctx, embedded)?;
    }
    for association in attributes.many_to_manys.iter_mut() {
        mock_many_to_many(ctx, association)?;
    }
    for association in attributes.many_to_ones.iter_mut() {
        mock_many_to_one(ctx, association)?;
    }
    for association in attributes.one_to_manys.iter_mut() {
        mock_one_to_many(ctx, association)?;
    }
    for association in attributes.one_to_ones.iter_mut() {
        mock_one_to_one(ctx, association)?;
    }
    if let Some(natural_id) = attributes.natural_id.as_mut() {
        mock_natural_id(ctx, natural_id)?;
    }
    if let Some(embedded_id) = attributes.embedded_id.as_mut() {
        mock_embedded_id(ctx, embedded_id)?;
    }
    Ok(())
}

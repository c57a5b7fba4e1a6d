//! # Notion Types
//! This crate defines the shared data contracts used across the CRM
//! bootstrap ecosystem: typed database property specifications, page
//! property values, content blocks, query filters, API response shapes,
//! and the persisted workspace identifier map.
//!
//! Everything here serializes to the exact JSON shapes the Notion REST
//! API expects, so the client crate can pass these types through
//! unmodified.
pub mod types;

pub use types::{
    Block, Color, Database, DatabaseInfo, DateValue, Filter, Icon, Page, PageHit, PageInfo,
    PropertyDescriptor, PropertyMap, PropertySpec, PropertyValue, RelationDescriptor, RelationKind,
    RelationRef, RelationSpec, RichText, RollupFunction, RollupSpec, SelectOption, SelectValue,
    TextContent, ValueMap, WorkspaceIds,
};

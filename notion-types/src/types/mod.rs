mod block;
mod filter;
mod ids;
mod object;
mod property;
mod value;

pub use block::{Block, Icon};
pub use filter::Filter;
pub use ids::{DatabaseInfo, PageInfo, WorkspaceIds};
pub use object::{Database, Page, PageHit, PropertyDescriptor, RelationDescriptor};
pub use property::{
    Color, PropertyMap, PropertySpec, RelationKind, RelationSpec, RollupFunction, RollupSpec,
    SelectOption,
};
pub use value::{DateValue, PropertyValue, RelationRef, RichText, SelectValue, TextContent, ValueMap};

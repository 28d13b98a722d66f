pub mod enumerated_type;
pub mod schema;

pub use enumerated_type::{
    CreateEnumeratedTypeRequest, EnumeratedType, ListEnumeratedTypesResponse,
    UpdateEnumeratedTypeRequest,
};
pub use schema::{DatabaseSchema, ListSchemasResponse};

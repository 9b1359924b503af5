//! Classification of generator-produced type hints.
//!
//! A type hint is the string an SDK generator writes next to every field,
//! parameter and return value (`list['Pet']`, `Union[Unset, int]`,
//! `Response[Pet]`). [`classify`] turns one into a [`TypeShape`] without
//! evaluating anything and without failing: malformed hints classify as
//! [`TypeShape::Primitive`]. The strict [`parse_hint`] is available for
//! callers that want the [`HintError`].

mod error;
mod expr;
mod shape;

pub use error::HintError;
pub use expr::{parse_hint, TypeExpr, MAX_HINT_DEPTH};
pub use shape::{
    classify, extract_element_type, extract_response_parsed_type, looks_like_model_name,
    strip_forward_ref, TypeShape, UNSET_TYPE_NAME,
};

//! Structural classification of type hints.

use std::fmt;

use tracing::trace;

use crate::expr::{parse_hint, TypeExpr};

/// Name the generator uses for the "field intentionally omitted" marker.
pub const UNSET_TYPE_NAME: &str = "Unset";

/// What a deserializer should do with data described by a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Pass the data through unchanged.
    Primitive,
    /// Homogeneous list; carries the element hint.
    ListOf(String),
    /// Mapping; values stay untyped.
    DictOf,
    /// HTTP response envelope; carries the `parsed` payload hint.
    ResponseOf(String),
    /// Union with `Unset`; carries the remaining hint.
    UnsetCapable(String),
    /// Generated model class, by its PascalCase name.
    NamedModel(String),
}

impl TypeShape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::ListOf(_) => "list",
            Self::DictOf => "dict",
            Self::ResponseOf(_) => "response",
            Self::UnsetCapable(_) => "unset-capable",
            Self::NamedModel(_) => "model",
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive | Self::DictOf => f.write_str(self.name()),
            Self::ListOf(inner)
            | Self::ResponseOf(inner)
            | Self::UnsetCapable(inner)
            | Self::NamedModel(inner) => write!(f, "{}({inner})", self.name()),
        }
    }
}

/// Classify a hint. Malformed or unrecognized hints are [`TypeShape::Primitive`].
pub fn classify(hint: &str) -> TypeShape {
    match parse_hint(hint) {
        Ok(expr) => shape_of(&expr),
        Err(err) => {
            trace!(hint, %err, "malformed type hint, treating as primitive");
            TypeShape::Primitive
        }
    }
}

fn shape_of(expr: &TypeExpr) -> TypeShape {
    if let Some(inner) = unset_inner(expr) {
        return TypeShape::UnsetCapable(inner);
    }
    match expr {
        TypeExpr::Generic { name, args } if is_list_name(name) && args.len() == 1 => {
            TypeShape::ListOf(args[0].to_string())
        }
        TypeExpr::Generic { name, .. } if is_dict_name(name) => TypeShape::DictOf,
        TypeExpr::Generic { name, args } if name == "Response" && args.len() == 1 => {
            TypeShape::ResponseOf(args[0].to_string())
        }
        TypeExpr::Name(name) if looks_like_model_name(name) => {
            TypeShape::NamedModel(name.clone())
        }
        _ => TypeShape::Primitive,
    }
}

/// Remaining hint of a union containing `Unset`, with `None` dropped too
/// since null data never reaches hint dispatch.
fn unset_inner(expr: &TypeExpr) -> Option<String> {
    let members = expr.union_members()?;
    if !members.iter().any(|m| m.is_name(UNSET_TYPE_NAME)) {
        return None;
    }
    let rest: Vec<&TypeExpr> = members
        .iter()
        .filter(|m| !m.is_name(UNSET_TYPE_NAME) && !m.is_name("None"))
        .collect();
    Some(match rest.as_slice() {
        [] => "None".to_string(),
        [single] => single.to_string(),
        many => {
            let joined: Vec<String> = many.iter().map(|m| m.to_string()).collect();
            format!("Union[{}]", joined.join(", "))
        }
    })
}

fn is_list_name(name: &str) -> bool {
    matches!(name, "list" | "List" | "typing.List")
}

fn is_dict_name(name: &str) -> bool {
    matches!(name, "dict" | "Dict" | "typing.Dict")
}

/// Whether `name` can name a generated model class.
///
/// Never true for empty names, names without a leading uppercase letter, or
/// anything starting with `Union[`.
pub fn looks_like_model_name(name: &str) -> bool {
    let name = strip_forward_ref(name);
    let Some(first) = name.chars().next() else {
        return false;
    };
    if !first.is_ascii_uppercase() || name.starts_with("Union[") {
        return false;
    }
    if matches!(name, "None" | "Any" | UNSET_TYPE_NAME) {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Unwrap a single- or double-quoted forward reference.
pub fn strip_forward_ref(hint: &str) -> &str {
    let hint = hint.trim();
    for quote in ['\'', '"'] {
        if hint.len() >= 2 && hint.starts_with(quote) && hint.ends_with(quote) {
            return hint[1..hint.len() - 1].trim();
        }
    }
    hint
}

fn strip_wrapper<'a>(hint: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    let hint = hint.trim();
    prefixes.iter().find_map(|prefix| {
        hint.strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(']'))
            .map(str::trim)
    })
}

/// Element hint of a `list[...]` hint, forward-reference quotes removed.
///
/// - `list[Foo]` -> `Foo`
/// - `list["Foo"]` -> `Foo`
///
/// Hints without the wrapper are returned unchanged.
pub fn extract_element_type(hint: &str) -> &str {
    match strip_wrapper(hint, &["list[", "List["]) {
        Some(inner) => strip_forward_ref(inner),
        None => hint,
    }
}

/// Payload hint of a `Response[...]` hint; unchanged without the wrapper.
pub fn extract_response_parsed_type(hint: &str) -> &str {
    strip_wrapper(hint, &["Response["]).unwrap_or(hint)
}

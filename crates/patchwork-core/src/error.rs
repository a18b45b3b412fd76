use crate::node::NodeKind;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// PatchError
///
/// Structured failures for document-driven patch application.
/// Every failure aborts the patch call; fields applied before the failing
/// one stay applied unless the patch ran in atomic mode.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PatchError {
    #[error("property '{property}' not found on type {type_name}")]
    PropertyNotFound {
        property: String,
        type_name: &'static str,
    },

    #[error("cannot convert {found} value '{value}' to {expected}")]
    ConversionFailure {
        expected: String,
        found: NodeKind,
        value: String,
    },

    #[error("null is not allowed for {type_name}")]
    NullNotAllowed { type_name: &'static str },

    #[error("patching type {type_name} is denied")]
    DeniedType { type_name: &'static str },

    #[error("array value is not supported for {type_name}")]
    UnsupportedArrayType { type_name: &'static str },

    #[error("invalid value '{value}' for enum {enum_name}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("document nesting exceeds the maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    #[error("only object documents can be patched, found {found}")]
    NotAnObject { found: NodeKind },

    #[error("invalid patch document: {message}")]
    InvalidDocument { message: String },

    #[error("patch failed at {path}: {source}")]
    Context {
        path: String,
        #[source]
        source: Box<Self>,
    },
}

impl PatchError {
    /// Record that this failure happened under the document field `field`.
    #[must_use]
    pub fn with_field(self, field: impl AsRef<str>) -> Self {
        self.under(PathSegment::Field(field.as_ref()))
    }

    /// Record that this failure happened at array position `index`.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        self.under(PathSegment::Index(index))
    }

    /// Document path of the failing value, e.g. `orders[1].quantity`.
    /// Failures raised at the document root carry no path.
    #[must_use]
    pub const fn path(&self) -> Option<&str> {
        if let Self::Context { path, .. } = self {
            Some(path.as_str())
        } else {
            None
        }
    }

    /// The failure itself, with every path layer stripped.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source.as_ref();
        }

        current
    }

    /// Fieldless classification of the innermost failure.
    #[must_use]
    pub fn kind(&self) -> PatchErrorKind {
        match self {
            Self::PropertyNotFound { .. } => PatchErrorKind::PropertyNotFound,
            Self::ConversionFailure { .. } => PatchErrorKind::ConversionFailure,
            Self::NullNotAllowed { .. } => PatchErrorKind::NullNotAllowed,
            Self::DeniedType { .. } => PatchErrorKind::DeniedType,
            Self::UnsupportedArrayType { .. } => PatchErrorKind::UnsupportedArrayType,
            Self::InvalidEnumValue { .. } => PatchErrorKind::InvalidEnumValue,
            Self::DepthExceeded { .. } => PatchErrorKind::DepthExceeded,
            Self::NotAnObject { .. } => PatchErrorKind::NotAnObject,
            Self::InvalidDocument { .. } => PatchErrorKind::InvalidDocument,
            Self::Context { source, .. } => source.kind(),
        }
    }

    pub(crate) fn conversion(expected: impl Into<String>, node: &serde_json::Value) -> Self {
        Self::ConversionFailure {
            expected: expected.into(),
            found: NodeKind::of(node),
            value: crate::node::raw_text(node),
        }
    }

    // The walker unwinds from the failing leaf outwards, so each call
    // prepends its segment to the path collected so far.
    fn under(self, segment: PathSegment<'_>) -> Self {
        match self {
            Self::Context { path, source } => {
                let mut joined = segment.to_string();
                if !path.starts_with('[') {
                    joined.push('.');
                }
                joined.push_str(&path);

                Self::Context {
                    path: joined,
                    source,
                }
            }
            leaf => Self::Context {
                path: segment.to_string(),
                source: Box::new(leaf),
            },
        }
    }
}

///
/// PathSegment
///

#[derive(Display)]
enum PathSegment<'a> {
    #[display("{_0}")]
    Field(&'a str),
    #[display("[{_0}]")]
    Index(usize),
}

///
/// PatchErrorKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum PatchErrorKind {
    PropertyNotFound,
    ConversionFailure,
    NullNotAllowed,
    DeniedType,
    UnsupportedArrayType,
    InvalidEnumValue,
    DepthExceeded,
    NotAnObject,
    InvalidDocument,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_context_renders_dotted_path() {
        let err = PatchError::NullNotAllowed { type_name: "i32" }
            .with_field("Age")
            .with_index(2)
            .with_field("people");

        assert_eq!(err.path(), Some("people[2].Age"));
        assert_eq!(err.kind(), PatchErrorKind::NullNotAllowed);
        assert_eq!(err.leaf(), &PatchError::NullNotAllowed { type_name: "i32" });
    }

    #[test]
    fn index_segments_attach_without_separator() {
        let err = PatchError::DepthExceeded { max_depth: 2 }
            .with_index(1)
            .with_index(0)
            .with_field("grid");

        assert_eq!(err.path(), Some("grid[0][1]"));
    }

    #[test]
    fn leaf_without_context_is_self() {
        let err = PatchError::DepthExceeded { max_depth: 4 };

        assert_eq!(err.path(), None);
        assert_eq!(err.leaf(), &err);
        assert_eq!(
            err.to_string(),
            "document nesting exceeds the maximum depth of 4"
        );
    }

    #[test]
    fn context_message_includes_path_and_cause() {
        let err = PatchError::DeniedType {
            type_name: "Address",
        }
        .with_field("address");

        assert_eq!(
            err.to_string(),
            "patch failed at address: patching type Address is denied"
        );
    }
}

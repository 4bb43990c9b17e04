use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Walks the chain of nested field failures and returns the innermost error,
    /// i.e. the check that actually rejected the buffer.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let ErrorKind::FieldDecodeFailure { source, .. } = current.kind() {
            current = source;
        }
        current
    }

    /// Returns the `parent.field.field` path leading to the innermost failure,
    /// or an empty string if the failure is not nested.
    pub fn field_path(&self) -> String {
        let mut path = Vec::new();
        let mut current = self;
        while let ErrorKind::FieldDecodeFailure { field, source, .. } = current.kind() {
            path.push(field.as_str());
            current = source;
        }
        path.join(".")
    }

    pub fn header_too_short(element: impl Into<String>, actual: usize, required: usize) -> Error {
        Error(
            ErrorKind::HeaderTooShort {
                element: element.into(),
                actual,
                required,
            }
            .into(),
        )
    }

    pub fn total_size_mismatch(element: impl Into<String>, header: usize, actual: usize) -> Error {
        Error(
            ErrorKind::TotalSizeMismatch {
                element: element.into(),
                header,
                actual,
            }
            .into(),
        )
    }

    pub fn offset_misaligned(element: impl Into<String>, offset: usize) -> Error {
        Error(
            ErrorKind::OffsetMisaligned {
                element: element.into(),
                offset,
            }
            .into(),
        )
    }

    pub fn field_count_mismatch(
        element: impl Into<String>,
        expected: usize,
        actual: usize,
        compatible: bool,
    ) -> Error {
        Error(
            ErrorKind::FieldCountMismatch {
                element: element.into(),
                expected,
                actual,
                compatible,
            }
            .into(),
        )
    }

    pub fn offsets_not_match(
        element: impl Into<String>,
        index: usize,
        start: usize,
        end: usize,
    ) -> Error {
        Error(
            ErrorKind::OffsetsNotMatch {
                element: element.into(),
                index,
                start,
                end,
            }
            .into(),
        )
    }

    pub fn field_decode_failure(
        element: impl Into<String>,
        field_index: usize,
        field: impl Into<String>,
        field_type: impl Into<String>,
        source: Error,
    ) -> Error {
        Error(
            ErrorKind::FieldDecodeFailure {
                element: element.into(),
                field_index,
                field: field.into(),
                field_type: field_type.into(),
                source,
            }
            .into(),
        )
    }

    pub fn size_mismatch(element: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error(
            ErrorKind::SizeMismatch {
                element: element.into(),
                expected,
                actual,
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns `true` for the kinds raised while verifying an untrusted buffer.
    pub fn is_decode_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::InvalidArgument { .. } | ErrorKind::Io { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("header of '{element}' is too short: {actual} < {required}")]
    HeaderTooShort {
        element: String,
        actual: usize,
        required: usize,
    },

    #[error("total size of '{element}' does not match: header says {header}, buffer has {actual}")]
    TotalSizeMismatch {
        element: String,
        header: usize,
        actual: usize,
    },

    #[error("first offset of '{element}' is misaligned or too small: {offset}")]
    OffsetMisaligned { element: String, offset: usize },

    #[error(
        "field count of '{element}' does not match: expected {expected}, found {actual} ({})",
        mode_name(.compatible)
    )]
    FieldCountMismatch {
        element: String,
        expected: usize,
        actual: usize,
        compatible: bool,
    },

    #[error("offsets of '{element}' are out of order at boundary {index}: {start} > {end}")]
    OffsetsNotMatch {
        element: String,
        index: usize,
        start: usize,
        end: usize,
    },

    #[error("failed to decode field #{field_index} '{field}: {field_type}' of '{element}'")]
    FieldDecodeFailure {
        element: String,
        field_index: usize,
        field: String,
        field_type: String,
        source: Error,
    },

    #[error("size of '{element}' does not match: expected {expected}, found {actual}")]
    SizeMismatch {
        element: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

fn mode_name(compatible: &bool) -> &'static str {
    if *compatible { "compatible" } else { "strict" }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

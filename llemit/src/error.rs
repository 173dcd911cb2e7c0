//! Error handling for IR construction and text generation
//!
//! Generation fails for two reasons: the model asks for something the
//! generator does not implement, or the model itself is malformed. Both
//! surface as a [`GenError`] to the caller of that one render; nothing is
//! ever partially written.

use std::fmt;
use thiserror::Error;
use crate::ir::{ConstantKind, Opcode, TypeKind};

/// Failure while rendering an entity to text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("unsupported type kind `{0}`")]
    UnsupportedType(TypeKind),

    #[error("unsupported constant kind `{0}`")]
    UnsupportedConstant(ConstantKind),

    #[error("unimplemented instruction opcode `{0}`")]
    UnsupportedOpcode(Opcode),

    #[error("malformed {entity}: {message}")]
    Malformed {
        entity: &'static str,
        message: String,
    },

    /// Failure inside a nested entity, e.g. an instruction of a block
    #[error("in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GenError>,
    },
}

/// Broad category of a [`GenError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The generator has no rendering for the requested variant
    Unimplemented,
    /// The model violates one of its own invariants
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unimplemented => write!(f, "unimplemented"),
            ErrorKind::Malformed => write!(f, "malformed"),
        }
    }
}

impl GenError {
    pub fn malformed(entity: &'static str, message: impl Into<String>) -> Self {
        GenError::Malformed {
            entity,
            message: message.into(),
        }
    }

    /// Wrap this error with the entity it occurred in
    pub fn within(self, context: impl Into<String>) -> Self {
        GenError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every context layer removed
    pub fn root(&self) -> &GenError {
        match self {
            GenError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Context layers from outermost to innermost
    pub fn context_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let GenError::Context { context, source } = current {
            path.push(context.as_str());
            current = source;
        }
        path
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            GenError::Malformed { .. } => ErrorKind::Malformed,
            _ => ErrorKind::Unimplemented,
        }
    }

    pub fn is_unimplemented(&self) -> bool {
        self.kind() == ErrorKind::Unimplemented
    }

    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::Malformed
    }
}

/// Attach context to a failed render
pub trait ResultExt<T> {
    fn within<C: Into<String>>(self, context: impl FnOnce() -> C) -> Result<T, GenError>;
}

impl<T> ResultExt<T> for Result<T, GenError> {
    fn within<C: Into<String>>(self, context: impl FnOnce() -> C) -> Result<T, GenError> {
        self.map_err(|err| err.within(context()))
    }
}

/// Failure while building a function body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("function '@{function}' has no insertion block")]
    NoCurrentBlock { function: String },

    #[error("function '@{function}' already has a block labeled '{label}'")]
    DuplicateBlock { function: String, label: String },

    #[error("function '@{function}' has no block labeled '{label}'")]
    UnknownBlock { function: String, label: String },

    #[error("function '@{function}' cannot take an unnamed parameter once values are numbered (next is %{next})")]
    LateUnnamedParameter { function: String, next: u32 },
}

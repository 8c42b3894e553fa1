//! Errors reported while building, encoding and rendering indices status.

/// Errors decoding (or encoding) the binary wire format.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A boolean flag was encoded with a value other than 0 or 1.
    #[error("invalid boolean flag {0} in the stream")]
    InvalidBool(u8),

    /// A string was not valid UTF-8.
    #[error("string in the stream is not valid UTF-8")]
    InvalidUtf8,

    /// Underlying I/O error while reading or writing the stream.
    #[error("I/O error on the wire stream")]
    Io(#[source] std::io::Error),

    /// Bytes left in the buffer after a complete response was decoded.
    #[error("{0} unexpected bytes found after the end of the response")]
    TrailingBytes(usize),

    /// The stream ended before a complete value was read.
    #[error("the stream ended before a complete value was read")]
    Truncated,

    /// A recovery or snapshot stage byte is not known.
    #[error("unknown stage value {0} in the stream")]
    UnknownStage(u8),

    /// A shard references an index with no settings entry in the stream.
    #[error("shard references index '{0}' which has no settings in the stream")]
    UnknownIndex(String),

    /// A shard routing state byte is not known.
    #[error("unknown shard routing state value {0} in the stream")]
    UnknownRoutingState(u8),

    /// A variable length integer used more bytes than its type allows.
    #[error("variable length integer overflows its type")]
    VarIntOverflow,

    /// A map in the stream has the same key more than once.
    #[error("key '{0}' appears more than once in the stream")]
    DuplicateKey(String),

    /// A number that can't be negative was negative in the stream.
    #[error("unexpected negative value {0} in the stream")]
    NegativeValue(i64),

    /// A length or count does not fit the wire representation.
    #[error("value {0} is too large to encode")]
    ValueTooLarge(u64),
}

impl From<std::io::Error> for WireError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            WireError::Truncated
        } else {
            WireError::Io(error)
        }
    }
}

/// Invalid sequence of document builder calls.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderError {
    /// Attempted to close an array while an object is open (or the other way around).
    #[error("attempted to close a {expected} while a {found} is open")]
    MismatchedEnd {
        expected: &'static str,
        found: &'static str,
    },

    /// Object members must have a name.
    #[error("values added to an object must have a name")]
    MissingName,

    /// Array items can't have a name.
    #[error("values added to an array can't have a name, found '{0}'")]
    NamedArrayItem(String),

    /// The document root can't have a name.
    #[error("the document root can't have a name, found '{0}'")]
    NamedRoot(String),

    /// Attempted to close a container when none is open.
    #[error("no open object or array to close")]
    NothingToClose,

    /// A value was added after the root of the document was closed.
    #[error("the document root is already complete")]
    RootComplete,

    /// The document was finalised with open containers or no content.
    #[error("the document is incomplete ({0} containers still open)")]
    Incomplete(usize),
}

/// Errors building an indices status response.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// Cluster metadata has no entry for an index with shards in the response.
    #[error("cluster metadata has no settings for index '{0}'")]
    IndexMetadataNotFound(String),
}

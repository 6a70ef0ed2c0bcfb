use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("XML parse error while {context}: {source}")]
    Xml {
        context: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl AlignmentError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn xml(context: impl Into<String>, source: roxmltree::Error) -> Self {
        Self::Xml {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_includes_context() {
        let err = AlignmentError::io(
            "read truth/a.xml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("read truth/a.xml"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn xml_error_message_includes_context() {
        let source = roxmltree::Document::parse("<TEI><w>a</TEI>").unwrap_err();
        let err = AlignmentError::xml("parse galahad/a.xml", source);
        assert!(err.to_string().starts_with("XML parse error while parse galahad/a.xml"));
    }
}

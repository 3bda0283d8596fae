use thiserror::Error as ThisError;

///
/// Error
///
/// Runtime failure raised by a generated class or one of its serializers.
/// Every variant carries the name of the class that raised it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// A validator rejected the candidate value; `message` is the attribute's
    /// configured diagnostic.
    #[error("[{class}]: {message}")]
    Invalid {
        class: String,
        attribute: String,
        message: String,
    },

    #[error("[{class}]: {attribute} is a read-only property.")]
    ReadOnly { class: String, attribute: String },

    #[error("[{class}]: {attribute} is a required attribute.")]
    MissingRequired { class: String, attribute: String },

    #[error("[{class}]: {message}")]
    Serialize { class: String, message: String },

    #[error("[{class}]: unknown attribute '{attribute}'")]
    UnknownAttribute { class: String, attribute: String },
}

impl Error {
    pub fn invalid(
        class: impl Into<String>,
        attribute: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            class: class.into(),
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    pub fn read_only(class: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::ReadOnly {
            class: class.into(),
            attribute: attribute.into(),
        }
    }

    pub fn missing_required(class: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingRequired {
            class: class.into(),
            attribute: attribute.into(),
        }
    }

    pub fn serialize(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialize {
            class: class.into(),
            message: message.into(),
        }
    }

    pub fn unknown_attribute(class: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            class: class.into(),
            attribute: attribute.into(),
        }
    }

    /// Class that raised the error.
    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::Invalid { class, .. }
            | Self::ReadOnly { class, .. }
            | Self::MissingRequired { class, .. }
            | Self::Serialize { class, .. }
            | Self::UnknownAttribute { class, .. } => class,
        }
    }

    /// Attribute the error is about, when there is one.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Invalid { attribute, .. }
            | Self::ReadOnly { attribute, .. }
            | Self::MissingRequired { attribute, .. }
            | Self::UnknownAttribute { attribute, .. } => Some(attribute),
            Self::Serialize { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_tagged_with_class() {
        let err = Error::invalid("Box", "corner1", "corner1 must be a VectorXYZ.");
        assert_eq!(err.to_string(), "[Box]: corner1 must be a VectorXYZ.");
        assert_eq!(err.class(), "Box");
        assert_eq!(err.attribute(), Some("corner1"));

        let err = Error::read_only("Sphere", "finite");
        assert_eq!(err.to_string(), "[Sphere]: finite is a read-only property.");
    }

    #[test]
    fn serialize_errors_have_no_attribute() {
        let err = Error::serialize("Blob", "components must not be empty");
        assert_eq!(err.attribute(), None);
    }
}

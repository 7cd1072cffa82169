//! Helper macro for port error enums whose variants carry a diagnostic.

/// Declare a port error enum where every variant holds a `message`.
///
/// Each `Variant => "summary"` line becomes `Variant { message: String }`,
/// displayed as `summary: {message}`, with a snake-case constructor taking
/// `impl Into<String>` and a shared [`message`](#method.message) accessor.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {message}", $summary)]
                $variant {
                    /// Adapter diagnostic.
                    message: String,
                },
            )+
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                )+
            }

            /// Adapter diagnostic carried by any variant.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message })|+ => message,
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreadable => "unreadable",
            Full => "disk full",
        }
    }

    #[test]
    fn display_prefixes_the_summary() {
        let err = SamplePortError::unreadable("permission denied");
        assert_eq!(err.to_string(), "unreadable: permission denied");
        assert_eq!(err.message(), "permission denied");
    }

    #[test]
    fn constructors_accept_owned_strings() {
        let err = SamplePortError::full(String::from("/var/tmp"));
        assert_eq!(err, SamplePortError::Full { message: "/var/tmp".to_owned() });
    }
}

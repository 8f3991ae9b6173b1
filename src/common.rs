//! Common functionality shared across commands

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ExportError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ExportError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ExportError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro that generates a `with_*` builder for a config struct, wiring the
/// [`ConfigBuilder`] implementation so that every field is required.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident: $ty:ty,)* }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::ExportError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::ExportError::ConfigurationError {
                                message: concat!(
                                    "Missing required field: ",
                                    stringify!($field)
                                )
                                .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}

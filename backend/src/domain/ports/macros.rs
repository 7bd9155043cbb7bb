//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and gets a snake-case constructor whose
//! parameters accept `impl Into<FieldType>`, so adapters can write
//! `EmailRepositoryError::query("database error")`.

macro_rules! define_port_error {
    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Unavailable { message: String } => "store unavailable: {message}",
            TooMany { limit: u64 } => "page larger than {limit}",
            Rejected { email: String, reason: String } => "{email} rejected: {reason}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = StoreError::unavailable("timed out");
        assert_eq!(err.to_string(), "store unavailable: timed out");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        let err = StoreError::too_many(500_u64);
        assert_eq!(err, StoreError::TooMany { limit: 500 });
    }

    #[test]
    fn constructors_take_fields_in_declaration_order() {
        let err = StoreError::rejected("a@example.com", "blocked domain");
        assert_eq!(err.to_string(), "a@example.com rejected: blocked domain");
    }
}

//! `define_port_error!` generates a port error enum with a `thiserror`
//! display message and one snake_case constructor per variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum DocumentStoreError {
            Unavailable => "document store unavailable",
            Rejected { message: String } => "rejected: {message}",
            TooMany { limit: u32 } => "more than {limit} references",
            Conflict { id: String, attempts: u32 } => "conflict on {id} after {attempts} attempts",
        }
    }

    #[rstest]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(
            DocumentStoreError::unavailable(),
            DocumentStoreError::Unavailable
        );
    }

    #[rstest]
    fn string_fields_accept_borrowed_text() {
        let err = DocumentStoreError::rejected("name is blank");
        assert_eq!(err.to_string(), "rejected: name is blank");
    }

    #[rstest]
    fn non_string_fields_keep_their_type() {
        let err = DocumentStoreError::too_many(8_u32);
        assert_eq!(err, DocumentStoreError::TooMany { limit: 8 });
    }

    #[rstest]
    fn multi_field_variants_format_every_field() {
        let err = DocumentStoreError::conflict("507f1f77bcf86cd799439011", 3_u32);
        assert_eq!(
            err.to_string(),
            "conflict on 507f1f77bcf86cd799439011 after 3 attempts"
        );
    }
}

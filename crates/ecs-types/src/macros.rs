//! Generators for model shapes and string enums.
//!
//! Every ECS shape is a record of optional fields with the same accessor
//! surface, so the surface is written once here and instantiated per shape.

/// Declares an ECS model shape.
///
/// Fields are written as `name: kind Type`. The kind picks the accessor family:
///
/// - `scalar` for `Copy` values (`i32`, `i64`, `bool`, `Double`, `Timestamp`)
/// - `text` for `String`
/// - `nested` for other shapes and string enums
/// - `list` for an ordered sequence of `Type`
/// - `map` for a string-keyed map of `Type`
///
/// Every field is stored as an `Option` and omitted from the wire form while
/// absent. `set_*` replaces the stored value. `with_*` is the chaining form;
/// for lists it appends to whatever is already present.
macro_rules! shape {
    (@store list $ty:ty) => { ::std::vec::Vec<$ty> };
    (@store map $ty:ty) => { ::std::collections::BTreeMap<::std::string::String, $ty> };
    (@store $kind:ident $ty:ty) => { $ty };

    (@access $field:ident scalar $ty:ty) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<$ty> {
                self.$field
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };

    (@access $field:ident text $ty:ty) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, value: Option<String>) {
                self.$field = value;
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };

    (@access $field:ident nested $ty:ty) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };

    (@access $field:ident list $ty:ty) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Replaces the whole list. `None` makes the field absent again.
            pub fn [<set_ $field>](&mut self, value: Option<Vec<$ty>>) {
                self.$field = value;
            }

            /// Appends to the list, creating it when absent.
            #[must_use]
            pub fn [<with_ $field>]<I, V>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = V>,
                V: Into<$ty>,
            {
                self.$field
                    .get_or_insert_with(Vec::new)
                    .extend(values.into_iter().map(Into::into));
                self
            }
        }
    };

    (@access $field:ident map $ty:ty) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&::std::collections::BTreeMap<String, $ty>> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](
                &mut self,
                value: Option<::std::collections::BTreeMap<String, $ty>>,
            ) {
                self.$field = value;
            }

            /// Replaces the whole map with the given entries.
            #[must_use]
            pub fn [<with_ $field>]<I, K, V>(mut self, entries: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<$ty>,
            {
                self.$field = Some(
                    entries
                        .into_iter()
                        .map(|(key, value)| (key.into(), value.into()))
                        .collect(),
                );
                self
            }

            /// Inserts one entry, creating the map when absent. A repeated key
            /// overwrites the earlier value.
            #[must_use]
            pub fn [<with_ $field _entry>](
                mut self,
                key: impl Into<String>,
                value: impl Into<$ty>,
            ) -> Self {
                let _ = self
                    .$field
                    .get_or_insert_with(::std::collections::BTreeMap::new)
                    .insert(key.into(), value.into());
                self
            }

            #[must_use]
            pub fn [<clear_ $field _entries>](mut self) -> Self {
                self.$field = None;
                self
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<shape!(@store $kind $ty)>,
            )*
        }

        impl $name {
            /// Creates an instance with every field absent.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $( shape!(@access $field $kind $ty); )*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::write_shape(f, self)
            }
        }
    };
}

/// Declares a string-valued enum with a fixed set of known wire values.
///
/// Values the service sends that are not in the table are kept verbatim in
/// `Unrecognized`, so a newer service never breaks deserialization. Conversion from
/// `&str` never fails and performs no validation.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value not known to this client, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Returns the wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            /// Wire values known to this client, in declaration order.
            pub const fn values() -> &'static [&'static str] {
                &[$($wire),*]
            }

            pub const fn is_unrecognized(&self) -> bool {
                matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )*
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

///
/// entity!
///
/// Declare the identity facts and typed property accessors for an entity
/// type. Every logical property is associated with its backend attribute
/// name at the declaration site, so path rendering is total by
/// construction — there is no runtime reflection to fail.
///
/// ```ignore
/// struct Account;
///
/// entity!(Account {
///     name = "Account",
///     id = "id",
///     properties {
///         name: String => "name",
///         age: i32 => "age",
///         profiles: Many<Profile> => "profiles",
///     }
/// });
/// ```
///
#[macro_export]
macro_rules! entity {
    (
        $entity:ident {
            name = $name:literal,
            id = $id:literal,
            properties {
                $( $prop:ident: $vty:ty => $path:literal ),* $(,)?
            }
        }
    ) => {
        impl $crate::traits::EntityKind for $entity {
            const ENTITY_NAME: &'static str = $name;
            const ID_ATTRIBUTE: &'static str = $id;
        }

        impl $entity {
            $(
                #[must_use]
                pub const fn $prop() -> $crate::expr::Property<$entity, $vty> {
                    $crate::expr::Property::new($path)
                }
            )*
        }
    };
}

///
/// raw_enum_value!
///
/// Generate the `FieldValue` impl for a raw-representable enum: tag,
/// conversion, and default comparison options all delegate to the
/// underlying primitive declared via `EnumValue::Raw`.
///
#[macro_export]
macro_rules! raw_enum_value {
    ($ty:ty) => {
        impl $crate::traits::FieldValue for $ty {
            fn tag() -> $crate::value::ScalarTag {
                <<$ty as $crate::traits::EnumValue>::Raw as $crate::traits::FieldValue>::tag()
            }

            fn to_value(&self) -> $crate::value::Value {
                $crate::traits::FieldValue::to_value(&$crate::traits::EnumValue::to_raw(self))
            }

            fn from_value(value: &$crate::value::Value) -> Option<Self> {
                <<$ty as $crate::traits::EnumValue>::Raw as $crate::traits::FieldValue>::from_value(
                    value,
                )
                .and_then(<$ty as $crate::traits::EnumValue>::from_raw)
            }
        }
    };
}

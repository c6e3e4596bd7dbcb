/// Declares an entity record that stores its flat attribute map and wires it
/// to the metadata engine through [`Entity`](crate::models::Entity).
///
/// # Arguments
///
/// * `$name` - The name of the generated struct
/// * `$kind` - The [`EntityKind`](crate::schema::EntityKind) the record belongs to
///
/// The generated struct serializes transparently as its flat attribute map.
macro_rules! entity {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name {
            attributes: $crate::engine::AttributeMap,
        }

        impl $crate::models::private::Store for $name {
            fn wrap(attributes: $crate::engine::AttributeMap) -> Self {
                $name { attributes }
            }

            fn store(&self) -> &$crate::engine::AttributeMap {
                &self.attributes
            }

            fn store_mut(&mut self) -> &mut $crate::engine::AttributeMap {
                &mut self.attributes
            }

            fn into_store(self) -> $crate::engine::AttributeMap {
                self.attributes
            }
        }

        impl $crate::models::Entity for $name {
            const KIND: $crate::schema::EntityKind = $kind;
        }
    };
}

pub(crate) use entity;

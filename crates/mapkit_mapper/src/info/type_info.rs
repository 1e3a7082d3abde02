use alloc::boxed::Box;
use core::fmt;

use log::{debug, trace};
use mapkit_utils::hash::HashMap;

use crate::info::{MethodInfo, MethodKind, PropertyInfo};
use crate::naming::{READ_PREFIXES, WRITE_PREFIX, accessor_name};

// -----------------------------------------------------------------------------
// TypeInfo

/// Descriptor table of a mappable type `T`.
///
/// Besides the raw member lists, the table records which accessor serves
/// each declared property, so the read and write paths never probe names
/// for declared properties at run time.
///
/// # Examples
///
/// ```
/// use mapkit_mapper::{Mappable, derive::Mappable, info::Storage};
///
/// #[derive(Mappable, Default, Clone)]
/// #[mapper(getters(is_adult))]
/// struct Person {
///     pub name: String,
///     age: u32,
///     #[mapper(shared)]
///     census: u64,
/// }
///
/// impl Person {
///     // listed in `getters(..)`, so public to the mapper
///     fn is_adult(&self) -> bool {
///         self.age >= 18
///     }
/// }
///
/// let info = Person::type_info();
/// let names: Vec<_> = info.properties().iter().map(|p| p.name()).collect();
///
/// assert_eq!(info.type_name(), "Person");
/// assert_eq!(names, ["name", "age", "census"]);
/// assert_eq!(info.property("census").map(|p| p.storage()), Some(Storage::Shared));
/// assert_eq!(info.instance_properties().count(), 2);
/// assert!(info.method("isAdult").is_some_and(|m| m.is_public()));
/// ```
pub struct TypeInfo<T: 'static> {
    type_name: &'static str,
    properties: Box<[PropertyInfo<T>]>,
    methods: Box<[MethodInfo<T>]>,
    property_indices: HashMap<&'static str, usize>,
    method_indices: HashMap<&'static str, usize>,
    // Resolved accessor for each property, by property index.
    getters: Box<[Option<usize>]>,
    setters: Box<[Option<usize>]>,
}

impl<T: 'static> TypeInfo<T> {
    /// Builds a table and resolves the accessors of every property.
    ///
    /// When two members share a name, the first one wins.
    pub fn new(
        type_name: &'static str,
        properties: impl IntoIterator<Item = PropertyInfo<T>>,
        methods: impl IntoIterator<Item = MethodInfo<T>>,
    ) -> Self {
        let properties: Box<[PropertyInfo<T>]> = properties.into_iter().collect();
        let methods: Box<[MethodInfo<T>]> = methods.into_iter().collect();

        let mut property_indices = HashMap::default();
        for (index, property) in properties.iter().enumerate() {
            property_indices.entry(property.name()).or_insert(index);
        }

        let mut method_indices = HashMap::default();
        for (index, method) in methods.iter().enumerate() {
            method_indices.entry(method.name()).or_insert(index);
        }

        let mut info = Self {
            type_name,
            properties,
            methods,
            property_indices,
            method_indices,
            getters: Box::default(),
            setters: Box::default(),
        };

        info.getters = info
            .properties
            .iter()
            .map(|p| info.probe_getter(p.name()))
            .collect();
        info.setters = info
            .properties
            .iter()
            .map(|p| info.probe_setter(p.name()))
            .collect();

        debug!(
            "built descriptor for `{}`: {} properties, {} methods",
            info.type_name,
            info.properties.len(),
            info.methods.len(),
        );

        info
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Every declared data member, shared ones included, in declaration
    /// order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo<T>] {
        &self.properties
    }

    /// The data members that belong to each instance, in declaration order.
    #[inline]
    pub fn instance_properties(&self) -> impl Iterator<Item = &PropertyInfo<T>> {
        self.properties.iter().filter(|p| !p.is_shared())
    }

    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyInfo<T>> {
        let index = *self.property_indices.get(name)?;
        Some(&self.properties[index])
    }

    #[inline]
    pub fn methods(&self) -> &[MethodInfo<T>] {
        &self.methods
    }

    #[inline]
    pub fn method(&self, name: &str) -> Option<&MethodInfo<T>> {
        let index = *self.method_indices.get(name)?;
        Some(&self.methods[index])
    }

    /// The public zero-argument accessor that reads `property`.
    ///
    /// `get{Name}` is preferred over `is{Name}`, which is preferred over
    /// `has{Name}`.
    pub fn getter(&self, property: &str) -> Option<&MethodInfo<T>> {
        let index = match self.property_indices.get(property) {
            Some(&p) => self.getters[p],
            None => self.probe_getter(property),
        };
        index.map(|index| &self.methods[index])
    }

    /// The public one-argument accessor that writes `property`.
    pub fn setter(&self, property: &str) -> Option<&MethodInfo<T>> {
        let index = match self.property_indices.get(property) {
            Some(&p) => self.setters[p],
            None => self.probe_setter(property),
        };
        index.map(|index| &self.methods[index])
    }

    /// Whether [`set_property_value`](crate::Mappable::set_property_value)
    /// has a target for `property`.
    pub fn is_writable(&self, property: &str) -> bool {
        self.setter(property).is_some() || self.property(property).is_some_and(|p| p.is_writable())
    }

    fn probe_getter(&self, property: &str) -> Option<usize> {
        let found = READ_PREFIXES.iter().find_map(|prefix| {
            let name = accessor_name(prefix, property);
            let index = *self.method_indices.get(name.as_str())?;
            let method = &self.methods[index];
            (method.is_public() && matches!(method.kind(), MethodKind::Getter(_))).then_some(index)
        });
        if let Some(index) = found {
            trace!(
                "`{}.{property}` is read through `{}`",
                self.type_name,
                self.methods[index].name(),
            );
        }
        found
    }

    fn probe_setter(&self, property: &str) -> Option<usize> {
        let name = accessor_name(WRITE_PREFIX, property);
        let index = *self.method_indices.get(name.as_str())?;
        let method = &self.methods[index];
        if !method.is_public() || method.arity() != 1 {
            return None;
        }
        trace!("`{}.{property}` is written through `{name}`", self.type_name);
        Some(index)
    }
}

impl<T: 'static> fmt::Debug for TypeInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("type_name", &self.type_name)
            .field("properties", &self.properties)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::TypeInfo;
    use crate::info::{MethodInfo, PropertyInfo, Storage, Visibility};
    use crate::value::{FromValue, ToValue, Value};
    use alloc::vec;

    #[derive(Default)]
    struct Flags {
        active: bool,
        ready: bool,
    }

    fn flags() -> TypeInfo<Flags> {
        TypeInfo::new(
            "Flags",
            vec![
                PropertyInfo::new(
                    "active",
                    "bool",
                    |this: &Flags| this.active.to_value(),
                    |this, value| {
                        this.active = FromValue::from_value(value)?;
                        Ok(())
                    },
                ),
                PropertyInfo::new(
                    "ready",
                    "bool",
                    |this: &Flags| this.ready.to_value(),
                    |this, value| {
                        this.ready = FromValue::from_value(value)?;
                        Ok(())
                    },
                )
                .with_visibility(Visibility::Private),
                PropertyInfo::new("count", "u32", |_: &Flags| Value::Int(0), |_, _| Ok(()))
                    .with_storage(Storage::Shared),
            ],
            vec![
                MethodInfo::getter("hasActive", |_: &Flags| Value::from("has")),
                MethodInfo::getter("isActive", |_: &Flags| Value::from("is")),
                MethodInfo::getter("getReady", |_: &Flags| Value::Null).with_visibility(Visibility::Private),
                MethodInfo::setter("setReady", |this: &mut Flags, ready: bool| this.ready = ready),
                MethodInfo::getter("getMissing", |_: &Flags| Value::Int(7)),
            ],
        )
    }

    #[test]
    fn getter_preference() {
        let info = flags();
        assert_eq!(info.getter("active").map(|m| m.name()), Some("isActive"));
        // private accessors are ignored
        assert!(info.getter("ready").is_none());
        // undeclared names are probed on demand
        assert_eq!(info.getter("missing").map(|m| m.name()), Some("getMissing"));
    }

    #[test]
    fn writable_targets() {
        let info = flags();
        assert!(info.is_writable("active"));
        // private field, public setter
        assert!(info.is_writable("ready"));
        // shared
        assert!(!info.is_writable("count"));
        assert!(!info.is_writable("nope"));
        assert_eq!(info.setter("ready").map(|m| m.arity()), Some(1));
    }
}

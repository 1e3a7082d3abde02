use alloc::boxed::Box;
use core::any::type_name;
use core::fmt;

use crate::MapError;
use crate::info::Visibility;
use crate::value::{FromValue, MapFactory, Value};

// -----------------------------------------------------------------------------
// ParamInfo

/// Descriptor of a setter parameter.
#[derive(Clone, Copy)]
pub struct ParamInfo {
    type_name: &'static str,
    map_factory: Option<MapFactory>,
}

impl ParamInfo {
    /// Describes a parameter of type `P`.
    #[inline]
    pub fn of<P: FromValue>() -> Self {
        Self {
            type_name: type_name::<P>(),
            map_factory: P::map_factory(),
        }
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the parameter type can be built from a key-value structure.
    #[inline]
    pub const fn is_mappable(&self) -> bool {
        self.map_factory.is_some()
    }

    /// The `from_map` factory of the parameter type, if it is mappable.
    #[inline]
    pub const fn map_factory(&self) -> Option<MapFactory> {
        self.map_factory
    }
}

impl fmt::Debug for ParamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamInfo")
            .field("type_name", &self.type_name)
            .field("mappable", &self.is_mappable())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

type SetterFn<T> = dyn Fn(&mut T, Value<'_>) -> Result<(), MapError> + Send + Sync;

/// What an accessor method does.
pub enum MethodKind<T: 'static> {
    /// Takes no argument and returns a value.
    Getter(fn(&T) -> Value<'_>),
    /// Takes exactly one argument.
    Setter {
        param: ParamInfo,
        call: Box<SetterFn<T>>,
    },
}

/// Descriptor of one accessor method of `T`.
///
/// The name is the full accessor name, such as `getFullName` or
/// `setAddress`.
pub struct MethodInfo<T: 'static> {
    name: &'static str,
    visibility: Visibility,
    kind: MethodKind<T>,
}

impl<T: 'static> MethodInfo<T> {
    /// Creates a public getter.
    pub const fn getter(name: &'static str, call: fn(&T) -> Value<'_>) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            kind: MethodKind::Getter(call),
        }
    }

    /// Creates a public setter taking a `P`.
    ///
    /// The incoming [`Value`] is converted with [`FromValue`] before `call`
    /// runs.
    pub fn setter<P: FromValue + 'static>(name: &'static str, call: fn(&mut T, P)) -> Self {
        let call = move |this: &mut T, value: Value<'_>| -> Result<(), MapError> {
            call(this, P::from_value(value)?);
            Ok(())
        };
        Self {
            name,
            visibility: Visibility::Public,
            kind: MethodKind::Setter {
                param: ParamInfo::of::<P>(),
                call: Box::new(call),
            },
        }
    }

    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    #[inline]
    pub const fn kind(&self) -> &MethodKind<T> {
        &self.kind
    }

    /// Number of parameters, not counting the receiver.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self.kind {
            MethodKind::Getter(_) => 0,
            MethodKind::Setter { .. } => 1,
        }
    }

    /// The setter parameter, if this is a setter.
    #[inline]
    pub const fn param(&self) -> Option<&ParamInfo> {
        match &self.kind {
            MethodKind::Setter { param, .. } => Some(param),
            MethodKind::Getter(_) => None,
        }
    }

    /// Calls a getter. Returns `None` for setters.
    #[inline]
    pub fn get<'a>(&self, this: &'a T) -> Option<Value<'a>> {
        match &self.kind {
            MethodKind::Getter(call) => Some(call(this)),
            MethodKind::Setter { .. } => None,
        }
    }

    /// Calls a setter. Returns `None` for getters.
    #[inline]
    pub fn set(&self, this: &mut T, value: Value<'_>) -> Option<Result<(), MapError>> {
        match &self.kind {
            MethodKind::Setter { call, .. } => Some(call(this, value)),
            MethodKind::Getter(_) => None,
        }
    }
}

impl<T: 'static> fmt::Debug for MethodInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MethodInfo");
        s.field("name", &self.name)
            .field("visibility", &self.visibility);
        if let Some(param) = self.param() {
            s.field("param", param);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{MethodInfo, ParamInfo};
    use crate::MapError;
    use crate::info::Visibility;
    use crate::value::Value;
    use alloc::string::String;

    #[derive(Default)]
    struct Tag {
        label: String,
    }

    impl Tag {
        fn get_label(&self) -> Value<'_> {
            Value::from(self.label.as_str())
        }

        fn set_label(&mut self, label: String) {
            self.label = label;
        }
    }

    #[test]
    fn getter_and_setter() {
        let getter = MethodInfo::<Tag>::getter("getLabel", Tag::get_label);
        let setter = MethodInfo::<Tag>::setter("setLabel", Tag::set_label)
            .with_visibility(Visibility::Private);

        assert_eq!((getter.arity(), setter.arity()), (0, 1));
        assert!(!setter.is_public());
        assert_eq!(setter.param().map(ParamInfo::type_name), Some("alloc::string::String"));

        let mut tag = Tag::default();
        assert!(matches!(setter.set(&mut tag, Value::from("red")), Some(Ok(()))));
        assert_eq!(getter.get(&tag), Some(Value::from("red")));

        assert!(matches!(
            setter.set(&mut tag, Value::Int(1)),
            Some(Err(MapError::Mismatch { expected: "string", .. }))
        ));
        assert!(getter.set(&mut tag, Value::Null).is_none());
    }
}

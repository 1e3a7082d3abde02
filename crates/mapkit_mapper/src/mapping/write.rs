use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;

use crate::info::ParamInfo;
use crate::value::{ObjectRef, Value, ValueMap};
use crate::{MapError, Mappable};

pub(super) fn set_property_value<T: Mappable>(
    this: &mut T,
    name: &str,
    value: Value<'_>,
) -> Result<(), MapError> {
    let info = T::type_info();
    let type_name = info.type_name();

    if let Some(setter) = info.setter(name) {
        let value = match (value, setter.param().and_then(ParamInfo::map_factory)) {
            (Value::Map(map), Some(factory)) => {
                let object = factory(map).map_err(|e| e.in_property(type_name, name))?;
                Value::Object(ObjectRef::Owned(object))
            }
            (value, _) => value,
        };
        return match setter.set(this, value) {
            Some(result) => result.map_err(|e| e.in_property(type_name, name)),
            None => Err(MapError::not_writable(type_name, name)),
        };
    }

    match info.property(name) {
        Some(property) if property.is_writable() => property
            .write(this, value)
            .map_err(|e| e.in_property(type_name, name)),
        _ => {
            debug!("`{type_name}.{name}` is not writable");
            Err(MapError::not_writable(type_name, name))
        }
    }
}

pub(super) fn from_map<T: Mappable>(map: ValueMap<'_>) -> Result<T, MapError> {
    let info = T::type_info();

    let missing: Vec<_> = map
        .iter()
        .filter(|(key, value)| !value.is_null() && !info.is_writable(key))
        .map(|(key, _)| key.to_string())
        .collect();
    if !missing.is_empty() {
        debug!("`{}` rejects keys {missing:?}", info.type_name());
        return Err(MapError::NotWritable {
            type_name: info.type_name(),
            properties: missing,
        });
    }

    let mut out = T::default();
    for (key, value) in map {
        if !value.is_null() {
            out.set_property_value(&key, value)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::derive::Mappable;
    use crate::value::{Value, ValueMap};
    use crate::{MapError, Mappable};
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Mappable, Default, Clone, Debug, PartialEq)]
    struct Address {
        pub city: String,
        pub zip: Option<String>,
    }

    #[derive(Mappable, Default, Clone, Debug, PartialEq)]
    #[mapper(setters(set_name, set_home))]
    struct Person {
        pub name: String,
        pub age: u32,
        secret: String,
        home: Address,
        pub work: Option<Address>,
        #[mapper(shared)]
        pub census: u64,
    }

    impl Person {
        pub fn set_name(&mut self, name: String) {
            self.name = name.trim().into();
        }

        pub fn set_home(&mut self, home: Address) {
            self.home = home;
        }
    }

    fn address(city: &str) -> Value<'static> {
        Value::Map(ValueMap::from_iter([("city", Value::from(String::from(city)))]))
    }

    #[test]
    fn setter_beats_field() {
        let mut person = Person::default();
        person.set_property_value("name", Value::from("  Ann ")).unwrap();
        assert_eq!(person.name, "Ann");

        person.set_property_value("age", Value::Int(30)).unwrap();
        assert_eq!(person.age, 30);
    }

    #[test]
    fn nested_maps_become_objects() {
        let mut person = Person::default();

        // through a setter whose parameter is mappable
        person.set_property_value("home", address("Oslo")).unwrap();
        assert_eq!(person.home.city, "Oslo");

        // through a public field of a mappable type
        person.set_property_value("work", address("Bergen")).unwrap();
        assert_eq!(person.work.as_ref().map(|a| a.city.as_str()), Some("Bergen"));
    }

    #[test]
    fn private_and_shared_are_not_writable() {
        let mut person = Person::default();
        for name in ["secret", "census", "nickname"] {
            let err = person.set_property_value(name, Value::Int(1)).unwrap_err();
            assert!(matches!(err, MapError::NotWritable { type_name: "Person", .. }));
            assert_eq!(err.properties(), [name]);
        }
    }

    #[test]
    fn conversion_errors_name_the_property() {
        let mut person = Person::default();
        let err = person.set_property_value("age", Value::from("old")).unwrap_err();
        assert_eq!(err.properties(), ["age"]);

        let bad = Value::Map(ValueMap::from_iter([("city", Value::Int(1))]));
        let err = person.set_property_value("home", bad).unwrap_err();
        assert_eq!(err.properties(), ["home", "city"]);
    }

    #[test]
    fn from_map_is_atomic() {
        let input = ValueMap::from_iter([
            ("name", Value::from("Ann")),
            ("nickname", Value::from("A")),
            ("secret", Value::from("x")),
            ("census", Value::Null),
        ]);
        let err = Person::from_map(input).unwrap_err();
        match err {
            MapError::NotWritable { properties, .. } => assert_eq!(properties, ["nickname", "secret"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn round_trip() {
        let person = Person {
            name: String::from("Ann"),
            age: 30,
            secret: String::new(),
            home: Address::default(),
            work: Some(Address {
                city: String::from("Oslo"),
                zip: Some(String::from("0150")),
            }),
            census: 0,
        };

        let mut map = person.to_map(false, 3);
        // private fields are read but cannot be written back
        assert!(map.contains_key("secret"));
        map.remove("secret");

        let back = Person::from_map(map).unwrap();
        assert_eq!(back, person);

        let keys: Vec<_> = person.to_map(false, 3).keys().map(String::from).collect();
        assert_eq!(keys, ["name", "age", "secret", "home", "work"]);
    }
}

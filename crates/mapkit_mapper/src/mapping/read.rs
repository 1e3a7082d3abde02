use log::debug;

use crate::Mappable;
use crate::value::{Value, ValueMap};

pub(super) fn get_property_value<'a, T: Mappable>(
    this: &'a T,
    name: &str,
    include_null: bool,
    max_nesting: usize,
) -> Value<'a> {
    let info = T::type_info();
    let value = match info.getter(name).and_then(|getter| getter.get(this)) {
        Some(value) => value,
        None => info.property(name).map_or(Value::Null, |p| p.read(this)),
    };
    expand(this, value, include_null, max_nesting)
}

// Replace nested objects by their maps while the budget lasts. The object
// being mapped is never expanded inside itself.
fn expand<'a, T: Mappable>(
    this: &T,
    value: Value<'a>,
    include_null: bool,
    max_nesting: usize,
) -> Value<'a> {
    match value {
        Value::Object(object) if object.is_instance_of(this) => {
            debug!("`{}` refers to itself, left unexpanded", object.type_name());
            Value::Object(object)
        }
        Value::Object(object) if max_nesting == 0 => {
            debug!("nesting budget exhausted at `{}`", object.type_name());
            Value::Object(object)
        }
        Value::Object(object) => Value::Map(object.into_map(include_null, max_nesting - 1)),
        Value::List(items) => Value::List(
            items
                .into_iter()
                .map(|item| expand(this, item, include_null, max_nesting))
                .collect(),
        ),
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, item)| (key, expand(this, item, include_null, max_nesting)))
                .collect(),
        ),
        other => other,
    }
}

pub(super) fn to_map<T: Mappable>(this: &T, include_null: bool, max_nesting: usize) -> ValueMap<'_> {
    let info = T::type_info();
    let mut map = ValueMap::with_capacity(info.properties().len());
    for property in info.instance_properties() {
        let value = get_property_value(this, property.name(), include_null, max_nesting);
        if include_null || !value.is_null() {
            map.insert(property.name(), value);
        }
    }
    map
}

/// [`to_map`] with every object left raw replaced by its shallow map, ready
/// to be written as text.
pub(super) fn to_text_map<T: Mappable>(
    this: &T,
    include_null: bool,
    max_nesting: usize,
) -> ValueMap<'_> {
    to_map(this, include_null, max_nesting)
        .into_iter()
        .map(|(key, value)| (key, settle(value, include_null)))
        .collect()
}

fn settle(value: Value<'_>, include_null: bool) -> Value<'_> {
    match value {
        Value::Object(object) => Value::Map(object.shallow_map(include_null).into_owned()),
        Value::List(items) => Value::List(
            items
                .into_iter()
                .map(|item| settle(item, include_null))
                .collect(),
        ),
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, item)| (key, settle(item, include_null)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Mappable;
    use crate::value::{Value, ValueKind};
    use crate::{MapOptions, Mappable};
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Mappable, Default, Clone, Debug, PartialEq)]
    struct Node {
        pub label: String,
        pub next: Option<Box<Node>>,
    }

    fn chain(len: usize) -> Node {
        (0..len).rev().fold(Node::default(), |next, i| Node {
            label: alloc::format!("n{i}"),
            next: Some(Box::new(next)),
        })
    }

    #[derive(Mappable, Default, Clone)]
    #[mapper(getters(get_me, get_copy, get_title, is_title, has_title, get_kids))]
    struct Outer {
        pub title: String,
        pub kids: Vec<Node>,
    }

    impl Outer {
        pub fn get_me(&self) -> &Self {
            self
        }

        pub fn get_copy(&self) -> Self {
            Self::default()
        }

        pub fn get_title(&self) -> String {
            self.title.to_uppercase()
        }

        pub fn is_title(&self) -> bool {
            true
        }

        pub fn has_title(&self) -> bool {
            false
        }

        pub fn get_kids(&self) -> &[Node] {
            &self.kids
        }
    }

    #[derive(Mappable, Default, Clone)]
    #[mapper(getters(get_tag_, get_café))]
    struct Tagged {
        pub tag_: String,
        pub café: String,
    }

    impl Tagged {
        pub fn get_tag_(&self) -> &str {
            "from getter"
        }

        pub fn get_café(&self) -> &str {
            "from getter"
        }
    }

    #[test]
    fn nesting_budget() {
        let node = chain(2);

        let map = node.to_map(false, 0);
        assert_eq!(map.get("next").map(Value::kind), Some(ValueKind::Object));

        let map = node.to_map_with(&MapOptions::new().max_nesting(1));
        let next = map.get("next").and_then(Value::as_map).unwrap();
        assert_eq!(next.get("label").and_then(Value::as_str), Some("n1"));
        assert_eq!(next.get("next").map(Value::kind), Some(ValueKind::Object));

        // the innermost node has `next: None`
        let map = node.to_map(false, 5);
        let last = map
            .get("next")
            .and_then(Value::as_map)
            .and_then(|m| m.get("next"))
            .and_then(Value::as_map)
            .unwrap();
        assert!(!last.contains_key("next"));
    }

    #[test]
    fn self_reference_is_not_expanded() {
        let outer = Outer::default();

        let me = outer.get_property_value("me", false, 3);
        assert!(matches!(&me, Value::Object(o) if o.is_instance_of(&outer)));

        // a fresh instance is a different object
        let copy = outer.get_property_value("copy", false, 3);
        assert_eq!(copy.kind(), ValueKind::Map);
    }

    #[test]
    fn getter_precedence() {
        let outer = Outer {
            title: String::from("lead"),
            kids: vec![chain(0)],
        };
        let map = outer.to_map(false, 3);

        assert_eq!(map.get("title").and_then(Value::as_str), Some("LEAD"));
        // raw read for names with no property falls back to null
        assert_eq!(outer.get_property_value("missing", true, 3), Value::Null);

        let kids = map.get("kids").and_then(Value::as_list).unwrap();
        assert_eq!(kids[0].as_map().and_then(|m| m.get("label")), Some(&Value::from("")));
    }

    #[test]
    fn null_policy() {
        let node = Node::default();
        assert_eq!(node.to_map(false, 3).keys().collect::<Vec<_>>(), ["label"]);
        assert_eq!(node.to_map(true, 3).keys().collect::<Vec<_>>(), ["label", "next"]);
        assert_eq!(node.to_map(true, 3).get("next"), Some(&Value::Null));
    }

    #[test]
    fn getters_match_unusual_property_names() {
        let tagged = Tagged {
            tag_: String::from("raw"),
            café: String::from("raw"),
        };
        let map = tagged.to_map(false, 3);

        assert_eq!(map.get("tag_").and_then(Value::as_str), Some("from getter"));
        assert_eq!(map.get("café").and_then(Value::as_str), Some("from getter"));
    }
}

//! Property names to accessor names.
//!
//! Accessors are looked up as `{prefix}{Fragment}`, where the fragment is
//! the property name in PascalCase: `first_name` is read through
//! `getFirstName` and written through `setFirstName`.

use alloc::string::String;
use alloc::vec::Vec;

/// Prefixes probed for a read accessor, in order of preference.
pub const READ_PREFIXES: [&str; 3] = ["get", "is", "has"];

/// Prefix of a write accessor.
pub const WRITE_PREFIX: &str = "set";

#[inline]
const fn is_separator(c: char) -> bool {
    c == '_' || c == '.'
}

/// Converts a property name into the fragment used by accessor names.
///
/// A run of `_` or `.` followed by a character becomes that character
/// upper-cased; when the run ends with `.`, an `_` is kept in front of it.
/// A run at the very start leaves no trace. The first character is always
/// upper-cased.
///
/// # Examples
///
/// ```
/// use mapkit_utils::naming::to_accessor_name;
///
/// assert_eq!(to_accessor_name("first_name"), "FirstName");
/// assert_eq!(to_accessor_name("address.city"), "Address_City");
/// assert_eq!(to_accessor_name("_private"), "Private");
/// assert_eq!(to_accessor_name(""), "");
/// ```
pub fn to_accessor_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !is_separator(c) {
            if i == 0 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_separator(chars[i]) {
            i += 1;
        }

        // A run needs one more character after it. At the end of the input,
        // a run of two or more lends its own last character instead.
        let (run_end, next) = match chars.get(i) {
            Some(&next) => (i, next),
            None if i - start >= 2 => {
                let last = i - 1;
                (last, chars[last])
            }
            None => {
                out.push(c);
                continue;
            }
        };

        if start > 0 && chars[run_end - 1] == '.' {
            out.push('_');
        }
        out.push(next.to_ascii_uppercase());
        i = run_end + 1;
    }

    out
}

/// Builds the full accessor name for a property.
///
/// ```
/// use mapkit_utils::naming::accessor_name;
///
/// assert_eq!(accessor_name("is", "active"), "isActive");
/// ```
pub fn accessor_name(prefix: &str, property: &str) -> String {
    let mut name = String::from(prefix);
    name.push_str(&to_accessor_name(property));
    name
}

#[cfg(test)]
mod tests {
    use super::{accessor_name, to_accessor_name};

    #[test]
    fn plain_and_separated() {
        assert_eq!(to_accessor_name("name"), "Name");
        assert_eq!(to_accessor_name("Name"), "Name");
        assert_eq!(to_accessor_name("first_name"), "FirstName");
        assert_eq!(to_accessor_name("a__b"), "AB");
        assert_eq!(to_accessor_name("a_.b"), "A_B");
        assert_eq!(to_accessor_name("a._b"), "AB");
        assert_eq!(to_accessor_name("user.first_name"), "User_FirstName");
    }

    #[test]
    fn leading_runs_leave_no_trace() {
        assert_eq!(to_accessor_name("_private"), "Private");
        assert_eq!(to_accessor_name(".hidden"), "Hidden");
        assert_eq!(to_accessor_name("__x"), "X");
    }

    #[test]
    fn trailing_runs() {
        assert_eq!(to_accessor_name("foo_"), "Foo_");
        assert_eq!(to_accessor_name("foo."), "Foo.");
        assert_eq!(to_accessor_name("foo__"), "Foo_");
        assert_eq!(to_accessor_name("foo._"), "Foo__");
        assert_eq!(to_accessor_name("_"), "_");
    }

    #[test]
    fn non_ascii_letters_are_kept() {
        assert_eq!(to_accessor_name("café"), "Café");
        assert_eq!(to_accessor_name("été"), "été");
        assert_eq!(to_accessor_name("a_élan"), "Aélan");
    }

    #[test]
    fn prefixes() {
        assert_eq!(accessor_name("get", "full_name"), "getFullName");
        assert_eq!(accessor_name("set", "address.city"), "setAddress_City");
        assert_eq!(accessor_name("has", ""), "has");
    }
}

//! `Reflect` implementations for standard library and ecosystem types
//!
//! References and owning pointers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`,
//! `Cow<T>`) describe their target type. Raw pointers describe themselves as
//! [`Kind::Pointer`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use indexmap::IndexMap;
use uuid::Uuid;

use super::types::{Kind, Reflect, TypeInfo};

macro_rules! reflect_as {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<$ty>($kind)
                }
            }
        )+
    };
}

reflect_as!(Kind::Bool => bool);
reflect_as!(Kind::I8 => i8);
reflect_as!(Kind::I16 => i16);
reflect_as!(Kind::I32 => i32);
reflect_as!(Kind::I64 => i64);
reflect_as!(Kind::I128 => i128);
reflect_as!(Kind::Isize => isize);
reflect_as!(Kind::U8 => u8);
reflect_as!(Kind::U16 => u16);
reflect_as!(Kind::U32 => u32);
reflect_as!(Kind::U64 => u64);
reflect_as!(Kind::U128 => u128);
reflect_as!(Kind::Usize => usize);
reflect_as!(Kind::F32 => f32);
reflect_as!(Kind::F64 => f64);
reflect_as!(Kind::Char => char);
reflect_as!(Kind::Str => str, String);
reflect_as!(Kind::Unit => ());
// A UUID is stored as its 16 raw bytes.
reflect_as!(Kind::Array => Uuid);
reflect_as!(Kind::Struct => NaiveDate, NaiveTime, Duration);

impl Reflect for SystemTime {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp_of::<SystemTime>()
    }
}

impl Reflect for NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp_of::<NaiveDateTime>()
    }
}

impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp_of::<Self>()
    }
}

impl<T> Reflect for [T] {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Slice)
    }
}

impl<T> Reflect for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Slice)
    }
}

impl<T> Reflect for VecDeque<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Slice)
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Array)
    }
}

impl<T> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Option)
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl<K, V, S> Reflect for IndexMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Map)
    }
}

impl<T: ?Sized> Reflect for *const T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Pointer)
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Self>(Kind::Pointer)
    }
}

macro_rules! reflect_transparent {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr {
                fn type_info() -> TypeInfo {
                    T::type_info()
                }
            }
        )+
    };
}

reflect_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<'a, T: Reflect + ToOwned + ?Sized> Reflect for Cow<'a, T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

macro_rules! reflect_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Reflect for ($($name,)+) {
            fn type_info() -> TypeInfo {
                TypeInfo::of::<Self>(Kind::Tuple)
            }
        }
    };
}

reflect_tuple!(A);
reflect_tuple!(A, B);
reflect_tuple!(A, B, C);
reflect_tuple!(A, B, C, D);
reflect_tuple!(A, B, C, D, E);
reflect_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_are_path_free() {
        assert_eq!(Vec::<u8>::type_info().name(), "Vec<u8>");
        assert_eq!(String::type_info().name(), "String");
        assert_eq!(DateTime::<Utc>::type_info().name(), "DateTime<Utc>");
        assert_eq!(Option::<String>::type_info().name(), "Option<String>");
        assert_eq!(Uuid::type_info().name(), "Uuid");
    }

    #[test]
    fn pointers_describe_their_target() {
        assert_eq!(<&str>::type_info(), str::type_info());
        assert_eq!(Box::<i64>::type_info(), i64::type_info());
        assert_eq!(Arc::<Vec<u8>>::type_info(), Vec::<u8>::type_info());
        assert_eq!(Cow::<'static, str>::type_info().kind(), Kind::Str);
        assert_eq!(<&[u8]>::type_info().kind(), Kind::Slice);
    }

    #[test]
    fn raw_pointers_are_pointers() {
        assert_eq!(<*const u8>::type_info().kind(), Kind::Pointer);
        assert_eq!(<*mut String>::type_info().kind(), Kind::Pointer);
    }

    #[test]
    fn timestamps_are_recognized() {
        assert!(DateTime::<Utc>::type_info().is_timestamp());
        assert!(NaiveDateTime::type_info().is_timestamp());
        assert!(SystemTime::type_info().is_timestamp());
        assert!(!NaiveDate::type_info().is_timestamp());
        assert!(!Duration::type_info().is_timestamp());
    }

    #[test]
    fn tuples_and_unit() {
        assert_eq!(<(i32, String)>::type_info().kind(), Kind::Tuple);
        assert_eq!(<()>::type_info().kind(), Kind::Unit);
    }
}

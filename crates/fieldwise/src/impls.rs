//! `Reflect`, `List` and `Map` implementations for standard types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::traits::{List, Map, Record, Reflect};
use crate::value::{Field, Value};

macro_rules! reflect_widened {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Value<'_> {
                    Value::$variant(*self as $wide)
                }
            }
        )*
    };
}

reflect_widened!(Int as i64: i8, i16, i32, i64, isize);
reflect_widened!(Uint as u64: u8, u16, u32, u64, usize);
reflect_widened!(Float as f64: f32, f64);

impl Reflect for bool {
    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value<'_> {
        Value::Opaque("char")
    }
}

impl Reflect for () {
    fn reflect(&self) -> Value<'_> {
        Value::Null
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.reflect(),
            None => Value::Null,
        }
    }
}

// Indirection is transparent: a reference reflects as its referent.

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

macro_rules! record_through {
    ($($ptr:ty),*) => {
        $(
            impl<T: Record + ?Sized> Record for $ptr {
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn field_names(&self) -> &'static [&'static str] {
                    (**self).field_names()
                }

                fn field(&self, name: &str) -> Option<Field<'_>> {
                    (**self).field(name)
                }
            }
        )*
    };
}

record_through!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// Sequences

impl<T: Reflect> List for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<Value<'_>> {
        self.as_slice().get(index).map(Reflect::reflect)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        Value::List(self)
    }
}

impl<T: Reflect, const N: usize> List for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<Value<'_>> {
        self.as_slice().get(index).map(Reflect::reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        Value::List(self)
    }
}

impl<T: Reflect> List for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<Value<'_>> {
        VecDeque::get(self, index).map(Reflect::reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value<'_> {
        Value::List(self)
    }
}

// Maps

impl<K: Reflect, V: Reflect, S> Map for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (Value<'_>, Value<'_>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.reflect(), v.reflect())))
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(self)
    }
}

impl<K: Reflect, V: Reflect> Map for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (Value<'_>, Value<'_>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.reflect(), v.reflect())))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Map(self)
    }
}

use std::fmt;
use std::rc::Rc;

use crate::object::NativeObject;

/// A possibly-null reference to a native automation object.
///
/// Mirrors a raw interface pointer as it crosses the boundary: it may be
/// null (VB's `Nothing`), and cloning it does **not** touch the external
/// reference count — acquisition paths hand back refs that are already
/// counted, and ownership (with the matching release) belongs to exactly
/// one [`crate::OwnedHandle`].
#[derive(Clone, Default)]
pub struct ObjectRef(Option<Rc<dyn NativeObject>>);

impl ObjectRef {
    /// The null reference.
    pub fn null() -> Self {
        Self(None)
    }

    /// Wraps a live backend object.
    pub fn new(object: Rc<dyn NativeObject>) -> Self {
        Self(Some(object))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the backend object, if any.
    pub fn as_object(&self) -> Option<&Rc<dyn NativeObject>> {
        self.0.as_ref()
    }

    pub(crate) fn into_inner(self) -> Option<Rc<dyn NativeObject>> {
        self.0
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(object) => write!(f, "ObjectRef({})", object.class_name()),
            None => write!(f, "ObjectRef(null)"),
        }
    }
}

impl PartialEq for ObjectRef {
    /// Identity comparison: two refs are equal when they point at the
    /// same backend object (or are both null).
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl From<Rc<dyn NativeObject>> for ObjectRef {
    fn from(object: Rc<dyn NativeObject>) -> Self {
        Self::new(object)
    }
}

/// Loosely-typed value as it crosses the automation boundary.
///
/// Automation servers marshal scalars as VT_* variants; integers stand in
/// for booleans and enums, dates travel as `f64` days since 1899-12-30.
/// The scalar accessors apply the same loose coercions the servers do.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Variant {
    /// VT_EMPTY — no value.
    #[default]
    Empty,
    /// VT_NULL — SQL-style null.
    Null,
    Bool(bool),
    I32(i32),
    F64(f64),
    Str(String),
    /// OLE automation date: days since 1899-12-30, fraction = time of day.
    Date(f64),
    /// An object reference (VT_DISPATCH), possibly null.
    Object(ObjectRef),
}

impl Variant {
    pub fn is_empty_or_null(&self) -> bool {
        matches!(self, Self::Empty | Self::Null)
    }

    /// Boolean view; nonzero integers coerce to `true`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::I32(i) => Some(*i != 0),
            Self::F64(f) => Some(*f != 0.0),
            _ => None,
        }
    }

    /// Integer view; floats round, booleans use the VARIANT_BOOL values.
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(i) => Some(*i),
            Self::F64(f) => Some(f.round() as i32),
            Self::Bool(b) => Some(if *b { -1 } else { 0 }),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(f) | Self::Date(f) => Some(*f),
            Self::I32(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Non-null object view. A null object reference, `Empty` and `Null`
    /// all read as "no object present".
    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            Self::Object(object) if !object.is_null() => Some(object.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::I32(i) => write!(f, "{i}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Date(d) => write!(f, "Date({d})"),
            Self::Object(object) => write!(f, "{object:?}"),
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<ObjectRef> for Variant {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_scalar_coercions() {
        assert_eq!(Variant::I32(-1).as_bool(), Some(true));
        assert_eq!(Variant::I32(0).as_bool(), Some(false));
        assert_eq!(Variant::Bool(true).as_i32(), Some(-1));
        assert_eq!(Variant::F64(2.6).as_i32(), Some(3));
        assert_eq!(Variant::I32(7).as_f64(), Some(7.0));
        assert_eq!(Variant::Str("x".into()).as_bool(), None);
    }

    #[test]
    fn null_object_reads_as_absent() {
        assert_eq!(Variant::Object(ObjectRef::null()).as_object(), None);
        assert_eq!(Variant::Empty.as_object(), None);
        assert_eq!(Variant::Null.as_object(), None);
    }

    #[test]
    fn display_matches_marshaling_notation() {
        assert_eq!(Variant::Empty.to_string(), "Empty");
        assert_eq!(Variant::from("hello").to_string(), "\"hello\"");
        assert_eq!(Variant::from(3.5).to_string(), "3.5");
        assert_eq!(format!("{:?}", ObjectRef::null()), "ObjectRef(null)");
    }
}

//! The compact array format sequences travel in.
//!
//! A retain is a positive number, a delete is a negative number and an insert
//! is a string, so `[5, "hello", -3, 10]` reads as retain 5, insert "hello",
//! delete 3, retain 10. Decoding goes through the normal constructors and so
//! always yields a canonical sequence.

use std::convert::TryFrom;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::{out_of_range, OtError, Result};
use crate::operation::{Operation, OperationSeq};

// largest count a JSON float still holds exactly
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

pub fn encode(operation: &OperationSeq) -> Result<Value> {
    operation
        .ops()
        .iter()
        .map(|op| -> Result<Value> {
            Ok(match *op {
                Operation::Retain(len) => Value::from(len as u64),
                Operation::Delete(len) => Value::from(delete_count(len)?),
                Operation::Insert(ref s) => Value::from(s.as_str()),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

pub fn decode(value: &Value) -> Result<OperationSeq> {
    let elements = match *value {
        Value::Array(ref elements) => elements,
        ref other => return Err(invalid(other)),
    };

    let mut ret = OperationSeq::with_capacity(elements.len());
    for element in elements {
        let op = match *element {
            Value::String(ref s) => Operation::Insert(s.clone()),
            Value::Number(ref n) => {
                if let Some(len) = n.as_u64() {
                    from_u64(len)?
                } else if let Some(len) = n.as_i64() {
                    from_i64(len)?
                } else {
                    from_f64(n.as_f64().unwrap_or(f64::NAN))?
                }
            }
            ref other => return Err(invalid(other)),
        };
        ret.try_add(op)?;
    }
    Ok(ret)
}

pub fn from_str(s: &str) -> Result<OperationSeq> {
    let value: Value = serde_json::from_str(s)?;
    decode(&value)
}

pub fn to_string(operation: &OperationSeq) -> Result<String> {
    encode(operation).map(|value| value.to_string())
}

fn invalid(value: &Value) -> OtError {
    let kind = match *value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    tracing::debug!(kind, "invalid wire element");
    OtError::InvalidElement(kind.to_owned())
}

// deletes travel as negative numbers, so they must fit an i64
fn delete_count(len: usize) -> Result<i64> {
    i64::try_from(len).map(|n| -n).map_err(|_| out_of_range(len))
}

fn from_u64(v: u64) -> Result<Operation> {
    usize::try_from(v)
        .map(Operation::Retain)
        .map_err(|_| out_of_range(v))
}

fn from_i64(v: i64) -> Result<Operation> {
    if v >= 0 {
        return from_u64(v as u64);
    }
    usize::try_from(v.unsigned_abs())
        .map(Operation::Delete)
        .map_err(|_| out_of_range(v))
}

// integral floats are taken at their value, as long as that value is exact
fn from_f64(v: f64) -> Result<Operation> {
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(OtError::InvalidElement(format!("non-integer number {}", v)));
    }
    if v.abs() > MAX_EXACT_FLOAT {
        return Err(out_of_range(v));
    }
    if v >= 0.0 {
        from_u64(v as u64)
    } else {
        from_i64(v as i64)
    }
}

// the wire form, without the range checks `encode` applies to deletes
impl fmt::Display for OperationSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (idx, op) in self.ops().iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            match *op {
                Operation::Retain(len) => write!(f, "{}", len)?,
                Operation::Delete(len) => write!(f, "-{}", len)?,
                Operation::Insert(ref s) => write!(f, "{}", Value::from(s.as_str()))?,
            }
        }
        f.write_str("]")
    }
}

impl Serialize for OperationSeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ops().len()))?;
        for op in self.ops() {
            match *op {
                Operation::Retain(len) => seq.serialize_element(&(len as u64))?,
                Operation::Delete(len) => {
                    let count = delete_count(len).map_err(<S::Error as ser::Error>::custom)?;
                    seq.serialize_element(&count)?
                }
                Operation::Insert(ref s) => seq.serialize_element(s)?,
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for OperationSeq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(OperationSeqVisitor)
    }
}

struct OperationSeqVisitor;

impl<'de> Visitor<'de> for OperationSeqVisitor {
    type Value = OperationSeq;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of counts and strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut ret = OperationSeq::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(Element(op)) = access.next_element()? {
            ret.try_add(op).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(ret)
    }
}

// a single wire element, already mapped to its primitive
struct Element(Operation);

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ElementVisitor)
    }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a retain count, delete count or insert text")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Element, E> {
        from_u64(v).map(Element).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Element, E> {
        from_i64(v).map(Element).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Element, E> {
        from_f64(v).map(Element).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Element, E> {
        Ok(Element(Operation::Insert(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Element, E> {
        Ok(Element(Operation::Insert(v)))
    }
}

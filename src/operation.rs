use std::iter::FromIterator;

use crate::error::{out_of_range, Result};
use crate::util::char_len;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    // skip n chars of the input
    Retain(usize),
    // delete next n chars
    Delete(usize),
    // insert a string
    Insert(String),
}

impl Operation {
    pub fn base_len(&self) -> usize {
        match *self {
            Operation::Retain(len) | Operation::Delete(len) => len,
            Operation::Insert(_) => 0,
        }
    }

    pub fn target_len(&self) -> usize {
        match *self {
            Operation::Retain(len) => len,
            Operation::Delete(_) => 0,
            Operation::Insert(ref s) => char_len(s),
        }
    }
}

// adjacent primitives of the same kind are always merged and an insert never
// follows a delete, so equivalent sequences compare equal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSeq {
    pub(crate) operations: Vec<Operation>,
    // the length of the original string, in chars
    source_len: usize,
    // the length of the applied string, in chars
    target_len: usize,
}

impl OperationSeq {
    pub fn new() -> Self {
        OperationSeq {
            operations: vec![],
            source_len: 0,
            target_len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OperationSeq {
            operations: Vec::with_capacity(capacity),
            source_len: 0,
            target_len: 0,
        }
    }

    pub fn base_len(&self) -> usize {
        self.source_len
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn ops(&self) -> &[Operation] {
        &self.operations
    }

    pub fn is_noop(&self) -> bool {
        match self.operations.as_slice() {
            [] | [Operation::Retain(_)] => true,
            _ => false,
        }
    }

    pub(crate) fn add(&mut self, op: Operation) {
        match op {
            Operation::Retain(len) => {
                self.retain(len);
            }
            Operation::Delete(len) => {
                self.delete(len);
            }
            Operation::Insert(s) => {
                self.insert(s);
            }
        }
    }

    // like `add`, but refuses a primitive that would overflow the lengths
    pub(crate) fn try_add(&mut self, op: Operation) -> Result<()> {
        let fits = self.source_len.checked_add(op.base_len()).is_some()
            && self.target_len.checked_add(op.target_len()).is_some();
        if !fits {
            return Err(out_of_range(op.base_len().max(op.target_len())));
        }
        self.add(op);
        Ok(())
    }

    pub fn retain(&mut self, len: usize) -> &mut Self {
        if len == 0 {
            return self;
        }
        self.source_len += len;
        self.target_len += len;
        if let Some(Operation::Retain(l)) = self.operations.last_mut() {
            *l += len;
        } else {
            self.operations.push(Operation::Retain(len));
        }
        self
    }

    pub fn delete(&mut self, len: usize) -> &mut Self {
        if len == 0 {
            return self;
        }
        self.source_len += len;
        if let Some(Operation::Delete(l)) = self.operations.last_mut() {
            *l += len;
        } else {
            self.operations.push(Operation::Delete(len));
        }
        self
    }

    pub fn insert<S: Into<String>>(&mut self, s: S) -> &mut Self {
        let s = s.into();
        if s.is_empty() {
            return self;
        }
        self.target_len += char_len(&s);

        let n = self.operations.len();
        match self.operations.as_mut_slice() {
            [.., Operation::Insert(last)] => last.push_str(&s),
            // keep inserts in front of a trailing delete
            [.., Operation::Insert(prev), Operation::Delete(_)] => prev.push_str(&s),
            [.., Operation::Delete(_)] => self.operations.insert(n - 1, Operation::Insert(s)),
            _ => self.operations.push(Operation::Insert(s)),
        }
        self
    }
}

impl FromIterator<Operation> for OperationSeq {
    fn from_iter<T: IntoIterator<Item = Operation>>(ops: T) -> Self {
        let mut seq = OperationSeq::new();
        for op in ops {
            seq.add(op);
        }
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::Operation::*;
    use super::*;

    #[test]
    fn test_lengths() {
        let mut op = OperationSeq::new();
        assert_eq!((op.base_len(), op.target_len()), (0, 0));
        op.retain(5);
        assert_eq!((op.base_len(), op.target_len()), (5, 5));
        op.insert("abc");
        assert_eq!((op.base_len(), op.target_len()), (5, 8));
        op.retain(2);
        assert_eq!((op.base_len(), op.target_len()), (7, 10));
        op.delete(2);
        assert_eq!((op.base_len(), op.target_len()), (9, 10));
    }

    #[test]
    fn test_lengths_count_chars() {
        let mut op = OperationSeq::new();
        op.insert("世界");
        assert_eq!(op.target_len(), 2);
        assert_eq!(Insert("世界".into()).target_len(), 2);
        assert_eq!(Delete(3).base_len(), 3);
        assert_eq!(Delete(3).target_len(), 0);
    }

    #[test]
    fn test_empty_primitives_are_dropped() {
        let mut op = OperationSeq::new();
        op.retain(0).insert("").delete(0);
        assert!(op.ops().is_empty());

        op.retain(5).retain(0).insert("lorem").insert("").delete(3).delete(0);
        assert_eq!(op.ops().len(), 3);
    }

    #[test]
    fn test_merging() {
        let mut op = OperationSeq::new();
        op.retain(2).retain(3);
        assert_eq!(op.ops(), &[Retain(5)]);

        op.insert("a").insert("b");
        assert_eq!(op.ops(), &[Retain(5), Insert("ab".into())]);

        op.delete(1).delete(1);
        assert_eq!(op.ops(), &[Retain(5), Insert("ab".into()), Delete(2)]);
    }

    #[test]
    fn test_insert_after_delete_is_reordered() {
        let mut op = OperationSeq::new();
        op.retain(1).delete(2).insert("x");
        assert_eq!(op.ops(), &[Retain(1), Insert("x".into()), Delete(2)]);

        // merges into the insert in front of the delete
        op.insert("y");
        assert_eq!(op.ops(), &[Retain(1), Insert("xy".into()), Delete(2)]);

        let mut lone = OperationSeq::new();
        lone.delete(1).insert("z");
        assert_eq!(lone.ops(), &[Insert("z".into()), Delete(1)]);
    }

    #[test]
    fn test_eq_after_normalization() {
        let mut o1 = OperationSeq::new();
        o1.delete(1).insert("lo").retain(2).retain(3);
        let mut o2 = OperationSeq::new();
        o2.delete(1).insert("l").insert("o").retain(5);
        assert_eq!(o1, o2);

        o1.delete(1);
        o2.retain(1);
        assert_ne!(o1, o2);
    }

    #[test]
    fn test_is_noop() {
        let mut op = OperationSeq::new();
        assert!(op.is_noop());
        op.retain(5);
        assert!(op.is_noop());
        op.retain(3);
        assert!(op.is_noop());
        op.insert("lorem");
        assert!(!op.is_noop());
    }

    #[test]
    fn test_from_iter_normalizes() {
        let op: OperationSeq = vec![Retain(1), Retain(1), Delete(1), Insert("a".into())]
            .into_iter()
            .collect();
        assert_eq!(op.ops(), &[Retain(2), Insert("a".into()), Delete(1)]);
        assert_eq!((op.base_len(), op.target_len()), (3, 3));
    }

    #[test]
    fn test_try_add_refuses_overflow() {
        let mut op = OperationSeq::new();
        op.try_add(Retain(usize::MAX)).unwrap();
        assert!(op.try_add(Retain(1)).is_err());
        assert!(op.try_add(Delete(1)).is_err());
        // the target length still has room for nothing either
        assert!(op.try_add(Insert("a".into())).is_err());
        assert_eq!(op.ops(), &[Retain(usize::MAX)]);
        assert_eq!(op.base_len(), usize::MAX);
    }

    #[test]
    fn test_with_capacity() {
        let mut op = OperationSeq::with_capacity(10);
        assert!(op.ops().is_empty());
        op.retain(5).insert("test").delete(2);
        assert_eq!((op.base_len(), op.target_len()), (7, 9));
        assert_eq!(op.ops().len(), 3);
    }
}

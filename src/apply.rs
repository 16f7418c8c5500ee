use crate::error::{check_len, Result};
use crate::operation::{Operation, OperationSeq};
use crate::util::{byte_offset, char_len};

impl OperationSeq {
    // apply operation to string
    pub fn apply(&self, original: &str) -> Result<String> {
        check_len(self.base_len(), char_len(original))?;

        let mut original = original;
        let mut ret = String::with_capacity(original.len());

        for op in self.operations.iter() {
            match *op {
                Operation::Retain(len) => {
                    let idx = byte_offset(original, len);
                    ret.push_str(&original[..idx]);
                    original = &original[idx..];
                }
                Operation::Delete(len) => {
                    original = &original[byte_offset(original, len)..];
                }
                Operation::Insert(ref s) => ret.push_str(s),
            }
        }

        Ok(ret)
    }

    // the operation undoing this one, `original` being the string it applies to
    pub fn invert(&self, original: &str) -> Result<OperationSeq> {
        check_len(self.base_len(), char_len(original))?;

        let mut original = original;
        let mut inverse = OperationSeq::with_capacity(self.operations.len());

        for op in self.operations.iter() {
            match *op {
                Operation::Retain(len) => {
                    inverse.retain(len);
                    original = &original[byte_offset(original, len)..];
                }
                Operation::Delete(len) => {
                    let idx = byte_offset(original, len);
                    inverse.insert(&original[..idx]);
                    original = &original[idx..];
                }
                Operation::Insert(ref s) => {
                    inverse.delete(char_len(s));
                }
            }
        }

        Ok(inverse)
    }
}

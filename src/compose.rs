use std::cmp::Ordering;

use crate::error::{check_len, exhausted, Result};
use crate::operation::{Operation, OperationSeq};
use crate::util::{char_len, split_off_chars};

impl OperationSeq {
    // compose two operations, `second` being based on the output of `self`
    // compose must satisfy apply(apply(s, a), b) == apply(s, a.compose(b))
    pub fn compose(&self, second: &OperationSeq) -> Result<OperationSeq> {
        check_len(self.target_len(), second.base_len())?;

        let mut ret = OperationSeq::new();

        let mut first = self.operations.iter().cloned();
        let mut second = second.operations.iter().cloned();

        let mut head_first = first.next();
        let mut head_second = second.next();

        loop {
            use crate::operation::Operation::*;

            tracing::trace!(?head_first, ?head_second, "compose");

            match (head_first, head_second) {
                (None, None) => break Ok(ret),
                (Some(Delete(len)), s) => {
                    head_first = first.next();
                    head_second = s;
                    ret.delete(len);
                }
                (f, Some(Insert(s))) => {
                    head_first = f;
                    head_second = second.next();
                    ret.insert(s);
                }
                (None, Some(op)) | (Some(op), None) => {
                    break Err(exhausted(&op));
                }
                (Some(Retain(len_first)), Some(Retain(len_second))) => {
                    match len_first.cmp(&len_second) {
                        Ordering::Less => {
                            head_first = first.next();
                            head_second = Some(Retain(len_second - len_first));
                            ret.retain(len_first);
                        }
                        Ordering::Equal => {
                            head_first = first.next();
                            head_second = second.next();
                            ret.retain(len_first);
                        }
                        Ordering::Greater => {
                            head_first = Some(Retain(len_first - len_second));
                            head_second = second.next();
                            ret.retain(len_second);
                        }
                    }
                }
                (Some(Insert(mut s)), Some(Delete(len))) => {
                    let s_len = char_len(&s);
                    match s_len.cmp(&len) {
                        Ordering::Less => {
                            head_first = first.next();
                            head_second = Some(Delete(len - s_len));
                        }
                        Ordering::Equal => {
                            head_first = first.next();
                            head_second = second.next();
                        }
                        Ordering::Greater => {
                            head_first = Some(Insert(split_off_chars(&mut s, len)));
                            head_second = second.next();
                        }
                    }
                }
                (Some(Insert(mut s)), Some(Retain(len))) => {
                    let s_len = char_len(&s);
                    match s_len.cmp(&len) {
                        Ordering::Less => {
                            head_first = first.next();
                            head_second = Some(Retain(len - s_len));
                        }
                        Ordering::Equal => {
                            head_first = first.next();
                            head_second = second.next();
                        }
                        Ordering::Greater => {
                            head_first = Some(Insert(split_off_chars(&mut s, len)));
                            head_second = second.next();
                        }
                    }
                    ret.insert(s);
                }
                (Some(Retain(len_first)), Some(Delete(len_second))) => {
                    match len_first.cmp(&len_second) {
                        Ordering::Less => {
                            head_first = first.next();
                            head_second = Some(Delete(len_second - len_first));
                            ret.delete(len_first);
                        }
                        Ordering::Equal => {
                            head_first = first.next();
                            head_second = second.next();
                            ret.delete(len_first);
                        }
                        Ordering::Greater => {
                            head_first = Some(Retain(len_first - len_second));
                            head_second = second.next();
                            ret.delete(len_second);
                        }
                    }
                }
            }
        }
    }
}

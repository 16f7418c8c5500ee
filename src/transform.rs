use std::cmp::Ordering;

use crate::error::{check_len, exhausted, Result};
use crate::operation::OperationSeq;
use crate::util::char_len;

impl OperationSeq {
    // transforms two concurrent operations so that they converge
    // let (left', right') = left.transform(&right), these satisfy
    // apply(apply(s, left), right') == apply(apply(s, right), left')
    // inserts at the same position are ordered by their text, equal ones are both kept
    pub fn transform(&self, right: &OperationSeq) -> Result<(OperationSeq, OperationSeq)> {
        check_len(self.base_len(), right.base_len())?;

        let mut ret_left = OperationSeq::new();
        let mut ret_right = OperationSeq::new();

        let mut left = self.operations.iter().cloned();
        let mut right = right.operations.iter().cloned();

        let mut head_left = left.next();
        let mut head_right = right.next();

        loop {
            use crate::operation::Operation::*;

            tracing::trace!(?head_left, ?head_right, "transform");

            match (head_left, head_right) {
                (None, None) => break Ok((ret_left, ret_right)),
                (Some(Insert(left_s)), Some(Insert(right_s))) => match left_s.cmp(&right_s) {
                    Ordering::Less => {
                        ret_right.retain(char_len(&left_s));
                        ret_left.insert(left_s);
                        head_left = left.next();
                        head_right = Some(Insert(right_s));
                    }
                    Ordering::Equal => {
                        let len = char_len(&left_s);
                        ret_left.insert(left_s).retain(len);
                        ret_right.insert(right_s).retain(len);
                        head_left = left.next();
                        head_right = right.next();
                    }
                    Ordering::Greater => {
                        ret_left.retain(char_len(&right_s));
                        ret_right.insert(right_s);
                        head_left = Some(Insert(left_s));
                        head_right = right.next();
                    }
                },
                (Some(Insert(s)), value) => {
                    ret_right.retain(char_len(&s));
                    ret_left.insert(s);
                    head_left = left.next();
                    head_right = value;
                }
                (value, Some(Insert(s))) => {
                    ret_left.retain(char_len(&s));
                    ret_right.insert(s);
                    head_left = value;
                    head_right = right.next();
                }
                (None, Some(op)) | (Some(op), None) => {
                    break Err(exhausted(&op));
                }
                (Some(Retain(left_len)), Some(Retain(right_len))) => {
                    let len;
                    match left_len.cmp(&right_len) {
                        Ordering::Less => {
                            len = left_len;
                            head_left = left.next();
                            head_right = Some(Retain(right_len - left_len));
                        }
                        Ordering::Equal => {
                            len = left_len;
                            head_left = left.next();
                            head_right = right.next();
                        }
                        Ordering::Greater => {
                            len = right_len;
                            head_left = Some(Retain(left_len - right_len));
                            head_right = right.next();
                        }
                    }
                    ret_left.retain(len);
                    ret_right.retain(len);
                }
                // both sides removed the same span, neither deletes it again
                (Some(Delete(left_len)), Some(Delete(right_len))) => {
                    match left_len.cmp(&right_len) {
                        Ordering::Less => {
                            head_left = left.next();
                            head_right = Some(Delete(right_len - left_len));
                        }
                        Ordering::Equal => {
                            head_left = left.next();
                            head_right = right.next();
                        }
                        Ordering::Greater => {
                            head_left = Some(Delete(left_len - right_len));
                            head_right = right.next();
                        }
                    }
                }
                (Some(Delete(left_len)), Some(Retain(right_len))) => {
                    let len;
                    match left_len.cmp(&right_len) {
                        Ordering::Less => {
                            len = left_len;
                            head_left = left.next();
                            head_right = Some(Retain(right_len - left_len));
                        }
                        Ordering::Equal => {
                            len = left_len;
                            head_left = left.next();
                            head_right = right.next();
                        }
                        Ordering::Greater => {
                            len = right_len;
                            head_left = Some(Delete(left_len - right_len));
                            head_right = right.next();
                        }
                    }
                    ret_left.delete(len);
                }
                (Some(Retain(left_len)), Some(Delete(right_len))) => {
                    let len;
                    match left_len.cmp(&right_len) {
                        Ordering::Less => {
                            len = left_len;
                            head_left = left.next();
                            head_right = Some(Delete(right_len - left_len));
                        }
                        Ordering::Equal => {
                            len = left_len;
                            head_left = left.next();
                            head_right = right.next();
                        }
                        Ordering::Greater => {
                            len = right_len;
                            head_left = Some(Retain(left_len - right_len));
                            head_right = right.next();
                        }
                    }
                    ret_right.delete(len);
                }
            }
        }
    }
}

use ot::*;
use rand::Rng;

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen::<char>()).collect()
}

pub fn random_operation<R: Rng>(rng: &mut R, original: &str) -> OperationSeq {
    let mut ret = OperationSeq::new();

    let len = original.chars().count();
    let mut idx = 0;

    while idx < len {
        let op_len = rng.gen_range(1..=len - idx);
        match rng.gen_range(0..3) {
            // Retain
            0 => {
                ret.retain(op_len);
                idx += op_len;
            }
            // Insert
            1 => {
                let len = rng.gen_range(0..10);
                ret.insert(random_string(rng, len));
            }
            // Delete
            2 => {
                ret.delete(op_len);
                idx += op_len;
            }
            _ => unreachable!(),
        }
    }

    // trailing insert, so that edits at the very end get exercised too
    if rng.gen_bool(0.3) {
        let len = rng.gen_range(1..5);
        ret.insert(random_string(rng, len));
    }

    ret
}

// small alphabet, so that concurrent inserts often collide
pub fn random_ascii_operation<R: Rng>(rng: &mut R, original: &str) -> OperationSeq {
    let mut ret = OperationSeq::new();

    let len = original.chars().count();
    let mut idx = 0;

    loop {
        if rng.gen_bool(0.4) {
            let s: String = (0..rng.gen_range(1..3))
                .map(|_| rng.gen_range(b'a'..=b'c') as char)
                .collect();
            ret.insert(s);
        }
        if idx == len {
            break ret;
        }
        let op_len = rng.gen_range(1..=(len - idx).min(3));
        if rng.gen_bool(0.5) {
            ret.retain(op_len);
        } else {
            ret.delete(op_len);
        }
        idx += op_len;
    }
}

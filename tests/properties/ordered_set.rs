//! Property tests for `OrderedSet` against a `Vec` model.

use proptest::prelude::*;

use modfiles::{OrderedSet, Visit};

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..16).prop_map(Op::Add),
        (0u8..16).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: iteration order is first-insertion order of the survivors.
    #[test]
    fn property_matches_vec_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut set = OrderedSet::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    let inserted = set.add(v);
                    prop_assert_eq!(inserted, !model.contains(&v));
                    if inserted {
                        model.push(v);
                    }
                }
                Op::Remove(v) => {
                    let removed = set.remove(&v);
                    prop_assert_eq!(removed, model.contains(&v));
                    model.retain(|m| *m != v);
                }
            }
        }

        prop_assert_eq!(set.len(), model.len());
        prop_assert_eq!(set.to_vec(), model);
    }

    /// PROPERTY: `for_each` sees every element once, in order, and removes
    /// exactly the ones it asks to.
    #[test]
    fn property_for_each_removal(
        values in proptest::collection::vec(0u16..512, 0..64),
        modulus in 1u16..5,
    ) {
        let mut set: OrderedSet<u16> = values.iter().copied().collect();
        let before = set.to_vec();

        let mut seen = Vec::new();
        set.for_each(|v| {
            seen.push(*v);
            if v % modulus == 0 { Visit::Remove } else { Visit::Keep }
        });

        prop_assert_eq!(&seen, &before);
        let expected: Vec<u16> = before.into_iter().filter(|v| v % modulus != 0).collect();
        prop_assert_eq!(set.to_vec(), expected);
    }
}

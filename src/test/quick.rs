use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add the K to the data structure
    Add(K),
    /// Remove the K from the data structure
    Remove(K),
    /// Compare in-order keys
    Traverse,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Adds are weighted
    /// so trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}

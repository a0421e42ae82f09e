use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the data structure
    Add(T),
    /// Remove the T from the data structure
    Remove(T),
    /// Swap the stored T for an equal one
    Replace(T),
    /// Rebuild the data structure into a minimum height tree
    Rebalance,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Adds are twice as likely as
    /// anything else so the trees have something in them.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3, 4]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Replace(T::arbitrary(g)),
            3 => Op::Rebalance,
            4 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

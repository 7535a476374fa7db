pub mod logic;

pub trait Unbox {
    type Unboxed;

    /// Remove one level of indirection, so rule application can match on
    /// owned subtrees without cloning through `Box`.
    fn unbox(self) -> Self::Unboxed;
}

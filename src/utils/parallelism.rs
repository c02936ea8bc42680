//! Iterators which are parallel if the `parallel` feature is enabled and sequential otherwise.

#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub trait MaybeParallelRefIterator<'data> {
    type Iter: IndexedParallelIterator;

    fn maybe_par_iter(&'data self) -> Self::Iter;
}

#[cfg(feature = "parallel")]
impl<'data, I: 'data + ?Sized> MaybeParallelRefIterator<'data> for I
where
    I: IntoParallelRefIterator<'data>,
    I::Iter: IndexedParallelIterator,
{
    type Iter = I::Iter;

    fn maybe_par_iter(&'data self) -> Self::Iter {
        self.par_iter()
    }
}

#[cfg(not(feature = "parallel"))]
pub trait MaybeParallelRefIterator<'data> {
    type Iter: Iterator;

    fn maybe_par_iter(&'data self) -> Self::Iter;
}

#[cfg(not(feature = "parallel"))]
impl<'data, I: 'data + ?Sized> MaybeParallelRefIterator<'data> for I
where
    &'data I: IntoIterator,
{
    type Iter = <&'data I as IntoIterator>::IntoIter;

    fn maybe_par_iter(&'data self) -> Self::Iter {
        self.into_iter()
    }
}

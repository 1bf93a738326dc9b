// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Something that can be invoked with a captured argument list.
///
/// Every `Fn(A) + Send + Sync + 'static` closure is a `Callback<A>`, and so are
/// the wrappers of this crate. Because a wrapper is itself a callback, it can be
/// handed to another wrapper: each layer keeps its own pending state.
///
/// Wrappers are cheap `Clone` handles. To hand a wrapper to an
/// [`Interval`](crate::Interval) or another wrapper and keep calling or
/// observing it, pass a clone.
///
/// Multi-argument targets take a tuple:
///
/// ```
/// use cadence::Callback;
///
/// let print = |(a, b, c): (&'static str, &'static str, &'static str)| {
///     println!("fn executes! args = {a}, {b}, {c}");
/// };
/// print.invoke(("arg1", "arg2", "arg3"));
/// ```
pub trait Callback<A>: Send + Sync + 'static {
    fn invoke(&self, args: A);
}

impl<A, F> Callback<A> for F
where
    F: Fn(A) + Send + Sync + 'static,
{
    fn invoke(&self, args: A) {
        self(args)
    }
}
